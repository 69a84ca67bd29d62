use crate::bytes::ByteSeq;
use crate::errors::{CodecError, CodecResult};
use crate::order::ByteOrder;
use crate::types::{Domain, INT_WIDTH, Int};
#[cfg(feature = "float")]
use crate::types::{FLOAT_WIDTH, Float};

/// A number with a fixed native encoding width.
pub trait FixedWidth: Copy {
    /// Domain the type belongs to.
    const DOMAIN: Domain;

    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Exact-width byte array holding an encoded value.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Copy + for<'a> TryFrom<&'a [u8]>;
}

/// Types that can be laid out as bytes.
pub trait Encodable: FixedWidth {
    /// Encodes the bit pattern of self in the given order.
    fn to_bytes(self, order: ByteOrder) -> Self::Bytes;

    /// Encodes into a [`ByteSeq`].
    fn to_byte_seq(self, order: ByteOrder) -> ByteSeq {
        ByteSeq::new_unchecked(Self::DOMAIN, self.to_bytes(order).as_ref())
    }
}

/// Types that can be reassembled from bytes.
pub trait Decodable: FixedWidth {
    /// Decodes from an exact-width array in the given order.
    fn from_bytes(bytes: Self::Bytes, order: ByteOrder) -> Self;

    /// Decodes from a slice, which must be exactly [`FixedWidth::WIDTH`]
    /// bytes long.
    fn decode_slice(bytes: &[u8], order: ByteOrder) -> CodecResult<Self> {
        let arr = <Self::Bytes>::try_from(bytes)
            .map_err(|_| CodecError::length_mismatch(Self::DOMAIN, bytes.len()))?;
        Ok(Self::from_bytes(arr, order))
    }
}

/// Wires up the native types, which only differ in domain and width.
macro_rules! impl_native_codec {
    ( $ty:ident $domain:ident $width:expr ) => {
        impl FixedWidth for $ty {
            const DOMAIN: Domain = Domain::$domain;
            const WIDTH: usize = $width;
            type Bytes = [u8; $width];
        }

        impl Encodable for $ty {
            fn to_bytes(self, order: ByteOrder) -> Self::Bytes {
                let mut buf = self.to_ne_bytes();
                order.arrange(&mut buf);
                buf
            }
        }

        impl Decodable for $ty {
            fn from_bytes(mut bytes: Self::Bytes, order: ByteOrder) -> Self {
                order.arrange(&mut bytes);
                <$ty>::from_ne_bytes(bytes)
            }
        }
    };
}

impl_native_codec!(Int Integer INT_WIDTH);

#[cfg(feature = "float")]
impl_native_codec!(Float Float FLOAT_WIDTH);
