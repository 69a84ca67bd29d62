//! Method-style shorthands, one per byte order.

use crate::bytes::ByteSeq;
use crate::errors::CodecResult;
use crate::order::ByteOrder;
use crate::traits::{Decodable, Encodable};
#[cfg(feature = "float")]
use crate::types::Float;
use crate::types::Int;

/// Encoding shorthands for numbers.
pub trait NumExt: Encodable {
    /// Encodes in native order.
    fn to_bin(self) -> ByteSeq {
        self.to_byte_seq(ByteOrder::Native)
    }

    /// Encodes little endian.
    fn to_bin_le(self) -> ByteSeq {
        self.to_byte_seq(ByteOrder::Little)
    }

    /// Encodes big endian.
    fn to_bin_be(self) -> ByteSeq {
        self.to_byte_seq(ByteOrder::Big)
    }
}

impl<T: Encodable> NumExt for T {}

/// Decoding shorthands for byte buffers.
///
/// Every method fails with
/// [`CodecError::LengthMismatch`](crate::CodecError::LengthMismatch) if the
/// buffer isn't exactly the width of the target type.
pub trait BinExt {
    /// Decodes a native order fixnum.
    fn to_fix(&self) -> CodecResult<Int>;

    /// Decodes a little endian fixnum.
    fn to_fix_le(&self) -> CodecResult<Int>;

    /// Decodes a big endian fixnum.
    fn to_fix_be(&self) -> CodecResult<Int>;

    /// Decodes a native order float.
    #[cfg(feature = "float")]
    fn to_flo(&self) -> CodecResult<Float>;

    /// Decodes a little endian float.
    #[cfg(feature = "float")]
    fn to_flo_le(&self) -> CodecResult<Float>;

    /// Decodes a big endian float.
    #[cfg(feature = "float")]
    fn to_flo_be(&self) -> CodecResult<Float>;
}

impl BinExt for [u8] {
    fn to_fix(&self) -> CodecResult<Int> {
        Int::decode_slice(self, ByteOrder::Native)
    }

    fn to_fix_le(&self) -> CodecResult<Int> {
        Int::decode_slice(self, ByteOrder::Little)
    }

    fn to_fix_be(&self) -> CodecResult<Int> {
        Int::decode_slice(self, ByteOrder::Big)
    }

    #[cfg(feature = "float")]
    fn to_flo(&self) -> CodecResult<Float> {
        Float::decode_slice(self, ByteOrder::Native)
    }

    #[cfg(feature = "float")]
    fn to_flo_le(&self) -> CodecResult<Float> {
        Float::decode_slice(self, ByteOrder::Little)
    }

    #[cfg(feature = "float")]
    fn to_flo_be(&self) -> CodecResult<Float> {
        Float::decode_slice(self, ByteOrder::Big)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CodecError;
    use crate::types::{Domain, INT_WIDTH};

    #[test]
    fn test_fixnum_shorthands() {
        let n: Int = 100;
        assert_eq!(n.to_bin().to_fix(), Ok(100));
        assert_eq!(n.to_bin_le().to_fix_le(), Ok(100));
        assert_eq!(n.to_bin_be().to_fix_be(), Ok(100));
    }

    #[test]
    fn test_fixnum_on_vec() {
        let buf = (-2 as Int).to_bin_be().to_vec();
        assert_eq!(buf.to_fix_be(), Ok(-2));
        assert_eq!(
            buf[1..].to_fix_be(),
            Err(CodecError::length_mismatch(Domain::Integer, INT_WIDTH - 1))
        );
    }

    #[cfg(feature = "float")]
    #[test]
    fn test_float_shorthands() {
        let f: Float = 100.1;
        assert_eq!(f.to_bin().to_flo(), Ok(100.1));
        assert_eq!(f.to_bin_le().to_flo_le(), Ok(100.1));
        assert_eq!(f.to_bin_be().to_flo_be(), Ok(100.1));
    }
}
