//! In-place arithmetic on encoded fixnums.

use crate::errors::CodecResult;
use crate::order::ByteOrder;
use crate::traits::{Decodable, Encodable};
use crate::types::Int;

/// Increments the fixnum encoded in `buf` under `order`, writing the result
/// back into the same buffer.
///
/// Wraps around at [`Int::MAX`].  Returns the new value.  The buffer is left
/// untouched if it isn't exactly one fixnum wide.
pub fn increment(buf: &mut [u8], order: ByteOrder) -> CodecResult<Int> {
    let next = Int::decode_slice(buf, order)?.wrapping_add(1);
    buf.copy_from_slice(&next.to_bytes(order));
    Ok(next)
}

/// Increments a native order fixnum in place.  See [`increment`].
pub fn increment_native(buf: &mut [u8]) -> CodecResult<Int> {
    increment(buf, ByteOrder::Native)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CodecError;
    use crate::ext::{BinExt, NumExt};
    use crate::types::{Domain, INT_WIDTH};

    #[test]
    fn test_increment_native() {
        let mut buf = (41 as Int).to_bin().to_vec();
        assert_eq!(increment_native(&mut buf), Ok(42));
        assert_eq!(buf.to_fix(), Ok(42));
        assert_eq!(increment_native(&mut buf), Ok(43));
    }

    #[test]
    fn test_increment_explicit_orders() {
        let mut be = (255 as Int).to_bin_be().to_vec();
        assert_eq!(increment(&mut be, ByteOrder::Big), Ok(256));
        assert_eq!(be[INT_WIDTH - 1], 0);
        assert_eq!(be[INT_WIDTH - 2], 1);

        let mut le = (255 as Int).to_bin_le().to_vec();
        assert_eq!(increment(&mut le, ByteOrder::Little), Ok(256));
        assert_eq!(le[0], 0);
        assert_eq!(le[1], 1);
    }

    #[test]
    fn test_increment_wraps() {
        let mut buf = Int::MAX.to_bin().to_vec();
        assert_eq!(increment_native(&mut buf), Ok(Int::MIN));

        let mut buf = (-1 as Int).to_bin_be().to_vec();
        assert_eq!(increment(&mut buf, ByteOrder::Big), Ok(0));
        assert!(buf.iter().all(|b| *b == 0));
    }

    #[test]
    fn test_increment_wrong_len_untouched() {
        let mut buf = vec![9u8; INT_WIDTH + 2];
        assert_eq!(
            increment_native(&mut buf),
            Err(CodecError::length_mismatch(Domain::Integer, INT_WIDTH + 2))
        );
        assert_eq!(buf, vec![9u8; INT_WIDTH + 2]);
    }
}
