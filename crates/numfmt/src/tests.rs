#![allow(unreachable_pub)] // testing the macro

use crate::{
    BinExt, ByteOrder, Decodable, Domain, Encodable, FixedWidth, INT_WIDTH, Int, NumExt,
    impl_numeric_wrapper,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Counter(Int);

impl_numeric_wrapper!(Counter => Int);

#[test]
fn test_wrapper_encodes_like_inner() {
    let c = Counter(-2);
    assert_eq!(<Counter as FixedWidth>::DOMAIN, Domain::Integer);
    assert_eq!(<Counter as FixedWidth>::WIDTH, INT_WIDTH);

    let be = c.to_bytes(ByteOrder::Big);
    assert_eq!(be, (-2 as Int).to_bytes(ByteOrder::Big));
    assert_eq!(be[INT_WIDTH - 1], 0xfe);
    assert!(be[..INT_WIDTH - 1].iter().all(|b| *b == 0xff));

    assert_eq!(Counter::from_bytes(be, ByteOrder::Big), c);
    assert_eq!(c.to_bin_le().to_fix_le(), Ok(-2));
}

#[test]
fn test_wrapper_decode_slice() {
    let c = Counter(12345);
    let seq = c.to_bin();
    assert_eq!(Counter::decode_slice(&seq, ByteOrder::Native), Ok(c));
    assert!(Counter::decode_slice(&seq[1..], ByteOrder::Native).is_err());
}

#[cfg(feature = "float")]
mod float_wrapper {
    use super::*;
    use crate::Float;

    #[derive(Copy, Clone, Debug, PartialEq)]
    pub struct Meters(Float);

    impl_numeric_wrapper!(Meters => Float);

    #[test]
    fn test_float_wrapper() {
        let m = Meters(100.1);
        assert_eq!(<Meters as FixedWidth>::DOMAIN, Domain::Float);
        assert_eq!(m.to_bin_be().to_flo_be(), Ok(100.1));
        assert_eq!(Meters::decode_slice(&m.to_bin_le(), ByteOrder::Little), Ok(m));
    }
}
