use arbitrary::{Arbitrary, Unstructured};

use crate::bytes::{ByteSeq, MAX_WIDTH};
use crate::codec::CodecConfig;
use crate::order::ByteOrder;
use crate::types::Domain;

impl<'a> Arbitrary<'a> for ByteSeq {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        // Any bit pattern is a valid payload, only the width is fixed.
        let domain = Domain::arbitrary(u)?;
        let raw = <[u8; MAX_WIDTH]>::arbitrary(u)?;
        Ok(ByteSeq::new_unchecked(domain, &raw[..domain.width()]))
    }
}

impl<'a> Arbitrary<'a> for CodecConfig {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(CodecConfig::new(ByteOrder::arbitrary(u)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arbitrary_byte_seq_has_domain_width() {
        let data: Vec<u8> = (0..=255).cycle().take(4096).collect();
        let mut u = Unstructured::new(&data);
        for _ in 0..64 {
            let seq = ByteSeq::arbitrary(&mut u).expect("test: arbitrary");
            assert_eq!(seq.len(), seq.domain().width());
        }
    }

    #[test]
    fn test_arbitrary_config() {
        let data = [2u8; 16];
        let mut u = Unstructured::new(&data);
        let cfg = CodecConfig::arbitrary(&mut u).expect("test: arbitrary");
        assert!(matches!(
            cfg.order(),
            ByteOrder::Native | ByteOrder::Little | ByteOrder::Big
        ));
    }
}
