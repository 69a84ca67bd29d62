use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bytes::ByteSeq;
use crate::types::Domain;

/// Wire shape of a [`ByteSeq`], the payload is hex in human readable
/// formats and raw bytes otherwise.
#[derive(Serialize, Deserialize)]
struct ByteSeqRepr<P> {
    domain: Domain,
    payload: P,
}

impl Serialize for ByteSeq {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            ByteSeqRepr {
                domain: self.domain(),
                payload: hex::encode(self.as_bytes()),
            }
            .serialize(s)
        } else {
            ByteSeqRepr {
                domain: self.domain(),
                payload: self.as_bytes(),
            }
            .serialize(s)
        }
    }
}

impl<'de> Deserialize<'de> for ByteSeq {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let (domain, bytes) = if d.is_human_readable() {
            let repr = ByteSeqRepr::<String>::deserialize(d)?;
            let bytes = hex::decode(&repr.payload).map_err(D::Error::custom)?;
            (repr.domain, bytes)
        } else {
            let repr = ByteSeqRepr::<Vec<u8>>::deserialize(d)?;
            (repr.domain, repr.payload)
        };

        ByteSeq::new(domain, &bytes).map_err(D::Error::custom)
    }
}
