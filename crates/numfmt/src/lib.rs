//! Fixed-width binary encoding for native numbers.
//!
//! Converts the native integer ([`Int`]) and float ([`Float`]) types to and
//! from byte sequences of exactly their in-memory width, in the host's native
//! byte order or in explicit little/big endian order.  There is no header,
//! type tag or length prefix: the consumer has to know the domain and order
//! of a payload out of band.
//!
//! ```rust
//! use strata_numfmt::{BinExt, Int, NumExt};
//!
//! let n: Int = 100;
//! assert_eq!(n.to_bin_be().to_fix_be().unwrap(), 100);
//! ```

#[cfg(feature = "arbitrary")]
mod arbitrary;
mod bytes;
mod codec;
mod convert;
mod errors;
mod ext;
mod incr;
mod macros;
mod order;
#[cfg(feature = "serde")]
mod serde;
mod traits;
mod types;

pub use bytes::{ByteSeq, MAX_WIDTH};
pub use codec::{CodecConfig, NumCodec, decode, encode};
#[cfg(feature = "float")]
pub use convert::FloatSource;
pub use errors::{CodecError, CodecResult};
pub use ext::{BinExt, NumExt};
pub use incr::{increment, increment_native};
pub use order::{ByteOrder, Endian, native_endian};
pub use traits::{Decodable, Encodable, FixedWidth};
pub use types::{Domain, FLOAT_SUPPORTED, FLOAT_WIDTH, Float, INT_WIDTH, Int, NumericValue};

#[cfg(test)]
use {bincode as _, criterion as _, serde_json as _};

#[cfg(test)]
mod tests;
