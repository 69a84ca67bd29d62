use thiserror::Error;

use crate::types::Domain;

/// Errors from strata-numfmt.
///
/// All of these are contract violations by the caller.  There is nothing to
/// retry, the codec never touches anything external.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Buffer length does not match the native width of the target domain.
    #[error("encoded data cannot be decoded as {domain} (expected {expected} bytes, found {found})")]
    LengthMismatch {
        /// The domain we tried to decode.
        domain: Domain,
        /// Native width of the domain.
        expected: usize,
        /// Length of the buffer we were given.
        found: usize,
    },

    /// Value belongs to a different domain than the one requested.
    #[error("domain mismatch (expected {expected}, found {found})")]
    DomainMismatch {
        /// The domain that was asked for.
        expected: Domain,
        /// The domain the value actually has.
        found: Domain,
    },

    /// The domain is compiled out of this build.
    #[error("{0} support is not enabled in this build")]
    UnsupportedDomain(Domain),

    /// A source number can't be represented in the target domain.
    #[error("{value} ({ty}) does not fit into {domain}")]
    OutOfRange {
        /// Name of the source type.
        ty: &'static str,
        /// The offending value, formatted.
        value: String,
        /// The domain it was converted into.
        domain: Domain,
    },

    /// Unrecognized byte order name.
    #[error("invalid byte order {0:?}")]
    InvalidByteOrder(String),

    /// Unrecognized domain name.
    #[error("invalid numeric domain {0:?}")]
    InvalidDomain(String),
}

impl CodecError {
    /// Constructs a [`CodecError::LengthMismatch`] for a buffer that was
    /// supposed to hold a value of `domain`.
    pub fn length_mismatch(domain: Domain, found: usize) -> Self {
        Self::LengthMismatch {
            domain,
            expected: domain.width(),
            found,
        }
    }
}

/// Wrapper result type.
pub type CodecResult<T> = Result<T, CodecError>;
