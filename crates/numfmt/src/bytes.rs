//! Fixed-size encoded payload.

use std::fmt;
use std::ops::Deref;

use crate::errors::{CodecError, CodecResult};
use crate::types::{Domain, FLOAT_WIDTH, INT_WIDTH};

/// Width of the widest domain, in bytes.
pub const MAX_WIDTH: usize = if INT_WIDTH > FLOAT_WIDTH {
    INT_WIDTH
} else {
    FLOAT_WIDTH
};

/// An encoded number: exactly `domain.width()` bytes, immutable.
///
/// Stored inline, so producing one never allocates.  Derefs to the payload
/// bytes, which carry no header or tag; the domain is only kept alongside for
/// bookkeeping.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ByteSeq {
    domain: Domain,
    buf: [u8; MAX_WIDTH],
}

impl ByteSeq {
    /// Constructs a new instance, checking that the payload has the width of
    /// the domain.
    pub fn new(domain: Domain, bytes: &[u8]) -> CodecResult<Self> {
        if bytes.len() != domain.width() {
            return Err(CodecError::length_mismatch(domain, bytes.len()));
        }
        Ok(Self::new_unchecked(domain, bytes))
    }

    /// Constructs a new instance, assuming the caller already knows `bytes`
    /// has the right width.
    pub(crate) fn new_unchecked(domain: Domain, bytes: &[u8]) -> Self {
        let mut buf = [0; MAX_WIDTH];
        buf[..bytes.len()].copy_from_slice(bytes);
        Self { domain, buf }
    }

    /// Returns the domain the payload was produced from.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Returns the payload.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.domain.width()]
    }

    /// Returns the payload length, always the domain's width.
    pub fn len(&self) -> usize {
        self.domain.width()
    }

    /// Always false, every domain has a non-zero width.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy with the payload bytes in reverse order.
    ///
    /// Reversing a little endian encoding gives the big endian one and vice
    /// versa.
    pub fn reversed(&self) -> Self {
        let mut out = *self;
        out.buf[..self.len()].reverse();
        out
    }

    /// Copies the payload into a new vec.
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl Deref for ByteSeq {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for ByteSeq {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<[u8]> for ByteSeq {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for ByteSeq {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl From<ByteSeq> for Vec<u8> {
    fn from(value: ByteSeq) -> Self {
        value.to_vec()
    }
}

impl fmt::Debug for ByteSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteSeq({}, {})", self.domain, self)
    }
}

/// Lowercase hex of the payload.
impl fmt::Display for ByteSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.as_bytes()))
    }
}
