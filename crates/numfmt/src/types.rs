//! Numeric domains and the tagged value type.

use std::fmt;
use std::mem::size_of;
use std::str::FromStr;

use crate::bytes::ByteSeq;
use crate::errors::{CodecError, CodecResult};
use crate::order::ByteOrder;
use crate::traits::Encodable;

/// The native fixed-width signed integer ("fixnum").
pub type Int = isize;

/// The native floating point type.
#[cfg(not(feature = "float32"))]
pub type Float = f64;

/// The native floating point type.
#[cfg(feature = "float32")]
pub type Float = f32;

/// Width of an encoded [`Int`] in bytes.
pub const INT_WIDTH: usize = size_of::<Int>();

/// Width of an encoded [`Float`] in bytes.
pub const FLOAT_WIDTH: usize = size_of::<Float>();

/// If this build can encode and decode floats.
pub const FLOAT_SUPPORTED: bool = cfg!(feature = "float");

/// The two numeric domains the codec understands.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "arbitrary", derive(::arbitrary::Arbitrary))]
pub enum Domain {
    /// Two's-complement [`Int`].
    Integer,

    /// IEEE-754 [`Float`].
    Float,
}

impl Domain {
    /// Native width of values in this domain, in bytes.
    pub const fn width(self) -> usize {
        match self {
            Self::Integer => INT_WIDTH,
            Self::Float => FLOAT_WIDTH,
        }
    }

    /// Returns if this build can encode and decode the domain.
    pub const fn is_supported(self) -> bool {
        match self {
            Self::Integer => true,
            Self::Float => FLOAT_SUPPORTED,
        }
    }

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
        }
    }

    /// Errors with [`CodecError::UnsupportedDomain`] if compiled out.
    pub fn check_supported(self) -> CodecResult<()> {
        if !self.is_supported() {
            return Err(CodecError::UnsupportedDomain(self));
        }
        Ok(())
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Domain {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "integer" | "int" | "fixnum" | "fix" => Ok(Self::Integer),
            "float" | "flo" | "double" => Ok(Self::Float),
            _ => Err(CodecError::InvalidDomain(s.to_owned())),
        }
    }
}

/// A number tagged with its domain.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "arbitrary", derive(::arbitrary::Arbitrary))]
pub enum NumericValue {
    /// A fixnum.
    Integer(Int),

    /// A float.
    #[cfg(feature = "float")]
    Float(Float),
}

impl NumericValue {
    /// Returns the domain of the value.
    pub fn domain(&self) -> Domain {
        match self {
            Self::Integer(_) => Domain::Integer,
            #[cfg(feature = "float")]
            Self::Float(_) => Domain::Float,
        }
    }

    /// Returns the integer, if this is one.
    pub fn as_int(&self) -> Option<Int> {
        match self {
            Self::Integer(v) => Some(*v),
            #[cfg(feature = "float")]
            Self::Float(_) => None,
        }
    }

    /// Returns the float, if this is one.
    #[cfg(feature = "float")]
    pub fn as_float(&self) -> Option<Float> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Integer(_) => None,
        }
    }

    /// Encodes the value's bit pattern in the given byte order.
    pub fn encode(&self, order: ByteOrder) -> ByteSeq {
        match self {
            Self::Integer(v) => v.to_byte_seq(order),
            #[cfg(feature = "float")]
            Self::Float(v) => v.to_byte_seq(order),
        }
    }
}

impl From<Int> for NumericValue {
    fn from(value: Int) -> Self {
        Self::Integer(value)
    }
}

#[cfg(feature = "float")]
impl From<Float> for NumericValue {
    fn from(value: Float) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            #[cfg(feature = "float")]
            Self::Float(v) => write!(f, "{v:?}"),
        }
    }
}
