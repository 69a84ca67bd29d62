//! Byte order policies and host order detection.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use tracing::debug;

use crate::errors::CodecError;

/// A concrete endianness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "arbitrary", derive(::arbitrary::Arbitrary))]
pub enum Endian {
    /// Least significant byte first.
    Little,

    /// Most significant byte first.
    Big,
}

impl Endian {
    /// Returns the host's endianness.  Same as [`native_endian`].
    pub fn native() -> Self {
        native_endian()
    }

    /// Returns if this is [`Endian::Little`].
    pub const fn is_little(self) -> bool {
        matches!(self, Self::Little)
    }

    /// Returns the other endianness.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Little => Self::Big,
            Self::Big => Self::Little,
        }
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Little => "little",
            Self::Big => "big",
        })
    }
}

static NATIVE_ENDIAN: OnceLock<Endian> = OnceLock::new();

/// Returns the host's byte order.
///
/// Probed from the memory layout of a known integer on first use and cached
/// for the rest of the process, so concurrent first calls all agree.
pub fn native_endian() -> Endian {
    *NATIVE_ENDIAN.get_or_init(|| {
        let endian = probe_host_endian();
        debug_assert_eq!(endian.is_little(), cfg!(target_endian = "little"));
        debug!(%endian, "resolved native byte order");
        endian
    })
}

fn probe_host_endian() -> Endian {
    const PROBE: u16 = 0x0102;
    if PROBE.to_ne_bytes()[0] == 0x02 {
        Endian::Little
    } else {
        Endian::Big
    }
}

/// Byte order policy for encoding and decoding.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "arbitrary", derive(::arbitrary::Arbitrary))]
pub enum ByteOrder {
    /// Whatever the host uses.  Callers must not assume which one that is.
    #[default]
    Native,

    /// Byte 0 holds the least significant byte.
    Little,

    /// Byte 0 holds the most significant byte.
    Big,
}

impl ByteOrder {
    /// Resolves the policy to a concrete endianness on this host.
    pub fn resolve(self) -> Endian {
        match self {
            Self::Native => native_endian(),
            Self::Little => Endian::Little,
            Self::Big => Endian::Big,
        }
    }

    /// Returns if this is [`ByteOrder::Little`] or [`ByteOrder::Big`].
    pub const fn is_explicit(self) -> bool {
        !matches!(self, Self::Native)
    }

    /// Short lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Little => "little",
            Self::Big => "big",
        }
    }

    /// Returns if bytes laid out in host memory order have to be reversed to
    /// match this order.
    ///
    /// Reversal is its own inverse, so this holds for both directions.
    pub(crate) fn needs_swap(self) -> bool {
        match self {
            Self::Native => false,
            explicit => explicit.resolve() != native_endian(),
        }
    }

    /// Reorders a buffer between host memory order and this order.
    pub(crate) fn arrange(self, buf: &mut [u8]) {
        if self.needs_swap() {
            buf.reverse();
        }
    }
}

impl From<Endian> for ByteOrder {
    fn from(value: Endian) -> Self {
        match value {
            Endian::Little => Self::Little,
            Endian::Big => Self::Big,
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ByteOrder {
    type Err = CodecError;

    /// Accepts the names printed by [`ByteOrder::as_str`] plus the usual
    /// abbreviations (`"ne"`, `"le"`, `"be"`, `"network"`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "native" | "nat" | "ne" | "host" | "native_endian" => Ok(Self::Native),
            "little" | "le" | "little_endian" => Ok(Self::Little),
            "big" | "be" | "big_endian" | "network" => Ok(Self::Big),
            _ => Err(CodecError::InvalidByteOrder(s.to_owned())),
        }
    }
}
