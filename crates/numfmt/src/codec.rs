//! Domain-dispatching entry points.

use tracing::debug;

use crate::bytes::ByteSeq;
use crate::errors::CodecResult;
use crate::order::{ByteOrder, Endian};
use crate::traits::{Decodable, Encodable};
#[cfg(feature = "float")]
use crate::types::{FLOAT_WIDTH, Float};
use crate::types::{Domain, INT_WIDTH, Int, NumericValue};

/// Encodes a value in the given byte order.
///
/// Never fails: every bit pattern of both domains is encodable, including
/// non-finite floats and [`Int::MIN`].
pub fn encode(value: NumericValue, order: ByteOrder) -> ByteSeq {
    value.encode(order)
}

/// Decodes a value of `domain` from bytes produced under `order`.
///
/// Decoding bytes that were encoded under a different order isn't an error,
/// it just yields an unrelated value.
pub fn decode(bytes: &[u8], order: ByteOrder, domain: Domain) -> CodecResult<NumericValue> {
    match domain {
        Domain::Integer => Int::decode_slice(bytes, order).map(NumericValue::Integer),
        Domain::Float => decode_float_value(bytes, order),
    }
}

#[cfg(feature = "float")]
fn decode_float_value(bytes: &[u8], order: ByteOrder) -> CodecResult<NumericValue> {
    Float::decode_slice(bytes, order).map(NumericValue::Float)
}

#[cfg(not(feature = "float"))]
fn decode_float_value(_bytes: &[u8], _order: ByteOrder) -> CodecResult<NumericValue> {
    Err(crate::errors::CodecError::UnsupportedDomain(Domain::Float))
}

/// Codec configuration.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodecConfig {
    /// Byte order used for every call.
    order: ByteOrder,
}

impl CodecConfig {
    /// Constructs a new instance.
    pub const fn new(order: ByteOrder) -> Self {
        Self { order }
    }

    /// Returns the configured byte order.
    pub const fn order(&self) -> ByteOrder {
        self.order
    }

    /// Returns a copy using a different byte order.
    pub const fn with_order(self, order: ByteOrder) -> Self {
        Self { order }
    }
}

/// Codec bound to one byte order.
///
/// Cheap to copy and safe to share between threads, it holds no state besides
/// the configured order and the endianness it resolved to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NumCodec {
    order: ByteOrder,
    endian: Endian,
}

impl NumCodec {
    /// Constructs a new instance, resolving the configured order against the
    /// host.
    pub fn new(config: CodecConfig) -> Self {
        let order = config.order();
        let endian = order.resolve();
        debug!(%order, %endian, "constructed numeric codec");
        Self { order, endian }
    }

    /// Codec using the host's byte order.
    pub fn native() -> Self {
        Self::new(CodecConfig::new(ByteOrder::Native))
    }

    /// Codec using little endian.
    pub fn little() -> Self {
        Self::new(CodecConfig::new(ByteOrder::Little))
    }

    /// Codec using big endian.
    pub fn big() -> Self {
        Self::new(CodecConfig::new(ByteOrder::Big))
    }

    /// Returns the configured byte order.
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Returns the concrete endianness the order resolved to on this host.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Encodes a value.
    pub fn encode(&self, value: NumericValue) -> ByteSeq {
        encode(value, self.order)
    }

    /// Decodes a value of `domain`.
    pub fn decode(&self, bytes: &[u8], domain: Domain) -> CodecResult<NumericValue> {
        decode(bytes, self.order, domain)
    }

    /// Encodes a fixnum.
    pub fn encode_int(&self, value: Int) -> [u8; INT_WIDTH] {
        value.to_bytes(self.order)
    }

    /// Decodes a fixnum.
    pub fn decode_int(&self, bytes: &[u8]) -> CodecResult<Int> {
        Int::decode_slice(bytes, self.order)
    }

    /// Encodes a float.
    #[cfg(feature = "float")]
    pub fn encode_float(&self, value: Float) -> [u8; FLOAT_WIDTH] {
        value.to_bytes(self.order)
    }

    /// Decodes a float.
    #[cfg(feature = "float")]
    pub fn decode_float(&self, bytes: &[u8]) -> CodecResult<Float> {
        Float::decode_slice(bytes, self.order)
    }
}

impl Default for NumCodec {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}
