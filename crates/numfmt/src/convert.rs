//! Checked conversions from primitive numbers into [`NumericValue`].
//!
//! Integers that don't fit into [`Int`] are rejected rather than promoted,
//! there's no bignum domain to fall back to.

use std::any::type_name;
use std::fmt::Display;

use crate::errors::{CodecError, CodecResult};
#[cfg(feature = "float")]
use crate::types::Float;
use crate::types::{Domain, Int, NumericValue};

/// Primitive floats that can be narrowed or widened into [`Float`].
#[cfg(feature = "float")]
pub trait FloatSource: Copy + Display + sealed::Sealed {
    /// Converts into [`Float`], returning `None` if a finite value would
    /// overflow to infinity.
    fn to_native_float(self) -> Option<Float>;
}

#[cfg(feature = "float")]
mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

#[cfg(feature = "float")]
macro_rules! impl_float_source {
    ( $( $ty:ident ),* ) => {
        $(
            impl FloatSource for $ty {
                fn to_native_float(self) -> Option<Float> {
                    let converted = self as Float;
                    if self.is_finite() && !converted.is_finite() {
                        return None;
                    }
                    Some(converted)
                }
            }
        )*
    };
}

#[cfg(feature = "float")]
impl_float_source!(f32, f64);

fn out_of_range<T: Display>(value: T, domain: Domain) -> CodecError {
    CodecError::OutOfRange {
        ty: type_name::<T>(),
        value: value.to_string(),
        domain,
    }
}

impl NumericValue {
    /// Converts any primitive integer, failing if it doesn't fit into [`Int`].
    pub fn from_integer<T>(value: T) -> CodecResult<Self>
    where
        T: Copy + Display + TryInto<Int>,
    {
        value
            .try_into()
            .map(Self::Integer)
            .map_err(|_| out_of_range(value, Domain::Integer))
    }

    /// Converts a primitive float, failing if a finite value is beyond the
    /// range of [`Float`].  Non-finite values pass through unchanged.
    #[cfg(feature = "float")]
    pub fn from_float<T: FloatSource>(value: T) -> CodecResult<Self> {
        value
            .to_native_float()
            .map(Self::Float)
            .ok_or_else(|| out_of_range(value, Domain::Float))
    }

    /// Converts a wide integer, falling back to a (possibly lossy) float if
    /// it doesn't fit into [`Int`].
    ///
    /// Without float support the fallback is an error instead.
    pub fn fit_integer(value: i128) -> CodecResult<Self> {
        match Int::try_from(value) {
            Ok(v) => Ok(Self::Integer(v)),
            Err(_) => wide_integer_fallback(value),
        }
    }
}

#[cfg(feature = "float")]
fn wide_integer_fallback(value: i128) -> CodecResult<NumericValue> {
    Ok(NumericValue::Float(value as Float))
}

#[cfg(not(feature = "float"))]
fn wide_integer_fallback(value: i128) -> CodecResult<NumericValue> {
    Err(out_of_range(value, Domain::Integer))
}

impl TryFrom<NumericValue> for Int {
    type Error = CodecError;

    fn try_from(value: NumericValue) -> Result<Self, Self::Error> {
        value.as_int().ok_or(CodecError::DomainMismatch {
            expected: Domain::Integer,
            found: value.domain(),
        })
    }
}

#[cfg(feature = "float")]
impl TryFrom<NumericValue> for Float {
    type Error = CodecError;

    fn try_from(value: NumericValue) -> Result<Self, Self::Error> {
        value.as_float().ok_or(CodecError::DomainMismatch {
            expected: Domain::Float,
            found: value.domain(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_ints_fit() {
        assert_eq!(NumericValue::from_integer(42i8), Ok(NumericValue::Integer(42)));
        assert_eq!(NumericValue::from_integer(255u8), Ok(NumericValue::Integer(255)));
        assert_eq!(
            NumericValue::from_integer(i16::MIN),
            Ok(NumericValue::Integer(i16::MIN as Int))
        );
        assert_eq!(
            NumericValue::from_integer(i32::MIN),
            Ok(NumericValue::Integer(i32::MIN as Int))
        );
        assert_eq!(
            NumericValue::from_integer(Int::MIN),
            Ok(NumericValue::Integer(Int::MIN))
        );
    }

    #[test]
    fn test_unsigned_max_rejected() {
        let err = NumericValue::from_integer(u128::MAX).unwrap_err();
        assert_eq!(
            err,
            CodecError::OutOfRange {
                ty: "u128",
                value: u128::MAX.to_string(),
                domain: Domain::Integer,
            }
        );

        let err = NumericValue::from_integer(usize::MAX).unwrap_err();
        assert!(matches!(err, CodecError::OutOfRange { ty: "usize", .. }));
    }

    #[test]
    fn test_fit_integer_in_range() {
        assert_eq!(NumericValue::fit_integer(-5), Ok(NumericValue::Integer(-5)));
        assert_eq!(
            NumericValue::fit_integer(Int::MAX as i128),
            Ok(NumericValue::Integer(Int::MAX))
        );
    }

    #[cfg(feature = "float")]
    #[test]
    fn test_fit_integer_falls_back_to_float() {
        let big = Int::MAX as i128 + 1;
        assert_eq!(NumericValue::fit_integer(big), Ok(NumericValue::Float(big as Float)));
        let small = Int::MIN as i128 - 1;
        assert_eq!(NumericValue::fit_integer(small).map(|v| v.domain()), Ok(Domain::Float));
    }

    #[cfg(not(feature = "float"))]
    #[test]
    fn test_fit_integer_without_float() {
        let big = Int::MAX as i128 + 1;
        assert!(matches!(
            NumericValue::fit_integer(big),
            Err(CodecError::OutOfRange { .. })
        ));
    }

    #[cfg(feature = "float")]
    #[test]
    fn test_from_float() {
        assert_eq!(NumericValue::from_float(3.5f32), Ok(NumericValue::Float(3.5)));
        assert_eq!(NumericValue::from_float(-1.25f64), Ok(NumericValue::Float(-1.25)));

        let inf = NumericValue::from_float(f64::INFINITY).expect("test: infinity");
        assert_eq!(inf.as_float(), Some(Float::INFINITY));
    }

    #[cfg(all(feature = "float", feature = "float32"))]
    #[test]
    fn test_from_float_overflow() {
        let err = NumericValue::from_float(f64::MAX).unwrap_err();
        assert!(matches!(err, CodecError::OutOfRange { ty: "f64", domain: Domain::Float, .. }));
    }

    #[cfg(all(feature = "float", not(feature = "float32")))]
    #[test]
    fn test_from_float_max_fits() {
        assert_eq!(NumericValue::from_float(f64::MAX), Ok(NumericValue::Float(f64::MAX)));
    }

    #[test]
    fn test_try_from_value() {
        assert_eq!(Int::try_from(NumericValue::Integer(9)), Ok(9));
    }

    #[cfg(feature = "float")]
    #[test]
    fn test_try_from_domain_mismatch() {
        assert_eq!(
            Int::try_from(NumericValue::Float(1.0)),
            Err(CodecError::DomainMismatch {
                expected: Domain::Integer,
                found: Domain::Float,
            })
        );
        assert_eq!(
            Float::try_from(NumericValue::Integer(1)),
            Err(CodecError::DomainMismatch {
                expected: Domain::Float,
                found: Domain::Integer,
            })
        );
        assert_eq!(Float::try_from(NumericValue::Float(0.5)), Ok(0.5));
    }
}
