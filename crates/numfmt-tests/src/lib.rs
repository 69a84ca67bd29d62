//! Property testing macros and utilities for strata-numfmt.
//!
//! The main export is the `generate_numfmt_tests!` macro, which generates a
//! proptest suite for any type implementing both `Encodable` and `Decodable`.

// Re-export dependencies for macro usage
pub use paste;
pub use proptest;
pub use strata_numfmt;

use strata_numfmt::{ByteOrder, Encodable};

/// Every byte order, in a fixed order.
pub const ALL_ORDERS: [ByteOrder; 3] = [ByteOrder::Native, ByteOrder::Little, ByteOrder::Big];

/// Encodes a value into a newly allocated vec.
pub fn encode_vec<T: Encodable>(value: T, order: ByteOrder) -> Vec<u8> {
    value.to_bytes(order).as_ref().to_vec()
}

/// Generates property tests for a fixed-width numeric type using proptest.
///
/// This macro creates property tests verifying that, under every byte order:
/// 1. Decoding an encoding reproduces the original bit pattern, and the
///    original value whenever it compares equal to itself (so NaNs are
///    checked bitwise only)
/// 2. The encoding is deterministic and exactly `WIDTH` bytes long
/// 3. The little and big endian encodings are reverses of each other, and
///    native order matches exactly one of them
///
/// # Requirements
///
/// The type must implement:
/// - `strata_numfmt::Encodable` and `strata_numfmt::Decodable`
/// - `proptest::arbitrary::Arbitrary` - for generating test values
/// - `Debug + PartialEq` - for test assertions
///
/// # Example
/// ```rust,no_run
/// use strata_numfmt_tests::generate_numfmt_tests;
///
/// generate_numfmt_tests!(isize, "isize");
/// ```
#[macro_export]
macro_rules! generate_numfmt_tests {
    ($type:ty, $name:expr) => {
        $crate::paste::paste! {
            mod [<proptest_ $name _numfmt>] {
                use super::*;
                use $crate::proptest::prelude::{any, prop_assert, prop_assert_eq};
                use $crate::strata_numfmt::{ByteOrder, Decodable, FixedWidth, native_endian};
                use $crate::{ALL_ORDERS, encode_vec};

                $crate::proptest::proptest! {
                    #[test]
                    fn [<test_numfmt_roundtrip>](value in any::<$type>()) {
                        #[allow(clippy::eq_op)]
                        let self_equal = value == value;
                        for order in ALL_ORDERS {
                            let encoded = encode_vec(value, order);
                            let decoded = <$type as Decodable>::decode_slice(&encoded, order)
                                .expect("test: decoding should succeed");
                            prop_assert_eq!(encode_vec(decoded, order), encoded, "test: bits changed under {}", order);
                            if self_equal {
                                prop_assert_eq!(decoded, value, "test: value changed under {}", order);
                            }
                        }
                    }

                    #[test]
                    fn [<test_numfmt_deterministic_width>](value in any::<$type>()) {
                        for order in ALL_ORDERS {
                            let encoded1 = encode_vec(value, order);
                            let encoded2 = encode_vec(value, order);
                            prop_assert_eq!(encoded1.len(), <$type as FixedWidth>::WIDTH);
                            prop_assert_eq!(encoded1, encoded2, "test: unexpected inequality");
                        }
                    }

                    #[test]
                    fn [<test_numfmt_order_symmetry>](value in any::<$type>()) {
                        let le = encode_vec(value, ByteOrder::Little);
                        let mut be = encode_vec(value, ByteOrder::Big);
                        let palindrome = le == be;
                        be.reverse();
                        prop_assert_eq!(&le, &be, "test: little isn't reversed big");

                        let native = encode_vec(value, ByteOrder::Native);
                        let same = encode_vec(value, ByteOrder::from(native_endian()));
                        let other = encode_vec(value, ByteOrder::from(native_endian().opposite()));
                        prop_assert_eq!(&native, &same);
                        prop_assert!(palindrome || native != other);
                    }
                }
            }
        }
    };
}
