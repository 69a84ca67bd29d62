//! Simple macros for numeric newtypes.

/// Generates codec impls for a newtype wrapping [`Int`](crate::Int) or
/// [`Float`](crate::Float), encoding exactly like the inner number.
#[macro_export]
macro_rules! impl_numeric_wrapper {
    ($this:ty => $target:ty) => {
        impl $crate::FixedWidth for $this {
            const DOMAIN: $crate::Domain = <$target as $crate::FixedWidth>::DOMAIN;
            const WIDTH: usize = <$target as $crate::FixedWidth>::WIDTH;
            type Bytes = <$target as $crate::FixedWidth>::Bytes;
        }

        impl $crate::Encodable for $this {
            fn to_bytes(self, order: $crate::ByteOrder) -> Self::Bytes {
                <$target as $crate::Encodable>::to_bytes(self.0, order)
            }
        }

        impl $crate::Decodable for $this {
            fn from_bytes(bytes: Self::Bytes, order: $crate::ByteOrder) -> Self {
                Self(<$target as $crate::Decodable>::from_bytes(bytes, order))
            }
        }
    };
}
