//! Closed sets of coded values (statuses, categories, priorities).
//!
//! Records arrive with their coded fields as plain strings. Every coded field
//! is parsed into a closed enum once, at the store boundary, so that label and
//! tier lookups downstream are exhaustive `match`es with no fallback arm.

use crate::error::{DomainError, DomainResult};

/// An enum whose variants each have one stable string code.
pub trait CodedEnum: Sized + Copy + Eq + 'static {
    /// Human-readable name of the field, used in error messages.
    const KIND: &'static str;

    /// Every variant, in display order.
    const ALL: &'static [Self];

    /// Stable code as it appears in data and on the command line.
    fn code(self) -> &'static str;

    /// Parse a code. Matching is exact (case-sensitive).
    fn from_code(code: &str) -> DomainResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.code() == code)
            .ok_or_else(|| DomainError::unknown_enum(Self::KIND, code))
    }
}

/// Implement [`CodedEnum`] plus `Display`/`FromStr`/serde for a fieldless enum.
#[macro_export]
macro_rules! coded_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $code:literal),+ $(,)? }) => {
        impl $crate::CodedEnum for $ty {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$($ty::$variant),+];

            fn code(self) -> &'static str {
                match self {
                    $($ty::$variant => $code),+
                }
            }
        }

        impl core::fmt::Display for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str($crate::CodedEnum::code(*self))
            }
        }

        impl core::str::FromStr for $ty {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as $crate::CodedEnum>::from_code(s)
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::CodedEnum::code(*self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                <$ty as $crate::CodedEnum>::from_code(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}
