//! Record identifiers.
//!
//! Records are keyed by human-readable codes ("PO-001", "SKU-004") rather than
//! UUIDs. Module crates wrap [`RecordId`] in their own newtype so a purchase
//! order id cannot be passed where a SKU is expected.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Validated, non-empty record code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Parse a record code. Surrounding whitespace is not allowed.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(DomainError::invalid_id("record id cannot be empty"));
        }
        if raw.trim() != raw {
            return Err(DomainError::invalid_id(format!(
                "record id {raw:?} has surrounding whitespace"
            )));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RecordId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RecordId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

/// Declare a module-specific identifier wrapping [`RecordId`].
#[macro_export]
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub $crate::RecordId);

        impl $name {
            pub fn new(id: $crate::RecordId) -> Self {
                Self(id)
            }

            pub fn parse(raw: impl Into<String>) -> $crate::DomainResult<Self> {
                $crate::RecordId::parse(raw).map(Self)
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_plain_codes() {
        let id = RecordId::parse("PO-001").unwrap();
        assert_eq!(id.as_str(), "PO-001");
        assert_eq!(id.to_string(), "PO-001");
    }

    #[test]
    fn parse_rejects_empty_and_padded_codes() {
        assert!(matches!(
            RecordId::parse(""),
            Err(DomainError::InvalidId(_))
        ));
        assert!(matches!(
            RecordId::parse(" SKU-001"),
            Err(DomainError::InvalidId(_))
        ));
    }

    #[test]
    fn deserialize_validates() {
        let ok: RecordId = serde_json::from_str("\"VT-002\"").unwrap();
        assert_eq!(ok.as_str(), "VT-002");
        assert!(serde_json::from_str::<RecordId>("\"\"").is_err());
    }
}
