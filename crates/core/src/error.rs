//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic data failures (validation, invariants,
/// unknown codes). IO and parse failures of the dataset belong to the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed validation (negative amount, empty name, past date).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A rule spanning several fields was broken (min stock above max).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. empty).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A coded value (status, category, ...) is outside its recognised set.
    #[error("unknown {kind} value: {value:?}")]
    UnknownEnumValue { kind: &'static str, value: String },

    /// A conflict occurred (e.g. duplicate record id).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown_enum(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownEnumValue {
            kind,
            value: value.into(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
