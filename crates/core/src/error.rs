//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The evaluator itself never fails; these errors come from the edges where
/// records are assembled from upstream data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. an unparseable date).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A required field was absent in upstream data.
    #[error("missing field: {0}")]
    MissingField(&'static str),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField(field)
    }
}
