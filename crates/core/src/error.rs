//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// missing rows). Storage concerns belong in the infra crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank product name, negative quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// No row matched the requested product.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "validation_error",
            DomainError::NotFound(_) => "not_found",
        }
    }
}
