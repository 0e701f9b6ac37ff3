//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// lookups, credential checks). Transport concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An account already exists under the given identifier.
    #[error("account already exists: {0}")]
    Duplicate(String),

    /// A requested account was not found.
    #[error("account not found")]
    NotFound,

    /// Credential mismatch for an existing account.
    #[error("forbidden")]
    Forbidden,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate(email: impl Into<String>) -> Self {
        Self::Duplicate(email.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn forbidden() -> Self {
        Self::Forbidden
    }
}
