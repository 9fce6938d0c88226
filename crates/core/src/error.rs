//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (missing
/// input, mixed currencies, conflicts). Persistence failures are included
/// because the ledger surfaces store write errors to its caller instead of
/// swallowing them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was absent or a value failed boundary validation.
    /// The message names the offending field.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Two Money operands (or a line item and its invoice) disagree on currency.
    #[error("currency mismatch: {0}")]
    CurrencyMismatch(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found.
    #[error("not found")]
    NotFound,

    /// A conflict occurred (e.g. an illegal status transition).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Writing to or reading from the backing store failed.
    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Contract violation: a required field is absent.
    pub fn missing_field(field: &str) -> Self {
        Self::InvalidInput(format!("missing required field `{field}`"))
    }

    pub fn currency_mismatch(msg: impl Into<String>) -> Self {
        Self::CurrencyMismatch(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}
