//! Domain and decode error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Transport and
/// parsing failures belong in [`DecodeError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An order status outside the six recognized lifecycle states.
    #[error("invalid order status: {0:?}")]
    InvalidStatus(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_status(status: impl Into<String>) -> Self {
        Self::InvalidStatus(status.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

/// Failure at the fetch boundary, where loosely-shaped JSON becomes typed
/// domain values.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),

    /// The envelope decoded but reported `success: false`.
    #[error("{endpoint} responded with success=false")]
    Unsuccessful { endpoint: &'static str },

    #[error(transparent)]
    Domain(#[from] DomainError),
}
