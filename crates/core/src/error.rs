//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// stock invariants, lookups). Infrastructure failures are carried through as
/// `Store` so callers can distinguish them from their own bad input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. missing name, alert above max).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A decrement would drive on-hand stock below zero.
    #[error("insufficient stock: requested {requested}, on hand {on_hand}")]
    InsufficientStock { on_hand: i64, requested: i64 },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A referenced item or category does not exist.
    #[error("not found")]
    NotFound,

    /// The backing store collaborator failed. Surfaced as-is, never retried
    /// here; retry policy belongs to the store or the caller.
    #[error("store error: {0}")]
    Store(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn insufficient_stock(on_hand: i64, requested: i64) -> Self {
        Self::InsufficientStock { on_hand, requested }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}
