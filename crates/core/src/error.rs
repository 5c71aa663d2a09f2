//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation,
/// invariants, lookups). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The referenced item id has no entry.
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// Purchase quantity was zero or negative.
    #[error("purchase quantity must be greater than zero, got {0}")]
    InvalidQuantity(i64),

    /// Requested quantity exceeds available stock.
    #[error("insufficient stock for {item_id}: requested {requested}, available {available}")]
    InsufficientStock {
        item_id: ItemId,
        requested: i64,
        available: i64,
    },

    /// A value failed a precondition check (e.g. negative price).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn not_found(item_id: ItemId) -> Self {
        Self::NotFound(item_id)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
