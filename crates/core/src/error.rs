//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, malformed input). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A record was requested with a negative starting quantity.
    #[error("illegal quantity: {0}")]
    IllegalQuantity(i64),

    /// A quantity decrease would have crossed below zero.
    #[error("quantity cannot go negative: {current} {delta:+}")]
    NegativeQuantity { current: i64, delta: i64 },

    /// A persisted document is structurally invalid or mistyped.
    #[error("malformed document: {0}")]
    MalformedDocument(String),
}

impl InventoryError {
    pub fn illegal_quantity(quantity: i64) -> Self {
        Self::IllegalQuantity(quantity)
    }

    pub fn negative_quantity(current: i64, delta: i64) -> Self {
        Self::NegativeQuantity { current, delta }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedDocument(msg.into())
    }
}
