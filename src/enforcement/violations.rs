//! Precondition violations.

use thiserror::Error;

/// Errors raised when a desired configuration cannot be applied as-is
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ViolationError {
    #[error("max_history must not be negative (got {value})")]
    NegativeMaxHistory { value: i64 },

    #[error("{field} cannot change in place ({previous} -> {desired}); the entity must be replaced")]
    ImmutableFieldChanged {
        field: &'static str,
        previous: i64,
        desired: i64,
    },
}

impl ViolationError {
    /// Whether this violation is resolved by destroying and recreating the entity.
    pub fn requires_replace(&self) -> bool {
        matches!(self, Self::ImmutableFieldChanged { .. })
    }
}
