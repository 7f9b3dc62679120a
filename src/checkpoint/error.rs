//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while encoding or restoring a checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported checkpoint format {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpoint was taken from a different engine
    #[error("Checkpoint holds a {found} state, expected {expected}")]
    KindMismatch {
        found: String,
        expected: &'static str,
    },

    /// Restored state breaks a ledger invariant
    #[error("Checkpoint validation failed: {0}")]
    ValidationFailed(String),
}
