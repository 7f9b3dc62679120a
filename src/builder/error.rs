//! Errors raised while retrieving a desired configuration.

use thiserror::Error;

/// Errors that can occur when decoding a configuration supplied by the host.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration payload must be a JSON object")]
    NotAnObject,

    #[error("Configuration could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
}
