//! Builder API and decoding for desired configurations.
//!
//! Configurations reach the engines either through the fluent builders or
//! by decoding the host's JSON payload. Both paths inject the same defaults
//! for fields the host left out.

pub mod counter;
pub mod error;
pub mod macros;
pub mod semantic;

pub use counter::CounterConfigBuilder;
pub use error::ConfigError;
pub use semantic::SemanticConfigBuilder;

use serde::de::DeserializeOwned;

pub const DEFAULT_STEP: i64 = 1;
pub const DEFAULT_MAX_HISTORY: i64 = 1000;
pub const DEFAULT_COUNTER_INITIAL_VALUE: i64 = 0;
pub const DEFAULT_MAJOR_INITIAL_VALUE: i64 = 1;
pub const DEFAULT_MINOR_INITIAL_VALUE: i64 = 0;
pub const DEFAULT_PATCH_INITIAL_VALUE: i64 = 0;

pub(crate) fn default_step() -> i64 {
    DEFAULT_STEP
}

pub(crate) fn default_max_history() -> i64 {
    DEFAULT_MAX_HISTORY
}

pub(crate) fn default_major_initial_value() -> i64 {
    DEFAULT_MAJOR_INITIAL_VALUE
}

/// Decode a desired configuration from the host's JSON payload.
///
/// Missing fields take their defaults and `null` trigger maps read as
/// empty. Anything other than a JSON object, or fields of the wrong type,
/// is a retrieval failure and nothing is evaluated.
///
/// # Example
///
/// ```
/// use ratchet::builder::decode;
/// use ratchet::engine::CounterConfig;
///
/// let config: CounterConfig = decode(r#"{"initial_value": 35}"#).unwrap();
/// assert_eq!(config.initial_value, 35);
/// assert_eq!(config.step, 1);
///
/// assert!(decode::<CounterConfig>(r#"{"step": "two"}"#).is_err());
/// ```
pub fn decode<C: DeserializeOwned>(payload: &str) -> Result<C, ConfigError> {
    let value = serde_json::from_str(payload).map_err(ConfigError::Decode)?;
    decode_value(value)
}

/// Decode a desired configuration from an already parsed JSON value.
pub fn decode_value<C: DeserializeOwned>(payload: serde_json::Value) -> Result<C, ConfigError> {
    if !payload.is_object() {
        return Err(ConfigError::NotAnObject);
    }
    serde_json::from_value(payload).map_err(ConfigError::Decode)
}
