//! Checkpoint and restore for persisted resources.
//!
//! The host owns storage; this module only guarantees that a resource
//! round-trips losslessly through JSON or a compact binary form, and that a
//! restored snapshot still satisfies the ledger invariants before it is
//! handed back to the engines.

use crate::core::Versioned;
use crate::resource::Resource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of a resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<V: Versioned> {
    /// Checkpoint format version
    pub version: u32,

    /// Engine kind the state belongs to
    pub kind: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    pub resource: Resource<V>,
}

impl<V: Versioned> Checkpoint<V> {
    /// Capture a resource as it is now.
    pub fn capture(resource: &Resource<V>) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            kind: V::KIND.to_string(),
            timestamp: Utc::now(),
            resource: resource.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Validate the checkpoint and hand back the resource it holds.
    ///
    /// # Example
    ///
    /// ```
    /// use ratchet::builder::CounterConfigBuilder;
    /// use ratchet::checkpoint::Checkpoint;
    /// use ratchet::engine::CounterState;
    /// use ratchet::resource::Resource;
    ///
    /// let config = CounterConfigBuilder::new().initial_value(35).build();
    /// let resource = Resource::<CounterState>::create(&config).unwrap();
    ///
    /// let json = Checkpoint::capture(&resource).to_json().unwrap();
    /// let restored = Checkpoint::<CounterState>::from_json(&json)
    ///     .unwrap()
    ///     .restore()
    ///     .unwrap();
    ///
    /// assert_eq!(restored, resource);
    /// ```
    pub fn restore(self) -> Result<Resource<V>, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if self.kind != V::KIND {
            return Err(CheckpointError::KindMismatch {
                found: self.kind,
                expected: V::KIND,
            });
        }
        validate_state(&self.resource.state)?;
        Ok(self.resource)
    }
}

/// Check the ledger invariants of a persisted state.
pub fn validate_state<V: Versioned>(state: &V) -> Result<(), CheckpointError> {
    let max_history = state.max_history();
    let cap = usize::try_from(max_history).map_err(|_| {
        CheckpointError::ValidationFailed(format!("negative max_history {max_history}"))
    })?;

    let history = state.history();
    if history.len() > cap {
        return Err(CheckpointError::ValidationFailed(format!(
            "history holds {} entries, cap is {cap}",
            history.len()
        )));
    }

    if let Some(last) = history.last() {
        if *last != state.current_entry() {
            return Err(CheckpointError::ValidationFailed(format!(
                "latest history entry does not match current value {}",
                state.display_value()
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{CounterConfigBuilder, SemanticConfigBuilder};
    use crate::core::HistoryLedger;
    use crate::engine::{CounterEntry, CounterState, SemanticState};
    use crate::triggers;

    fn released() -> Resource<SemanticState> {
        let config = SemanticConfigBuilder::new()
            .patch_triggers(triggers! { "hash" => "potatoes" })
            .build();
        let resource = Resource::<SemanticState>::create(&config).unwrap();

        let config = SemanticConfigBuilder::new()
            .minor_triggers(triggers! { "feature" => "search" })
            .patch_triggers(triggers! { "hash" => "eggs" })
            .build();
        resource.update(&config).unwrap().0
    }

    #[test]
    fn json_checkpoint_restores_resource() {
        let resource = released();
        let json = Checkpoint::capture(&resource).to_json().unwrap();

        let restored = Checkpoint::<SemanticState>::from_json(&json)
            .unwrap()
            .restore()
            .unwrap();

        assert_eq!(restored, resource);
        assert_eq!(restored.value(), "1.1.0");
    }

    #[test]
    fn binary_checkpoint_restores_resource() {
        let resource = released();
        let bytes = Checkpoint::capture(&resource).to_binary().unwrap();

        let restored = Checkpoint::<SemanticState>::from_binary(&bytes)
            .unwrap()
            .restore()
            .unwrap();

        assert_eq!(restored, resource);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut checkpoint = Checkpoint::capture(&released());
        checkpoint.version = CHECKPOINT_VERSION + 1;

        assert!(matches!(
            checkpoint.restore(),
            Err(CheckpointError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn mismatched_kind_is_rejected() {
        let config = CounterConfigBuilder::new().build();
        let resource = Resource::<CounterState>::create(&config).unwrap();
        let json = Checkpoint::capture(&resource).to_json().unwrap();

        let mut checkpoint = Checkpoint::<CounterState>::from_json(&json).unwrap();
        checkpoint.kind = "semantic_version".to_string();

        assert!(matches!(
            checkpoint.restore(),
            Err(CheckpointError::KindMismatch { expected: "counter", .. })
        ));
    }

    #[test]
    fn garbage_fails_to_deserialize() {
        assert!(matches!(
            Checkpoint::<CounterState>::from_json("not json"),
            Err(CheckpointError::DeserializationFailed(_))
        ));
        assert!(matches!(
            Checkpoint::<CounterState>::from_binary(&[1, 2, 3]),
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn oversized_history_is_rejected() {
        let config = CounterConfigBuilder::new().max_history(1).build();
        let mut resource = Resource::<CounterState>::create(&config).unwrap();
        resource.state.history = HistoryLedger::from_entries(vec![
            CounterEntry {
                value: 0,
                triggers: triggers! {},
            },
            resource.state.current_entry(),
        ]);

        assert!(validate_state(&resource.state).is_err());
    }

    #[test]
    fn stale_last_entry_is_rejected() {
        let config = CounterConfigBuilder::new().build();
        let mut resource = Resource::<CounterState>::create(&config).unwrap();
        resource.state.value = 99;

        assert!(matches!(
            validate_state(&resource.state),
            Err(CheckpointError::ValidationFailed(_))
        ));
    }
}
