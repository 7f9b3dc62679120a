//! Core `Versioned` trait implemented by every version engine.
//!
//! An engine is a plain value (its persisted state) plus two pure
//! functions: one seeding the state on creation, one advancing it on
//! update. Everything above the engines (dispatch, lifecycle routing,
//! checkpoints) is written once against this trait.

use super::history::HistoryLedger;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Component that was incremented by an evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// The single value of a counter
    Counter,
    Major,
    Minor,
    Patch,
}

impl Level {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Counter => "counter",
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What an evaluation did to the versioned value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Change {
    /// No previous state existed; the value was seeded from initial values
    Created,

    /// A trigger group changed and the given component was incremented
    Incremented(Level),

    /// No trigger group changed; value and history passed through
    Unchanged,
}

/// An initial-value field and its configured value.
///
/// Initial values are fixed for the lifetime of an entity; changing one
/// means destroying and recreating it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitialValue {
    pub field: &'static str,
    pub value: i64,
}

impl InitialValue {
    pub const fn new(field: &'static str, value: i64) -> Self {
        Self { field, value }
    }
}

/// Desired configuration handed to an engine on every evaluation.
pub trait VersionConfig: Clone + Debug + Send + Sync {
    /// Configured history cap, as declared (may be invalid).
    fn max_history(&self) -> i64;

    /// Immutable-after-creation fields with their desired values.
    fn initial_values(&self) -> Vec<InitialValue>;
}

/// Trait for version engines.
///
/// Implementors are immutable state values; `create` and `advance` are pure
/// and must not perform I/O.
///
/// # Required Traits
///
/// - `Clone`: states are passed through unchanged on reads
/// - `PartialEq`: states must be comparable for idempotency checks
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states round-trip through the host's storage
pub trait Versioned:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Desired configuration type for this engine.
    type Config: VersionConfig;

    /// Snapshot type recorded in the history ledger.
    type Entry: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync;

    /// Short engine name used in logs.
    const KIND: &'static str;

    /// Seed a fresh state from the desired configuration.
    ///
    /// `cap` is the already-validated history cap.
    fn create(config: &Self::Config, cap: usize) -> Self;

    /// Compute the next state from this one and the desired configuration.
    ///
    /// Callers guarantee the initial values in `config` match this state.
    fn advance(&self, config: &Self::Config, cap: usize) -> (Self, Change);

    /// Externally visible value, rendered for display.
    fn display_value(&self) -> String;

    fn history(&self) -> &HistoryLedger<Self::Entry>;

    /// Snapshot of the current value and triggers, as a ledger entry.
    fn current_entry(&self) -> Self::Entry;

    /// History cap this state was last evaluated with.
    fn max_history(&self) -> i64;

    /// Immutable-after-creation fields this state was created with.
    fn initial_values(&self) -> Vec<InitialValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_are_stable() {
        assert_eq!(Level::Counter.name(), "counter");
        assert_eq!(Level::Major.to_string(), "major");
        assert_eq!(Level::Minor.to_string(), "minor");
        assert_eq!(Level::Patch.to_string(), "patch");
    }

    #[test]
    fn level_serializes_lowercase() {
        let json = serde_json::to_string(&Level::Minor).unwrap();
        assert_eq!(json, "\"minor\"");
    }
}
