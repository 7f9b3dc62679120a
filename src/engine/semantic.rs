//! Semantic version engine.
//!
//! Three trigger groups are compared in priority order (major, minor,
//! patch). The first group that changed wins: its component increments and
//! every lower component resets to zero. At most one component increments
//! per evaluation.

use crate::builder::{
    default_major_initial_value, default_max_history, DEFAULT_MINOR_INITIAL_VALUE,
    DEFAULT_PATCH_INITIAL_VALUE,
};
use crate::core::{
    triggers_changed, Change, HistoryLedger, InitialValue, Level, Triggers, VersionConfig,
    Versioned,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `major.minor.patch` triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SemanticVersion {
    pub major: i64,
    pub minor: i64,
    pub patch: i64,
}

/// Component of a semantic version, most significant first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl From<Component> for Level {
    fn from(component: Component) -> Self {
        match component {
            Component::Major => Level::Major,
            Component::Minor => Level::Minor,
            Component::Patch => Level::Patch,
        }
    }
}

impl SemanticVersion {
    pub const fn new(major: i64, minor: i64, patch: i64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Increment one component, zeroing every less significant one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ratchet::engine::{Component, SemanticVersion};
    ///
    /// let version = SemanticVersion::new(1, 4, 2);
    ///
    /// assert_eq!(version.bump(Component::Patch), SemanticVersion::new(1, 4, 3));
    /// assert_eq!(version.bump(Component::Minor), SemanticVersion::new(1, 5, 0));
    /// assert_eq!(version.bump(Component::Major), SemanticVersion::new(2, 0, 0));
    /// ```
    pub fn bump(self, component: Component) -> Self {
        match component {
            Component::Major => Self::new(self.major.wrapping_add(1), 0, 0),
            Component::Minor => Self::new(self.major, self.minor.wrapping_add(1), 0),
            Component::Patch => Self::new(self.major, self.minor, self.patch.wrapping_add(1)),
        }
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Desired configuration for a semantic version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticConfig {
    #[serde(default)]
    pub major_triggers: Triggers,
    #[serde(default)]
    pub minor_triggers: Triggers,
    #[serde(default)]
    pub patch_triggers: Triggers,

    #[serde(default = "default_major_initial_value")]
    pub major_initial_value: i64,
    #[serde(default)]
    pub minor_initial_value: i64,
    #[serde(default)]
    pub patch_initial_value: i64,

    #[serde(default = "default_max_history")]
    pub max_history: i64,
}

impl SemanticConfig {
    fn initial_version(&self) -> SemanticVersion {
        SemanticVersion::new(
            self.major_initial_value,
            self.minor_initial_value,
            self.patch_initial_value,
        )
    }
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            major_triggers: Triggers::new(),
            minor_triggers: Triggers::new(),
            patch_triggers: Triggers::new(),
            major_initial_value: default_major_initial_value(),
            minor_initial_value: DEFAULT_MINOR_INITIAL_VALUE,
            patch_initial_value: DEFAULT_PATCH_INITIAL_VALUE,
            max_history: default_max_history(),
        }
    }
}

impl VersionConfig for SemanticConfig {
    fn max_history(&self) -> i64 {
        self.max_history
    }

    fn initial_values(&self) -> Vec<InitialValue> {
        initial_values_of(self.initial_version())
    }
}

fn initial_values_of(version: SemanticVersion) -> Vec<InitialValue> {
    vec![
        InitialValue::new("major_initial_value", version.major),
        InitialValue::new("minor_initial_value", version.minor),
        InitialValue::new("patch_initial_value", version.patch),
    ]
}

/// A semantic version together with all three trigger groups that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticEntry {
    /// Rendered `major.minor.patch`
    pub value: String,
    pub major_value: i64,
    pub minor_value: i64,
    pub patch_value: i64,
    pub major_triggers: Triggers,
    pub minor_triggers: Triggers,
    pub patch_triggers: Triggers,
}

impl SemanticEntry {
    pub fn version(&self) -> SemanticVersion {
        SemanticVersion::new(self.major_value, self.minor_value, self.patch_value)
    }
}

/// Persisted state of a semantic version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticState {
    pub version: SemanticVersion,
    pub initial_version: SemanticVersion,
    pub max_history: i64,
    pub major_triggers: Triggers,
    pub minor_triggers: Triggers,
    pub patch_triggers: Triggers,
    pub history: HistoryLedger<SemanticEntry>,
}

impl SemanticState {
    /// The version rendered as `major.minor.patch`.
    pub fn value(&self) -> String {
        self.version.to_string()
    }

    fn entry(version: SemanticVersion, config: &SemanticConfig) -> SemanticEntry {
        SemanticEntry {
            value: version.to_string(),
            major_value: version.major,
            minor_value: version.minor,
            patch_value: version.patch,
            major_triggers: config.major_triggers.clone(),
            minor_triggers: config.minor_triggers.clone(),
            patch_triggers: config.patch_triggers.clone(),
        }
    }

    /// Highest-priority trigger group that changed, if any.
    fn changed_component(&self, config: &SemanticConfig) -> Option<Component> {
        [
            (Component::Major, &self.major_triggers, &config.major_triggers),
            (Component::Minor, &self.minor_triggers, &config.minor_triggers),
            (Component::Patch, &self.patch_triggers, &config.patch_triggers),
        ]
        .into_iter()
        .find(|(_, previous, current)| triggers_changed(Some(*previous), Some(*current)))
        .map(|(component, _, _)| component)
    }
}

impl Versioned for SemanticState {
    type Config = SemanticConfig;
    type Entry = SemanticEntry;

    const KIND: &'static str = "semantic_version";

    fn create(config: &SemanticConfig, cap: usize) -> Self {
        let version = config.initial_version();

        Self {
            version,
            initial_version: version,
            max_history: config.max_history,
            major_triggers: config.major_triggers.clone(),
            minor_triggers: config.minor_triggers.clone(),
            patch_triggers: config.patch_triggers.clone(),
            history: HistoryLedger::new().record(Self::entry(version, config), cap),
        }
    }

    fn advance(&self, config: &SemanticConfig, cap: usize) -> (Self, Change) {
        let (version, history, change) = match self.changed_component(config) {
            Some(component) => {
                let version = self.version.bump(component);
                let history = self.history.record(Self::entry(version, config), cap);
                (version, history, Change::Incremented(component.into()))
            }
            None => (self.version, self.history.truncate(cap), Change::Unchanged),
        };

        let next = Self {
            version,
            initial_version: self.initial_version,
            max_history: config.max_history,
            major_triggers: config.major_triggers.clone(),
            minor_triggers: config.minor_triggers.clone(),
            patch_triggers: config.patch_triggers.clone(),
            history,
        };
        (next, change)
    }

    fn display_value(&self) -> String {
        self.value()
    }

    fn history(&self) -> &HistoryLedger<SemanticEntry> {
        &self.history
    }

    fn current_entry(&self) -> SemanticEntry {
        SemanticEntry {
            value: self.value(),
            major_value: self.version.major,
            minor_value: self.version.minor,
            patch_value: self.version.patch,
            major_triggers: self.major_triggers.clone(),
            minor_triggers: self.minor_triggers.clone(),
            patch_triggers: self.patch_triggers.clone(),
        }
    }

    fn max_history(&self) -> i64 {
        self.max_history
    }

    fn initial_values(&self) -> Vec<InitialValue> {
        initial_values_of(self.initial_version)
    }
}
