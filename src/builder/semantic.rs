//! Builder for semantic version configurations.

use crate::core::Triggers;
use crate::engine::SemanticConfig;

/// Builder for constructing semantic version configurations with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct SemanticConfigBuilder {
    config: SemanticConfig,
}

impl SemanticConfigBuilder {
    /// Create a new builder starting at `1.0.0`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn major_triggers(mut self, triggers: Triggers) -> Self {
        self.config.major_triggers = triggers;
        self
    }

    pub fn minor_triggers(mut self, triggers: Triggers) -> Self {
        self.config.minor_triggers = triggers;
        self
    }

    pub fn patch_triggers(mut self, triggers: Triggers) -> Self {
        self.config.patch_triggers = triggers;
        self
    }

    pub fn major_initial_value(mut self, value: i64) -> Self {
        self.config.major_initial_value = value;
        self
    }

    pub fn minor_initial_value(mut self, value: i64) -> Self {
        self.config.minor_initial_value = value;
        self
    }

    pub fn patch_initial_value(mut self, value: i64) -> Self {
        self.config.patch_initial_value = value;
        self
    }

    pub fn max_history(mut self, max_history: i64) -> Self {
        self.config.max_history = max_history;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> SemanticConfig {
        self.config
    }
}
