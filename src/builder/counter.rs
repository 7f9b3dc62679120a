//! Builder for counter configurations.

use crate::core::Triggers;
use crate::engine::CounterConfig;

/// Builder for constructing counter configurations with a fluent API.
///
/// Unset fields take the same defaults the decoder injects.
///
/// # Example
///
/// ```
/// use ratchet::builder::CounterConfigBuilder;
/// use ratchet::triggers;
///
/// let config = CounterConfigBuilder::new()
///     .initial_value(35)
///     .step(2)
///     .triggers(triggers! { "hash" => "potatoes" })
///     .build();
///
/// assert_eq!(config.max_history, 1000);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CounterConfigBuilder {
    config: CounterConfig,
}

impl CounterConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole trigger map.
    pub fn triggers(mut self, triggers: Triggers) -> Self {
        self.config.triggers = triggers;
        self
    }

    /// Add a single trigger.
    pub fn trigger(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.triggers.insert(key, value);
        self
    }

    pub fn step(mut self, step: i64) -> Self {
        self.config.step = step;
        self
    }

    pub fn initial_value(mut self, value: i64) -> Self {
        self.config.initial_value = value;
        self
    }

    pub fn max_history(mut self, max_history: i64) -> Self {
        self.config.max_history = max_history;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> CounterConfig {
        self.config
    }
}
