//! Monotonic counter engine.

use crate::builder::{default_max_history, default_step, DEFAULT_COUNTER_INITIAL_VALUE};
use crate::core::{
    triggers_changed, Change, HistoryLedger, InitialValue, Level, Triggers, VersionConfig,
    Versioned,
};
use serde::{Deserialize, Serialize};

/// Desired configuration for a counter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    #[serde(default)]
    pub triggers: Triggers,

    /// Amount added on every triggered update; may be zero or negative
    #[serde(default = "default_step")]
    pub step: i64,

    /// Value assigned at creation; changing it replaces the counter
    #[serde(default)]
    pub initial_value: i64,

    #[serde(default = "default_max_history")]
    pub max_history: i64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            triggers: Triggers::new(),
            step: default_step(),
            initial_value: DEFAULT_COUNTER_INITIAL_VALUE,
            max_history: default_max_history(),
        }
    }
}

impl VersionConfig for CounterConfig {
    fn max_history(&self) -> i64 {
        self.max_history
    }

    fn initial_values(&self) -> Vec<InitialValue> {
        vec![InitialValue::new("initial_value", self.initial_value)]
    }
}

/// A counter value together with the triggers that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterEntry {
    pub value: i64,
    pub triggers: Triggers,
}

/// Persisted state of a counter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub value: i64,
    pub step: i64,
    pub initial_value: i64,
    pub max_history: i64,
    /// Trigger map observed at the last evaluation
    pub triggers: Triggers,
    pub history: HistoryLedger<CounterEntry>,
}

impl Versioned for CounterState {
    type Config = CounterConfig;
    type Entry = CounterEntry;

    const KIND: &'static str = "counter";

    fn create(config: &CounterConfig, cap: usize) -> Self {
        let value = config.initial_value;
        let entry = CounterEntry {
            value,
            triggers: config.triggers.clone(),
        };

        Self {
            value,
            step: config.step,
            initial_value: config.initial_value,
            max_history: config.max_history,
            triggers: config.triggers.clone(),
            history: HistoryLedger::new().record(entry, cap),
        }
    }

    fn advance(&self, config: &CounterConfig, cap: usize) -> (Self, Change) {
        if !triggers_changed(Some(&self.triggers), Some(&config.triggers)) {
            let next = Self {
                step: config.step,
                max_history: config.max_history,
                triggers: config.triggers.clone(),
                history: self.history.truncate(cap),
                ..self.clone()
            };
            return (next, Change::Unchanged);
        }

        // Overflow wraps like the host's 64-bit integers
        let value = self.value.wrapping_add(config.step);
        let entry = CounterEntry {
            value,
            triggers: config.triggers.clone(),
        };

        let next = Self {
            value,
            step: config.step,
            initial_value: self.initial_value,
            max_history: config.max_history,
            triggers: config.triggers.clone(),
            history: self.history.record(entry, cap),
        };
        (next, Change::Incremented(Level::Counter))
    }

    fn display_value(&self) -> String {
        self.value.to_string()
    }

    fn history(&self) -> &HistoryLedger<CounterEntry> {
        &self.history
    }

    fn current_entry(&self) -> CounterEntry {
        CounterEntry {
            value: self.value,
            triggers: self.triggers.clone(),
        }
    }

    fn max_history(&self) -> i64 {
        self.max_history
    }

    fn initial_values(&self) -> Vec<InitialValue> {
        vec![InitialValue::new("initial_value", self.initial_value)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CounterConfigBuilder;
    use crate::triggers;

    fn values(state: &CounterState) -> Vec<i64> {
        state.history.iter().map(|e| e.value).collect()
    }

    #[test]
    fn create_seeds_initial_value_and_history() {
        let config = CounterConfigBuilder::new()
            .initial_value(35)
            .triggers(triggers! { "hash" => "potatoes" })
            .build();

        let state = CounterState::create(&config, 1000);

        assert_eq!(state.value, 35);
        assert_eq!(values(&state), vec![35]);
        assert_eq!(state.history.entries()[0].triggers.get("hash"), Some("potatoes"));
    }

    #[test]
    fn changed_triggers_increment_by_step() {
        let config = CounterConfigBuilder::new()
            .initial_value(35)
            .triggers(triggers! { "hash" => "potatoes" })
            .build();
        let state = CounterState::create(&config, 1000);

        let config = CounterConfigBuilder::new()
            .initial_value(35)
            .triggers(triggers! { "hash" => "eggs" })
            .build();
        let (state, change) = state.advance(&config, 1000);

        assert_eq!(change, Change::Incremented(Level::Counter));
        assert_eq!(state.value, 36);
        assert_eq!(values(&state), vec![35, 36]);

        let config = CounterConfigBuilder::new()
            .initial_value(35)
            .step(2)
            .triggers(triggers! { "hash" => "bacon" })
            .build();
        let (state, _) = state.advance(&config, 1000);

        assert_eq!(state.value, 38);
        assert_eq!(values(&state), vec![35, 36, 38]);
        assert_eq!(state.step, 2);
    }

    #[test]
    fn unchanged_triggers_pass_through() {
        let config = CounterConfigBuilder::new()
            .triggers(triggers! { "hash" => "potatoes" })
            .build();
        let state = CounterState::create(&config, 1000);

        let (next, change) = state.advance(&config, 1000);

        assert_eq!(change, Change::Unchanged);
        assert_eq!(next, state);
    }

    #[test]
    fn unchanged_triggers_refresh_echoed_config() {
        let config = CounterConfigBuilder::new().build();
        let state = CounterState::create(&config, 1000);

        let config = CounterConfigBuilder::new().step(5).build();
        let (next, change) = state.advance(&config, 1000);

        assert_eq!(change, Change::Unchanged);
        assert_eq!(next.value, state.value);
        assert_eq!(next.step, 5);
        assert_eq!(next.history, state.history);
    }

    #[test]
    fn negative_and_zero_steps_are_applied() {
        let config = CounterConfigBuilder::new().initial_value(10).step(-3).build();
        let state = CounterState::create(&config, 1000);

        let config = CounterConfigBuilder::new()
            .initial_value(10)
            .step(-3)
            .triggers(triggers! { "a" => "1" })
            .build();
        let (state, _) = state.advance(&config, 1000);
        assert_eq!(state.value, 7);

        let config = CounterConfigBuilder::new()
            .initial_value(10)
            .step(0)
            .triggers(triggers! { "a" => "2" })
            .build();
        let (state, change) = state.advance(&config, 1000);
        assert_eq!(change, Change::Incremented(Level::Counter));
        assert_eq!(state.value, 7);
        assert_eq!(values(&state), vec![10, 7, 7]);
    }

    #[test]
    fn overflow_wraps() {
        let config = CounterConfigBuilder::new().initial_value(i64::MAX).build();
        let state = CounterState::create(&config, 1000);

        let config = CounterConfigBuilder::new()
            .initial_value(i64::MAX)
            .triggers(triggers! { "a" => "1" })
            .build();
        let (state, _) = state.advance(&config, 1000);

        assert_eq!(state.value, i64::MIN);
    }

    #[test]
    fn history_is_truncated_to_cap() {
        let mut state = CounterState::create(&CounterConfigBuilder::new().build(), 2);

        for i in 0..3 {
            let config = CounterConfigBuilder::new()
                .max_history(2)
                .triggers(triggers! { "run" => i.to_string() })
                .build();
            state = state.advance(&config, 2).0;
        }

        assert_eq!(state.value, 3);
        assert_eq!(values(&state), vec![2, 3]);
    }

    #[test]
    fn lowered_cap_truncates_unchanged_history() {
        let mut state = CounterState::create(&CounterConfigBuilder::new().build(), 1000);
        for i in 0..3 {
            let config = CounterConfigBuilder::new()
                .triggers(triggers! { "run" => i.to_string() })
                .build();
            state = state.advance(&config, 1000).0;
        }
        assert_eq!(values(&state), vec![0, 1, 2, 3]);

        let config = CounterConfigBuilder::new()
            .max_history(1)
            .triggers(triggers! { "run" => "2" })
            .build();
        let (next, change) = state.advance(&config, 1);

        assert_eq!(change, Change::Unchanged);
        assert_eq!(next.value, 3);
        assert_eq!(next.max_history, 1);
        assert_eq!(values(&next), vec![3]);
        assert_eq!(next.history.last(), Some(&next.current_entry()));
    }

    #[test]
    fn zero_cap_keeps_history_empty() {
        let state = CounterState::create(&CounterConfigBuilder::new().build(), 0);
        assert!(state.history.is_empty());

        let config = CounterConfigBuilder::new()
            .triggers(triggers! { "a" => "1" })
            .build();
        let (state, _) = state.advance(&config, 0);

        assert_eq!(state.value, 1);
        assert!(state.history.is_empty());
    }

    #[test]
    fn current_entry_matches_last_history_entry() {
        let config = CounterConfigBuilder::new()
            .triggers(triggers! { "hash" => "potatoes" })
            .build();
        let state = CounterState::create(&config, 1000);

        assert_eq!(state.history.last(), Some(&state.current_entry()));
    }

    #[test]
    fn config_defaults_are_injected() {
        let config: CounterConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config, CounterConfig::default());
        assert_eq!(config.step, 1);
        assert_eq!(config.max_history, 1000);
        assert_eq!(config.initial_value, 0);
        assert!(config.triggers.is_empty());
    }
}
