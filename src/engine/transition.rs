//! Transition dispatch: creation vs. update.

use crate::core::{Change, Versioned};
use crate::enforcement::{enforce_config, enforce_immutable, ViolationError};

/// Result of evaluating a desired configuration against a previous state.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition<V: Versioned> {
    /// State to persist
    pub state: V,

    /// What the evaluation did
    pub change: Change,
}

/// Errors that can occur during transitions
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransitionError {
    #[error("invalid configuration: {}", join(.0))]
    InvalidConfig(Vec<ViolationError>),

    #[error("replacement required: {}", join(.0))]
    ReplaceRequired(Vec<ViolationError>),
}

impl TransitionError {
    pub fn violations(&self) -> &[ViolationError] {
        match self {
            Self::InvalidConfig(v) | Self::ReplaceRequired(v) => v,
        }
    }
}

fn join(violations: &[ViolationError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Compute the next state from the previous one (if any) and the desired config.
///
/// With no previous state the engine is created from its initial values.
/// Otherwise the trigger groups are compared and at most one increment is
/// applied. The function is pure: it either returns a complete next state or
/// an error, never a partial update.
///
/// Changing an initial value of an existing entity is refused with
/// [`TransitionError::ReplaceRequired`]; use [`plan`](crate::engine::plan)
/// to route such changes to a replacement.
///
/// # Example
///
/// ```rust
/// use ratchet::builder::CounterConfigBuilder;
/// use ratchet::core::{Change, Level};
/// use ratchet::engine::{transition, CounterState};
/// use ratchet::triggers;
///
/// let config = CounterConfigBuilder::new().initial_value(35).build();
/// let created = transition::<CounterState>(None, &config).unwrap();
/// assert_eq!(created.state.value, 35);
///
/// let config = CounterConfigBuilder::new()
///     .initial_value(35)
///     .triggers(triggers! { "hash" => "eggs" })
///     .build();
/// let updated = transition(Some(&created.state), &config).unwrap();
///
/// assert_eq!(updated.change, Change::Incremented(Level::Counter));
/// assert_eq!(updated.state.value, 36);
/// ```
pub fn transition<V: Versioned>(
    previous: Option<&V>,
    config: &V::Config,
) -> Result<Transition<V>, TransitionError> {
    let cap = enforce_config(config).map_err(|violations| {
        tracing::warn!(kind = V::KIND, ?violations, "rejected configuration");
        TransitionError::InvalidConfig(violations)
    })?;

    let (state, change) = match previous {
        None => (V::create(config, cap), Change::Created),
        Some(previous) => {
            enforce_immutable(previous, config).map_err(TransitionError::ReplaceRequired)?;
            previous.advance(config, cap)
        }
    };

    tracing::debug!(
        kind = V::KIND,
        value = %state.display_value(),
        ?change,
        history = state.history().len(),
        "evaluated transition"
    );

    Ok(Transition { state, change })
}
