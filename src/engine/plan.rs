//! Lifecycle routing for a single evaluation.
//!
//! The host asks once per evaluation what should happen to an entity given
//! its persisted state (if any) and its desired configuration (if any).

use crate::core::Versioned;
use crate::enforcement::{enforce_config, enforce_immutable};
use crate::engine::transition::{transition, Transition, TransitionError};

/// What the host should do with an entity
#[derive(Clone, Debug, PartialEq)]
pub enum Plan<V: Versioned> {
    /// No persisted state yet; store this new state
    Create(V),

    /// Persist the advanced (or passed-through) state
    Update(Transition<V>),

    /// An initial value changed: destroy the entity and store this fresh state
    Replace(V),

    /// Desired configuration is gone; remove the persisted state
    Delete,
}

impl<V: Versioned> Plan<V> {
    /// State the host should persist, if any.
    pub fn state(&self) -> Option<&V> {
        match self {
            Self::Create(state) | Self::Replace(state) => Some(state),
            Self::Update(transition) => Some(&transition.state),
            Self::Delete => None,
        }
    }

    pub fn into_state(self) -> Option<V> {
        match self {
            Self::Create(state) | Self::Replace(state) => Some(state),
            Self::Update(transition) => Some(transition.state),
            Self::Delete => None,
        }
    }
}

/// Decide between create, update, replace and delete.
///
/// A missing desired configuration means the entity is being destroyed;
/// nothing is computed. A changed initial value is routed to a replacement
/// seeded from the desired configuration instead of an in-place update.
///
/// # Example
///
/// ```rust
/// use ratchet::builder::CounterConfigBuilder;
/// use ratchet::engine::{plan, CounterState, Plan};
///
/// let config = CounterConfigBuilder::new().initial_value(10).build();
/// let Plan::Create(state) = plan::<CounterState>(None, Some(&config)).unwrap() else {
///     panic!("expected creation");
/// };
///
/// let config = CounterConfigBuilder::new().initial_value(20).build();
/// let replaced = plan(Some(&state), Some(&config)).unwrap();
/// assert!(matches!(replaced, Plan::Replace(ref s) if s.value == 20));
///
/// assert_eq!(plan(Some(&state), None).unwrap(), Plan::Delete);
/// ```
pub fn plan<V: Versioned>(
    previous: Option<&V>,
    desired: Option<&V::Config>,
) -> Result<Plan<V>, TransitionError> {
    let Some(config) = desired else {
        return Ok(Plan::Delete);
    };

    let Some(state) = previous else {
        return transition::<V>(None, config).map(|t| Plan::Create(t.state));
    };

    if let Err(violations) = enforce_immutable(state, config) {
        let cap = enforce_config(config).map_err(TransitionError::InvalidConfig)?;
        tracing::info!(
            kind = V::KIND,
            ?violations,
            "initial value changed, planning replacement"
        );
        return Ok(Plan::Replace(V::create(config, cap)));
    }

    transition(Some(state), config).map(Plan::Update)
}
