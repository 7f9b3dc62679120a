//! Host-side resource lifecycle.
//!
//! The engines never generate identifiers. This layer pairs each persisted
//! state with an opaque id, assigns a fresh one whenever an entity is created
//! or replaced, and maps the host's create/read/update/delete callbacks onto
//! the pure engine functions.

use crate::core::{Change, Versioned};
use crate::engine::{plan, transition, Plan, TransitionError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted entity: an opaque id plus its engine state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Resource<V: Versioned> {
    pub id: String,
    pub state: V,
}

impl<V: Versioned> Resource<V> {
    /// Create a new entity from its desired configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use ratchet::builder::SemanticConfigBuilder;
    /// use ratchet::engine::SemanticState;
    /// use ratchet::resource::Resource;
    ///
    /// let config = SemanticConfigBuilder::new().build();
    /// let resource = Resource::<SemanticState>::create(&config).unwrap();
    ///
    /// assert_eq!(resource.value(), "1.0.0");
    /// assert!(!resource.id.is_empty());
    /// ```
    pub fn create(config: &V::Config) -> Result<Self, TransitionError> {
        let created = transition::<V>(None, config)?;
        Ok(Self::assign(created.state))
    }

    /// Read is a pure pass-through of the persisted state.
    pub fn read(&self) -> Self {
        self.clone()
    }

    /// Evaluate an update in place, keeping the id.
    ///
    /// A changed initial value is refused; use [`apply`] to have it routed
    /// to a replacement.
    pub fn update(&self, config: &V::Config) -> Result<(Self, Change), TransitionError> {
        let next = transition(Some(&self.state), config)?;
        let resource = Self {
            id: self.id.clone(),
            state: next.state,
        };
        Ok((resource, next.change))
    }

    /// Delete has no side effects beyond dropping the persisted state.
    pub fn delete(self) {
        tracing::info!(kind = V::KIND, id = %self.id, "deleted");
    }

    /// Externally visible value.
    pub fn value(&self) -> String {
        self.state.display_value()
    }

    fn assign(state: V) -> Self {
        let id = Uuid::new_v4().to_string();
        tracing::info!(kind = V::KIND, id = %id, value = %state.display_value(), "created");
        Self { id, state }
    }
}

/// Drive one host evaluation end to end.
///
/// Returns the resource to persist, or `None` when the entity is gone.
/// Creation and replacement assign a new id; updates keep the old one.
///
/// # Example
///
/// ```
/// use ratchet::builder::CounterConfigBuilder;
/// use ratchet::engine::CounterState;
/// use ratchet::resource::apply;
///
/// let config = CounterConfigBuilder::new().initial_value(7).build();
/// let created = apply::<CounterState>(None, Some(&config)).unwrap().unwrap();
/// assert_eq!(created.state.value, 7);
///
/// let replaced = apply(
///     Some(&created),
///     Some(&CounterConfigBuilder::new().initial_value(9).build()),
/// )
/// .unwrap()
/// .unwrap();
/// assert_ne!(replaced.id, created.id);
///
/// assert!(apply(Some(&replaced), None).unwrap().is_none());
/// ```
pub fn apply<V: Versioned>(
    previous: Option<&Resource<V>>,
    desired: Option<&V::Config>,
) -> Result<Option<Resource<V>>, TransitionError> {
    let Some(resource) = previous else {
        // Nothing persisted yet: either a creation or nothing at all
        let planned = plan::<V>(None, desired)?;
        return Ok(planned.into_state().map(Resource::assign));
    };

    let next = match plan(Some(&resource.state), desired)? {
        Plan::Delete => {
            resource.clone().delete();
            None
        }
        Plan::Create(state) | Plan::Replace(state) => {
            resource.clone().delete();
            Some(Resource::assign(state))
        }
        Plan::Update(next) => Some(Resource {
            id: resource.id.clone(),
            state: next.state,
        }),
    };

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{CounterConfigBuilder, SemanticConfigBuilder};
    use crate::core::Level;
    use crate::engine::{CounterState, SemanticState};
    use crate::triggers;

    #[test]
    fn create_assigns_uuid() {
        let config = CounterConfigBuilder::new().build();
        let resource = Resource::<CounterState>::create(&config).unwrap();

        assert!(Uuid::parse_str(&resource.id).is_ok());
    }

    #[test]
    fn distinct_creations_get_distinct_ids() {
        let config = CounterConfigBuilder::new().build();
        let a = Resource::<CounterState>::create(&config).unwrap();
        let b = Resource::<CounterState>::create(&config).unwrap();

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn read_is_idempotent() {
        let config = SemanticConfigBuilder::new()
            .patch_triggers(triggers! { "hash" => "potatoes" })
            .build();
        let resource = Resource::<SemanticState>::create(&config).unwrap();

        let first = resource.read();
        let second = first.read().read();

        assert_eq!(first, resource);
        assert_eq!(second, resource);
    }

    #[test]
    fn update_keeps_id() {
        let config = CounterConfigBuilder::new().build();
        let resource = Resource::<CounterState>::create(&config).unwrap();

        let config = CounterConfigBuilder::new()
            .triggers(triggers! { "a" => "1" })
            .build();
        let (updated, change) = resource.update(&config).unwrap();

        assert_eq!(updated.id, resource.id);
        assert_eq!(change, Change::Incremented(Level::Counter));
        assert_eq!(updated.value(), "1");
    }

    #[test]
    fn update_refuses_changed_initial_value() {
        let config = CounterConfigBuilder::new().build();
        let resource = Resource::<CounterState>::create(&config).unwrap();

        let config = CounterConfigBuilder::new().initial_value(5).build();
        assert!(matches!(
            resource.update(&config),
            Err(TransitionError::ReplaceRequired(_))
        ));
    }

    #[test]
    fn apply_update_keeps_id() {
        let config = CounterConfigBuilder::new().build();
        let created = apply::<CounterState>(None, Some(&config)).unwrap().unwrap();

        let config = CounterConfigBuilder::new()
            .triggers(triggers! { "a" => "1" })
            .build();
        let updated = apply(Some(&created), Some(&config)).unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.state.value, 1);
    }

    #[test]
    fn apply_assigns_ids_only_on_create_and_replace() {
        let config = SemanticConfigBuilder::new().build();
        let created = apply::<SemanticState>(None, Some(&config)).unwrap().unwrap();
        assert!(Uuid::parse_str(&created.id).is_ok());

        let config = SemanticConfigBuilder::new()
            .patch_triggers(triggers! { "hash" => "eggs" })
            .build();
        let updated = apply(Some(&created), Some(&config)).unwrap().unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.value(), "1.0.1");

        let config = SemanticConfigBuilder::new()
            .minor_initial_value(4)
            .patch_triggers(triggers! { "hash" => "eggs" })
            .build();
        let replaced = apply(Some(&updated), Some(&config)).unwrap().unwrap();
        assert_ne!(replaced.id, updated.id);
        assert_eq!(replaced.value(), "1.4.0");
        assert_eq!(replaced.state.history.len(), 1);

        assert!(apply(Some(&replaced), None).unwrap().is_none());
    }

    #[test]
    fn apply_without_anything_is_a_no_op() {
        assert!(apply::<CounterState>(None, None).unwrap().is_none());
    }
}
