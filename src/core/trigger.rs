//! Trigger maps and the comparator that decides whether they changed.
//!
//! A trigger map is a set of named string values. A version advances only
//! when the map observed now differs from the map observed at the previous
//! evaluation. Comparison is a pure predicate with no side effects.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Set of named string values whose change advances a version.
///
/// Key order is irrelevant and values are compared verbatim. An absent map
/// and an empty map are the same value; in JSON a `null` map decodes as
/// empty.
///
/// # Example
///
/// ```rust
/// use ratchet::core::Triggers;
///
/// let mut previous = Triggers::new();
/// previous.insert("hash", "potatoes");
///
/// let mut current = Triggers::new();
/// current.insert("hash", "eggs");
///
/// assert!(!previous.matches(&current));
/// assert!(Triggers::new().matches(&Triggers::default()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Triggers(BTreeMap<String, String>);

impl<'de> Deserialize<'de> for Triggers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Binary formats carry no null marker
        if deserializer.is_human_readable() {
            Option::<BTreeMap<String, String>>::deserialize(deserializer)
                .map(|map| Self(map.unwrap_or_default()))
        } else {
            BTreeMap::deserialize(deserializer).map(Self)
        }
    }
}

impl Triggers {
    /// Create an empty trigger map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a trigger, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate triggers in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Check whether two trigger maps hold exactly the same key/value pairs.
    ///
    /// This is a pure function: no normalization, no partial matching.
    pub fn matches(&self, other: &Triggers) -> bool {
        self.0 == other.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Triggers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for Triggers {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl From<HashMap<String, String>> for Triggers {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

/// Decide whether a trigger group changed between two evaluations.
///
/// Either side may be absent; absent is treated as an empty map.
///
/// # Example
///
/// ```rust
/// use ratchet::core::{triggers_changed, Triggers};
///
/// let eggs = Triggers::new().with("hash", "eggs");
///
/// assert!(triggers_changed(None, Some(&eggs)));
/// assert!(!triggers_changed(Some(&eggs), Some(&eggs.clone())));
/// assert!(!triggers_changed(None, Some(&Triggers::new())));
/// ```
pub fn triggers_changed(previous: Option<&Triggers>, current: Option<&Triggers>) -> bool {
    let empty = Triggers::new();
    !previous
        .unwrap_or(&empty)
        .matches(current.unwrap_or(&empty))
}
