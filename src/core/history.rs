//! Bounded history ledger.
//!
//! Provides an immutable, append-only log of past values with strict
//! oldest-first eviction, following functional programming principles.

use serde::{Deserialize, Serialize};

/// Ordered, bounded log of history entries, oldest first.
///
/// The ledger is immutable - `record` returns a new ledger with the entry
/// appended and the head trimmed to the cap. Eviction is purely positional:
/// when the ledger grows past its cap the oldest entries are dropped.
///
/// # Example
///
/// ```rust
/// use ratchet::core::HistoryLedger;
///
/// let ledger = HistoryLedger::new()
///     .record(35, 2)
///     .record(36, 2)
///     .record(38, 2);
///
/// assert_eq!(ledger.entries(), &[36, 38]);
/// assert_eq!(ledger.last(), Some(&38));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLedger<E> {
    entries: Vec<E>,
}

impl<E> Default for HistoryLedger<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> HistoryLedger<E> {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Rebuild a ledger from previously persisted entries, oldest first.
    pub fn from_entries(entries: Vec<E>) -> Self {
        Self { entries }
    }

    /// Get all entries in chronological order.
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<&E> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<E> {
        self.entries
    }
}

impl<E: Clone> HistoryLedger<E> {
    /// Append an entry, returning a new ledger holding at most `cap` entries.
    ///
    /// This is a pure function - the existing ledger is left untouched. A
    /// `cap` of zero always yields an empty ledger.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ratchet::core::HistoryLedger;
    ///
    /// let ledger = HistoryLedger::new().record("1.0.0", 10);
    /// let next = ledger.record("1.0.1", 10);
    ///
    /// assert_eq!(ledger.len(), 1); // Original unchanged
    /// assert_eq!(next.entries(), &["1.0.0", "1.0.1"]);
    ///
    /// assert!(HistoryLedger::new().record("1.0.0", 0).is_empty());
    /// ```
    pub fn record(&self, entry: E, cap: usize) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self::bounded(entries, cap)
    }

    /// Return a new ledger trimmed to at most `cap` entries, oldest dropped.
    pub fn truncate(&self, cap: usize) -> Self {
        Self::bounded(self.entries.clone(), cap)
    }

    fn bounded(mut entries: Vec<E>, cap: usize) -> Self {
        if entries.len() > cap {
            let excess = entries.len() - cap;
            entries.drain(..excess);
        }
        Self { entries }
    }
}

impl<'a, E> IntoIterator for &'a HistoryLedger<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
