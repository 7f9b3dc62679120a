//! Core versioning types and logic.
//!
//! This module contains the pure functional core:
//! - Trigger maps and the comparator deciding whether they changed
//! - The bounded, oldest-evicted history ledger
//! - The `Versioned` trait every engine implements
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod history;
mod trigger;
mod versioned;

pub use history::HistoryLedger;
pub use trigger::{triggers_changed, Triggers};
pub use versioned::{Change, InitialValue, Level, VersionConfig, Versioned};
