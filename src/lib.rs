//! Ratchet: trigger-driven counters and semantic versions
//!
//! Ratchet keeps version identifiers that only move when named trigger
//! values change between evaluations, and remembers a bounded history of
//! every value they have held. It follows the "pure core, imperative shell"
//! philosophy: every evaluation is a pure function of the previously
//! persisted state and the newly desired configuration. Storage, scheduling
//! and user-facing configuration belong to the host.
//!
//! # Core Concepts
//!
//! - **Triggers**: named string values; a change advances a version
//! - **Engines**: a plain counter, and a `major.minor.patch` version with
//!   cascading resets
//! - **History ledger**: bounded, oldest-evicted log of past values
//! - **Plan**: create, update, replace or delete, decided per evaluation
//!
//! # Example
//!
//! ```rust
//! use ratchet::builder::SemanticConfigBuilder;
//! use ratchet::engine::{transition, SemanticState};
//! use ratchet::triggers;
//!
//! let config = SemanticConfigBuilder::new()
//!     .patch_triggers(triggers! { "hash" => "potatoes" })
//!     .build();
//! let release = transition::<SemanticState>(None, &config).unwrap();
//! assert_eq!(release.state.value(), "1.0.0");
//!
//! let config = SemanticConfigBuilder::new()
//!     .minor_triggers(triggers! { "feature" => "search" })
//!     .patch_triggers(triggers! { "hash" => "eggs" })
//!     .build();
//! let release = transition(Some(&release.state), &config).unwrap();
//!
//! // minor wins over patch; patch resets
//! assert_eq!(release.state.value(), "1.1.0");
//! assert_eq!(release.state.history.len(), 2);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod enforcement;
pub mod engine;
pub mod resource;

// Re-export commonly used types
pub use crate::core::{Change, HistoryLedger, Level, Triggers, Versioned};
pub use crate::engine::{plan, transition, CounterState, Plan, SemanticState, TransitionError};
pub use crate::resource::Resource;
