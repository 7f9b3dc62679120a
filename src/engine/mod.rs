//! Version engines and the functions that drive them.
//!
//! This module is the layer the host talks to: it validates the desired
//! configuration, routes each evaluation to creation, update, replacement
//! or deletion, and runs the engine's pure transition.
//!
//! # Key Concepts
//!
//! - **Counter**: one value advanced by a configurable step
//! - **Semantic version**: `major.minor.patch` with cascading resets
//! - **Transition**: pure `(previous, desired) -> next` evaluation
//! - **Plan**: lifecycle decision the host acts on

mod counter;
mod plan;
mod semantic;
mod transition;

pub use counter::{CounterConfig, CounterEntry, CounterState};
pub use plan::{plan, Plan};
pub use semantic::{Component, SemanticConfig, SemanticEntry, SemanticState, SemanticVersion};
pub use transition::{transition, Transition, TransitionError};
