//! Validation-based enforcement of configuration preconditions.
//!
//! This module checks a desired configuration before any transition runs,
//! using Stillwater's `Validation` type to accumulate ALL violations instead
//! of fail-fast behavior.
//!
//! Two kinds of violation exist:
//! - a negative `max_history`, which is rejected outright
//! - a changed initial value, which can only be applied by replacing the entity
//!
//! # Example
//!
//! ```rust
//! use ratchet::builder::CounterConfigBuilder;
//! use ratchet::enforcement::{enforce_config, ViolationError};
//!
//! let config = CounterConfigBuilder::new().max_history(-1).build();
//!
//! assert_eq!(
//!     enforce_config(&config),
//!     Err(vec![ViolationError::NegativeMaxHistory { value: -1 }])
//! );
//! ```

pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use rules::{enforce_config, enforce_immutable};
pub use violations::ViolationError;
