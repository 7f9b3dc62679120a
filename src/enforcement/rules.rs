//! Enforcement rules for desired configurations using Validation.

use crate::core::{InitialValue, VersionConfig, Versioned};
use crate::enforcement::violations::ViolationError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single check.
pub type Check = Validation<(), NonEmptyVec<ViolationError>>;

/// Reject negative history caps.
pub fn check_max_history(max_history: i64) -> Check {
    if max_history < 0 {
        Validation::fail(ViolationError::NegativeMaxHistory { value: max_history })
    } else {
        Validation::success(())
    }
}

/// Reject an initial value that differs from the one the entity was created with.
pub fn check_initial_value(previous: InitialValue, desired: InitialValue) -> Check {
    if previous.value != desired.value {
        Validation::fail(ViolationError::ImmutableFieldChanged {
            field: desired.field,
            previous: previous.value,
            desired: desired.value,
        })
    } else {
        Validation::success(())
    }
}

/// Validate a desired configuration, returning the usable history cap.
///
/// Every violation is collected, not just the first.
pub fn enforce_config<C: VersionConfig>(config: &C) -> Result<usize, Vec<ViolationError>> {
    let max_history = config.max_history();
    collect(vec![check_max_history(max_history)])?;
    Ok(usize::try_from(max_history).unwrap_or(usize::MAX))
}

/// Check the desired initial values against those `state` was created with.
///
/// Fields are paired by name; a field missing on either side is not compared.
pub fn enforce_immutable<V: Versioned>(
    state: &V,
    config: &V::Config,
) -> Result<(), Vec<ViolationError>> {
    let previous = state.initial_values();
    let checks = config
        .initial_values()
        .into_iter()
        .filter_map(|desired| {
            previous
                .iter()
                .find(|p| p.field == desired.field)
                .map(|p| check_initial_value(*p, desired))
        })
        .collect();
    collect(checks)
}

// Accumulate ALL failures using all_vec
fn collect(checks: Vec<Check>) -> Result<(), Vec<ViolationError>> {
    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}
