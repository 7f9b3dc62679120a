//! Counter Lifecycle
//!
//! This example walks a build counter through a host's evaluations.
//!
//! Key concepts:
//! - Counters advance by `step` only when a trigger value changes
//! - Unchanged triggers leave the value and history untouched
//! - Changing the initial value replaces the resource with a new id
//! - Checkpoints carry the persisted state between evaluations
//!
//! Run with: RUST_LOG=debug cargo run --example counter_lifecycle

use ratchet::builder::CounterConfigBuilder;
use ratchet::checkpoint::Checkpoint;
use ratchet::engine::{CounterConfig, CounterState};
use ratchet::resource::{apply, Resource};
use tracing_subscriber::EnvFilter;

fn config(hash: &str, step: i64, initial_value: i64) -> CounterConfig {
    CounterConfigBuilder::new()
        .trigger("hash", hash)
        .step(step)
        .initial_value(initial_value)
        .max_history(3)
        .build()
}

fn show(label: &str, resource: &Resource<CounterState>) {
    let history: Vec<i64> = resource.state.history.iter().map(|e| e.value).collect();
    println!(
        "{label:<24} id={} value={} history={history:?}",
        &resource.id[..8],
        resource.value()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Counter Lifecycle Example ===\n");

    let mut resource = apply::<CounterState>(None, Some(&config("potatoes", 1, 35)))?
        .ok_or("create produced nothing")?;
    show("created", &resource);

    for (label, hash, step) in [
        ("same hash", "potatoes", 1),
        ("new hash", "eggs", 1),
        ("step of two", "bacon", 2),
        ("another hash", "toast", 2),
    ] {
        resource = apply(Some(&resource), Some(&config(hash, step, 35)))?
            .ok_or("update produced nothing")?;
        show(label, &resource);
    }

    println!("\nPersisting through a checkpoint...");
    let json = Checkpoint::capture(&resource).to_json()?;
    let resource = Checkpoint::<CounterState>::from_json(&json)?.restore()?;
    show("restored", &resource);

    let replaced = apply(Some(&resource), Some(&config("toast", 2, 100)))?
        .ok_or("replace produced nothing")?;
    show("initial value changed", &replaced);

    let gone = apply(Some(&replaced), None)?;
    println!("\nDeleted: {}", gone.is_none());

    Ok(())
}
