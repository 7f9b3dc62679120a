//! Semantic Release
//!
//! This example derives release versions from three trigger groups.
//!
//! Key concepts:
//! - Major, minor and patch groups compared in priority order
//! - The highest changed group wins and lower components reset
//! - Every history entry snapshots all three groups
//!
//! Run with: RUST_LOG=debug cargo run --example semantic_release

use ratchet::builder::SemanticConfigBuilder;
use ratchet::engine::{transition, SemanticConfig, SemanticState};
use ratchet::{triggers, Triggers};
use tracing_subscriber::EnvFilter;

fn release(api: &str, feature: &str, commit: &str) -> SemanticConfig {
    let major = if api.is_empty() {
        Triggers::new()
    } else {
        triggers! { "api" => api }
    };

    SemanticConfigBuilder::new()
        .major_triggers(major)
        .minor_triggers(triggers! { "feature" => feature })
        .patch_triggers(triggers! { "commit" => commit })
        .build()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Semantic Release Example ===\n");

    let mut state = transition::<SemanticState>(None, &release("", "login", "a1f3"))?.state;
    println!("{:<28} -> {}", "first release", state.value());

    let steps = [
        ("bug fix", release("", "login", "b7c2")),
        ("rebuild, nothing changed", release("", "login", "b7c2")),
        ("new feature plus fix", release("", "search", "c9d4")),
        ("breaking api change", release("v2", "filters", "d0e5")),
        ("follow-up fix", release("v2", "filters", "e3f6")),
    ];

    for (label, config) in &steps {
        let next = transition(Some(&state), config)?;
        println!("{label:<28} -> {} ({:?})", next.state.value(), next.change);
        state = next.state;
    }

    println!("\nHistory:");
    for entry in &state.history {
        println!(
            "  {:<8} feature={:<8} commit={}",
            entry.value,
            entry.minor_triggers.get("feature").unwrap_or("-"),
            entry.patch_triggers.get("commit").unwrap_or("-"),
        );
    }

    Ok(())
}
