//! Shared test fixtures for packsmith crates.
//!
//! This crate provides worked packing scenarios with known optimal
//! selections. It depends only on `packsmith-core` so the parser and
//! solver crates can consume it as a dev-dependency without cycles.
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! packsmith-test = { workspace = true }
//! ```

pub mod scenarios;

pub use scenarios::Scenario;

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a `tracing` subscriber honoring `RUST_LOG` for test output.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
