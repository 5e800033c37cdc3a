//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate for the whole
//! process.
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable, falling back to the
//!   directive passed by the caller
//! - **Compact format** that shows spans inline (e.g. `add_pancake:`), without module paths
//!
//! ```bash
//! # Default directive from configuration
//! cargo run
//!
//! # Show full payloads and journal records
//! RUST_LOG=debug cargo run
//!
//! # Lock acquisition only
//! RUST_LOG=entity_framework::locks=trace cargo run
//! ```
//!
//! Lifecycle operations log one `info` line per success with structured ids, a `warn` line per
//! rejected call, and the full payload at `debug`.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
