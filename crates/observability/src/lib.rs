//! Tracing/logging setup shared by host applications and the test suite.
//!
//! The ledger crates emit structured `tracing` events but never install a
//! subscriber themselves; whoever embeds the ledger calls [`init`] once at
//! startup.

use tracing_subscriber::EnvFilter;

/// Install the process-wide tracing subscriber.
///
/// JSON-formatted events filtered via `RUST_LOG` (default `info`). Safe to
/// call multiple times; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
