//! Logging initialization for the CLI.
//!
//! Structured JSON events go to stderr: stdout is reserved for the rendered
//! shell commands or JSON payload, which callers typically `eval` or pipe.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the global tracing subscriber.
///
/// Quiet mode (the default) only surfaces errors; `--verbose` raises the
/// default to `info`. `RUST_LOG` overrides both.
pub fn init_logging(quiet: bool) {
    let default_directive = if quiet { "error" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false);

    // try_init so repeated initialization (e.g. in tests) is a no-op.
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
