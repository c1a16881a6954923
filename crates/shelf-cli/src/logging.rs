//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with command output. The filter is
//! taken from `SHELF_LOG`, then `RUST_LOG`, then the `-v` count.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = std::env::var(LOG_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Level used when no filter is set in the environment.
///
/// Load warnings are already rendered by the CLI, so the quiet default is
/// `error`.
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
