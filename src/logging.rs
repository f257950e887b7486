/// Logging setup.
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_LOG_FILTER: &str = "warn";
const DEBUG_LOG_FILTER: &str = "debug";

/// Pick the filter directive used when `RUST_LOG` is unset or invalid.
#[must_use]
pub fn default_filter(debug: bool) -> &'static str {
    if debug { DEBUG_LOG_FILTER } else { DEFAULT_LOG_FILTER }
}

/// Initializes the global `tracing` subscriber writing to stderr.
///
/// The filter is read from `RUST_LOG`; if that is unset or invalid it
/// defaults to `warn`, or `debug` when `--debug` was given.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn setup(debug: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
