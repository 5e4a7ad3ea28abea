//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use aura_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Name of the environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "AURA_LOG";

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `AURA_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Returns `false` if a global
/// subscriber was already installed.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init()
        .is_ok()
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    let filter = EnvFilter::new(filter);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}

/// Initialize tracing from the observability config section.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    if config.json {
        return init_tracing_with_filter(&config.log_level);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_target(true)
        .try_init()
        .is_ok()
}
