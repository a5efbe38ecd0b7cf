//! Diagnostic logging
//!
//! Installs a compact `tracing` subscriber writing to stderr, so command
//! output on stdout stays clean. `RUST_LOG` takes precedence over the
//! configured level.

use tracing_subscriber::EnvFilter;

use crate::error::{VacationError, VacationResult};

/// Install the global subscriber
pub fn init(log_level: &str) -> VacationResult<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level).map_err(|e| {
            VacationError::Config(format!("Invalid log level '{}': {}", log_level, e))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|e| VacationError::Config(format!("Failed to initialise logging: {}", e)))
}
