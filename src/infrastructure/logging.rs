//! Logging configuration and initialization.
//!
//! The terminal UI owns stdout and stderr, so interactive sessions only log
//! when a log file is configured. Batch mode logs to stderr.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::application::AppConfig;

/// Environment variable that overrides the verbosity-derived filter.
pub const LOG_ENV_VAR: &str = "TCALC_LOG";

/// Builds the filter for `config`, preferring `TCALC_LOG` when set.
pub fn log_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(config.log_level()))
}

/// Initialize tracing for the application.
pub fn init_logging(config: &AppConfig) -> io::Result<()> {
    let filter = log_filter(config);

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_target(config.verbose >= 2)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if config.batch => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(config.verbose >= 2)
                .with_writer(io::stderr)
                .init();
        }
        None => return Ok(()),
    }

    debug!(verbose = config.verbose, "logging initialized");
    Ok(())
}
