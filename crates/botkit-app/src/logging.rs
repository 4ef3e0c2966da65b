// Rust guideline compliant 2026-10-18

//! Tracing setup for the bot process.

use crate::error::{AppError, Result};
use botkit_core::Config;
use std::fs::OpenOptions;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Installs the global JSON tracing subscriber described by `config`.
///
/// Logs go to `config.log_file` through a non-blocking appender when set, and
/// to stdout otherwise. If a global subscriber is already installed it is kept
/// and a warning is emitted through it.
///
/// # Arguments
///
/// * `config` - Loaded configuration
///
/// # Returns
///
/// The appender guard when this call installed a file subscriber. Keep it
/// alive for the lifetime of the process so buffered lines are flushed.
///
/// # Errors
///
/// Returns an error if the log level is unknown or the log file cannot be
/// opened.
pub fn init_tracing(config: &Config) -> Result<Option<WorkerGuard>> {
    let level = parse_log_level(&config.log_level)?;

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
            tracing::warn!(error = %err, path = %path.display(), "log file not attached");
            return Ok(None);
        }
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .json()
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        tracing::warn!(error = %err, "stdout subscriber not installed");
    }
    Ok(None)
}

fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(AppError::InvalidLogLevel(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
        assert!(matches!(
            parse_log_level("loud"),
            Err(AppError::InvalidLogLevel(level)) if level == "loud"
        ));
    }
}
