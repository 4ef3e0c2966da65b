// Rust guideline compliant 2026-10-18

//! Error types for the Botkit core library.

use thiserror::Error;

/// Result type alias for Botkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Botkit operations.
///
/// The formatting and validation helpers never return these; they are
/// produced by strict code parsing and configuration loading.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value or file.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Language code outside the supported set.
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    /// Citizenship code outside the supported set.
    #[error("Unknown citizenship code: {0}")]
    UnknownCitizenship(String),
}
