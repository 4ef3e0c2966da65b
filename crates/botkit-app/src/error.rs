// Rust guideline compliant 2026-10-18

//! Error handling for Botkit application services.

use botkit_core::Error as CoreError;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid log level provided.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
