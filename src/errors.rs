use thiserror::Error;

use crate::decoder::DecodeError;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// CLI input problems (missing payload, wrong format for a command)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialisation
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialisation
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// Background task failure
    #[error("Task error: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
