//! Error types shared across the crate.

use thiserror::Error;

use crate::config::ConfigError;

const CONNECTION_MESSAGE: &str = "connection error: could not reach server";
const INTENTIONAL_MESSAGE: &str = "intentional error for demonstrating error handling";

/// A failed fetch. There is only one kind; the message is shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The simulated server could not be reached.
    pub fn connection() -> Self {
        Self::new(CONNECTION_MESSAGE)
    }

    /// Failure produced on purpose by the error-simulation path.
    pub fn intentional() -> Self {
        Self::new(INTENTIONAL_MESSAGE)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors that stop the application before or while the UI runs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Failed to open log file '{path}': {source}")]
    LogFile {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}
