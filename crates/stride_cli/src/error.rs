//! Error types for the command-line front end.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("activity error: {0}")]
    Activity(#[from] stride_core::ActivityError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

pub type CliResult<T> = Result<T, CliError>;
