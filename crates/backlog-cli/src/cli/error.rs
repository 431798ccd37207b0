use backlog_core::BacklogError;
use backlog_core::error::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BacklogError),
    #[error("Configuration error: {0}")]
    Storage(#[from] StorageError),
    #[error(
        "Backlog URL is not configured. Use 'backlog config set --url <url>', pass --url, or set BACKLOG_URL"
    )]
    MissingUrl,
    #[error("API key is not set. Pass --api-key or set BACKLOG_API_KEY")]
    MissingApiKey,
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Failed to write JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
