//! CLI error type.

use folio_client::ClientError;
use thiserror::Error;

/// Errors that end a CLI invocation with a non-zero exit code.
#[derive(Error, Debug)]
pub enum CliError {
    /// A gesture failed; the user has already been alerted.
    #[error("{0} failed")]
    Gesture(&'static str),

    /// A request outside the task list failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The task list could not be loaded.
    #[error("{0}")]
    Load(String),

    /// Terminal I/O failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
