//! Error types for the to-do client.

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors a client can observe.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The server rejected the input (HTTP 400).
    #[error("validation error: {0}")]
    Validation(String),

    /// The task does not exist (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Transport failure or an unexpected HTTP status.
    #[error("network error: {message}")]
    Network {
        /// Observed HTTP status, if a response arrived at all.
        status: Option<u16>,
        /// Error message.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("protocol error: {0}")]
    Protocol(String),
}

impl ClientError {
    /// Creates a network error for a request that never got a response.
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Network {
            status: None,
            message: message.into(),
        }
    }

    /// Creates a network error for an unexpected HTTP status.
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        Self::Network {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Returns true if the server could not be reached at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ClientError::Network { status: None, .. })
    }
}
