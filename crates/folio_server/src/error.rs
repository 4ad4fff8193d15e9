//! Error types for the to-do server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_protocol::ErrorResponse;
use thiserror::Error;
use tracing::{error, warn};

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors that can occur in the to-do server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Malformed or missing input.
    #[error("{0}")]
    Validation(String),

    /// No task with the requested id.
    #[error("{0}")]
    NotFound(String),

    /// The path exists but does not accept the request method.
    #[error("{0}")]
    MethodNotAllowed(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),

    /// I/O error (binding, serving).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Creates a not-found error for a task id as it appeared in the request.
    pub fn task_not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("task {id} was not found"))
    }

    /// Returns true if this is a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ServerError::Validation(_) | ServerError::NotFound(_) | ServerError::MethodNotAllowed(_)
        )
    }

    /// Returns true if this is a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        matches!(self, ServerError::Internal(_) | ServerError::Io(_))
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Validation(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::Internal(_) | ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_server_error() {
            error!(%status, "request failed: {}", self);
        } else {
            warn!(%status, "request rejected: {}", self);
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
