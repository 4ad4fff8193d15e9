//! Request bodies and response envelopes.

use crate::task::Task;
use serde::{Deserialize, Serialize};

/// The `status` field carried by every response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStatus {
    /// Task endpoints succeeded.
    #[serde(rename = "success")]
    Success,
    /// Any endpoint failed.
    #[serde(rename = "error")]
    Error,
    /// Auxiliary endpoints (status, greet) succeeded.
    #[serde(rename = "OK")]
    Ok,
}

/// Body of `POST /api/todos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    /// Description of the new task.
    pub text: String,
}

impl CreateTaskRequest {
    /// Creates a new create request.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Body of `PATCH /api/todos/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    /// New completed flag.
    pub completed: bool,
}

/// Response of `GET /api/todos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListResponse {
    /// Always `success`.
    pub status: ResponseStatus,
    /// Number of tasks in `data`.
    pub count: usize,
    /// All tasks in insertion order.
    pub data: Vec<Task>,
}

impl TaskListResponse {
    /// Wraps a task list.
    pub fn new(data: Vec<Task>) -> Self {
        Self {
            status: ResponseStatus::Success,
            count: data.len(),
            data,
        }
    }
}

/// Response carrying a single task (create, update).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Always `success`.
    pub status: ResponseStatus,
    /// The created or updated task.
    pub data: Task,
}

impl TaskResponse {
    /// Wraps a task.
    pub fn new(data: Task) -> Self {
        Self {
            status: ResponseStatus::Success,
            data,
        }
    }
}

/// Error envelope returned with every 4xx/5xx status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `error`.
    pub status: ResponseStatus,
    /// Human-readable reason.
    pub message: String,
}

impl ErrorResponse {
    /// Creates an error envelope.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
        }
    }
}

/// Response of `GET /api/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatusResponse {
    /// Always `OK`.
    pub status: ResponseStatus,
    /// Server clock in RFC 3339 (UTC).
    pub server_time: String,
    /// Free-form message.
    pub message: String,
}

/// Response of `GET /api/greet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetResponse {
    /// Always `OK`.
    pub status: ResponseStatus,
    /// Greeting text.
    pub greeting: String,
    /// The `name` query parameter, or `none`.
    pub received_name: String,
}
