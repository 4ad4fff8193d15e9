//! Request handlers for the to-do endpoints.
//!
//! The handler works on already-extracted request parts so it can be
//! exercised without an HTTP stack; `routes` adapts it to axum.

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::store::TaskStore;
use chrono::{SecondsFormat, Utc};
use folio_protocol::{
    GreetResponse, ResponseStatus, ServerStatusResponse, Task, TaskId, TaskListResponse,
};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Context for request handling.
pub struct HandlerContext {
    /// Server configuration.
    pub config: ServerConfig,
    /// The one task store of this process.
    store: Mutex<TaskStore>,
}

impl HandlerContext {
    /// Creates a new handler context around an existing store.
    pub fn new(config: ServerConfig, store: TaskStore) -> Self {
        Self {
            config,
            store: Mutex::new(store),
        }
    }

    /// Creates a context whose store is built from `config.seed`.
    pub fn from_config(config: ServerConfig) -> ServerResult<Self> {
        let store = TaskStore::with_seed(config.seed.clone())?;
        Ok(Self::new(config, store))
    }

    /// Returns a copy of the current collection.
    pub fn snapshot(&self) -> Vec<Task> {
        self.store.lock().list().to_vec()
    }
}

/// Handler for to-do requests.
pub struct RequestHandler {
    context: Arc<HandlerContext>,
}

impl RequestHandler {
    /// Creates a new request handler.
    pub fn new(context: Arc<HandlerContext>) -> Self {
        Self { context }
    }

    /// Returns the shared context.
    pub fn context(&self) -> &Arc<HandlerContext> {
        &self.context
    }

    /// Handles `GET /api/todos`.
    pub fn list(&self) -> TaskListResponse {
        let tasks = self.context.snapshot();
        debug!(count = tasks.len(), "listing tasks");
        TaskListResponse::new(tasks)
    }

    /// Handles `POST /api/todos`.
    ///
    /// `body` is `None` when the request had no usable JSON body.
    pub fn create(&self, body: Option<&Value>) -> ServerResult<Task> {
        let text = body.and_then(|b| b.get("text")).and_then(Value::as_str);
        let task = self.context.store.lock().create(text)?;
        info!(id = task.id, "task created");
        Ok(task)
    }

    /// Handles `PATCH /api/todos/{id}`.
    pub fn update(&self, raw_id: &str, body: Option<&Value>) -> ServerResult<Task> {
        let id = parse_id(raw_id).ok_or_else(|| ServerError::task_not_found(raw_id))?;
        let completed = body
            .and_then(|b| b.get("completed"))
            .and_then(Value::as_bool);

        let task = self.context.store.lock().update(id, completed)?;
        info!(id, completed = task.completed, "task updated");
        Ok(task)
    }

    /// Handles `DELETE /api/todos/{id}`.
    pub fn delete(&self, raw_id: &str) -> ServerResult<()> {
        let id = parse_id(raw_id).ok_or_else(|| ServerError::task_not_found(raw_id))?;
        self.context.store.lock().delete(id)?;
        info!(id, "task deleted");
        Ok(())
    }

    /// Handles `GET /api/status`.
    pub fn status(&self) -> ServerStatusResponse {
        ServerStatusResponse {
            status: ResponseStatus::Ok,
            server_time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            message: "The to-do API is up and running.".into(),
        }
    }

    /// Handles `GET /api/greet?name=`.
    pub fn greet(&self, name: Option<&str>) -> GreetResponse {
        let name = name.filter(|n| !n.is_empty());
        let greeting = match name {
            Some(name) => format!("Hello, {name}! Greetings from the server."),
            None => "No name was provided.".to_string(),
        };

        GreetResponse {
            status: ResponseStatus::Ok,
            greeting,
            received_name: name.unwrap_or("none").to_string(),
        }
    }
}

/// Parses a path id. Anything that is not a positive integer names no task.
fn parse_id(raw: &str) -> Option<TaskId> {
    raw.parse::<TaskId>().ok().filter(|id| *id > 0)
}
