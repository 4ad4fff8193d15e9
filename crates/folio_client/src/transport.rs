//! Transport layer abstraction for to-do operations.

use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use folio_protocol::{Task, TaskId};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// A transport carries store operations to the server.
///
/// This trait abstracts the network layer, allowing for different
/// implementations (HTTP, in-memory mock for testing, etc.). Each call is one
/// request-response round trip.
#[async_trait]
pub trait TodoTransport: Send + Sync {
    /// Fetches the whole collection.
    async fn list(&self) -> ClientResult<Vec<Task>>;

    /// Creates a task.
    async fn create(&self, text: &str) -> ClientResult<Task>;

    /// Sets the completed flag of a task.
    async fn update(&self, id: TaskId, completed: bool) -> ClientResult<Task>;

    /// Deletes a task.
    async fn delete(&self, id: TaskId) -> ClientResult<()>;
}

/// A request recorded by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockRequest {
    /// `GET /api/todos`.
    List,
    /// `POST /api/todos`.
    Create(String),
    /// `PATCH /api/todos/{id}`.
    Update(TaskId, bool),
    /// `DELETE /api/todos/{id}`.
    Delete(TaskId),
}

/// An in-memory transport with server semantics, for testing.
#[derive(Debug)]
pub struct MockTransport {
    connected: AtomicBool,
    state: Mutex<MockState>,
}

#[derive(Debug)]
struct MockState {
    tasks: Vec<Task>,
    next_id: TaskId,
    requests: Vec<MockRequest>,
    fail_next: Option<ClientError>,
    fail_lists: Option<ClientError>,
}

impl MockTransport {
    /// Creates a new mock transport holding `tasks`.
    pub fn new(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            connected: AtomicBool::new(true),
            state: Mutex::new(MockState {
                tasks,
                next_id,
                requests: Vec::new(),
                fail_next: None,
                fail_lists: None,
            }),
        }
    }

    /// Sets the connected state. A disconnected mock fails every request as
    /// unreachable.
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    /// Makes the next request fail with `error` (after being recorded).
    pub fn fail_next(&self, error: ClientError) {
        self.state.lock().fail_next = Some(error);
    }

    /// Makes every list request fail with `error` until reset with `None`.
    pub fn fail_lists_with(&self, error: Option<ClientError>) {
        self.state.lock().fail_lists = error;
    }

    /// Returns the requests received so far.
    pub fn requests(&self) -> Vec<MockRequest> {
        self.state.lock().requests.clone()
    }

    /// Returns the mock's current collection.
    pub fn tasks(&self) -> Vec<Task> {
        self.state.lock().tasks.clone()
    }

    fn begin(&self, request: MockRequest) -> ClientResult<parking_lot::MutexGuard<'_, MockState>> {
        if !self.connected.load(Ordering::SeqCst) {
            return Err(ClientError::unreachable("connection refused"));
        }
        let mut state = self.state.lock();
        state.requests.push(request);
        match state.fail_next.take() {
            Some(error) => Err(error),
            None => Ok(state),
        }
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl TodoTransport for MockTransport {
    async fn list(&self) -> ClientResult<Vec<Task>> {
        let state = self.begin(MockRequest::List)?;
        match &state.fail_lists {
            Some(error) => Err(error.clone()),
            None => Ok(state.tasks.clone()),
        }
    }

    async fn create(&self, text: &str) -> ClientResult<Task> {
        let mut state = self.begin(MockRequest::Create(text.to_string()))?;
        if text.is_empty() {
            return Err(ClientError::Validation("task text is required".into()));
        }
        let task = Task::new(state.next_id, text);
        state.next_id += 1;
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn update(&self, id: TaskId, completed: bool) -> ClientResult<Task> {
        let mut state = self.begin(MockRequest::Update(id, completed))?;
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("task {id} was not found")))?;
        task.completed = completed;
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> ClientResult<()> {
        let mut state = self.begin(MockRequest::Delete(id))?;
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != id);
        if state.tasks.len() == before {
            return Err(ClientError::NotFound(format!("task {id} was not found")));
        }
        Ok(())
    }
}
