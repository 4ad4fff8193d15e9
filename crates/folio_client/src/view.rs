//! Task list view model.
//!
//! The view mirrors the server's collection and turns user gestures into
//! store operations. It never edits its snapshot locally: every successful
//! mutation is followed by a full re-fetch, and the snapshot is only replaced
//! by the result of a list request.
//!
//! Gestures take `&mut self` and await exactly one mutation request before
//! re-fetching, so a second gesture cannot start on the same view until the
//! first has settled.

use crate::error::ClientError;
use crate::transport::TodoTransport;
use async_trait::async_trait;
use folio_protocol::{Task, TaskId};
use tracing::{debug, warn};

/// What the list area currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    /// Nothing fetched yet.
    Loading,
    /// The last fetched snapshot.
    Loaded(Vec<Task>),
    /// The last fetch failed; the message replaces the list.
    Failed(String),
}

/// Blocking user interaction (confirmation dialogs and alerts).
#[async_trait]
pub trait UserPrompt: Send {
    /// Asks a yes/no question.
    async fn confirm(&mut self, message: &str) -> bool;

    /// Shows a failure to the user.
    fn alert(&mut self, message: &str);
}

/// How a gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The server accepted the mutation and the list was re-fetched.
    Applied,
    /// Nothing to do (empty input); no request was sent.
    Skipped,
    /// The user declined the confirmation; no request was sent.
    Declined,
    /// The gesture failed and the user was alerted.
    Alerted,
}

/// Client-side rendering state of the to-do list.
pub struct TaskListView<T: TodoTransport> {
    transport: T,
    state: ListState,
    input: String,
}

impl<T: TodoTransport> TaskListView<T> {
    /// Creates a view that has not loaded anything yet.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: ListState::Loading,
            input: String::new(),
        }
    }

    /// Returns the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the current list state.
    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Returns the rendered tasks (empty unless a snapshot is loaded).
    pub fn tasks(&self) -> &[Task] {
        match &self.state {
            ListState::Loaded(tasks) => tasks,
            _ => &[],
        }
    }

    /// Returns the contents of the input field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the contents of the input field.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Fetches the full list and replaces the view with it.
    ///
    /// A failed fetch replaces the list with an error message instead of
    /// returning an error.
    pub async fn refresh(&mut self) -> &ListState {
        self.state = match self.transport.list().await {
            Ok(tasks) => {
                debug!(count = tasks.len(), "list refreshed");
                ListState::Loaded(tasks)
            }
            Err(e) => {
                warn!("failed to load tasks: {e}");
                ListState::Failed(load_failure_message(&e))
            }
        };
        &self.state
    }

    /// Adds the trimmed input as a new task.
    ///
    /// The input is cleared only after the server accepted the task.
    pub async fn add<P>(&mut self, prompt: &mut P) -> GestureOutcome
    where
        P: UserPrompt + ?Sized,
    {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return GestureOutcome::Skipped;
        }

        match self.transport.create(&text).await {
            Ok(task) => {
                debug!(id = task.id, "task added");
                self.input.clear();
                self.refresh().await;
                GestureOutcome::Applied
            }
            Err(e) => alert(prompt, "Failed to add the task", &e),
        }
    }

    /// Flips the completed flag of a rendered task.
    pub async fn toggle<P>(&mut self, id: TaskId, prompt: &mut P) -> GestureOutcome
    where
        P: UserPrompt + ?Sized,
    {
        let Some(current) = self.tasks().iter().find(|t| t.id == id).map(|t| t.completed) else {
            prompt.alert(&format!("Task {id} is not in the list."));
            return GestureOutcome::Alerted;
        };

        match self.transport.update(id, !current).await {
            Ok(task) => {
                debug!(id, completed = task.completed, "task toggled");
                self.refresh().await;
                GestureOutcome::Applied
            }
            Err(e) => alert(prompt, "Failed to update the task", &e),
        }
    }

    /// Deletes a task after the user confirms.
    pub async fn delete<P>(&mut self, id: TaskId, prompt: &mut P) -> GestureOutcome
    where
        P: UserPrompt + ?Sized,
    {
        let question = format!("Delete task {id}?");
        if !prompt.confirm(&question).await {
            return GestureOutcome::Declined;
        }

        match self.transport.delete(id).await {
            Ok(()) => {
                debug!(id, "task deleted");
                self.refresh().await;
                GestureOutcome::Applied
            }
            Err(e) => alert(prompt, "Failed to delete the task", &e),
        }
    }
}

fn alert<P>(prompt: &mut P, context: &str, error: &ClientError) -> GestureOutcome
where
    P: UserPrompt + ?Sized,
{
    warn!("{context}: {error}");
    let message = if error.is_unreachable() {
        format!("{context}. Check that the server is running.")
    } else {
        format!("{context}: {error}")
    };
    prompt.alert(&message);
    GestureOutcome::Alerted
}

fn load_failure_message(error: &ClientError) -> String {
    if error.is_unreachable() {
        "Could not connect to the server. Check that it is running.".to_string()
    } else {
        format!("Could not load tasks: {error}")
    }
}
