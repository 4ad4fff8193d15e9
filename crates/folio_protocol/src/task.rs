//! The to-do task entity.

use serde::{Deserialize, Serialize};

/// Identifier of a task. Assigned by the server, never reused.
pub type TaskId = u64;

/// A to-do item.
///
/// Serializes as `{"id": 1, "text": "...", "completed": false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier.
    pub id: TaskId,
    /// User-supplied description.
    pub text: String,
    /// Whether the task is done.
    pub completed: bool,
}

impl Task {
    /// Creates an open (not completed) task.
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Sets the completed flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}
