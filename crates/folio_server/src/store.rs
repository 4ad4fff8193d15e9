//! In-memory task store.
//!
//! The store owns the canonical task collection and the id counter. It is a
//! plain value with `&mut self` mutators; the server wraps the single
//! instance in a mutex so that requests are applied one at a time.

use crate::error::{ServerError, ServerResult};
use folio_protocol::{Task, TaskId};
use std::collections::HashSet;

/// The canonical, process-lifetime task collection.
#[derive(Debug, Clone)]
pub struct TaskStore {
    /// Tasks in insertion order.
    tasks: Vec<Task>,
    /// Next id to hand out. Only ever increases.
    next_id: TaskId,
}

impl TaskStore {
    /// Creates an empty store. The first task gets id 1.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a store holding `seed`.
    ///
    /// Fails if the seed contains a zero id, a duplicate id, an empty text, or
    /// an id with no successor. The counter starts one past the highest seeded
    /// id.
    pub fn with_seed(seed: Vec<Task>) -> ServerResult<Self> {
        let mut seen = HashSet::with_capacity(seed.len());
        for task in &seed {
            if task.id == 0 {
                return Err(ServerError::Validation("seed task id must be positive".into()));
            }
            if !seen.insert(task.id) {
                return Err(ServerError::Validation(format!(
                    "duplicate seed task id {}",
                    task.id
                )));
            }
            if task.text.is_empty() {
                return Err(ServerError::Validation(format!(
                    "seed task {} has empty text",
                    task.id
                )));
            }
        }

        let highest = seed.iter().map(|t| t.id).max().unwrap_or(0);
        let next_id = highest.checked_add(1).ok_or_else(|| {
            ServerError::Validation(format!("seed task id {highest} leaves no id for new tasks"))
        })?;
        Ok(Self {
            tasks: seed,
            next_id,
        })
    }

    /// Creates a store holding [`default_seed`].
    pub fn seeded() -> Self {
        let tasks = default_seed();
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self { tasks, next_id }
    }

    /// All tasks, in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if there are no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The id the next successful create will receive.
    pub fn next_id(&self) -> TaskId {
        self.next_id
    }

    /// Appends a new open task.
    ///
    /// `None` stands for a request that did not carry a text at all. Fails with
    /// an internal error once the id space is exhausted.
    pub fn create(&mut self, text: Option<&str>) -> ServerResult<Task> {
        let text = match text {
            Some(text) if !text.is_empty() => text,
            _ => return Err(ServerError::Validation("task text is required".into())),
        };

        let following = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| ServerError::Internal("task ids exhausted".into()))?;
        let task = Task::new(self.next_id, text);
        self.next_id = following;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Sets the completed flag of an existing task.
    ///
    /// The id is checked before the flag, so an unknown id is reported as
    /// not found even when `completed` is missing.
    pub fn update(&mut self, id: TaskId, completed: Option<bool>) -> ServerResult<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ServerError::task_not_found(id))?;

        let completed = completed.ok_or_else(|| {
            ServerError::Validation("completed must be a boolean".into())
        })?;

        task.completed = completed;
        Ok(task.clone())
    }

    /// Removes a task.
    pub fn delete(&mut self, id: TaskId) -> ServerResult<()> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| ServerError::task_not_found(id))?;

        self.tasks.remove(index);
        Ok(())
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::seeded()
    }
}

/// The tasks every fresh server process starts with.
pub fn default_seed() -> Vec<Task> {
    vec![
        Task::new(1, "Integrate the API project into the portfolio"),
        Task::new(2, "Fix the filter and sort bug").with_completed(true),
    ]
}
