//! Route paths of the HTTP API.

use crate::task::TaskId;

/// Collection path for tasks.
pub const TODOS: &str = "/api/todos";

/// Path template for a single task, in axum syntax.
pub const TODO_BY_ID: &str = "/api/todos/{id}";

/// Server health endpoint.
pub const STATUS: &str = "/api/status";

/// Greeting endpoint (`?name=`).
pub const GREET: &str = "/api/greet";

/// Returns the concrete path for one task.
pub fn todo_path(id: TaskId) -> String {
    format!("{TODOS}/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_task_path() {
        assert_eq!(todo_path(42), "/api/todos/42");
    }
}
