//! Text and JSON rendering of the list area.

use crate::view::ListState;
use folio_protocol::{ErrorResponse, Task, TaskListResponse};
use std::fmt::Write;

/// Renders the list area as plain text, one task per line.
pub fn render_text(state: &ListState) -> String {
    match state {
        ListState::Loading => "Loading tasks...\n".to_string(),
        ListState::Failed(message) => format!("error: {message}\n"),
        ListState::Loaded(tasks) if tasks.is_empty() => "No tasks yet.\n".to_string(),
        ListState::Loaded(tasks) => {
            let width = tasks
                .iter()
                .map(|t| t.id.to_string().len())
                .max()
                .unwrap_or(1);

            let mut out = String::new();
            for task in tasks {
                let _ = writeln!(out, "{}", task_line(task, width));
            }
            let done = tasks.iter().filter(|t| t.completed).count();
            let _ = writeln!(out, "{} tasks, {} done", tasks.len(), done);
            out
        }
    }
}

/// Renders the list area as the JSON the server would have sent.
pub fn render_json(state: &ListState) -> serde_json::Result<String> {
    match state {
        ListState::Loaded(tasks) => {
            serde_json::to_string_pretty(&TaskListResponse::new(tasks.clone()))
        }
        ListState::Failed(message) => serde_json::to_string_pretty(&ErrorResponse::new(message)),
        ListState::Loading => {
            serde_json::to_string_pretty(&ErrorResponse::new("tasks have not been loaded"))
        }
    }
}

fn task_line(task: &Task, width: usize) -> String {
    let mark = if task.completed { 'x' } else { ' ' };
    format!("[{mark}] #{:<width$}  {}", task.id, task.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_tasks_with_marks() {
        let state = ListState::Loaded(vec![
            Task::new(1, "A"),
            Task::new(12, "B").with_completed(true),
        ]);
        let text = render_text(&state);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "[ ] #1   A");
        assert_eq!(lines[1], "[x] #12  B");
        assert_eq!(lines[2], "2 tasks, 1 done");
    }

    #[test]
    fn renders_empty_and_failed_states() {
        assert_eq!(render_text(&ListState::Loaded(vec![])), "No tasks yet.\n");
        assert_eq!(
            render_text(&ListState::Failed("server down".into())),
            "error: server down\n"
        );
    }

    #[test]
    fn json_rendering_uses_envelopes() {
        let json = render_json(&ListState::Loaded(vec![Task::new(1, "A")])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["count"], 1);

        let json = render_json(&ListState::Failed("nope".into())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "error");
    }
}
