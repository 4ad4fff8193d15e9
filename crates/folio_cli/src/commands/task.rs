//! One-shot gestures: add, toggle, delete.

use super::{show, OutputFormat};
use crate::error::{CliError, CliResult};
use folio_client::{GestureOutcome, TaskListView, TodoTransport, UserPrompt};
use folio_protocol::TaskId;
use tracing::info;

/// Adds a task from the given words.
pub async fn add<T, P>(
    view: &mut TaskListView<T>,
    prompt: &mut P,
    words: &[String],
) -> CliResult<()>
where
    T: TodoTransport,
    P: UserPrompt,
{
    view.set_input(words.join(" "));
    let outcome = view.add(prompt).await;
    finish(view, outcome, "add")
}

/// Toggles the completed flag of a task.
pub async fn toggle<T, P>(view: &mut TaskListView<T>, prompt: &mut P, id: TaskId) -> CliResult<()>
where
    T: TodoTransport,
    P: UserPrompt,
{
    // Controls exist only for rendered tasks, so load first.
    view.refresh().await;
    let outcome = view.toggle(id, prompt).await;
    finish(view, outcome, "toggle")
}

/// Deletes a task after confirmation.
pub async fn delete<T, P>(view: &mut TaskListView<T>, prompt: &mut P, id: TaskId) -> CliResult<()>
where
    T: TodoTransport,
    P: UserPrompt,
{
    let outcome = view.delete(id, prompt).await;
    finish(view, outcome, "delete")
}

fn finish<T: TodoTransport>(
    view: &TaskListView<T>,
    outcome: GestureOutcome,
    gesture: &'static str,
) -> CliResult<()> {
    match outcome {
        GestureOutcome::Applied => show(view.state(), OutputFormat::Text),
        GestureOutcome::Skipped => {
            info!("nothing to {gesture}");
            Ok(())
        }
        GestureOutcome::Declined => {
            println!("Cancelled.");
            Ok(())
        }
        GestureOutcome::Alerted => Err(CliError::Gesture(gesture)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{seeded_view, ScriptedPrompt};
    use folio_client::{ClientError, MockRequest};

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[tokio::test]
    async fn add_sends_joined_words() {
        let mut view = seeded_view();
        let mut prompt = ScriptedPrompt::default();

        add(&mut view, &mut prompt, &words("buy  milk")).await.unwrap();

        assert_eq!(
            view.transport().requests(),
            vec![MockRequest::Create("buy milk".into()), MockRequest::List]
        );
        assert_eq!(view.tasks().len(), 3);
        assert!(prompt.alerts.is_empty());
    }

    #[tokio::test]
    async fn add_of_blank_text_sends_nothing() {
        let mut view = seeded_view();
        let mut prompt = ScriptedPrompt::default();

        add(&mut view, &mut prompt, &["   ".to_string()]).await.unwrap();

        assert!(view.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn failed_add_exits_with_error() {
        let mut view = seeded_view();
        view.transport().set_connected(false);
        let mut prompt = ScriptedPrompt::default();

        let err = add(&mut view, &mut prompt, &words("buy milk")).await.unwrap_err();

        assert!(matches!(err, CliError::Gesture("add")));
        assert_eq!(prompt.alerts.len(), 1);
        assert_eq!(view.input(), "buy milk");
    }

    #[tokio::test]
    async fn toggle_loads_the_list_first() {
        let mut view = seeded_view();
        let mut prompt = ScriptedPrompt::default();

        toggle(&mut view, &mut prompt, 1).await.unwrap();

        assert_eq!(
            view.transport().requests(),
            vec![MockRequest::List, MockRequest::Update(1, true), MockRequest::List]
        );
        assert!(view.tasks()[0].completed);
        assert!(prompt.alerts.is_empty());
    }

    #[tokio::test]
    async fn toggle_of_unlisted_task_exits_with_error() {
        let mut view = seeded_view();
        let mut prompt = ScriptedPrompt::default();

        let err = toggle(&mut view, &mut prompt, 9).await.unwrap_err();

        assert!(matches!(err, CliError::Gesture("toggle")));
        assert_eq!(view.transport().requests(), vec![MockRequest::List]);
        assert_eq!(prompt.alerts, vec!["Task 9 is not in the list.".to_string()]);
    }

    #[tokio::test]
    async fn declined_delete_sends_nothing() {
        let mut view = seeded_view();
        let mut prompt = ScriptedPrompt::answering(&[false]);

        delete(&mut view, &mut prompt, 1).await.unwrap();

        assert_eq!(prompt.questions, vec!["Delete task 1?".to_string()]);
        assert!(view.transport().requests().is_empty());
        assert_eq!(view.transport().tasks().len(), 2);
    }

    #[tokio::test]
    async fn confirmed_delete_removes_and_reloads() {
        let mut view = seeded_view();
        let mut prompt = ScriptedPrompt::answering(&[true]);

        delete(&mut view, &mut prompt, 2).await.unwrap();

        assert_eq!(
            view.transport().requests(),
            vec![MockRequest::Delete(2), MockRequest::List]
        );
        assert_eq!(view.tasks().len(), 1);
    }

    #[tokio::test]
    async fn rejected_delete_exits_with_error() {
        let mut view = seeded_view();
        view.transport().fail_next(ClientError::unexpected_status(500, "boom"));
        let mut prompt = ScriptedPrompt::answering(&[true]);

        let err = delete(&mut view, &mut prompt, 1).await.unwrap_err();

        assert!(matches!(err, CliError::Gesture("delete")));
        assert_eq!(prompt.alerts.len(), 1);
        assert_eq!(view.transport().tasks().len(), 2);
    }
}
