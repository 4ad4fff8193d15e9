//! List command implementation.

use super::{show, OutputFormat};
use crate::error::{CliError, CliResult};
use folio_client::{ListState, TaskListView, TodoTransport};

/// Loads the list and prints it.
///
/// The list area is printed even when loading failed; the command then
/// exits with an error.
pub async fn run<T: TodoTransport>(
    view: &mut TaskListView<T>,
    format: OutputFormat,
) -> CliResult<()> {
    let state = view.refresh().await;
    show(state, format)?;

    match state {
        ListState::Failed(message) => Err(CliError::Load(message.clone())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::seeded_view;
    use folio_client::{ClientError, MockRequest};

    #[tokio::test]
    async fn loaded_list_succeeds() {
        let mut view = seeded_view();

        run(&mut view, OutputFormat::Text).await.unwrap();

        assert_eq!(view.transport().requests(), vec![MockRequest::List]);
        assert_eq!(view.tasks().len(), 2);
    }

    #[tokio::test]
    async fn unreachable_server_fails_the_command() {
        let mut view = seeded_view();
        view.transport().set_connected(false);

        let err = run(&mut view, OutputFormat::Json).await.unwrap_err();

        match err {
            CliError::Load(message) => assert!(message.contains("Could not connect")),
            other => panic!("expected load error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_error_fails_the_command() {
        let mut view = seeded_view();
        view.transport().fail_lists_with(Some(ClientError::unexpected_status(500, "boom")));

        let err = run(&mut view, OutputFormat::Text).await.unwrap_err();

        assert!(matches!(err, CliError::Load(message) if message.contains("boom")));
    }
}
