//! Interactive shell over the task list view.

use super::{show, OutputFormat};
use crate::error::CliResult;
use crate::prompt::TerminalPrompt;
use folio_client::{GestureOutcome, TaskListView, TodoTransport};
use folio_protocol::TaskId;

const HELP: &str = "\
Commands:
  add <text>     add a task
  toggle <id>    mark a task done / not done
  delete <id>    delete a task (asks first)
  list           reload the list
  help           show this help
  quit           leave the shell
";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// `add <text>`; the text may be blank.
    Add(String),
    /// `toggle <id>`.
    Toggle(TaskId),
    /// `delete <id>`.
    Delete(TaskId),
    /// `list`.
    List,
    /// `help`.
    Help,
    /// `quit` / `exit`.
    Quit,
    /// Blank line.
    Empty,
    /// Anything else, with a reason.
    Invalid(String),
}

/// Parses one shell line.
pub fn parse(line: &str) -> ShellCommand {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match word {
        "" => ShellCommand::Empty,
        "add" => ShellCommand::Add(rest.to_string()),
        "toggle" | "done" => {
            parse_id(rest).map_or_else(ShellCommand::Invalid, ShellCommand::Toggle)
        }
        "delete" | "rm" => {
            parse_id(rest).map_or_else(ShellCommand::Invalid, ShellCommand::Delete)
        }
        "list" | "ls" => ShellCommand::List,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => ShellCommand::Invalid(format!("unknown command: {other}")),
    }
}

fn parse_id(raw: &str) -> Result<TaskId, String> {
    raw.parse()
        .map_err(|_| format!("expected a task id, got {raw:?}"))
}

/// Runs the shell until `quit` or end of input.
pub async fn run<T: TodoTransport>(
    view: &mut TaskListView<T>,
    prompt: &mut TerminalPrompt,
) -> CliResult<()> {
    show(view.refresh().await, OutputFormat::Text)?;

    while let Some(line) = prompt.read_line("> ").await? {
        let outcome = match parse(&line) {
            ShellCommand::Empty => continue,
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                print!("{HELP}");
                continue;
            }
            ShellCommand::Invalid(reason) => {
                eprintln!("{reason} (try `help`)");
                continue;
            }
            ShellCommand::List => {
                view.refresh().await;
                GestureOutcome::Applied
            }
            ShellCommand::Add(text) => {
                view.set_input(text);
                view.add(prompt).await
            }
            ShellCommand::Toggle(id) => view.toggle(id, prompt).await,
            ShellCommand::Delete(id) => view.delete(id, prompt).await,
        };

        if outcome == GestureOutcome::Applied {
            show(view.state(), OutputFormat::Text)?;
        }
    }

    Ok(())
}
