//! Terminal implementation of the user prompt.

use async_trait::async_trait;
use folio_client::UserPrompt;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};

/// Reads answers and shell lines from stdin, writes questions and alerts to
/// stderr.
pub struct TerminalPrompt {
    lines: Lines<BufReader<Stdin>>,
    assume_yes: bool,
}

impl TerminalPrompt {
    /// Creates a prompt on the process's stdin.
    pub fn new(assume_yes: bool) -> Self {
        Self {
            lines: BufReader::new(io::stdin()).lines(),
            assume_yes,
        }
    }

    /// Writes `prompt` to stderr and reads one line. `None` at end of input.
    pub async fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stderr = io::stderr();
        stderr.write_all(prompt.as_bytes()).await?;
        stderr.flush().await?;
        self.lines.next_line().await
    }
}

#[async_trait]
impl UserPrompt for TerminalPrompt {
    async fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        match self.read_line(&format!("{message} [y/N] ")).await {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!("failed to read confirmation: {e}");
                false
            }
        }
    }

    fn alert(&mut self, message: &str) {
        eprintln!("alert: {message}");
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
