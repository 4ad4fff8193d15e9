//! Folio CLI
//!
//! Terminal front end for the Folio to-do list.
//!
//! # Commands
//!
//! - `list` - Load and print the task list
//! - `add` - Add a task
//! - `toggle` - Mark a task done / not done
//! - `delete` - Delete a task after confirmation
//! - `shell` - Interactive session over the same gestures
//! - `status`, `greet` - Auxiliary server endpoints

mod commands;
mod error;
mod prompt;

use clap::{Parser, Subcommand};
use commands::OutputFormat;
use folio_client::{ClientConfig, HttpTransport, TaskListView};
use folio_protocol::TaskId;
use prompt::TerminalPrompt;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Manage the portfolio to-do list from a terminal.
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Server base URL (overrides FOLIO_SERVER_URL)
    #[arg(global = true, short, long)]
    server: Option<String>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(global = true, short, long)]
    timeout: Option<u64>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and print the task list
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Add a task
    Add {
        /// Task text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Mark a task done / not done
    Toggle {
        /// Task id
        id: TaskId,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: TaskId,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Interactive session
    Shell,

    /// Show the server status
    Status,

    /// Ask the server for a greeting
    Greet {
        /// Name to greet
        name: Option<String>,
    },

    /// Show version information
    Version,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging (stderr keeps stdout for the list)
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.server {
        config = config.with_base_url(url);
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let transport = HttpTransport::new(config)?;

    match cli.command {
        Commands::List { format } => {
            let mut view = TaskListView::new(transport);
            commands::list::run(&mut view, format).await?;
        }
        Commands::Add { text } => {
            let mut view = TaskListView::new(transport);
            let mut prompt = TerminalPrompt::new(false);
            commands::task::add(&mut view, &mut prompt, &text).await?;
        }
        Commands::Toggle { id } => {
            let mut view = TaskListView::new(transport);
            let mut prompt = TerminalPrompt::new(false);
            commands::task::toggle(&mut view, &mut prompt, id).await?;
        }
        Commands::Delete { id, yes } => {
            let mut view = TaskListView::new(transport);
            let mut prompt = TerminalPrompt::new(yes);
            commands::task::delete(&mut view, &mut prompt, id).await?;
        }
        Commands::Shell => {
            let mut view = TaskListView::new(transport);
            let mut prompt = TerminalPrompt::new(false);
            commands::shell::run(&mut view, &mut prompt).await?;
        }
        Commands::Status => commands::info::status(&transport).await?,
        Commands::Greet { name } => commands::info::greet(&transport, name.as_deref()).await?,
        Commands::Version => {
            println!("Folio CLI v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
