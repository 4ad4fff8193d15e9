//! CLI command implementations.

pub mod info;
pub mod list;
pub mod shell;
pub mod task;

use crate::error::CliResult;
use clap::ValueEnum;
use folio_client::render::{render_json, render_text};
use folio_client::ListState;

/// Output format of the list area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// The JSON envelope.
    Json,
}

/// Prints the list area to stdout.
pub fn show(state: &ListState, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(state)),
        OutputFormat::Json => println!("{}", render_json(state)?),
    }
    Ok(())
}
