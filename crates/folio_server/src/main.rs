//! Folio server binary.

use clap::Parser;
use folio_server::{ServerConfig, TodoServer};
use std::net::IpAddr;
use tracing_subscriber::EnvFilter;

/// Serves the Folio to-do API.
#[derive(Parser)]
#[command(name = "folio-server")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind (overrides FOLIO_HOST)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on (overrides FOLIO_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = ServerConfig::from_env();
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    TodoServer::new(config)?.run().await?;
    Ok(())
}
