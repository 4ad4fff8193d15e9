//! Main to-do server.

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::handler::{HandlerContext, RequestHandler};
use crate::routes::router;
use axum::Router;
use folio_protocol::Task;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

/// The to-do server.
///
/// Owns the single task store of the process (inside its handler context)
/// and serves it over HTTP.
///
/// # Example
///
/// ```no_run
/// use folio_server::{ServerConfig, TodoServer};
///
/// # async fn run() -> folio_server::ServerResult<()> {
/// let server = TodoServer::new(ServerConfig::from_env())?;
/// server.run().await
/// # }
/// ```
pub struct TodoServer {
    handler: Arc<RequestHandler>,
    context: Arc<HandlerContext>,
}

impl TodoServer {
    /// Creates a new server; the store is seeded from `config.seed`.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let context = Arc::new(HandlerContext::from_config(config)?);
        let handler = Arc::new(RequestHandler::new(Arc::clone(&context)));

        Ok(Self { handler, context })
    }

    /// Returns the configuration the server was built with.
    pub fn config(&self) -> &ServerConfig {
        &self.context.config
    }

    /// Returns the axum router serving this server's store.
    pub fn router(&self) -> Router {
        router(Arc::clone(&self.handler))
    }

    /// Returns a copy of the current task collection.
    pub fn tasks(&self) -> Vec<Task> {
        self.context.snapshot()
    }

    /// Binds `config.bind_addr` and serves until Ctrl+C / SIGTERM.
    pub async fn run(self) -> ServerResult<()> {
        let address = self.config().bind_addr;
        info!("Binding to {address}");
        let listener = TcpListener::bind(address).await?;

        self.serve(listener, shutdown_signal()).await
    }

    /// Serves on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let address: SocketAddr = listener.local_addr()?;
        info!(tasks = self.context.snapshot().len(), "Server running on http://{address}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Server shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
