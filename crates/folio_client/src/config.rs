//! Configuration for the to-do client.

use std::env;
use std::time::Duration;
use tracing::debug;

/// Default server URL.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3001";

/// Environment variable overriding the server URL.
pub const SERVER_URL_VAR: &str = "FOLIO_SERVER_URL";

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server, without trailing slash.
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a new client configuration.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize(base_url.into()),
            request_timeout: None,
        }
    }

    /// Reads the server URL from `FOLIO_SERVER_URL`.
    pub fn from_env() -> Self {
        match env::var(SERVER_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => {
                debug!("{SERVER_URL_VAR} not set, using default: {DEFAULT_SERVER_URL}");
                Self::default()
            }
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize(base_url.into());
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

fn normalize(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
