//! Server configuration.

use crate::store::default_seed;
use folio_protocol::Task;
use std::env;
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use tracing::{info, warn};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3001;

/// Environment variable holding the bind host.
pub const HOST_VAR: &str = "FOLIO_HOST";

/// Environment variable holding the bind port.
pub const PORT_VAR: &str = "FOLIO_PORT";

/// Configuration for the to-do server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind_addr: SocketAddr,
    /// Tasks the store starts with.
    pub seed: Vec<Task>,
}

impl ServerConfig {
    /// Creates a new server configuration with the default seed.
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            seed: default_seed(),
        }
    }

    /// Loads the bind address from `FOLIO_HOST` / `FOLIO_PORT`.
    ///
    /// Missing or unparsable values fall back to `0.0.0.0:3001`.
    pub fn from_env() -> Self {
        let host: IpAddr = try_load(HOST_VAR, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        let port: u16 = try_load(PORT_VAR, DEFAULT_PORT);
        Self::new(SocketAddr::new(host, port))
    }

    /// Sets the bind host, keeping the port.
    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.bind_addr.set_ip(host);
        self
    }

    /// Sets the bind port, keeping the host.
    pub fn with_port(mut self, port: u16) -> Self {
        self.bind_addr.set_port(port);
        self
    }

    /// Replaces the seed tasks.
    pub fn with_seed(mut self, seed: Vec<Task>) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)))
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), DEFAULT_PORT);
        assert_eq!(config.seed.len(), 2);
    }

    #[test]
    fn config_builder() {
        let config = ServerConfig::default()
            .with_host("0.0.0.0".parse().unwrap())
            .with_port(9000)
            .with_seed(vec![Task::new(1, "A")]);

        assert_eq!(config.bind_addr, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(config.seed, vec![Task::new(1, "A")]);
    }

    #[test]
    fn try_load_falls_back_on_missing_var() {
        let port: u16 = try_load("FOLIO_TEST_SURELY_UNSET_PORT", 1234);
        assert_eq!(port, 1234);
    }
}
