use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DIR: &str = "frontend/dist";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("REVEL_HOST is not an IP address: {0}")]
    InvalidHost(String),
    #[error("REVEL_PORT is not a port number: {0}")]
    InvalidPort(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory with the built landing page (`index.html` and the wasm bundle).
    pub dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("REVEL_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host.parse().map_err(|_| ConfigError::InvalidHost(host.clone()))?;

        let port = match lookup("REVEL_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let dir = lookup("REVEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR));

        Ok(Self { host, port, dir })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
