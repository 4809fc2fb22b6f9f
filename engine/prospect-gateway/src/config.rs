//! Configuration for the ProspectGateway

use crate::error::{GatewayError, GatewayResult};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Main configuration for the gateway
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Data artifact configuration
    pub data: DataConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

/// Data artifact configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding the api_*.json artifacts
    pub dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: crate::DEFAULT_PORT }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from(prospect_store::DEFAULT_DATA_DIR) }
    }
}

impl GatewayConfig {
    /// Get the server address
    pub fn server_addr(&self) -> GatewayResult<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| GatewayError::Config(format!("invalid bind address: {e}")))
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &str) -> GatewayResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Defaults overridden by the environment: `DATA_DIR`, `HOST`, `PORT`
    pub fn from_env() -> GatewayResult<Self> {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var("DATA_DIR") {
            config.data.dir = PathBuf::from(dir);
        }
        if let Ok(host) = std::env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| GatewayError::Config(format!("invalid PORT value: {port}")))?;
        }
        Ok(config)
    }
}
