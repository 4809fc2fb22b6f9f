//! Error types for the ProspectGateway

use thiserror::Error;

/// Errors that can occur while bringing the gateway up
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
