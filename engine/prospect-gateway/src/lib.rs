//! ProspectGateway - REST API for the ProspectTheory dataset
//!
//! This crate wires the query engine to HTTP: route definitions, query
//! parameter validation, rejection-to-JSON error mapping, CORS, and the
//! server binary. All actual query logic lives in `query-engine`; all data
//! ownership lives in `prospect-store`.

pub mod config;
pub mod error;
pub mod rest_api;

pub use config::GatewayConfig;
pub use error::GatewayError;

/// Version of the gateway API
pub const VERSION: &str = "1.0.0";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8000;
