use lara_client::ClientError;
use thiserror::Error;

/// Errors surfaced by [`LaraDevice`](crate::LaraDevice) operations
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Source not found: {0}")]
    SourceNotFound(String),
}

/// Errors in the platform configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Timeout must be a positive number of seconds, got {0}")]
    InvalidTimeout(u32),
}

/// Errors while setting up the platform
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("No Lara found in configuration file or with discovery")]
    NoHost,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
