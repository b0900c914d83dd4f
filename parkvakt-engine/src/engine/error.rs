use thiserror::Error;

use parkvakt_client::ClientError;
use parkvakt_config::ConfigError;
use parkvakt_store::StoreError;

/// Errors that can abort runtime construction. Once the loop is running,
/// per-tick failures are reported and absorbed instead of surfacing here.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] ClientError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
