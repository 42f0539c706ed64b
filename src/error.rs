//! foreman-content error types

use thiserror::Error;

/// foreman-content error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Query error (bad status, unusable response)
    #[error("Query error: {0}")]
    Query(String),

    /// HTTP error (transport, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for foreman-content operations
pub type Result<T> = std::result::Result<T, Error>;
