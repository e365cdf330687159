use thiserror::Error;
use std::time::Duration;

#[derive(Error, Debug)]
pub enum RevenueMonitorError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to connect to relay: {0}")]
    RelayConnectionError(String),

    #[error("Invalid response from relay: {0}")]
    InvalidResponseError(String),

    #[error("Operation timed out after {0:?}")]
    TimeoutError(Duration),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, RevenueMonitorError>;
