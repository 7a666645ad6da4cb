//! Error types for the gddns updater
//!
//! This module defines all error types used throughout the workspace.

use thiserror::Error;

/// Result type alias for updater operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the gddns updater
#[derive(Error, Debug)]
pub enum Error {
    /// The IP-echo service was unreachable or returned something that is
    /// not a dotted-quad IPv4 address
    #[error("IP resolution error: {0}")]
    IpResolution(String),

    /// The provider's record read failed (transport or malformed body)
    #[error("record read error: {0}")]
    RecordRead(String),

    /// The provider's record write could not be issued
    #[error("record update error: {0}")]
    RecordUpdate(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP transport errors (from the IP service or provider API)
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an IP resolution error
    pub fn ip_resolution(msg: impl Into<String>) -> Self {
        Self::IpResolution(msg.into())
    }

    /// Create a record read error
    pub fn record_read(msg: impl Into<String>) -> Self {
        Self::RecordRead(msg.into())
    }

    /// Create a record update error
    pub fn record_update(msg: impl Into<String>) -> Self {
        Self::RecordUpdate(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an HTTP error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }
}
