//! Error types for the Roster client.

use thiserror::Error;

/// Errors that can occur while fetching and loading user records.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success status
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    Unreachable(String),

    /// Response body was not a JSON array of records
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// A record did not have the required shape
    #[error("Invalid record shape: {0}")]
    Shape(#[from] roster_core::RosterError),

    /// Invalid endpoint URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
