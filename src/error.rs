//! Error types for the OrangeFox catalog client

use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the client
#[derive(Debug, Error)]
pub enum Error {
    /// The service rejected the request shape (HTTP 402).
    #[error("Validation error: the service rejected the supplied filters")]
    Validation,

    /// Any response status outside 200, 402 and 404.
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code returned by the service
        status: u16,
        /// Raw response body, unparsed
        body: String,
    },

    /// The payload did not match the expected record shape.
    #[error("Malformed payload: {0}")]
    Schema(#[from] serde_json::Error),

    /// Transport-level failure before any status was received.
    #[error("Network error: {0}")]
    Network(String),

    /// Local construction failure (HTTP client or runtime setup).
    #[error("Client setup failed: {0}")]
    Client(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Network("Request timed out".to_string())
        } else if err.is_connect() {
            Error::Network("Failed to connect to API".to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}
