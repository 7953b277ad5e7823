//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error response from the service, `detail` as reported by it
    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// Authentication failure
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// WebSocket connection error
    #[error("WebSocket error: {0}")]
    Ws(#[from] tokio_tungstenite::tungstenite::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session store error
    #[error("Session error: {0}")]
    Session(String),
}

impl ClientError {
    /// True for 401 responses, which force the app back to the login screen.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Api { status: 401, .. })
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
