//! Error types for the ArchivesSpace client.

use thiserror::Error;

/// Client operation errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// API returned a non-success status
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, as far as it could be read
        message: String,
    },

    /// Connection error (network, DNS, etc.)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Authentication failure during login
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Session establishment or payload error
    #[error("Session error: {0}")]
    Session(String),

    /// Client not connected (connect() must be called first)
    #[error("Client not connected - call connect() first")]
    NotConnected,
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            ClientError::Connection(e.to_string())
        } else if e.is_status() {
            match e.status() {
                Some(status) => ClientError::Api {
                    status: status.as_u16(),
                    message: e.to_string(),
                },
                None => ClientError::Connection(e.to_string()),
            }
        } else if e.is_decode() {
            ClientError::Session(format!("Malformed response payload: {}", e))
        } else {
            ClientError::Connection(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Session(format!("JSON parsing error: {}", e))
    }
}
