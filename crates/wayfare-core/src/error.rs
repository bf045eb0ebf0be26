//! Error types for wayfare-core

use thiserror::Error;

/// Errors from session persistence.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Credential storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted identity could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        SessionError::Serialization(err.to_string())
    }
}
