//! Error taxonomy for remote operations

use thiserror::Error;
use wayfare_domain::ValidationError;

/// Errors from the sync engine.
///
/// Every variant flattens to a single human-readable message via
/// `Display`; that message is what the store records and the UI renders.
/// No variant is retried automatically.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Draft failed client-side validation; no request was sent
    #[error("Validation failed: {}", format_fields(.0))]
    Validation(Vec<ValidationError>),

    /// Missing or expired token (401/403)
    #[error("Authentication required")]
    Auth,

    /// Referenced resource no longer exists (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Non-2xx response outside the dedicated cases
    #[error("HTTP {status} error: {message}")]
    Http { status: u16, message: String },

    /// Transport failure (DNS, refused connection, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not match the expected envelope
    #[error("Parse error: {0}")]
    Parse(String),
}

fn format_fields(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ApiError {
    /// The displayable message the store's error field carries.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfare_domain::{validate_draft, ArticleDraft};

    #[test]
    fn test_validation_message_names_fields() {
        let errors = validate_draft(&ArticleDraft::default());
        let err = ApiError::Validation(errors);
        let msg = err.message();
        assert!(msg.contains("title"));
        assert!(msg.contains("description"));
    }

    #[test]
    fn test_http_error_display() {
        let err = ApiError::Http {
            status: 500,
            message: "internal error".to_string(),
        };
        assert!(err.message().contains("500"));
        assert!(err.message().contains("internal error"));
    }

    #[test]
    fn test_parse_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ApiError = json_err.into();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
