//! Validation for article drafts

use super::ArticleDraft;
use serde::{Deserialize, Serialize};

/// Severity of a validation error
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

/// A validation error or warning
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

/// Validate a draft before it may be submitted.
///
/// A draft with any `Error`-severity entry must never reach the network.
pub fn validate_draft(draft: &ArticleDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if draft.title.trim().is_empty() {
        errors.push(ValidationError {
            field: "title".to_string(),
            message: "Title is required".to_string(),
            severity: ValidationSeverity::Error,
        });
    }

    if draft.description.trim().is_empty() {
        errors.push(ValidationError {
            field: "description".to_string(),
            message: "Description is required".to_string(),
            severity: ValidationSeverity::Error,
        });
    }

    if let Some(ref url) = draft.cover_image_url {
        if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
            errors.push(ValidationError {
                field: "cover_image_url".to_string(),
                message: "Cover image URL should be an http(s) URL".to_string(),
                severity: ValidationSeverity::Warning,
            });
        }
    }

    errors
}

/// Check if a draft is submittable (no errors; warnings allowed)
pub fn is_valid(draft: &ArticleDraft) -> bool {
    validate_draft(draft)
        .iter()
        .all(|e| !matches!(e.severity, ValidationSeverity::Error))
}
