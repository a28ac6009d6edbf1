//! Validation error types

use serde::Deserialize;

/// One field-level failure reported by the backend's bean validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldValidationError {
    /// The field that failed validation, when reported.
    #[serde(default)]
    pub field: Option<String>,
    /// Human-readable validation error message.
    #[serde(rename = "defaultMessage", default)]
    pub message: String,
}

impl FieldValidationError {
    /// Creates a new field validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}: {}", field, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}
