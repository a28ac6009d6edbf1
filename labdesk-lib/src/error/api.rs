//! API error types

use std::time::Duration;

use serde::Deserialize;

use super::FieldValidationError;

/// Errors that can occur during API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP error response from the backend.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Http {
        /// HTTP status code.
        status: u16,
        /// The `message` field of the error envelope, if any.
        message: Option<String>,
        /// Field-level validation errors from the envelope.
        errors: Vec<FieldValidationError>,
    },

    /// Network error during API call.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Request timed out.
    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse API response.
    #[error("Response parse error: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Raw response body, if available.
        body: Option<String>,
    },
}

/// Error body returned by the backend.
///
/// Both fields are optional; validation failures fill `errors`, other
/// failures usually only carry `message`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Vec<FieldValidationError>,
}

impl ApiError {
    /// Creates a new HTTP error with only a message.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: Some(message.into()),
            errors: Vec::new(),
        }
    }

    /// Builds an HTTP error from a status code and a raw response body.
    ///
    /// Bodies that are not a JSON error envelope leave `message` empty.
    pub fn from_body(status: u16, body: &str) -> Self {
        let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap_or_default();
        Self::Http {
            status,
            message: envelope.message.filter(|m| !m.trim().is_empty()),
            errors: envelope.errors,
        }
    }

    /// Creates a new parse error with the raw response body.
    pub fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the validation errors attached to an HTTP error.
    pub fn field_errors(&self) -> &[FieldValidationError] {
        match self {
            Self::Http { errors, .. } => errors,
            _ => &[],
        }
    }

    /// Returns the envelope message, or a generic description of the failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Http { status, .. } => format!("Request failed with status code {status}"),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            // reqwest does not expose the configured duration
            Self::Timeout(Duration::ZERO)
        } else if err.is_decode() {
            Self::Parse {
                message: err.to_string(),
                body: None,
            }
        } else {
            Self::Network(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_message() {
        let err = ApiError::from_body(404, r#"{"message": "LabWork 7 not found"}"#);
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.user_message(), "LabWork 7 not found");
        assert!(err.field_errors().is_empty());
    }

    #[test]
    fn test_envelope_with_validation_errors() {
        let body = r#"{
            "message": "Validation failed",
            "errors": [
                {"field": "name", "defaultMessage": "must not be blank"},
                {"field": "minimalPoint", "defaultMessage": "must be greater than 0"}
            ]
        }"#;
        let err = ApiError::from_body(400, body);
        let messages: Vec<&str> = err.field_errors().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["must not be blank", "must be greater than 0"]);
        assert_eq!(err.field_errors()[0].field.as_deref(), Some("name"));
    }

    #[test]
    fn test_non_json_body_falls_back_to_generic_message() {
        let err = ApiError::from_body(502, "<html>Bad Gateway</html>");
        assert_eq!(err.user_message(), "Request failed with status code 502");
    }

    #[test]
    fn test_blank_message_is_ignored() {
        let err = ApiError::from_body(500, r#"{"message": "  "}"#);
        assert_eq!(err.user_message(), "Request failed with status code 500");
    }
}
