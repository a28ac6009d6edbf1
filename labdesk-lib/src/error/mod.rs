//! Error types

mod api;
mod validation;

pub use api::*;
pub use validation::*;

/// Top-level error returned by client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backend rejected the request or could not be reached.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A request payload could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl Error {
    /// Returns the HTTP status code if the backend answered with an error status.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(api) => api.status_code(),
            _ => None,
        }
    }

    /// Returns `true` if the backend reported 404.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Returns `true` if the backend reported 409 (record still referenced).
    pub fn is_conflict(&self) -> bool {
        self.status_code() == Some(409)
    }

    /// Best human-readable description of the failure.
    ///
    /// Uses the message from the backend's error envelope when present and
    /// falls back to a generic transport-level message otherwise.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(api) => api.user_message(),
            other => other.to_string(),
        }
    }

    /// Field-level validation failures carried by the error envelope.
    pub fn field_errors(&self) -> &[FieldValidationError] {
        match self {
            Self::Api(api) => api.field_errors(),
            _ => &[],
        }
    }
}
