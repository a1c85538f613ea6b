//! Error types for FUGA API operations.

use thiserror::Error;

/// Errors that can occur during FUGA API operations.
#[derive(Debug, Error)]
pub enum FugaError {
    /// Configuration is missing or incomplete.
    #[error("FUGA configuration required: {0}")]
    ConfigMissing(String),

    /// Login was rejected or the login endpoint could not be reached.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// A request was attempted before `login()` established a session.
    #[error("Not authenticated: call login() before making requests")]
    NotAuthenticated,

    /// API request failed with a non-2xx status, or returned a body
    /// that could not be decoded.
    #[error("FUGA API error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error (connection, DNS, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A caller-supplied argument was invalid (e.g., a non-numeric ID
    /// on the CLI).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl FugaError {
    /// The HTTP status code carried by an [`FugaError::Api`] error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FugaError::Api { status_code, .. } => *status_code,
            _ => None,
        }
    }

    /// Whether this error is a remote 404.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}

/// Result type alias for FUGA operations.
pub type Result<T> = core::result::Result<T, FugaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status_code() {
        let err = FugaError::Api {
            message: "gone".to_string(),
            status_code: Some(404),
        };
        assert_eq!(err.status_code(), Some(404));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_non_api_errors_have_no_status() {
        let err = FugaError::NotAuthenticated;
        assert_eq!(err.status_code(), None);
        assert!(!err.is_not_found());
    }
}
