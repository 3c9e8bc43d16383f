//! Errors raised by the remote API layer.

use crate::traits::HttpError;

/// Failure of a single API call.
///
/// Authentication failures are classified rather than acted on; the caller
/// decides where to navigate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the session cookie (401 or 403).
    #[error("Session expired (HTTP {status})")]
    SessionExpired { status: u16 },

    /// Any other non-2xx response.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The response body did not have the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx status code.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => ApiError::SessionExpired { status },
            _ => ApiError::Status {
                status,
                message: message.into(),
            },
        }
    }

    /// Whether the caller should send the user back to login.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired { .. })
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::SessionExpired { .. } => {
                "Your session has expired. Please log in again.".to_string()
            }
            ApiError::Status { status, .. } => match *status {
                404 => "The requested resource was not found.".to_string(),
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                500..=599 => "The server is experiencing issues. Please try again later.".to_string(),
                _ => format!("The server returned an error (HTTP {}).", status),
            },
            ApiError::Transport(HttpError::Timeout(_)) => {
                "The request timed out. The server may be slow or unreachable.".to_string()
            }
            ApiError::Transport(_) => {
                "Unable to connect to the server. Please check your internet connection."
                    .to_string()
            }
            ApiError::Decode(_) => {
                "Received an invalid response from the server.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::SessionExpired { .. } => "E_API_AUTH",
            ApiError::Status { .. } => "E_API_HTTP",
            ApiError::Transport(HttpError::Timeout(_)) => "E_API_TIMEOUT",
            ApiError::Transport(_) => "E_API_CONN",
            ApiError::Decode(_) => "E_API_DECODE",
        }
    }
}

/// Result of an API call.
pub type ApiResult<T> = Result<T, ApiError>;
