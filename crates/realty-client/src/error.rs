//! Client error types.

use realty_forms::ValidationErrors;
use thiserror::Error;

/// Errors from talking to the backend, plus the local checks that run
/// before a request would be sent.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401 or 403: bad credentials or missing permission.
    #[error("authentication failed ({status}): {message}")]
    Authentication { status: u16, message: String },

    /// 409: e.g. a username or email that is already taken.
    #[error("conflict: {message}")]
    Conflict { message: String },

    /// 400 or 422: the backend rejected the payload.
    #[error("rejected by backend ({status}): {message}")]
    Validation { status: u16, message: String },

    #[error("not found: {message}")]
    NotFound { message: String },

    /// Any other non-success status.
    #[error("request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    /// The request never produced a response.
    #[error("backend unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// A success response whose body did not match the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// An upload broke a local size or count limit.
    #[error("invalid upload: {0}")]
    InvalidUpload(String),

    /// Form input failed local validation; nothing was sent.
    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationErrors),

    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    Setup(#[source] reqwest::Error),
}

impl ApiError {
    /// Classify a non-success status.
    #[must_use]
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => Self::Authentication { status, message },
            409 => Self::Conflict { message },
            400 | 422 => Self::Validation { status, message },
            404 => Self::NotFound { message },
            _ => Self::RequestFailed { status, message },
        }
    }

    /// HTTP status for errors that came back from the backend.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. }
            | Self::Validation { status, .. }
            | Self::RequestFailed { status, .. } => Some(*status),
            Self::Conflict { .. } => Some(409),
            Self::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    /// Message the backend sent with a non-success status.
    #[must_use]
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Self::Authentication { message, .. }
            | Self::Conflict { message }
            | Self::Validation { message, .. }
            | Self::NotFound { message }
            | Self::RequestFailed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// True when no response was received at all.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Unreachable(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Unreachable(err)
        }
    }
}
