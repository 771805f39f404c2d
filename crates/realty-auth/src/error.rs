use realty_client::ApiError;
use realty_forms::ValidationErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not signed in; run `realty auth login`")]
    NotAuthenticated,

    #[error("cannot update profile of user {requested} while signed in as user {current}")]
    ForeignProfile { requested: i64, current: i64 },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("session storage error: {0}")]
    Storage(String),
}

impl AuthError {
    /// Field errors when the failure was local validation.
    #[must_use]
    pub const fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Invalid(errors) | Self::Api(ApiError::Invalid(errors)) => Some(errors),
            _ => None,
        }
    }
}
