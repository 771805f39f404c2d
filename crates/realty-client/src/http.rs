//! Shared HTTP response helpers.
//!
//! Every endpoint passes its response through [`check_response`] so status
//! classification and error-message extraction live in one place.

use realty_core::responses::ErrorBody;
use reqwest::StatusCode;

use crate::error::ApiError;

/// Return the response unchanged on success, otherwise an [`ApiError`]
/// classified by status.
///
/// The message is the body's `message` field when the body is JSON, the raw
/// body text when it is not, and the status reason phrase otherwise.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = error_message(status, &body);
    tracing::debug!(status = status.as_u16(), %message, "request rejected");
    Err(ApiError::from_status(status.as_u16(), message))
}

fn error_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    let reason = || {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    };
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(reason),
        Err(_) if body.is_empty() => reason(),
        Err(_) => body.to_string(),
    }
}
