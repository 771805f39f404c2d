//! Account endpoints.

use realty_core::entities::Session;
use realty_core::requests::{LoginRequest, ProfileUpdate, RegisterRequest};
use reqwest::Method;

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Authentication`] for bad credentials, or any
    /// transport/decode error.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        self.send_json(Method::POST, "/api/auth/login", request).await
    }

    /// `POST /api/users/register`. The confirmation field is filled from the
    /// password when missing.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Conflict`] for a taken username or email, or any
    /// transport/decode error.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, ApiError> {
        let request = request.clone().with_confirmation();
        self.send_json(Method::POST, "/api/users/register", &request).await
    }

    /// `GET /api/users/:id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the user no longer exists.
    pub async fn get_user(&self, id: i64) -> Result<Session, ApiError> {
        self.get_json(&format!("/api/users/{id}")).await
    }

    /// `PATCH /api/users/:id`. The response is the full updated record.
    ///
    /// # Errors
    ///
    /// Returns any backend, transport, or decode error.
    pub async fn update_user(&self, id: i64, update: &ProfileUpdate) -> Result<Session, ApiError> {
        self.send_json(Method::PATCH, &format!("/api/users/{id}"), update).await
    }
}
