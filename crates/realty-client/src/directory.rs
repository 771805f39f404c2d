//! Read-only directory endpoints and the waitlist.

use realty_core::entities::{Agent, Testimonial};
use realty_core::requests::WaitlistEntry;
use realty_forms::{Form, WaitlistForm};
use reqwest::Method;

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /api/agents`.
    ///
    /// # Errors
    ///
    /// Returns any backend, transport, or decode error.
    pub async fn agents(&self) -> Result<Vec<Agent>, ApiError> {
        self.get_json("/api/agents").await
    }

    /// `GET /api/testimonials`.
    ///
    /// # Errors
    ///
    /// Returns any backend, transport, or decode error.
    pub async fn testimonials(&self) -> Result<Vec<Testimonial>, ApiError> {
        self.get_json("/api/testimonials").await
    }

    /// `POST /api/waitlist`. Returns the backend's echo of the entry.
    ///
    /// # Errors
    ///
    /// Returns any backend, transport, or decode error.
    pub async fn join_waitlist(&self, entry: &WaitlistEntry) -> Result<serde_json::Value, ApiError> {
        self.send_json(Method::POST, "/api/waitlist", entry).await
    }

    /// Validate the waitlist form, then join.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] without sending anything when the form
    /// fails validation.
    pub async fn submit_waitlist(&self, form: &WaitlistForm) -> Result<serde_json::Value, ApiError> {
        let entry = form.validate()?;
        self.join_waitlist(&entry).await
    }
}
