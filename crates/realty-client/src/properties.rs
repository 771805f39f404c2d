//! Listing endpoints.

use realty_core::entities::Property;
use realty_core::requests::PropertySubmission;
use realty_forms::{Form, PropertyForm};
use realty_search::PropertyQuery;
use reqwest::Method;

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /api/properties`, with the query's parameters when any are set.
    ///
    /// # Errors
    ///
    /// Returns any backend, transport, or decode error.
    pub async fn list_properties(&self, query: &PropertyQuery) -> Result<Vec<Property>, ApiError> {
        self.get_json(&query.with_path("/api/properties")).await
    }

    /// `GET /api/properties/:id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id.
    pub async fn get_property(&self, id: i64) -> Result<Property, ApiError> {
        self.get_json(&format!("/api/properties/{id}")).await
    }

    /// `GET /api/properties/featured/list`.
    ///
    /// # Errors
    ///
    /// Returns any backend, transport, or decode error.
    pub async fn featured_properties(&self) -> Result<Vec<Property>, ApiError> {
        self.get_json("/api/properties/featured/list").await
    }

    /// `GET /api/properties/search?ownerId=`.
    ///
    /// # Errors
    ///
    /// Returns any backend, transport, or decode error.
    pub async fn properties_by_owner(&self, owner_id: i64) -> Result<Vec<Property>, ApiError> {
        self.get_json(&format!("/api/properties/search?ownerId={owner_id}")).await
    }

    /// `POST /api/properties`.
    ///
    /// # Errors
    ///
    /// Returns any backend, transport, or decode error.
    pub async fn create_property(
        &self,
        submission: &PropertySubmission,
    ) -> Result<Property, ApiError> {
        self.send_json(Method::POST, "/api/properties", submission).await
    }

    /// `PATCH /api/properties/:id`.
    ///
    /// # Errors
    ///
    /// Returns any backend, transport, or decode error.
    pub async fn update_property(
        &self,
        id: i64,
        submission: &PropertySubmission,
    ) -> Result<Property, ApiError> {
        self.send_json(Method::PATCH, &format!("/api/properties/{id}"), submission).await
    }

    /// Validate a listing form and create it for `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] without calling the backend when the form
    /// fails validation.
    pub async fn submit_property(
        &self,
        form: &PropertyForm,
        owner_id: i64,
    ) -> Result<Property, ApiError> {
        let draft = form.validate()?;
        self.create_property(&PropertySubmission { owner_id, draft }).await
    }

    /// Validate a listing form and apply it to listing `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] without calling the backend when the form
    /// fails validation.
    pub async fn submit_property_update(
        &self,
        id: i64,
        form: &PropertyForm,
        owner_id: i64,
    ) -> Result<Property, ApiError> {
        let draft = form.validate()?;
        self.update_property(id, &PropertySubmission { owner_id, draft }).await
    }
}
