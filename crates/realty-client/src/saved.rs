//! Saved listings.

use futures::future::join_all;
use realty_core::entities::{Property, SavedProperty};

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /api/saved-properties/user/:id`: the raw saved entries.
    ///
    /// # Errors
    ///
    /// Returns any backend, transport, or decode error.
    pub async fn saved_entries(&self, user_id: i64) -> Result<Vec<SavedProperty>, ApiError> {
        self.get_json(&format!("/api/saved-properties/user/{user_id}")).await
    }

    /// Saved entries resolved to full listings.
    ///
    /// Lookups run concurrently; an entry whose listing cannot be fetched is
    /// dropped rather than failing the whole result.
    ///
    /// # Errors
    ///
    /// Returns an error only if the saved-entry list itself cannot be fetched.
    pub async fn saved_properties(&self, user_id: i64) -> Result<Vec<Property>, ApiError> {
        let entries = self.saved_entries(user_id).await?;
        let lookups = entries.iter().map(|e| self.get_property(e.property_id));
        let results = join_all(lookups).await;

        Ok(entries
            .iter()
            .zip(results)
            .filter_map(|(entry, result)| match result {
                Ok(property) => Some(property),
                Err(e) => {
                    tracing::warn!(property_id = entry.property_id, %e, "saved listing lookup failed");
                    None
                }
            })
            .collect())
    }
}
