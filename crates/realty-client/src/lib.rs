//! # realty-client
//!
//! Typed access to the Realty REST backend.
//!
//! One [`ApiClient`] covers every route the front end uses:
//! - accounts: login, registration, profile reads and updates
//! - listings: search, detail, featured, by owner, create, update
//! - directory: agents and testimonials
//! - saved listings, the waitlist, and image uploads
//!
//! Status codes are classified into [`ApiError`] in one place
//! ([`http::check_response`]); form-backed calls validate locally first and
//! never send a request for invalid input.

mod accounts;
mod directory;
mod error;
pub mod http;
mod properties;
mod saved;
pub mod upload;

pub use error::ApiError;
pub use upload::{UploadFile, UploadTarget};

use realty_config::{ApiConfig, RealtyConfig, UploadConfig};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::check_response;

/// HTTP client bound to one backend origin.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api: ApiConfig,
    upload: UploadConfig,
}

impl ApiClient {
    /// Build a client from the `api` and `upload` config sections.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Setup`] if the underlying `reqwest::Client`
    /// cannot be built.
    pub fn new(api: &ApiConfig, upload: &UploadConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().user_agent(api.user_agent.clone());
        if let Some(timeout) = api.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ApiError::Setup)?;
        Ok(Self {
            http,
            api: api.clone(),
            upload: upload.clone(),
        })
    }

    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(config: &RealtyConfig) -> Result<Self, ApiError> {
        Self::new(&config.api, &config.upload)
    }

    /// Backend origin without a trailing slash.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.api.origin()
    }

    #[must_use]
    pub const fn upload_limits(&self) -> &UploadConfig {
        &self.upload
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(method = "GET", path, "api request");
        let resp = self.http.get(self.api.endpoint(path)).send().await?;
        Ok(check_response(resp).await?.json().await?)
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(method = %method, path, "api request");
        let resp = self
            .http
            .request(method, self.api.endpoint(path))
            .json(body)
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_timeout() {
        let api = ApiConfig {
            timeout_secs: Some(5),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&api, &UploadConfig::default()).unwrap();
        assert_eq!(client.origin(), "http://localhost:5000");
        assert_eq!(client.upload_limits().max_property_images, 4);
    }
}
