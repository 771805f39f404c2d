//! Multipart image uploads.
//!
//! Limits are checked locally before anything is sent: a per-file size cap
//! and, for batches, a cap on the total number of images (counting the ones
//! already attached). Batches are uploaded concurrently; the first failure
//! fails the batch, and files that already went through are not removed.

use std::path::Path;

use futures::future::try_join_all;
use mime_guess::Mime;
use realty_core::responses::UploadedImage;
use reqwest::multipart::{Form, Part};

use crate::http::check_response;
use crate::{ApiClient, ApiError};

/// Which upload endpoint to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadTarget {
    Profile,
    Property,
}

impl UploadTarget {
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Profile => "/api/upload/profile",
            Self::Property => "/api/upload/property",
        }
    }

    /// Multipart field name the backend reads the file from.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Profile => "profileImage",
            Self::Property => "propertyImage",
        }
    }
}

/// An in-memory file ready to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUpload`] if the file cannot be read.
    pub async fn read(path: &Path) -> Result<Self, ApiError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ApiError::InvalidUpload(format!("{}: {e}", path.display())))?;
        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self { file_name, bytes })
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// MIME type guessed from the extension.
    #[must_use]
    pub fn mime_type(&self) -> Mime {
        mime_guess::from_path(&self.file_name).first_or_octet_stream()
    }
}

#[allow(clippy::cast_precision_loss)]
fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

impl ApiClient {
    fn check_size(&self, file: &UploadFile) -> Result<(), ApiError> {
        let max = self.upload.max_size_bytes();
        let size = file.len() as u64;
        if size > max {
            return Err(ApiError::InvalidUpload(format!(
                "{}: max file size is {}MB, file is {:.2}MB",
                file.file_name,
                self.upload.max_size_mb,
                megabytes(size)
            )));
        }
        Ok(())
    }

    /// Largest batch accepted for `target`.
    #[must_use]
    pub const fn max_batch(&self, target: UploadTarget) -> usize {
        match target {
            UploadTarget::Property => self.upload.max_property_images,
            UploadTarget::Profile => self.upload.max_files,
        }
    }

    /// Upload one image and return its URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUpload`] if the file is over the size
    /// limit (nothing is sent), or any backend/transport error.
    pub async fn upload_image(
        &self,
        target: UploadTarget,
        file: &UploadFile,
    ) -> Result<String, ApiError> {
        self.check_size(file)?;
        self.send_upload(target, file).await
    }

    /// Upload several images concurrently.
    ///
    /// `already_attached` counts images the form already holds; the total may
    /// not exceed [`Self::max_batch`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUpload`] before sending anything if a limit
    /// is broken, otherwise the first upload failure.
    pub async fn upload_images(
        &self,
        target: UploadTarget,
        files: &[UploadFile],
        already_attached: usize,
    ) -> Result<Vec<String>, ApiError> {
        let max = self.max_batch(target);
        if files.len() + already_attached > max {
            return Err(ApiError::InvalidUpload(format!(
                "you can upload a maximum of {max} images"
            )));
        }
        for file in files {
            self.check_size(file)?;
        }
        try_join_all(files.iter().map(|f| self.send_upload(target, f))).await
    }

    async fn send_upload(&self, target: UploadTarget, file: &UploadFile) -> Result<String, ApiError> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(file.mime_type().essence_str())
            .map_err(|e| ApiError::InvalidUpload(e.to_string()))?;
        let form = Form::new().part(target.field_name(), part);

        tracing::debug!(
            path = target.endpoint(),
            file = %file.file_name,
            bytes = file.len(),
            "uploading image"
        );
        let resp = self
            .http
            .post(self.api.endpoint(target.endpoint()))
            .multipart(form)
            .send()
            .await?;
        let uploaded: UploadedImage = check_response(resp).await?.json().await?;
        Ok(uploaded.image_url)
    }
}
