//! Small response envelopes returned by the backend.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response of `POST /api/upload/profile` and `POST /api/upload/property`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub image_url: String,
}

/// Error body the backend attaches to non-success responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
