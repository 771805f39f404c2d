use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A customer testimonial shown on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub quote: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    #[serde(default)]
    pub image_url: Option<String>,
}
