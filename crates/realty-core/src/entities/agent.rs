use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A featured real-estate agent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub image_url: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// LinkedIn handle (path segment after `/in/`).
    #[serde(default)]
    pub linkedin: Option<String>,
    /// Instagram handle.
    #[serde(default)]
    pub instagram: Option<String>,
}

impl Agent {
    #[must_use]
    pub fn linkedin_url(&self) -> Option<String> {
        self.linkedin
            .as_deref()
            .map(|handle| format!("https://linkedin.com/in/{handle}"))
    }

    #[must_use]
    pub fn instagram_url(&self) -> Option<String> {
        self.instagram
            .as_deref()
            .map(|handle| format!("https://instagram.com/{handle}"))
    }
}
