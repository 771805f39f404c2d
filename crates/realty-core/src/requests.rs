//! Request payloads sent to the backend, one explicit struct per operation.
//!
//! These replace free-form JSON objects: every field the backend accepts is
//! named here, and optional fields are omitted from the body when unset.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::UserType;

/// Body of `POST /api/auth/login`.
#[derive(Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /api/users/register`.
#[derive(Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
    pub email: String,
    pub full_name: String,
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl RegisterRequest {
    /// Fill `confirm_password` from `password` when it was omitted.
    ///
    /// The backend requires both fields; callers that collect the password
    /// once (e.g. non-interactive CLI use) leave the confirmation empty.
    #[must_use]
    pub fn with_confirmation(mut self) -> Self {
        let missing = self
            .confirm_password
            .as_deref()
            .is_none_or(str::is_empty);
        if missing && !self.password.is_empty() {
            self.confirm_password = Some(self.password.clone());
        }
        self
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("user_type", &self.user_type)
            .field("phone_number", &self.phone_number)
            .finish_non_exhaustive()
    }
}

/// Body of `PATCH /api/users/:id`. Only fields that are `Some` are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl ProfileUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.bio.is_none()
            && self.phone_number.is_none()
            && self.profile_image.is_none()
    }
}

/// Validated property attributes, owned by the form until submission.
///
/// Only `realty-forms` builds these from user input; the fields are public
/// so fetched listings can be turned back into a draft for editing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub city: String,
    pub state: String,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub square_feet: f64,
    pub property_type: String,
    pub listing_type: String,
    pub image_url: String,
    #[serde(default)]
    pub additional_images: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_new: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

const fn default_true() -> bool {
    true
}

impl From<crate::entities::Property> for PropertyDraft {
    fn from(p: crate::entities::Property) -> Self {
        Self {
            title: p.title,
            description: p.description,
            price: p.price,
            location: p.location,
            city: p.city,
            state: p.state,
            bedrooms: p.bedrooms,
            bathrooms: p.bathrooms,
            square_feet: p.square_feet,
            property_type: p.property_type,
            listing_type: p.listing_type,
            image_url: p.image_url,
            additional_images: p.additional_images,
            is_featured: p.is_featured,
            is_new: p.is_new,
            latitude: p.latitude,
            longitude: p.longitude,
        }
    }
}

/// Body of `POST /api/properties` and `PATCH /api/properties/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertySubmission {
    pub owner_id: i64,
    #[serde(flatten)]
    pub draft: PropertyDraft,
}

/// Body of `POST /api/waitlist`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub full_name: String,
    pub email: String,
    pub property_interest: String,
    pub agreed_to_terms: bool,
}

/// A validated contact-form message. The backend exposes no endpoint for it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn register(confirm: Option<&str>) -> RegisterRequest {
        RegisterRequest {
            username: "jdoe".into(),
            password: "secret1".into(),
            confirm_password: confirm.map(String::from),
            email: "jdoe@example.com".into(),
            full_name: "Jane Doe".into(),
            user_type: UserType::RentAndBuy,
            phone_number: None,
        }
    }

    #[test]
    fn confirmation_is_filled_when_missing() {
        let req = register(None).with_confirmation();
        assert_eq!(req.confirm_password.as_deref(), Some("secret1"));

        let req = register(Some("")).with_confirmation();
        assert_eq!(req.confirm_password.as_deref(), Some("secret1"));
    }

    #[test]
    fn explicit_confirmation_is_kept() {
        let req = register(Some("other")).with_confirmation();
        assert_eq!(req.confirm_password.as_deref(), Some("other"));
    }

    #[test]
    fn debug_output_hides_passwords() {
        let rendered = format!("{:?} {:?}", register(None), LoginRequest::new("a", "hunter2"));
        assert!(!rendered.contains("secret1"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn profile_update_sends_only_provided_fields() {
        let update = ProfileUpdate {
            full_name: Some("B".into()),
            ..ProfileUpdate::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({ "fullName": "B" })
        );
        assert!(ProfileUpdate::default().is_empty());
    }

    #[test]
    fn submission_flattens_draft_with_owner() {
        let submission = PropertySubmission {
            owner_id: 3,
            draft: PropertyDraft {
                title: "Lake house".into(),
                description: "Quiet house on the lake with a private dock".into(),
                price: 450_000.0,
                location: "12 Shore Road".into(),
                city: "Seattle".into(),
                state: "WA".into(),
                bedrooms: 3,
                bathrooms: 2.0,
                square_feet: 1800.0,
                property_type: "House".into(),
                listing_type: "For Sale".into(),
                image_url: "https://img.example.com/1.jpg".into(),
                additional_images: vec![],
                is_featured: false,
                is_new: true,
                latitude: None,
                longitude: None,
            },
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["ownerId"], 3);
        assert_eq!(json["squareFeet"], 1800.0);
        assert!(json.get("latitude").is_none());
    }
}
