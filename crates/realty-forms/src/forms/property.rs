use realty_core::entities::Property;
use realty_core::requests::PropertyDraft;
use serde::Deserialize;

use super::Form;
use crate::constraint::Constraint;
use crate::error::ValidationErrors;
use crate::schema::{FieldRule, FormInput, Schema, Validated};

/// Largest accepted `bedrooms` value.
pub const MAX_BEDROOMS: u32 = 1_000;

pub static PROPERTY: Schema = Schema {
    name: "property",
    fields: &[
        FieldRule::text(
            "title",
            &[Constraint::MinLength(5, "Title must be at least 5 characters")],
        ),
        FieldRule::text(
            "description",
            &[Constraint::MinLength(
                20,
                "Description must be at least 20 characters",
            )],
        ),
        FieldRule::text("location", &[Constraint::MinLength(5, "Location is required")]),
        FieldRule::text("city", &[Constraint::MinLength(2, "City is required")]),
        FieldRule::text(
            "state",
            &[Constraint::MinLength(2, "State/Province is required")],
        ),
        FieldRule::number("price", &[Constraint::Positive("Price must be positive")]),
        FieldRule::text(
            "imageUrl",
            &[Constraint::Url("Please provide a valid main image URL")],
        ),
        FieldRule::text("additionalImages", &[Constraint::Url("Invalid url")]).optional(),
        FieldRule::number("squareFeet", &[Constraint::Positive("Area must be positive")]),
        FieldRule::number(
            "bedrooms",
            &[
                Constraint::Integer("Expected integer"),
                Constraint::NonNegative("Number of bedrooms must be positive"),
                Constraint::AtMost(MAX_BEDROOMS, "Number of bedrooms is too large"),
            ],
        ),
        FieldRule::number(
            "bathrooms",
            &[Constraint::NonNegative("Number of bathrooms must be positive")],
        ),
        FieldRule::text(
            "propertyType",
            &[Constraint::Required("Property type is required")],
        ),
        FieldRule::text(
            "listingType",
            &[Constraint::Required("Listing type is required")],
        ),
        FieldRule::number("latitude", &[]).optional(),
        FieldRule::number("longitude", &[]).optional(),
    ],
    matching: &[],
};

/// Create/edit listing form. Numeric fields hold the text as typed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyForm {
    pub title: String,
    pub description: String,
    pub location: String,
    pub city: String,
    pub state: String,
    pub price: String,
    pub image_url: String,
    pub additional_images: Vec<String>,
    pub square_feet: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub property_type: String,
    pub listing_type: String,
    pub is_featured: bool,
    pub is_new: bool,
    pub latitude: String,
    pub longitude: String,
}

impl Default for PropertyForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            location: String::new(),
            city: String::new(),
            state: String::new(),
            price: String::new(),
            image_url: String::new(),
            additional_images: Vec::new(),
            square_feet: String::new(),
            bedrooms: String::new(),
            bathrooms: String::new(),
            property_type: String::new(),
            listing_type: String::new(),
            is_featured: false,
            is_new: true,
            latitude: String::new(),
            longitude: String::new(),
        }
    }
}

impl From<&Property> for PropertyForm {
    /// Prefill the form from a fetched listing for editing.
    fn from(p: &Property) -> Self {
        Self {
            title: p.title.clone(),
            description: p.description.clone(),
            location: p.location.clone(),
            city: p.city.clone(),
            state: p.state.clone(),
            price: p.price.to_string(),
            image_url: p.image_url.clone(),
            additional_images: p.additional_images.clone(),
            square_feet: p.square_feet.to_string(),
            bedrooms: p.bedrooms.to_string(),
            bathrooms: p.bathrooms.to_string(),
            property_type: p.property_type.clone(),
            listing_type: p.listing_type.clone(),
            is_featured: p.is_featured,
            is_new: p.is_new,
            latitude: p.latitude.map(|v| v.to_string()).unwrap_or_default(),
            longitude: p.longitude.map(|v| v.to_string()).unwrap_or_default(),
        }
    }
}

impl Form for PropertyForm {
    type Output = PropertyDraft;

    const SCHEMA: &'static Schema = &PROPERTY;

    fn input(&self) -> FormInput {
        FormInput::new()
            .text("title", &self.title)
            .text("description", &self.description)
            .text("location", &self.location)
            .text("city", &self.city)
            .text("state", &self.state)
            .text("price", &self.price)
            .text("imageUrl", &self.image_url)
            .list("additionalImages", &self.additional_images)
            .text("squareFeet", &self.square_feet)
            .text("bedrooms", &self.bedrooms)
            .text("bathrooms", &self.bathrooms)
            .text("propertyType", &self.property_type)
            .text("listingType", &self.listing_type)
            .flag("isFeatured", self.is_featured)
            .flag("isNew", self.is_new)
            .text("latitude", &self.latitude)
            .text("longitude", &self.longitude)
    }

    // bedrooms was checked as an integer in 0..=MAX_BEDROOMS.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn build(&self, validated: &Validated) -> Result<PropertyDraft, ValidationErrors> {
        let number = |field: &str| validated.number(field).unwrap_or_default();
        Ok(PropertyDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            price: number("price"),
            location: self.location.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            bedrooms: number("bedrooms") as u32,
            bathrooms: number("bathrooms"),
            square_feet: number("squareFeet"),
            property_type: self.property_type.clone(),
            listing_type: self.listing_type.clone(),
            image_url: self.image_url.clone(),
            additional_images: self.additional_images.clone(),
            is_featured: self.is_featured,
            is_new: self.is_new,
            latitude: validated.number("latitude"),
            longitude: validated.number("longitude"),
        })
    }
}
