use realty_core::requests::ProfileUpdate;
use serde::Deserialize;

use super::Form;
use crate::constraint::Constraint;
use crate::error::ValidationErrors;
use crate::schema::{FieldRule, FormInput, Schema, Validated};

pub static PROFILE: Schema = Schema {
    name: "profile",
    fields: &[
        FieldRule::text(
            "fullName",
            &[
                Constraint::MinLength(2, "Full name must be at least 2 characters"),
                Constraint::MaxLength(100, "Full name must be at most 100 characters"),
            ],
        )
        .if_present(),
        FieldRule::text("bio", &[]).optional(),
        FieldRule::text("phoneNumber", &[]).optional(),
        FieldRule::text("profileImage", &[]).optional(),
    ],
    matching: &[],
};

/// Profile edit. `None` leaves a field untouched; `Some("")` clears the
/// optional ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileForm {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub phone_number: Option<String>,
    pub profile_image: Option<String>,
}

impl Form for ProfileForm {
    type Output = ProfileUpdate;

    const SCHEMA: &'static Schema = &PROFILE;

    fn input(&self) -> FormInput {
        FormInput::new()
            .maybe_text("fullName", self.full_name.as_deref())
            .maybe_text("bio", self.bio.as_deref())
            .maybe_text("phoneNumber", self.phone_number.as_deref())
            .maybe_text("profileImage", self.profile_image.as_deref())
    }

    fn build(&self, _: &Validated) -> Result<ProfileUpdate, ValidationErrors> {
        Ok(ProfileUpdate {
            full_name: self.full_name.clone(),
            email: None,
            bio: self.bio.clone(),
            phone_number: self.phone_number.clone(),
            profile_image: self.profile_image.clone(),
        })
    }
}
