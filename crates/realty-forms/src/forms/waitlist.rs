use realty_core::requests::WaitlistEntry;
use serde::Deserialize;

use super::Form;
use crate::constraint::Constraint;
use crate::error::ValidationErrors;
use crate::schema::{FieldRule, FormInput, Schema, Validated};

/// Interest categories offered on the waitlist form.
pub const PROPERTY_INTERESTS: [&str; 4] =
    ["residential", "commercial", "investment", "international"];

pub static WAITLIST: Schema = Schema {
    name: "waitlist",
    fields: &[
        FieldRule::text(
            "fullName",
            &[Constraint::MinLength(2, "Please enter your full name")],
        ),
        FieldRule::text(
            "email",
            &[Constraint::Email("Please enter a valid email address")],
        ),
        FieldRule::text(
            "propertyInterest",
            &[Constraint::Required("Please select your property interest")],
        ),
        FieldRule::flag(
            "agreedToTerms",
            &[Constraint::LiteralTrue("You must agree to the terms")],
        ),
    ],
    matching: &[],
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaitlistForm {
    pub full_name: String,
    pub email: String,
    pub property_interest: String,
    pub agreed_to_terms: bool,
}

impl Form for WaitlistForm {
    type Output = WaitlistEntry;

    const SCHEMA: &'static Schema = &WAITLIST;

    fn input(&self) -> FormInput {
        FormInput::new()
            .text("fullName", &self.full_name)
            .text("email", &self.email)
            .text("propertyInterest", &self.property_interest)
            .flag("agreedToTerms", self.agreed_to_terms)
    }

    fn build(&self, _: &Validated) -> Result<WaitlistEntry, ValidationErrors> {
        Ok(WaitlistEntry {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            property_interest: self.property_interest.clone(),
            agreed_to_terms: self.agreed_to_terms,
        })
    }
}
