use realty_core::requests::ContactMessage;
use serde::Deserialize;

use super::Form;
use crate::constraint::Constraint;
use crate::error::ValidationErrors;
use crate::schema::{FieldRule, FormInput, Schema, Validated};

pub static CONTACT: Schema = Schema {
    name: "contact",
    fields: &[
        FieldRule::text(
            "name",
            &[Constraint::MinLength(2, "Name must be at least 2 characters.")],
        ),
        FieldRule::text(
            "email",
            &[Constraint::Email("Please enter a valid email address.")],
        ),
        FieldRule::text(
            "phone",
            &[Constraint::MinLength(10, "Please enter a valid phone number.")],
        ),
        FieldRule::text(
            "message",
            &[Constraint::MinLength(10, "Message must be at least 10 characters.")],
        ),
    ],
    matching: &[],
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl Form for ContactForm {
    type Output = ContactMessage;

    const SCHEMA: &'static Schema = &CONTACT;

    fn input(&self) -> FormInput {
        FormInput::new()
            .text("name", &self.name)
            .text("email", &self.email)
            .text("phone", &self.phone)
            .text("message", &self.message)
    }

    fn build(&self, _: &Validated) -> Result<ContactMessage, ValidationErrors> {
        Ok(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
        })
    }
}
