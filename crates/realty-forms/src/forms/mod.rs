//! The client's forms, one module each.

mod contact;
mod login;
mod profile;
mod property;
mod registration;
mod waitlist;

pub use contact::{CONTACT, ContactForm};
pub use login::{LOGIN, LoginForm};
pub use profile::{PROFILE, ProfileForm};
pub use property::{PROPERTY, PropertyForm};
pub use registration::{REGISTRATION, RegistrationForm};
pub use waitlist::{PROPERTY_INTERESTS, WAITLIST, WaitlistForm};

use crate::error::ValidationErrors;
use crate::schema::{FormInput, Schema, Validated};

/// A form whose raw values are checked against a static schema and then
/// converted into the typed request the backend accepts.
pub trait Form {
    type Output;

    const SCHEMA: &'static Schema;

    /// Raw values keyed by wire field name.
    fn input(&self) -> FormInput;

    /// Build the typed output once the schema has passed.
    ///
    /// # Errors
    ///
    /// Implementations return `ValidationErrors` only for conversions the
    /// schema cannot express.
    fn build(&self, validated: &Validated) -> Result<Self::Output, ValidationErrors>;

    /// Validate and convert in one step.
    ///
    /// # Errors
    ///
    /// Returns every failed field; the output is only produced when none fail.
    fn validate(&self) -> Result<Self::Output, ValidationErrors> {
        let validated = Self::SCHEMA.validate(&self.input())?;
        self.build(&validated)
    }
}

/// `None` for blank text so optional fields are left out of request bodies.
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
