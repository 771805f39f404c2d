use std::fmt;

use realty_core::enums::UserType;
use realty_core::requests::RegisterRequest;
use serde::Deserialize;

use super::{Form, non_blank};
use crate::constraint::Constraint;
use crate::error::ValidationErrors;
use crate::schema::{FieldRule, FieldsMatch, FormInput, Schema, Validated};

const USER_TYPE_REQUIRED: &str = "Please select a user type";

pub static REGISTRATION: Schema = Schema {
    name: "registration",
    fields: &[
        FieldRule::text(
            "username",
            &[Constraint::MinLength(3, "Username must be at least 3 characters")],
        ),
        FieldRule::text(
            "password",
            &[Constraint::MinLength(6, "Password must be at least 6 characters")],
        ),
        FieldRule::text(
            "confirmPassword",
            &[Constraint::MinLength(6, "Confirm password is required")],
        ),
        FieldRule::text(
            "email",
            &[Constraint::Email("Please enter a valid email address")],
        ),
        FieldRule::text("fullName", &[Constraint::MinLength(3, "Full name is required")]),
        FieldRule::text(
            "userType",
            &[Constraint::OneOf(
                &["Rent & Buy", "Landlord & Sell"],
                USER_TYPE_REQUIRED,
            )],
        ),
        FieldRule::text("phoneNumber", &[]).optional(),
    ],
    matching: &[FieldsMatch {
        field: "confirmPassword",
        other: "password",
        message: "Passwords do not match",
    }],
};

/// Sign-up form. `user_type` holds the label exactly as selected.
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub email: String,
    pub full_name: String,
    pub user_type: String,
    pub phone_number: String,
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("user_type", &self.user_type)
            .finish_non_exhaustive()
    }
}

impl Form for RegistrationForm {
    type Output = RegisterRequest;

    const SCHEMA: &'static Schema = &REGISTRATION;

    fn input(&self) -> FormInput {
        FormInput::new()
            .text("username", &self.username)
            .text("password", &self.password)
            .text("confirmPassword", &self.confirm_password)
            .text("email", &self.email)
            .text("fullName", &self.full_name)
            .text("userType", &self.user_type)
            .text("phoneNumber", &self.phone_number)
    }

    fn build(&self, _: &Validated) -> Result<RegisterRequest, ValidationErrors> {
        let user_type: UserType = self
            .user_type
            .parse()
            .map_err(|_| ValidationErrors::single("userType", USER_TYPE_REQUIRED))?;
        Ok(RegisterRequest {
            username: self.username.clone(),
            password: self.password.clone(),
            confirm_password: Some(self.confirm_password.clone()),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            user_type,
            phone_number: non_blank(&self.phone_number),
        })
    }
}
