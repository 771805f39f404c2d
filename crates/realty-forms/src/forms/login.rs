use std::fmt;

use realty_core::requests::LoginRequest;
use serde::Deserialize;

use super::Form;
use crate::constraint::Constraint;
use crate::error::ValidationErrors;
use crate::schema::{FieldRule, FormInput, Schema, Validated};

pub static LOGIN: Schema = Schema {
    name: "login",
    fields: &[
        FieldRule::text("username", &[Constraint::Required("Username is required")]),
        FieldRule::text("password", &[Constraint::Required("Password is required")]),
    ],
    matching: &[],
};

#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl Form for LoginForm {
    type Output = LoginRequest;

    const SCHEMA: &'static Schema = &LOGIN;

    fn input(&self) -> FormInput {
        FormInput::new()
            .text("username", &self.username)
            .text("password", &self.password)
    }

    fn build(&self, _: &Validated) -> Result<LoginRequest, ValidationErrors> {
        Ok(LoginRequest::new(&self.username, &self.password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_required() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(errors.get("username"), Some("Username is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn credentials_pass_through_untrimmed() {
        let form = LoginForm {
            username: "jdoe".into(),
            password: " spaced ".into(),
        };
        assert_eq!(form.validate().unwrap().password, " spaced ");
    }
}
