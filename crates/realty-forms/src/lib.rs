//! # realty-forms
//!
//! Validation of user input for every form the client submits.
//!
//! Each form is a plain struct of raw values (strings as typed, flags, URL
//! lists) paired with a static [`Schema`]: a table of [`Constraint`]s per
//! field plus cross-field rules. One evaluator walks every table, so the
//! rules read as data and a failure never reaches the network layer.
//!
//! ```
//! use realty_forms::{Form, LoginForm};
//!
//! let form = LoginForm { username: String::new(), password: "pw".into() };
//! let errors = form.validate().unwrap_err();
//! assert_eq!(errors.get("username"), Some("Username is required"));
//! ```

pub mod constraint;
pub mod error;
pub mod forms;
pub mod schema;

pub use constraint::Constraint;
pub use error::{FieldError, ValidationErrors};
pub use forms::{
    ContactForm, Form, LoginForm, ProfileForm, PropertyForm, RegistrationForm, WaitlistForm,
};
pub use schema::{FieldRule, FieldValue, FieldsMatch, FormInput, Presence, Schema, Validated};
