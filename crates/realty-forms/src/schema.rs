//! Form schemas and the evaluator that applies them.

use std::collections::BTreeMap;

use crate::constraint::{Checked, Constraint, EXPECTED_NUMBER, coerce_number};
use crate::error::ValidationErrors;

/// Raw value of one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
}

/// Field values keyed by their wire name (`fullName`, `squareFeet`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    values: BTreeMap<&'static str, FieldValue>,
}

impl FormInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, field: &'static str, value: &str) -> Self {
        self.values.insert(field, FieldValue::Text(value.to_string()));
        self
    }

    /// Insert `value` only when present; absent fields stay missing.
    #[must_use]
    pub fn maybe_text(self, field: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.text(field, v),
            None => self,
        }
    }

    #[must_use]
    pub fn flag(mut self, field: &'static str, value: bool) -> Self {
        self.values.insert(field, FieldValue::Flag(value));
        self
    }

    #[must_use]
    pub fn list(mut self, field: &'static str, values: &[String]) -> Self {
        self.values.insert(field, FieldValue::List(values.to_vec()));
        self
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    fn text_of(&self, field: &str) -> Option<&str> {
        match self.values.get(field) {
            Some(FieldValue::Text(s)) => Some(s),
            _ => None,
        }
    }
}

/// How a field's absence is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Missing reads as empty text and is checked.
    Required,
    /// Missing or blank skips every constraint.
    Optional,
    /// Missing skips; any provided value, even empty, is checked.
    IfPresent,
}

/// Constraints for one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub presence: Presence,
    /// Coerce text to a number before checking.
    pub numeric: bool,
    pub constraints: &'static [Constraint],
}

impl FieldRule {
    #[must_use]
    pub const fn text(field: &'static str, constraints: &'static [Constraint]) -> Self {
        Self {
            field,
            presence: Presence::Required,
            numeric: false,
            constraints,
        }
    }

    #[must_use]
    pub const fn number(field: &'static str, constraints: &'static [Constraint]) -> Self {
        Self {
            field,
            presence: Presence::Required,
            numeric: true,
            constraints,
        }
    }

    /// Rule for a boolean field (checkbox).
    #[must_use]
    pub const fn flag(field: &'static str, constraints: &'static [Constraint]) -> Self {
        Self::text(field, constraints)
    }

    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }

    #[must_use]
    pub const fn if_present(mut self) -> Self {
        self.presence = Presence::IfPresent;
        self
    }

    /// Evaluate this rule. Returns the coerced number for numeric fields.
    fn evaluate(&self, value: Option<&FieldValue>, errors: &mut ValidationErrors) -> Option<f64> {
        let empty = FieldValue::Text(String::new());
        let value = match (value, self.presence) {
            (None, Presence::Optional | Presence::IfPresent) => return None,
            (Some(FieldValue::Text(s)), Presence::Optional) if s.trim().is_empty() => {
                return None;
            }
            (None, Presence::Required) => &empty,
            (Some(v), _) => v,
        };

        match value {
            FieldValue::Text(raw) if self.numeric => {
                let Some(n) = coerce_number(raw) else {
                    errors.push(self.field, EXPECTED_NUMBER);
                    return None;
                };
                match self.first_failure(Checked::Number(n)) {
                    Some(message) => {
                        errors.push(self.field, message);
                        None
                    }
                    None => Some(n),
                }
            }
            FieldValue::Text(s) => {
                if let Some(message) = self.first_failure(Checked::Text(s)) {
                    errors.push(self.field, message);
                }
                None
            }
            FieldValue::Flag(b) => {
                if let Some(message) = self.first_failure(Checked::Flag(*b)) {
                    errors.push(self.field, message);
                }
                None
            }
            FieldValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if let Some(message) = self.first_failure(Checked::Text(item)) {
                        errors.push(format!("{}.{i}", self.field), message);
                    }
                }
                None
            }
        }
    }

    fn first_failure(&self, value: Checked<'_>) -> Option<&'static str> {
        self.constraints.iter().find_map(|c| c.check(value).err())
    }
}

/// Two text fields that must be equal; the failure lands on `field`.
#[derive(Debug, Clone, Copy)]
pub struct FieldsMatch {
    pub field: &'static str,
    pub other: &'static str,
    pub message: &'static str,
}

/// The full rule table for one form.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [FieldRule],
    pub matching: &'static [FieldsMatch],
}

/// Outcome of a successful evaluation: the coerced numeric fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validated {
    numbers: BTreeMap<&'static str, f64>,
}

impl Validated {
    /// Coerced value of a numeric field; `None` for optional fields left blank.
    #[must_use]
    pub fn number(&self, field: &str) -> Option<f64> {
        self.numbers.get(field).copied()
    }
}

impl Schema {
    /// Check `input` against every rule, collecting all failures.
    ///
    /// Cross-field rules run after the per-field pass and only report on
    /// fields that have not already failed.
    ///
    /// # Errors
    ///
    /// Returns every failed field when at least one rule is broken.
    pub fn validate(&self, input: &FormInput) -> Result<Validated, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut validated = Validated::default();

        for rule in self.fields {
            if let Some(n) = rule.evaluate(input.get(rule.field), &mut errors) {
                validated.numbers.insert(rule.field, n);
            }
        }

        for rule in self.matching {
            if errors.has(rule.field) {
                continue;
            }
            if input.text_of(rule.field) != input.text_of(rule.other) {
                errors.push(rule.field, rule.message);
            }
        }

        if errors.is_empty() {
            tracing::debug!(form = self.name, "form valid");
            Ok(validated)
        } else {
            tracing::debug!(form = self.name, failed = errors.len(), "form rejected");
            Err(errors)
        }
    }
}
