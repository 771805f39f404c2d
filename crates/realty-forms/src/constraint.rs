//! Constraint kinds and the checks behind them.

use validator::ValidateEmail;

/// Message used when a numeric field holds text that does not parse.
pub const EXPECTED_NUMBER: &str = "Expected number";

/// A single rule applied to one field value.
///
/// Every variant carries the message shown when the rule fails. A constraint
/// that does not apply to the value's kind (e.g. `Positive` on text) passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Non-empty text or list.
    Required(&'static str),
    /// At least `n` characters.
    MinLength(usize, &'static str),
    /// At most `n` characters.
    MaxLength(usize, &'static str),
    Email(&'static str),
    /// Absolute URL (scheme required).
    Url(&'static str),
    /// Strictly greater than zero.
    Positive(&'static str),
    /// Zero or greater.
    NonNegative(&'static str),
    /// No fractional part.
    Integer(&'static str),
    /// At most `n`.
    AtMost(u32, &'static str),
    /// Text equal to one of the listed values.
    OneOf(&'static [&'static str], &'static str),
    /// Flag that must be set.
    LiteralTrue(&'static str),
}

/// A value as the evaluator sees it, after numeric coercion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Checked<'a> {
    Text(&'a str),
    Number(f64),
    Flag(bool),
}

impl Constraint {
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Required(m)
            | Self::MinLength(_, m)
            | Self::MaxLength(_, m)
            | Self::Email(m)
            | Self::Url(m)
            | Self::Positive(m)
            | Self::NonNegative(m)
            | Self::Integer(m)
            | Self::AtMost(_, m)
            | Self::OneOf(_, m)
            | Self::LiteralTrue(m) => m,
        }
    }

    /// Whether `value` satisfies this constraint.
    #[must_use]
    pub fn accepts(&self, value: Checked<'_>) -> bool {
        match (self, value) {
            (Self::Required(_), Checked::Text(s)) => !s.is_empty(),
            (Self::MinLength(n, _), Checked::Text(s)) => s.chars().count() >= *n,
            (Self::MaxLength(n, _), Checked::Text(s)) => s.chars().count() <= *n,
            (Self::Email(_), Checked::Text(s)) => s.validate_email(),
            (Self::Url(_), Checked::Text(s)) => url::Url::parse(s).is_ok(),
            (Self::OneOf(values, _), Checked::Text(s)) => values.contains(&s),
            (Self::Positive(_), Checked::Number(n)) => n > 0.0,
            (Self::NonNegative(_), Checked::Number(n)) => n >= 0.0,
            (Self::Integer(_), Checked::Number(n)) => n.fract() == 0.0,
            (Self::AtMost(max, _), Checked::Number(n)) => n <= f64::from(*max),
            (Self::LiteralTrue(_), Checked::Flag(b)) => b,
            _ => true,
        }
    }

    /// `Err(message)` when `value` is rejected.
    ///
    /// # Errors
    ///
    /// Returns the constraint's message when [`Self::accepts`] is false.
    pub fn check(&self, value: Checked<'_>) -> Result<(), &'static str> {
        if self.accepts(value) {
            Ok(())
        } else {
            Err(self.message())
        }
    }
}

/// Coerce raw numeric input. Blank input reads as zero, matching how number
/// inputs submit an untouched field; anything else must parse as a finite
/// number.
#[must_use]
pub fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
