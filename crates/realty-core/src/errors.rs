//! Cross-cutting error types for Realty.
//!
//! Errors that belong to one layer (`ApiError`, `AuthError`, `ConfigError`)
//! live in their own crates. The binary converges them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Realty crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A string did not name a known variant of a closed set.
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    /// Data failed a domain constraint.
    #[error("Validation error: {0}")]
    Validation(String),
}
