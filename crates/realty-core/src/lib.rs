//! # realty-core
//!
//! Core types and error types for Realty.
//!
//! This crate provides the foundational types shared across all Realty crates:
//! - Entity structs for backend-owned records (session user, properties, agents, etc.)
//! - The `UserType` account enum
//! - Explicit request payloads, one per backend operation
//! - Cross-cutting error types
//! - The mortgage payment calculator

pub mod entities;
pub mod enums;
pub mod errors;
pub mod mortgage;
pub mod requests;
pub mod responses;

pub use entities::{Agent, Property, SavedProperty, Session, Testimonial};
pub use enums::UserType;
pub use errors::CoreError;
