//! Entity structs for backend-owned Realty records.
//!
//! Field names follow the backend's camelCase JSON. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` so payload shapes can be
//! checked against the generated schema in tests.

mod agent;
mod property;
mod saved;
mod session;
mod testimonial;

pub use agent::Agent;
pub use property::Property;
pub use saved::SavedProperty;
pub use session::Session;
pub use testimonial::Testimonial;
