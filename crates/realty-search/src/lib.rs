//! # realty-search
//!
//! Translates listing filter selections into the canonical query parameters
//! the backend and listing page understand.
//!
//! - [`FilterCriteria`]: the four selections (location, property type,
//!   price bounds), each defaulting to "any"
//! - [`PriceBucket`]: the preset price ranges offered on the home page
//! - [`PropertyQuery`]: ordered `location`, `propertyType`, `minPrice`,
//!   `maxPrice` parameters with unset values omitted
//!
//! Everything here is pure: no network access and no persistent state.

pub mod catalogue;
pub mod criteria;
pub mod price;
pub mod query;

pub use criteria::FilterCriteria;
pub use price::{PriceBucket, PriceRange};
pub use query::PropertyQuery;
