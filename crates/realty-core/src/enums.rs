//! Account and listing enums for Realty.
//!
//! Wire values match the backend exactly (`"Rent & Buy"`, `"Landlord & Sell"`),
//! so these enums serialize with explicit `#[serde(rename)]` attributes rather
//! than a case convention.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// UserType
// ---------------------------------------------------------------------------

/// Account type chosen at registration.
///
/// Only [`UserType::LandlordAndSell`] accounts may create and manage listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum UserType {
    #[default]
    #[serde(rename = "Rent & Buy")]
    RentAndBuy,
    #[serde(rename = "Landlord & Sell")]
    LandlordAndSell,
}

impl UserType {
    pub const ALL: [Self; 2] = [Self::RentAndBuy, Self::LandlordAndSell];

    /// Return the wire representation, also used as the `userType` storage value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RentAndBuy => "Rent & Buy",
            Self::LandlordAndSell => "Landlord & Sell",
        }
    }

    /// Whether this account may create and edit listings.
    #[must_use]
    pub const fn can_manage_listings(self) -> bool {
        matches!(self, Self::LandlordAndSell)
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "user type",
                value: s.to_string(),
            })
    }
}
