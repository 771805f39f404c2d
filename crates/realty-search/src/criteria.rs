//! The four listing filter selections.

use realty_core::entities::Property;
use serde::Serialize;

use crate::catalogue::{ANY_LOCATION, ANY_TYPE};
use crate::price::{PriceBucket, PriceRange};
use crate::query::PropertyQuery;

/// Filter selections. `None` means "any"; the sentinel labels shown in
/// selectors ("Any Location", "Any Type", "Any Price") map to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub price: PriceRange,
}

/// `None` for blank input or the "any" sentinel.
fn selection(value: &str, sentinel: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty() && value != sentinel).then(|| value.to_string())
}

impl FilterCriteria {
    /// Criteria from the home-page selectors: two labels and a price bucket
    /// label.
    #[must_use]
    pub fn from_labels(location: &str, property_type: &str, price_label: &str) -> Self {
        Self {
            location: selection(location, ANY_LOCATION),
            property_type: selection(property_type, ANY_TYPE),
            price: PriceBucket::from_label(price_label).range(),
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: &str) -> Self {
        self.location = selection(location, ANY_LOCATION);
        self
    }

    #[must_use]
    pub fn with_property_type(mut self, property_type: &str) -> Self {
        self.property_type = selection(property_type, ANY_TYPE);
        self
    }

    #[must_use]
    pub const fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    /// True when nothing narrows the result set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.location.is_none() && self.property_type.is_none() && self.price.is_unbounded()
    }

    #[must_use]
    pub fn to_query(&self) -> PropertyQuery {
        PropertyQuery::from(self)
    }

    /// Parse criteria back out of a query string (with or without a leading
    /// `?`). Unknown keys and unparseable prices are ignored.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut criteria = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode(value);
            match key {
                "location" => criteria.location = selection(&value, ANY_LOCATION),
                "propertyType" => criteria.property_type = selection(&value, ANY_TYPE),
                "minPrice" => {
                    if let Ok(min) = value.parse() {
                        criteria.price.min = min;
                    }
                }
                "maxPrice" => {
                    if let Ok(max) = value.parse::<u64>() {
                        criteria.price.max = (max > 0).then_some(max);
                    }
                }
                _ => {}
            }
        }
        criteria
    }

    /// Client-side filter over fetched listings.
    ///
    /// Location matches the city exactly or appears in the street location,
    /// ignoring case. Property type must match exactly. Price bounds are
    /// inclusive.
    #[must_use]
    pub fn matches(&self, property: &Property) -> bool {
        let location_ok = self.location.as_deref().is_none_or(|wanted| {
            property.city.eq_ignore_ascii_case(wanted)
                || property
                    .location
                    .to_lowercase()
                    .contains(&wanted.to_lowercase())
        });
        let type_ok = self
            .property_type
            .as_deref()
            .is_none_or(|wanted| property.property_type == wanted);

        location_ok && type_ok && self.price.contains(property.price)
    }
}

fn decode(value: &str) -> String {
    let spaced = value.replace('+', " ");
    urlencoding::decode(&spaced).map_or(spaced.clone(), |v| v.into_owned())
}
