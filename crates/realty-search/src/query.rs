//! Canonical query parameters for listing searches.

use std::fmt;

use crate::criteria::FilterCriteria;

/// Path of the listing page that consumes these parameters.
pub const LISTING_PATH: &str = "/properties";

/// Ordered `(key, value)` pairs. Keys always appear in the order
/// `location`, `propertyType`, `minPrice`, `maxPrice`, and a key is present
/// only when its value constrains the search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyQuery {
    params: Vec<(&'static str, String)>,
}

impl From<&FilterCriteria> for PropertyQuery {
    fn from(criteria: &FilterCriteria) -> Self {
        let mut params = Vec::with_capacity(4);
        if let Some(location) = &criteria.location {
            params.push(("location", location.clone()));
        }
        if let Some(kind) = &criteria.property_type {
            params.push(("propertyType", kind.clone()));
        }
        if criteria.price.min > 0 {
            params.push(("minPrice", criteria.price.min.to_string()));
        }
        if let Some(max) = criteria.price.max.filter(|m| *m > 0) {
            params.push(("maxPrice", max.to_string()));
        }
        Self { params }
    }
}

impl PropertyQuery {
    #[must_use]
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Percent-encoded `k=v&k=v`; empty when there are no parameters.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `path?query`, or just `path` when nothing is set.
    #[must_use]
    pub fn with_path(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{}", self.to_query_string())
        }
    }

    /// Navigation target on the listing page.
    #[must_use]
    pub fn listing_path(&self) -> String {
        self.with_path(LISTING_PATH)
    }
}

impl fmt::Display for PropertyQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_query_has_bare_path() {
        let query = FilterCriteria::default().to_query();
        assert!(query.is_empty());
        assert_eq!(query.to_query_string(), "");
        assert_eq!(query.listing_path(), "/properties");
    }

    #[test]
    fn values_are_percent_encoded() {
        let query = FilterCriteria::default().with_location("Los Angeles").to_query();
        assert_eq!(query.to_string(), "location=Los%20Angeles");
        assert_eq!(query.with_path("/api/properties"), "/api/properties?location=Los%20Angeles");
    }
}
