//! Preset price buckets and the range each one selects.

use serde::Serialize;

use crate::catalogue::ANY_PRICE;

/// Inclusive price bounds in whole currency units. `min == 0` and
/// `max == None` mean unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: Option<u64>,
}

impl PriceRange {
    pub const ANY: Self = Self { min: 0, max: None };

    #[must_use]
    pub const fn new(min: u64, max: Option<u64>) -> Self {
        Self { min, max }
    }

    /// Range from slider values, where `0` on either end means unset.
    #[must_use]
    pub const fn from_bounds(min: u64, max: u64) -> Self {
        Self {
            min,
            max: if max == 0 { None } else { Some(max) },
        }
    }

    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min == 0 && self.max.is_none()
    }

    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        #[allow(clippy::cast_precision_loss)]
        let (min, max) = (self.min as f64, self.max.map(|m| m as f64));
        price >= min && max.is_none_or(|max| price <= max)
    }
}

/// The price choices on the home-page search form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PriceBucket {
    #[default]
    Any,
    HalfToOneMillion,
    OneToTwoMillion,
    TwoToFiveMillion,
    FiveMillionPlus,
}

impl PriceBucket {
    pub const ALL: [Self; 5] = [
        Self::Any,
        Self::HalfToOneMillion,
        Self::OneToTwoMillion,
        Self::TwoToFiveMillion,
        Self::FiveMillionPlus,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Any => ANY_PRICE,
            Self::HalfToOneMillion => "$500,000 - $1,000,000",
            Self::OneToTwoMillion => "$1,000,000 - $2,000,000",
            Self::TwoToFiveMillion => "$2,000,000 - $5,000,000",
            Self::FiveMillionPlus => "$5,000,000+",
        }
    }

    #[must_use]
    pub const fn range(self) -> PriceRange {
        match self {
            Self::Any => PriceRange::ANY,
            Self::HalfToOneMillion => PriceRange::new(500_000, Some(1_000_000)),
            Self::OneToTwoMillion => PriceRange::new(1_000_000, Some(2_000_000)),
            Self::TwoToFiveMillion => PriceRange::new(2_000_000, Some(5_000_000)),
            Self::FiveMillionPlus => PriceRange::new(5_000_000, None),
        }
    }

    /// Map a displayed label to its bucket. Unrecognized labels select
    /// [`PriceBucket::Any`], i.e. no price constraint.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|b| b.label() == label)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("$500,000 - $1,000,000", 500_000, Some(1_000_000))]
    #[case("$1,000,000 - $2,000,000", 1_000_000, Some(2_000_000))]
    #[case("$2,000,000 - $5,000,000", 2_000_000, Some(5_000_000))]
    #[case("$5,000,000+", 5_000_000, None)]
    #[case("Any Price", 0, None)]
    #[case("$10", 0, None)]
    #[case("", 0, None)]
    fn bucket_ranges(#[case] label: &str, #[case] min: u64, #[case] max: Option<u64>) {
        assert_eq!(
            PriceBucket::from_label(label).range(),
            PriceRange::new(min, max)
        );
    }

    #[test]
    fn labels_round_trip() {
        for bucket in PriceBucket::ALL {
            assert_eq!(PriceBucket::from_label(bucket.label()), bucket);
        }
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = PriceBucket::HalfToOneMillion.range();
        assert!(range.contains(500_000.0));
        assert!(range.contains(1_000_000.0));
        assert!(!range.contains(1_000_001.0));
        assert!(PriceRange::ANY.contains(1.0e12));
    }

    #[test]
    fn zero_slider_max_is_unbounded() {
        assert!(PriceRange::from_bounds(0, 0).is_unbounded());
        assert_eq!(
            PriceRange::from_bounds(100, 900).max,
            Some(900)
        );
    }
}
