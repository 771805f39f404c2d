//! Selections to canonical parameters, as the search form submits them.

use pretty_assertions::assert_eq;
use realty_search::{FilterCriteria, PriceRange, PropertyQuery};
use rstest::rstest;

fn params(query: &PropertyQuery) -> Vec<(&str, &str)> {
    query
        .params()
        .iter()
        .map(|(k, v)| (*k, v.as_str()))
        .collect()
}

#[test]
fn all_sentinels_produce_no_parameters() {
    let query = FilterCriteria::from_labels("Any Location", "Any Type", "Any Price").to_query();
    assert!(query.is_empty());
}

#[test]
fn location_with_open_ended_bucket() {
    let query = FilterCriteria::from_labels("Miami", "Any Type", "$5,000,000+").to_query();
    assert_eq!(params(&query), [("location", "Miami"), ("minPrice", "5000000")]);
    assert_eq!(query.listing_path(), "/properties?location=Miami&minPrice=5000000");
}

#[test]
fn bounded_bucket_alone_sends_both_limits() {
    let query = FilterCriteria::from_labels("Any Location", "Any Type", "$2,000,000 - $5,000,000")
        .to_query();
    assert_eq!(params(&query), [("minPrice", "2000000"), ("maxPrice", "5000000")]);
}

#[test]
fn parameters_keep_canonical_order() {
    let query = FilterCriteria::from_labels("Chicago", "Penthouse", "$1,000,000 - $2,000,000")
        .to_query();
    assert_eq!(
        params(&query),
        [
            ("location", "Chicago"),
            ("propertyType", "Penthouse"),
            ("minPrice", "1000000"),
            ("maxPrice", "2000000"),
        ]
    );
}

#[rstest]
#[case(0, 0, &[])]
#[case(0, 750_000, &[("maxPrice", "750000")])]
#[case(250_000, 0, &[("minPrice", "250000")])]
#[case(250_000, 750_000, &[("minPrice", "250000"), ("maxPrice", "750000")])]
fn slider_bounds_omit_zero(
    #[case] min: u64,
    #[case] max: u64,
    #[case] expected: &[(&str, &str)],
) {
    let query = FilterCriteria::default()
        .with_price(PriceRange::from_bounds(min, max))
        .to_query();
    assert_eq!(params(&query), expected);
}

#[test]
fn query_string_parses_back_to_the_same_criteria() {
    let criteria = FilterCriteria::from_labels("New York", "Apartment", "$500,000 - $1,000,000");
    let parsed = FilterCriteria::from_query(&criteria.to_query().to_query_string());
    assert_eq!(parsed, criteria);
}
