//! Option lists offered by the search and listing forms.

pub const ANY_LOCATION: &str = "Any Location";
pub const ANY_TYPE: &str = "Any Type";
pub const ANY_PRICE: &str = "Any Price";

pub const LOCATIONS: [&str; 5] = ["New York", "Los Angeles", "Miami", "Chicago", "Seattle"];

pub const PROPERTY_TYPES: [&str; 9] = [
    "Apartment",
    "House",
    "Villa",
    "Penthouse",
    "Estate",
    "Mansion",
    "Condo",
    "Land",
    "Commercial",
];

pub const LISTING_TYPES: [&str; 2] = ["For Sale", "For Rent"];
