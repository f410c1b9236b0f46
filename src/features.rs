//! Map-feature controlled vocabularies, modeled after OpenStreetMap
//! tagging conventions (<https://wiki.openstreetmap.org/wiki/Map_Features>).
//!
//! Natures mirror OSM primary feature keys, families the per-key values
//! in use, places the human-readable place tags. Each vocabulary carries
//! an `"Other"` sentinel for features outside the authored set.

use crate::normalize::{flatten_sorted_uniq, sorted_uniq, title_case_all};

/// Sentinel bucket for a feature nature outside the vocabulary.
pub const DEFAULT_NATURE: &str = "Other";
/// Sentinel bucket for a feature family outside the vocabulary.
pub const DEFAULT_FAMILY: &str = "Other";
/// Sentinel bucket for a feature type outside the vocabulary.
pub const DEFAULT_TYPE: &str = "Other";

/// OSM primary feature keys.
const NATURES: &[&str] = &[
    "Aerialway",
    "Aeroway",
    "Barrier",
    "Boundary",
    "Building",
    "Emergency",
    "Highway",
    "Man Made",
    "Natural",
    "Office",
    "Power",
    "Public Transport",
    "Railway",
    "Route",
    "Shop",
    "Telecom",
    "Tourism",
    "Waterway",
];

/// Per-nature feature values in use, grouped by their primary key.
const FAMILIES: &[&str] = &[
    // boundary
    "Administrative",
    // building
    "Commercial",
    "Hospital",
    "Industrial",
    "Religious",
    "Residential",
    "School",
    "Stadium",
    "Toilets",
    "Warehouse",
    // emergency
    "Ambulance Station",
    "Assembly Point",
    "Fire Hydrant",
    "First Aid Kit",
    "Evacuation Centre",
    // highway
    "Road",
    "Residential",
    // man made
    "Bridge",
    "Pipeline",
    "Wastewater Plant",
    // natural
    "Wetland",
    // power
    "Cable",
    "Generator",
    "Line",
    "Plant",
    "Pole",
    "Transformer",
    // public transport
    "Platform",
    "Station",
    "Stop Area",
    "Stop Position",
    // railway
    "Platform",
    "Rail",
    "Station",
    // route
    "Evacuation",
    // waterway
    "Ditch",
    "Drain",
    "River",
    "Stream",
];

/// Human-readable place tags.
const PLACES: &[&str] = &[
    "city",
    "continent",
    "country",
    "county",
    "district",
    "hamlet",
    "municipality",
    "neighbourhood",
    "province",
    "region",
    "state",
    "street",
    "town",
    "village",
    "ward",
];

/// Feature natures, sentinel included, sorted and unique.
pub fn natures() -> Vec<String> {
    sorted_uniq(NATURES.iter().copied().chain([DEFAULT_NATURE]))
}

/// Feature families, sentinel included, sorted and unique.
pub fn families() -> Vec<String> {
    sorted_uniq(FAMILIES.iter().copied().chain([DEFAULT_FAMILY]))
}

/// Place tags, sorted and unique, lower-case as tagged.
pub fn places() -> Vec<String> {
    sorted_uniq(PLACES.iter().copied())
}

/// Feature types: places plus the sentinel, flattened, deduped, sorted,
/// then title-cased.
pub fn types() -> Vec<String> {
    title_case_all(&flatten_sorted_uniq(&[PLACES, &[DEFAULT_TYPE]]))
}
