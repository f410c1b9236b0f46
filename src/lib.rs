//! Runtime geo/time constants with environment overrides.
//!
//! Derives immutable lookup tables — locales, timezones, continents,
//! countries, calling codes, map-feature taxonomies, disaster phases —
//! by merging environment overrides with a bundled reference dataset,
//! then deduplicating and sorting. Built once at startup, then read-only.
//!
//! ```
//! use geo_commons::{BundledData, Constants, MapEnv};
//!
//! let env = MapEnv::new().with("DEFAULT_LOCALE", "sw");
//! let constants = Constants::load(&env, &BundledData).unwrap();
//! assert_eq!(constants.default_locale, "sw");
//! assert!(constants.country_codes.contains(&"TZ".to_string()));
//! ```

pub mod constants;
pub mod dataset;
pub mod env;
pub mod features;
pub mod normalize;

pub use constants::{Constants, ConstantsError};
pub use dataset::{BundledData, Continent, Country, ReferenceData};
pub use env::{EnvReader, MapEnv, SystemEnv};
