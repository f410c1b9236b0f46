//! The constant table builder.
//!
//! One synchronous pass at startup: for each constant, take the
//! environment override if present, otherwise derive from the reference
//! dataset or authored vocabulary, then normalize (dedupe, sort, casing
//! last). The result is an immutable `Constants` value that callers pass
//! by reference; nothing here is global.

use serde::Serialize;
use std::fmt;

use crate::dataset::{BundledData, ReferenceData};
use crate::env::{EnvReader, SystemEnv};
use crate::features;
use crate::normalize::{sorted_uniq, to_upper_all};

/// Disaster management cycle phases (the bundled default set).
const DISASTER_PHASE_SET: &[&str] = &["Mitigation", "Preparedness", "Response", "Recovery"];

/// Failure to assemble the constant tables. Fatal at startup: no
/// downstream constant can be trusted without the reference data.
#[derive(Debug)]
pub enum ConstantsError {
    /// A reference dataset table came back empty.
    EmptyTable(&'static str),
}

impl fmt::Display for ConstantsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTable(table) => {
                write!(f, "Reference dataset table '{}' is empty", table)
            }
        }
    }
}

impl std::error::Error for ConstantsError {}

/// Every scalar default and ordered unique list, resolved once.
///
/// All list fields are duplicate-free and sorted ascending; cased lists
/// (country codes, map-feature types) are cased after sorting.
#[derive(Debug, Clone, Serialize)]
pub struct Constants {
    pub default_locale: String,
    pub locales: Vec<String>,
    pub default_timezone: String,
    pub timezones: Vec<String>,
    pub default_date_format: String,
    pub default_time_format: String,
    pub default_datetime_format: String,
    pub default_continent_name: String,
    pub continent_names: Vec<String>,
    pub default_country_name: String,
    pub country_names: Vec<String>,
    pub default_country_code: String,
    pub country_codes: Vec<String>,
    pub default_calling_code: String,
    pub calling_codes: Vec<String>,
    pub default_city_name: String,
    pub map_feature_default_nature: String,
    pub map_feature_default_family: String,
    pub map_feature_default_type: String,
    pub map_feature_natures: Vec<String>,
    pub map_feature_families: Vec<String>,
    pub map_feature_places: Vec<String>,
    pub map_feature_types: Vec<String>,
    pub default_disaster_phase: String,
    pub disaster_phases: Vec<String>,
}

impl Constants {
    /// Build from the process environment and the bundled dataset.
    pub fn from_env() -> Result<Self, ConstantsError> {
        Self::load(&SystemEnv, &BundledData)
    }

    /// Build from injected inputs. Used by tests and by embedders with
    /// their own configuration backend or dataset.
    pub fn load(env: &dyn EnvReader, data: &dyn ReferenceData) -> Result<Self, ConstantsError> {
        let continents = data.continents();
        if continents.is_empty() {
            return Err(ConstantsError::EmptyTable("continents"));
        }
        let countries = data.countries();
        if countries.is_empty() {
            return Err(ConstantsError::EmptyTable("countries"));
        }
        let tz_names = data.timezone_names();
        if tz_names.is_empty() {
            return Err(ConstantsError::EmptyTable("timezones"));
        }

        let default_locale = env.get_string("DEFAULT_LOCALE", "en");
        let locales = sorted_uniq(env.get_strings("LOCALES", std::slice::from_ref(&default_locale)));

        let default_timezone = resolve_default_timezone(env);
        let timezones = sorted_uniq(env.get_strings("TIMEZONES", &tz_names));

        let calling_codes = to_upper_all(&sorted_uniq(
            countries
                .iter()
                .flat_map(|c| c.phone.split(','))
                .map(str::trim)
                .filter(|p| !p.is_empty()),
        ));

        let disaster_fallback: Vec<String> =
            DISASTER_PHASE_SET.iter().map(|p| p.to_string()).collect();

        Ok(Self {
            default_locale,
            locales,
            default_timezone,
            timezones,
            default_date_format: env.get_string("DEFAULT_DATE_FORMAT", "%Y-%m-%d"),
            default_time_format: env.get_string("DEFAULT_TIME_FORMAT", "%H:%M:%S"),
            default_datetime_format: env
                .get_string("DEFAULT_DATETIME_FORMAT", "%Y-%m-%d %H:%M:%S"),
            default_continent_name: env.get_string("DEFAULT_CONTINENT_NAME", "Africa"),
            continent_names: sorted_uniq(continents.iter().map(|c| c.name)),
            default_country_name: env.get_string("DEFAULT_COUNTRY_NAME", "Tanzania"),
            country_names: sorted_uniq(countries.iter().map(|c| c.name)),
            default_country_code: env.get_string("DEFAULT_COUNTRY_CODE", "TZ"),
            country_codes: to_upper_all(&sorted_uniq(countries.iter().map(|c| c.code))),
            default_calling_code: env.get_string("DEFAULT_CALLING_CODE", "255"),
            calling_codes,
            default_city_name: env.get_string("DEFAULT_CITY_NAME", "Dar es Salaam"),
            map_feature_default_nature: features::DEFAULT_NATURE.to_string(),
            map_feature_default_family: features::DEFAULT_FAMILY.to_string(),
            map_feature_default_type: features::DEFAULT_TYPE.to_string(),
            map_feature_natures: features::natures(),
            map_feature_families: features::families(),
            map_feature_places: features::places(),
            map_feature_types: features::types(),
            default_disaster_phase: env.get_string("DEFAULT_DISASTER_PHASE", "Mitigation"),
            disaster_phases: sorted_uniq(env.get_strings("DISASTER_PHASES", &disaster_fallback)),
        })
    }
}

/// Default timezone resolution order: legacy `TZ`, then
/// `DEFAULT_TIMEZONE`, then the system's IANA timezone, then `"UTC"`.
fn resolve_default_timezone(env: &dyn EnvReader) -> String {
    for key in ["TZ", "DEFAULT_TIMEZONE"] {
        if let Some(value) = env.raw(key) {
            let value = value.trim();
            if !value.is_empty() {
                return value.to_string();
            }
        }
    }
    iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string())
}
