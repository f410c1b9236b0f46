//! Environment override reader.
//!
//! Overrides always win over bundled defaults. Empty values count as
//! unset. List overrides are comma-delimited; an entry with no usable
//! delimiter is kept as a single literal element rather than rejected.

use std::collections::HashMap;
use std::env;

/// Read-only lookup of named configuration overrides.
///
/// Implemented by the process environment (`SystemEnv`) and by an
/// in-memory map (`MapEnv`) for tests and embedding.
pub trait EnvReader {
    /// Raw lookup. `None` when the key is unset.
    fn raw(&self, key: &str) -> Option<String>;

    /// Resolve a scalar: a present, non-empty override wins, else `fallback`.
    fn get_string(&self, key: &str, fallback: &str) -> String {
        match self.raw(key) {
            Some(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Resolve a list: a comma-delimited override wins, else `fallback`.
    ///
    /// Entries are trimmed and empties dropped. An override that yields
    /// no entries at all falls back.
    fn get_strings(&self, key: &str, fallback: &[String]) -> Vec<String> {
        match self.raw(key) {
            Some(value) => {
                let parts: Vec<String> = value
                    .split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect();
                if parts.is_empty() {
                    fallback.to_vec()
                } else {
                    parts
                }
            }
            None => fallback.to_vec(),
        }
    }
}

/// The process environment.
pub struct SystemEnv;

impl EnvReader for SystemEnv {
    fn raw(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// In-memory reader for tests and programmatic configuration.
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable setter: `MapEnv::new().with("LOCALES", "en,sw")`.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl EnvReader for MapEnv {
    fn raw(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
