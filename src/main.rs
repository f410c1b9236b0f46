use clap::Parser;
use geo_commons::Constants;

/// Dump the resolved runtime constants as JSON.
///
/// Environment overrides (DEFAULT_LOCALE, LOCALES, TZ, TIMEZONES, ...)
/// are applied before printing, so the output is exactly what a
/// consuming application would see.
///
/// Examples:
///   geo-commons
///   geo-commons --table locales
///   DEFAULT_LOCALE=sw geo-commons --table default-locale
#[derive(Parser)]
#[command(name = "geo-commons", version, about, long_about = None)]
struct Cli {
    /// Print a single table or default (e.g. locales, timezones,
    /// country-codes, map-feature-types).
    #[arg(long, short = 't')]
    table: Option<String>,

    /// Compact single-line output instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

fn main() {
    let cli = Cli::parse();

    let constants = Constants::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let value = match &cli.table {
        Some(name) => select_table(&constants, name).unwrap_or_else(|| {
            eprintln!("Error: Unknown table '{}'.", name);
            eprintln!("Use a field name like 'locales', 'country-codes' or 'map-feature-types'.");
            std::process::exit(1);
        }),
        None => serde_json::to_value(&constants).unwrap(),
    };

    if cli.compact {
        println!("{}", value);
    } else {
        println!("{}", serde_json::to_string_pretty(&value).unwrap());
    }
}

/// Look a table up by field name; dashes are accepted for underscores.
fn select_table(constants: &Constants, name: &str) -> Option<serde_json::Value> {
    let key = name.trim().to_lowercase().replace('-', "_");
    serde_json::to_value(constants).ok()?.get(&key).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_commons::{BundledData, MapEnv};

    #[test]
    fn test_select_table_dashes() {
        let constants = Constants::load(&MapEnv::new(), &BundledData).unwrap();
        let value = select_table(&constants, "country-codes").unwrap();
        assert!(value.as_array().unwrap().contains(&"TZ".into()));
    }

    #[test]
    fn test_select_table_scalar() {
        let constants = Constants::load(&MapEnv::new(), &BundledData).unwrap();
        let value = select_table(&constants, "default_locale").unwrap();
        assert_eq!(value, "en");
    }

    #[test]
    fn test_select_table_unknown() {
        let constants = Constants::load(&MapEnv::new(), &BundledData).unwrap();
        assert!(select_table(&constants, "nope").is_none());
    }
}
