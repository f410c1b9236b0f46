//! List pipeline primitives: stable dedupe, lexical sort, casing transforms.
//!
//! Every built list goes through `sorted_uniq` before any casing is applied.
//! Casing transforms never reorder or deduplicate — that already happened.

use std::collections::HashSet;

/// Dedupe (first occurrence wins), then sort ascending.
///
/// Idempotent: feeding the output back in returns the same list.
pub fn sorted_uniq<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut out: Vec<String> = Vec::new();
    for item in items {
        let item = item.into();
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    out.sort();
    out
}

/// Upper-case every element. Order and length are preserved.
pub fn to_upper_all(items: &[String]) -> Vec<String> {
    items.iter().map(|s| s.to_uppercase()).collect()
}

/// Title-case every element. Order and length are preserved.
pub fn title_case_all(items: &[String]) -> Vec<String> {
    items.iter().map(|s| title_case(s)).collect()
}

/// Split on whitespace/`-`/`_`, capitalize each word, join with spaces.
///
/// `"city"` → `"City"`, `"stop_area"` → `"Stop Area"`.
pub fn title_case(input: &str) -> String {
    input
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flatten groups of entries into one deduped list, sorted ascending
/// ignoring case.
///
/// The case-insensitive comparison keeps the order stable under a later
/// casing transform (a title-cased composite list stays sorted).
pub fn flatten_sorted_uniq(groups: &[&[&str]]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out: Vec<String> = Vec::new();
    for entry in groups.iter().flat_map(|g| g.iter().copied()) {
        if seen.insert(entry) {
            out.push(entry.to_string());
        }
    }
    out.sort_by_key(|s| s.to_lowercase());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_uniq_sorts_and_dedupes() {
        let out = sorted_uniq(["sw", "en", "sw", "fr", "en"]);
        assert_eq!(out, vec!["en", "fr", "sw"]);
    }

    #[test]
    fn test_sorted_uniq_idempotent() {
        let once = sorted_uniq(["b", "a", "b", "c"]);
        let twice = sorted_uniq(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sorted_uniq_case_sensitive() {
        // "TZ" and "tz" are distinct entries as stored
        let out = sorted_uniq(["TZ", "tz"]);
        assert_eq!(out, vec!["TZ", "tz"]);
    }

    #[test]
    fn test_sorted_uniq_empty() {
        let out = sorted_uniq(Vec::<String>::new());
        assert!(out.is_empty());
    }

    #[test]
    fn test_to_upper_all_preserves_order() {
        let input = vec!["tz".to_string(), "ke".to_string(), "ug".to_string()];
        assert_eq!(to_upper_all(&input), vec!["TZ", "KE", "UG"]);
    }

    #[test]
    fn test_title_case_single_word() {
        assert_eq!(title_case("city"), "City");
        assert_eq!(title_case("Other"), "Other");
    }

    #[test]
    fn test_title_case_multi_word() {
        assert_eq!(title_case("stop area"), "Stop Area");
        assert_eq!(title_case("stop_position"), "Stop Position");
        assert_eq!(title_case("man-made"), "Man Made");
    }

    #[test]
    fn test_title_case_all_preserves_order() {
        let input = vec!["ward".to_string(), "city".to_string()];
        assert_eq!(title_case_all(&input), vec!["Ward", "City"]);
    }

    #[test]
    fn test_flatten_sorted_uniq_mixes_lists_and_scalars() {
        let out = flatten_sorted_uniq(&[&["city", "country"], &["Other"]]);
        assert_eq!(out, vec!["city", "country", "Other"]);
    }

    #[test]
    fn test_flatten_sorted_uniq_dedupes_across_groups() {
        let out = flatten_sorted_uniq(&[&["city", "town"], &["town", "ward"]]);
        assert_eq!(out, vec!["city", "town", "ward"]);
    }

    #[test]
    fn test_flatten_stays_sorted_after_title_casing() {
        let flat = flatten_sorted_uniq(&[&["city", "country"], &["Other"]]);
        let cased = title_case_all(&flat);
        let mut resorted = cased.clone();
        resorted.sort();
        assert_eq!(cased, resorted);
    }
}
