//! Field schema derivation from extracted placeholder keys.

use std::collections::BTreeMap;

/// Builds the placeholder key -> friendly label mapping.
pub fn build_schema(keys: &[String]) -> BTreeMap<String, String> {
    keys.iter()
        .map(|key| (key.clone(), humanize_key(key)))
        .collect()
}

/// Humanizes a key: underscores become spaces, the result is trimmed and
/// title-cased. `Full_Name` -> `Full Name`, `PORT_OF_LOADING` -> `Port Of
/// Loading`.
pub fn humanize_key(key: &str) -> String {
    key.replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut titled: String = first.to_uppercase().collect();
                    titled.push_str(&chars.as_str().to_lowercase());
                    titled
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Picks the default key field. A key field is only assigned when none is
/// currently set and the key set is non-empty; the choice is the first key in
/// sorted order, so it is deterministic for a given document. `keys` is
/// expected in the sorted order the extractor produces.
pub fn choose_default_key_field(keys: &[String], existing: Option<&str>) -> Option<String> {
    match existing {
        Some(current) => Some(current.to_string()),
        None => keys.first().cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn labels_are_humanized() {
        assert_eq!(humanize_key("Full_Name"), "Full Name");
        assert_eq!(humanize_key("PORT_OF_LOADING"), "Port Of Loading");
        assert_eq!(humanize_key("container"), "Container");
    }

    #[test]
    fn schema_maps_every_key() {
        let keys = vec!["B_L_NO".to_string(), "SHIPPER".to_string()];
        let schema = build_schema(&keys);
        assert_eq!(schema.get("B_L_NO").map(String::as_str), Some("B L No"));
        assert_eq!(schema.get("SHIPPER").map(String::as_str), Some("Shipper"));
    }

    #[test]
    fn default_key_field_is_first_sorted_key() {
        let keys = vec!["ALPHA".to_string(), "BETA".to_string()];
        assert_eq!(choose_default_key_field(&keys, None).as_deref(), Some("ALPHA"));
    }

    #[test]
    fn existing_key_field_is_kept() {
        let keys = vec!["ALPHA".to_string()];
        assert_eq!(
            choose_default_key_field(&keys, Some("BETA")).as_deref(),
            Some("BETA")
        );
    }

    #[test]
    fn no_default_without_keys() {
        assert_eq!(choose_default_key_field(&[], None), None);
    }
}
