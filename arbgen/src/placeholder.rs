//! Placeholder detection for ARB message values.
//!
//! A placeholder is any `{...}` token whose body contains no brace. Every
//! distinct name found in a value is reported, in order of first appearance,
//! and becomes one entry of the `@key` metadata object:
//!
//! ```json
//! { "placeholders": { "name": {}, "count": {} } }
//! ```

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"\{([^{}]*)\}").unwrap();
}

/// Metadata stored under `@key` for a message that contains placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlaceholderMetadata {
    pub placeholders: IndexMap<String, Placeholder>,
}

/// Per-placeholder attributes. Always serialized as an empty object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Placeholder {}

impl PlaceholderMetadata {
    /// Placeholder names in order of first appearance.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.placeholders.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.placeholders.contains_key(name)
    }

    /// Converts the metadata into the JSON value written next to the message.
    pub fn to_value(&self) -> serde_json::Value {
        let placeholders = self
            .placeholders
            .keys()
            .map(|name| (name.clone(), serde_json::Value::Object(serde_json::Map::new())))
            .collect::<serde_json::Map<_, _>>();

        let mut object = serde_json::Map::new();
        object.insert(
            "placeholders".to_string(),
            serde_json::Value::Object(placeholders),
        );
        serde_json::Value::Object(object)
    }
}

/// Extracts the text between every non-overlapping pair of braces, in order,
/// including duplicates. Names are neither trimmed nor validated.
pub fn extract_placeholders(input: &str) -> Vec<&str> {
    PLACEHOLDER_REGEX
        .captures_iter(input)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Builds the `@key` metadata for `value`, or `None` when it has no placeholders.
pub fn placeholder_metadata(value: &str) -> Option<PlaceholderMetadata> {
    let names = extract_placeholders(value);
    if names.is_empty() {
        return None;
    }

    let placeholders = names
        .into_iter()
        .map(|name| (name.to_string(), Placeholder::default()))
        .collect();
    Some(PlaceholderMetadata { placeholders })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_placeholder() {
        let metadata = placeholder_metadata("Hello {name}").unwrap();
        assert_eq!(metadata.names().collect::<Vec<_>>(), vec!["name"]);
        assert_eq!(metadata.to_value(), json!({"placeholders": {"name": {}}}));
    }

    #[test]
    fn test_plain_value_has_no_metadata() {
        assert!(placeholder_metadata("Hello").is_none());
        assert!(placeholder_metadata("").is_none());
    }

    #[test]
    fn test_collects_all_placeholders_in_order() {
        let metadata = placeholder_metadata("{b} and {a}").unwrap();
        assert_eq!(metadata.names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert!(metadata.contains("a"));
        assert!(metadata.contains("b"));
    }

    #[test]
    fn test_duplicate_names_collapse() {
        assert_eq!(extract_placeholders("{x}/{x}"), vec!["x", "x"]);
        let metadata = placeholder_metadata("{x}/{x}").unwrap();
        assert_eq!(metadata.placeholders.len(), 1);
    }

    #[test]
    fn test_names_are_taken_verbatim() {
        let metadata = placeholder_metadata("Total: { count } items, {}").unwrap();
        assert_eq!(metadata.names().collect::<Vec<_>>(), vec![" count ", ""]);
    }

    #[test]
    fn test_nested_braces_match_innermost() {
        assert_eq!(extract_placeholders("{{inner}}"), vec!["inner"]);
        assert!(extract_placeholders("{ unclosed").is_empty());
        assert!(extract_placeholders("closed }{").is_empty());
    }

    #[test]
    fn test_serde_matches_to_value() {
        let metadata = placeholder_metadata("{first} {last}").unwrap();
        let serialized = serde_json::to_value(&metadata).unwrap();
        assert_eq!(serialized, metadata.to_value());
        let parsed: PlaceholderMetadata = serde_json::from_value(serialized).unwrap();
        assert_eq!(parsed, metadata);
    }
}
