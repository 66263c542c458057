//! `[taxonomy_styles]` section: per-category and per-tag heading colors.
//!
//! # Example
//!
//! ```toml
//! [taxonomy_styles]
//! enable = true
//!
//! [taxonomy_styles.defaults.heading]
//! color = "#333333"
//!
//! [taxonomy_styles.categories.Rust.heading]
//! color = "#dea584"
//!
//! # Legacy key, consulted after every `heading` entry
//! [taxonomy_styles.categories.Notes.title]
//! color = "#6272a4"
//!
//! [taxonomy_styles.tags.release]
//! post = true
//! heading = { color = "#50fa7b" }
//! ```
//!
//! Every field is optional. A value of the wrong shape (e.g. `heading = "red"`)
//! is treated as absent rather than failing the whole theme config.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

use crate::debug;

/// Taxonomy style configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyStyles {
    /// Master switch. When off, no heading is ever rewritten.
    #[serde(deserialize_with = "lenient")]
    pub enable: bool,

    /// Fallback style when neither tag nor category provides one.
    #[serde(deserialize_with = "lenient")]
    pub defaults: StyleRecord,

    /// Category name → style.
    #[serde(deserialize_with = "lenient_map")]
    pub categories: HashMap<String, StyleRecord>,

    /// Tag name → style override.
    #[serde(deserialize_with = "lenient_map")]
    pub tags: HashMap<String, TagStyle>,
}

impl TaxonomyStyles {
    /// Build from a JSON value, e.g. a host's in-memory theme config.
    ///
    /// Anything that is not an object yields the disabled default.
    pub fn from_json(value: JsonValue) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Style record for a category or the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleRecord {
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub heading: Option<ColorRule>,

    /// Kept for configs written before `heading` existed.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<ColorRule>,
}

/// Style record for a tag.
///
/// A tag only overrides its page's category when it defines at least one of
/// `post`, `title` or `heading`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagStyle {
    /// Post-level settings. Its content is opaque here; presence alone marks
    /// the tag as an override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<JsonValue>,

    #[serde(flatten)]
    pub style: StyleRecord,
}

impl TagStyle {
    /// Whether this tag takes part in override selection.
    pub fn is_override(&self) -> bool {
        self.post.is_some() || self.style.heading.is_some() || self.style.title.is_some()
    }
}

/// `{ color = "..." }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorRule {
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ColorRule {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
        }
    }
}

// ============================================================================
// Lenient deserialization
// ============================================================================

/// Deserialize any value, falling back to `T::default()` on shape mismatch.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_else(|err| {
        debug!("config"; "ignoring malformed taxonomy style value: {}", err);
        T::default()
    }))
}

/// Deserialize a name → record map, dropping only the malformed entries.
fn lenient_map<'de, D, T>(deserializer: D) -> Result<HashMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let JsonValue::Object(entries) = JsonValue::deserialize(deserializer)? else {
        return Ok(HashMap::new());
    };

    Ok(entries
        .into_iter()
        .filter_map(|(name, value)| match serde_json::from_value(value) {
            Ok(record) => Some((name, record)),
            Err(err) => {
                debug!("config"; "ignoring taxonomy style `{}`: {}", name, err);
                None
            }
        })
        .collect())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_disabled() {
        let styles = TaxonomyStyles::default();
        assert!(!styles.enable);
        assert!(styles.categories.is_empty());
        assert!(styles.tags.is_empty());
    }

    #[test]
    fn test_parse_full_section() {
        let styles: TaxonomyStyles = toml::from_str(
            r##"
            enable = true

            [defaults.heading]
            color = "#333"

            [defaults.title]
            color = "#444"

            [categories.Rust.heading]
            color = "#dea584"

            [tags.release]
            post = { pinned = true }
            heading = { color = "#0a0" }
            "##,
        )
        .unwrap();

        assert!(styles.enable);
        assert_eq!(styles.defaults.heading, Some(ColorRule::new("#333")));
        assert_eq!(styles.defaults.title, Some(ColorRule::new("#444")));
        assert_eq!(
            styles.categories["Rust"].heading,
            Some(ColorRule::new("#dea584"))
        );
        let release = &styles.tags["release"];
        assert!(release.is_override());
        assert_eq!(release.style.heading, Some(ColorRule::new("#0a0")));
        assert_eq!(release.post, Some(json!({ "pinned": true })));
    }

    #[test]
    fn test_malformed_fields_are_dropped() {
        let styles = TaxonomyStyles::from_json(json!({
            "enable": "yes",
            "defaults": { "heading": "red", "title": { "color": 42 } },
            "categories": {
                "Broken": "not a record",
                "Fine": { "heading": { "color": "#fff" } }
            }
        }));

        assert!(!styles.enable);
        assert_eq!(styles.defaults.heading, None);
        assert_eq!(styles.defaults.title, Some(ColorRule { color: None }));
        assert!(!styles.categories.contains_key("Broken"));
        assert_eq!(
            styles.categories["Fine"].heading,
            Some(ColorRule::new("#fff"))
        );
    }

    #[test]
    fn test_from_json_non_object() {
        assert_eq!(
            TaxonomyStyles::from_json(json!("enabled")),
            TaxonomyStyles::default()
        );
        assert_eq!(
            TaxonomyStyles::from_json(JsonValue::Null),
            TaxonomyStyles::default()
        );
    }

    #[test]
    fn test_tag_override_detection() {
        let styles = TaxonomyStyles::from_json(json!({
            "tags": {
                "plain": {},
                "post-only": { "post": {} },
                "title-only": { "title": { "color": "#111" } },
                "unrelated": { "icon": "star" }
            }
        }));

        assert!(!styles.tags["plain"].is_override());
        assert!(styles.tags["post-only"].is_override());
        assert!(styles.tags["title-only"].is_override());
        assert!(!styles.tags["unrelated"].is_override());
    }

    #[test]
    fn test_serialize_skips_absent_rules() {
        let record = StyleRecord {
            heading: Some(ColorRule::new("#abc")),
            title: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, json!({ "heading": { "color": "#abc" } }));
    }
}
