// src/recipe/format.rs

//! Recipe record definitions
//!
//! A recipe file is a flat TOML document. Three top-level keys are required
//! and validated (`name`, `description`, `homepage`); every other key is
//! carried through to the index untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single validated tool recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Tool name; equals the file stem
    pub name: String,

    /// One-line description
    pub description: String,

    /// Project homepage (always `https://`)
    pub homepage: String,

    /// All remaining top-level fields, unvalidated
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recipe {
    /// Build a recipe with no extra fields
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        homepage: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            homepage: homepage.into(),
            extra: Map::new(),
        }
    }
}

/// Convert a TOML value into its JSON equivalent
///
/// Datetimes become their RFC 3339 text and non-finite floats become `null`,
/// since JSON has no representation for either.
pub fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_fields_flatten_into_record() {
        let mut recipe = Recipe::new("ripgrep", "Fast grep", "https://github.com/BurntSushi/ripgrep");
        recipe
            .extra
            .insert("tags".to_string(), Value::from(vec!["search", "cli"]));

        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["name"], "ripgrep");
        assert_eq!(json["tags"][1], "cli");
        assert!(json.get("extra").is_none());
    }

    #[test]
    fn test_toml_to_json_nested() {
        let table: toml::Table = toml::from_str(
            r#"
released = 2024-05-01T10:00:00Z
ratio = 0.5
count = 3

[install]
brew = "ripgrep"
apt = ["ripgrep"]
"#,
        )
        .unwrap();

        let json = toml_to_json(toml::Value::Table(table));
        assert_eq!(json["released"], "2024-05-01T10:00:00Z");
        assert_eq!(json["ratio"], 0.5);
        assert_eq!(json["count"], 3);
        assert_eq!(json["install"]["brew"], "ripgrep");
        assert_eq!(json["install"]["apt"][0], "ripgrep");
    }

    #[test]
    fn test_toml_to_json_non_finite_float() {
        assert_eq!(toml_to_json(toml::Value::Float(f64::NAN)), Value::Null);
    }
}
