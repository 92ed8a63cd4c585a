// src/recipe/parser.rs

//! Recipe file parsing

use crate::recipe::format::{Recipe, toml_to_json};
use crate::recipe::validate::{ValidationError, ValidationErrorKind, validate_metadata};
use std::path::Path;

/// Parse recipe content into its raw field mapping
pub fn parse_fields(content: &str) -> Result<toml::Table, toml::de::Error> {
    content.parse::<toml::Table>()
}

/// Parse and validate recipe content read from `path`
///
/// `path` is only used to check the name against the file stem and to tag
/// errors. On failure nothing of the record is returned.
pub fn parse_recipe_content(path: &Path, content: &str) -> Result<Recipe, Vec<ValidationError>> {
    let fields = parse_fields(content).map_err(|e| {
        vec![ValidationError::new(
            path,
            ValidationErrorKind::Parse,
            format!("Invalid TOML: {}", e.message()),
        )]
    })?;

    let errors = validate_metadata(path, &fields);
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(into_recipe(fields))
}

/// Split a validated field mapping into a recipe record
fn into_recipe(mut fields: toml::Table) -> Recipe {
    let mut take = |key: &str| match fields.remove(key) {
        Some(toml::Value::String(s)) => s,
        _ => String::new(),
    };

    let name = take("name");
    let description = take("description");
    let homepage = take("homepage");

    let mut recipe = Recipe::new(name, description, homepage);
    recipe.extra = fields
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect();
    recipe
}
