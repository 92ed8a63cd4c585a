// src/catalog/index.rs

//! Catalog index generation
//!
//! The index is the single JSON document downstream consumers read. It
//! carries a fixed schema version so they can detect incompatible changes.

use crate::error::{Error, Result};
use crate::recipe::Recipe;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Index format version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default location of the generated index
pub const DEFAULT_OUTPUT_PATH: &str = "dist/recipes.json";

/// The generated catalog index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogIndex {
    /// Index format version
    pub schema_version: String,
    /// When the index was generated (RFC 3339)
    pub generated_at: String,
    /// Recipes sorted by name
    pub recipes: Vec<Recipe>,
}

/// Build the index document from valid recipes
pub fn generate_json(recipes: impl IntoIterator<Item = Recipe>) -> CatalogIndex {
    let mut recipes: Vec<Recipe> = recipes.into_iter().collect();
    recipes.sort_by(|a, b| a.name.cmp(&b.name));

    CatalogIndex {
        schema_version: SCHEMA_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        recipes,
    }
}

/// Write the index to `path`, replacing any previous file atomically
pub fn write_index(index: &CatalogIndex, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(index)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Write to temporary file first
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, json + "\n").map_err(|e| Error::io(&temp_path, e))?;

    // Atomic rename from temp to final destination
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(path, e));
    }

    info!(
        "Wrote index with {} recipes to {}",
        index.recipes.len(),
        path.display()
    );
    Ok(())
}
