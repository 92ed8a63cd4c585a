// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use larder::CatalogConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write one recipe file at `<root>/<relative>`, creating directories.
pub fn write_recipe(config: &CatalogConfig, relative: &str, content: &str) -> PathBuf {
    let path = config.recipes_root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

/// Render a well-formed recipe for `name`.
pub fn recipe_toml(name: &str) -> String {
    format!(
        r#"name = "{name}"
description = "The {name} command-line tool"
homepage = "https://example.com/{name}"
tags = ["cli", "test"]

[install]
brew = "{name}"
"#
    )
}

/// Create an empty catalog.
///
/// Returns (TempDir, config) - keep the TempDir alive to prevent cleanup.
pub fn empty_catalog() -> (TempDir, CatalogConfig) {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path().join("recipes");
    fs::create_dir_all(&root).unwrap();
    (temp_dir, CatalogConfig::new(root))
}

/// Create a catalog of `per_letter * 26` valid recipes.
pub fn populated_catalog(per_letter: usize) -> (TempDir, CatalogConfig) {
    let (temp_dir, config) = empty_catalog();
    for letter in 'a'..='z' {
        for i in 0..per_letter {
            let name = format!("{letter}tool-{i}");
            write_recipe(&config, &format!("{letter}/{name}.toml"), &recipe_toml(&name));
        }
    }
    (temp_dir, config)
}
