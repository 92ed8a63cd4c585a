// src/catalog/discovery.rs

//! Recipe file discovery

use crate::catalog::config::{CatalogConfig, RECIPE_EXTENSION};
use crate::error::{Error, Result};
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

/// Find every recipe file under the recipes root, in path order
///
/// Symlinks are returned as-is so the path validator can reject those that
/// point outside the root. Nothing here validates placement.
pub fn discover_recipes(config: &CatalogConfig) -> Result<Vec<PathBuf>> {
    let root = &config.recipes_root;
    if !root.is_dir() {
        return Err(Error::RootNotFound(root.clone()));
    }

    let mut recipes = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !(entry.file_type().is_file() || entry.path_is_symlink()) {
            continue;
        }
        if entry
            .path()
            .extension()
            .is_some_and(|ext| ext == RECIPE_EXTENSION)
        {
            recipes.push(entry.into_path());
        }
    }

    recipes.sort();
    debug!("Discovered {} recipe files under {}", recipes.len(), root.display());
    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discovers_recursively_in_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("recipes");
        for relative in ["z/zoxide.toml", "a/age.toml", "b/bat.toml", "a/atuin.toml", "stray.toml"] {
            let path = root.join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "").unwrap();
        }
        fs::write(root.join("README.md"), "").unwrap();

        let recipes = discover_recipes(&CatalogConfig::new(&root)).unwrap();
        let relative: Vec<_> = recipes
            .iter()
            .map(|p| p.strip_prefix(&root).unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            relative,
            ["a/age.toml", "a/atuin.toml", "b/bat.toml", "stray.toml", "z/zoxide.toml"]
        );
    }

    #[test]
    fn test_empty_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let recipes = discover_recipes(&CatalogConfig::new(temp_dir.path())).unwrap();
        assert!(recipes.is_empty());
    }

    #[test]
    fn test_missing_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::new(temp_dir.path().join("missing"));
        assert!(matches!(discover_recipes(&config), Err(Error::RootNotFound(_))));
    }
}
