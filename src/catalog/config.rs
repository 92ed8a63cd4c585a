// src/catalog/config.rs

//! Catalog configuration

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Default recipes root, relative to the working directory
pub const DEFAULT_RECIPES_DIR: &str = "recipes";

/// Extension every recipe file carries
pub const RECIPE_EXTENSION: &str = "toml";

/// Where the catalog lives
///
/// Passed explicitly to discovery and validation so tests and alternate
/// catalogs can point at any directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Directory holding the `<letter>/<name>.toml` tree
    pub recipes_root: PathBuf,
}

impl CatalogConfig {
    pub fn new(recipes_root: impl Into<PathBuf>) -> Self {
        Self {
            recipes_root: recipes_root.into(),
        }
    }

    /// Resolve the root to an absolute path with symlinks followed
    pub fn canonical_root(&self) -> Result<PathBuf> {
        canonicalize_root(&self.recipes_root)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RECIPES_DIR)
    }
}

fn canonicalize_root(root: &Path) -> Result<PathBuf> {
    match root.canonicalize() {
        Ok(path) if path.is_dir() => Ok(path),
        Ok(_) => Err(Error::RootNotFound(root.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::RootNotFound(root.to_path_buf()))
        }
        Err(e) => Err(Error::io(root, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_root() {
        assert_eq!(CatalogConfig::default().recipes_root, PathBuf::from("recipes"));
    }

    #[test]
    fn test_canonical_root_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::new(temp_dir.path().join("nope"));
        assert!(matches!(config.canonical_root(), Err(Error::RootNotFound(_))));
    }

    #[test]
    fn test_canonical_root_rejects_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file = temp_dir.path().join("recipes");
        std::fs::write(&file, "").unwrap();

        let config = CatalogConfig::new(&file);
        assert!(matches!(config.canonical_root(), Err(Error::RootNotFound(_))));
    }

    #[test]
    fn test_canonical_root_resolves_dots() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp_dir.path().join("recipes")).unwrap();

        let config = CatalogConfig::new(temp_dir.path().join("recipes").join("..").join("recipes"));
        let root = config.canonical_root().unwrap();
        assert_eq!(root, temp_dir.path().join("recipes").canonicalize().unwrap());
    }
}
