// src/catalog/scan.rs

//! Per-file recipe parsing and whole-catalog scans

use crate::catalog::config::CatalogConfig;
use crate::catalog::discovery::discover_recipes;
use crate::catalog::path::validate_path_under;
use crate::error::Result;
use crate::recipe::{Recipe, ValidationError, ValidationErrorKind, parse_recipe_content};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Outcome of processing one recipe file
///
/// `recipe` is `Some` exactly when `errors` is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeOutcome {
    pub recipe: Option<Recipe>,
    pub errors: Vec<ValidationError>,
}

impl RecipeOutcome {
    fn accepted(recipe: Recipe) -> Self {
        Self {
            recipe: Some(recipe),
            errors: Vec::new(),
        }
    }

    fn rejected(errors: Vec<ValidationError>) -> Self {
        Self {
            recipe: None,
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate and parse a single recipe file
///
/// The path is checked before the file is opened; a misplaced file is never
/// read. An unreadable or malformed file is reported as a validation error
/// for that file alone; only a missing root is an `Err`.
pub fn parse_recipe(config: &CatalogConfig, path: &Path) -> Result<RecipeOutcome> {
    let root = config.canonical_root()?;
    Ok(parse_recipe_under(&root, path))
}

fn parse_recipe_under(root: &Path, path: &Path) -> RecipeOutcome {
    let path_errors = validate_path_under(root, path);
    if !path_errors.is_empty() {
        return RecipeOutcome::rejected(path_errors);
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            return RecipeOutcome::rejected(vec![ValidationError::new(
                path,
                ValidationErrorKind::Read,
                format!("Failed to read recipe file: {}", e),
            )]);
        }
    };

    match parse_recipe_content(path, &content) {
        Ok(recipe) => RecipeOutcome::accepted(recipe),
        Err(errors) => RecipeOutcome::rejected(errors),
    }
}

/// Result of scanning a whole catalog
#[derive(Debug, Default)]
pub struct CatalogScan {
    /// Number of recipe files discovered
    pub files_scanned: usize,
    /// Valid recipes, in discovery order
    pub recipes: Vec<Recipe>,
    /// Every validation error across all files
    pub errors: Vec<ValidationError>,
}

impl CatalogScan {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of files that produced at least one error
    pub fn rejected_files(&self) -> usize {
        let mut paths: Vec<&Path> = self.errors.iter().map(|e| e.path.as_path()).collect();
        paths.dedup();
        paths.len()
    }

    /// The valid recipes, or every error if any file was rejected
    pub fn into_result(self) -> std::result::Result<Vec<Recipe>, Vec<ValidationError>> {
        if self.errors.is_empty() {
            Ok(self.recipes)
        } else {
            Err(self.errors)
        }
    }
}

/// Discover and process every recipe under the configured root
///
/// Per-file problems are accumulated; only a missing root or a failed
/// directory walk aborts the scan.
pub fn scan_catalog(config: &CatalogConfig) -> Result<CatalogScan> {
    let paths = discover_recipes(config)?;
    let root = config.canonical_root()?;
    let mut scan = CatalogScan {
        files_scanned: paths.len(),
        ..Default::default()
    };

    for path in &paths {
        let outcome = parse_recipe_under(&root, path);
        match outcome.recipe {
            Some(recipe) => {
                debug!("Accepted recipe {}", recipe.name);
                scan.recipes.push(recipe);
            }
            None => {
                warn!(
                    "Rejected {} ({} error(s))",
                    path.display(),
                    outcome.errors.len()
                );
                scan.errors.extend(outcome.errors);
            }
        }
    }

    info!(
        "Scanned {} recipe files: {} valid, {} error(s)",
        scan.files_scanned,
        scan.recipes.len(),
        scan.errors.len()
    );
    Ok(scan)
}
