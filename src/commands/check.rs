// src/commands/check.rs

//! Check command - validate the catalog without writing anything

use super::print_report;
use anyhow::{Context, Result};
use larder::{CatalogConfig, scan_catalog};
use tracing::info;

/// Validate every recipe under `recipes_dir`
///
/// Returns `true` when the catalog has no validation errors.
pub fn cmd_check(recipes_dir: &str) -> Result<bool> {
    let config = CatalogConfig::new(recipes_dir);
    info!("Checking recipes in {}", recipes_dir);

    let scan = scan_catalog(&config)
        .with_context(|| format!("Failed to scan recipes in {}", recipes_dir))?;

    if !scan.is_clean() {
        print_report(&scan);
        return Ok(false);
    }

    println!("[OK] {} recipe(s) valid", scan.recipes.len());
    Ok(true)
}
