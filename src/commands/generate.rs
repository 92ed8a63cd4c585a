// src/commands/generate.rs

//! Generate command - validate the catalog and write the JSON index

use super::print_report;
use anyhow::{Context, Result};
use larder::{CatalogConfig, generate_json, scan_catalog, write_index};
use std::path::Path;
use tracing::info;

/// Validate every recipe under `recipes_dir` and write the index to `output`
///
/// Nothing is written if any recipe fails validation. Returns `true` when
/// the index was written.
pub fn cmd_generate(recipes_dir: &str, output: &str) -> Result<bool> {
    let config = CatalogConfig::new(recipes_dir);
    let output = Path::new(output);
    info!("Generating index from {}", recipes_dir);

    let scan = scan_catalog(&config)
        .with_context(|| format!("Failed to scan recipes in {}", recipes_dir))?;

    if !scan.is_clean() {
        print_report(&scan);
        println!("Index not written");
        return Ok(false);
    }

    let index = generate_json(scan.recipes);
    write_index(&index, output)
        .with_context(|| format!("Failed to write index: {}", output.display()))?;

    println!(
        "[COMPLETE] Wrote {} recipe(s) to {}",
        index.recipes.len(),
        output.display()
    );
    Ok(true)
}
