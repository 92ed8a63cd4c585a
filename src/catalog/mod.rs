// src/catalog/mod.rs

//! The recipe catalog on disk
//!
//! A catalog is a directory tree with one recipe per file, grouped by the
//! first letter of the tool name:
//!
//! ```text
//! recipes/
//!   b/bat.toml
//!   f/fd.toml
//!   r/ripgrep.toml
//! ```
//!
//! Processing is a single pass: discover files, validate each path, parse
//! and validate each file, then sort the survivors into an index. All
//! per-file problems are collected; the index is only written when there
//! are none.

mod config;
mod discovery;
mod index;
mod path;
mod scan;

pub use config::{CatalogConfig, DEFAULT_RECIPES_DIR, RECIPE_EXTENSION};
pub use discovery::discover_recipes;
pub use index::{CatalogIndex, DEFAULT_OUTPUT_PATH, SCHEMA_VERSION, generate_json, write_index};
pub use path::validate_path;
pub use scan::{CatalogScan, RecipeOutcome, parse_recipe, scan_catalog};
