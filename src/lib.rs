// src/lib.rs

//! Larder - recipe catalog validator and index generator
//!
//! Larder reads a directory of per-tool TOML recipes, checks every file
//! against a fixed schema and, when the whole catalog is clean, emits one
//! JSON index for downstream consumers.
//!
//! # Architecture
//!
//! - Explicit configuration: the recipes root is passed to every operation
//! - Accumulate, don't abort: validation problems are values, collected
//!   across the whole catalog; only environment failures are errors
//! - All-or-nothing output: the index is written atomically, and only for
//!   a catalog with zero validation errors

pub mod catalog;
mod error;
pub mod recipe;

pub use catalog::{
    CatalogConfig, CatalogIndex, CatalogScan, RecipeOutcome, SCHEMA_VERSION, discover_recipes,
    generate_json, parse_recipe, scan_catalog, validate_path, write_index,
};
pub use error::{Error, Result};
pub use recipe::{Recipe, ValidationError, ValidationErrorKind, validate_metadata};
