// src/recipe/mod.rs

//! Recipe records and their validation
//!
//! Each tool in the catalog is described by one TOML file:
//!
//! ```toml
//! name = "ripgrep"
//! description = "Recursively search directories for a regex pattern"
//! homepage = "https://github.com/BurntSushi/ripgrep"
//!
//! # Anything else is passed through to the index as-is
//! tags = ["search", "cli"]
//! ```
//!
//! Validation never stops at the first problem: every rule is checked and
//! each violation becomes one [`ValidationError`].

mod format;
pub mod parser;
mod validate;

pub use format::{Recipe, toml_to_json};
pub use parser::{parse_fields, parse_recipe_content};
pub use validate::{
    DANGEROUS_SCHEMES, MAX_DESCRIPTION_LEN, REQUIRED_FIELDS, ValidationError,
    ValidationErrorKind, validate_metadata,
};
