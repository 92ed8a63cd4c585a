// src/error.rs

//! Error types for Larder
//!
//! Only environment-level failures live here. Problems with individual
//! recipe files are not errors in this sense: they are collected as
//! [`ValidationError`](crate::ValidationError) values so a single
//! run can report every problem in the catalog at once.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a catalog run
#[derive(Error, Debug)]
pub enum Error {
    /// The configured recipes root does not exist
    #[error("Recipes root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// I/O failure on a path the run cannot continue without
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed (permissions, vanished directories)
    #[error("Failed to walk recipes directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// The index could not be serialized
    #[error("Failed to serialize index: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for Larder operations
pub type Result<T> = std::result::Result<T, Error>;
