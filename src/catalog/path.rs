// src/catalog/path.rs

//! Recipe path validation
//!
//! A recipe must live at `<root>/<letter>/<name>.toml`, where `<letter>` is
//! the first character of `<name>`. Paths are resolved before checking, so
//! neither `..` segments nor symlinks can point a recipe outside the root.

use crate::catalog::config::{CatalogConfig, RECIPE_EXTENSION};
use crate::error::Result;
use crate::recipe::{ValidationError, ValidationErrorKind};
use regex::Regex;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

/// Dangling symlinks followed before giving up
const MAX_LINK_DEPTH: usize = 40;

static LAYOUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?P<letter>[a-z])/(?P<stem>[^/]+)\.{}$",
        regex::escape(RECIPE_EXTENSION)
    ))
    .unwrap()
});

/// Check that `path` is a well-placed recipe file under the configured root
///
/// Violations are returned as values. Only a missing or unreadable root is
/// an `Err`.
pub fn validate_path(config: &CatalogConfig, path: &Path) -> Result<Vec<ValidationError>> {
    let root = config.canonical_root()?;
    Ok(validate_path_under(&root, path))
}

/// Check `path` against an already canonicalized recipes root
pub(crate) fn validate_path_under(root: &Path, path: &Path) -> Vec<ValidationError> {
    let resolved = match resolve(path, 0) {
        Ok(resolved) => resolved,
        Err(e) => {
            return vec![ValidationError::new(
                path,
                ValidationErrorKind::Traversal,
                format!("Cannot resolve path: {}", e),
            )];
        }
    };

    let Ok(relative) = resolved.strip_prefix(root) else {
        return vec![ValidationError::new(
            path,
            ValidationErrorKind::Traversal,
            format!(
                "Path resolves to {}, outside recipes root {}",
                resolved.display(),
                root.display()
            ),
        )];
    };

    let mut errors = Vec::new();
    if let Some(message) = check_layout(relative) {
        errors.push(ValidationError::new(path, ValidationErrorKind::Pattern, message));
    }
    errors
}

fn check_layout(relative: &Path) -> Option<String> {
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let display = parts.join("/");

    let Some(caps) = LAYOUT_RE.captures(&display) else {
        return Some(format!(
            "Path '{}' does not match pattern <letter>/<name>.{}",
            display, RECIPE_EXTENSION
        ));
    };

    let letter = &caps["letter"];
    let stem = &caps["stem"];
    if !stem.starts_with(letter) {
        return Some(format!(
            "Path '{}' does not match pattern: '{}' must start with directory letter '{}'",
            display, stem, letter
        ));
    }

    None
}

/// Resolve a path to its absolute, symlink-free form
///
/// For a path that does not exist, the nearest existing ancestor is
/// canonicalized and the missing tail appended. Dangling symlinks on the
/// way are followed to their targets, so a link to a missing file outside
/// the root still resolves outside the root.
fn resolve(path: &Path, depth: usize) -> io::Result<PathBuf> {
    match path.canonicalize() {
        Ok(resolved) => return Ok(resolved),
        Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e),
        Err(_) => {}
    }

    let absolute = normalize(&std::path::absolute(path)?);
    let mut base = absolute.as_path();
    let mut tail: Vec<&OsStr> = Vec::new();

    loop {
        if fs::symlink_metadata(base).is_ok_and(|m| m.file_type().is_symlink()) {
            if depth >= MAX_LINK_DEPTH {
                return Err(io::Error::other("too many levels of symbolic links"));
            }
            let target = fs::read_link(base)?;
            let parent = base.parent().unwrap_or(base);
            let resolved = resolve(&parent.join(target), depth + 1)?;
            return Ok(append(resolved, &tail));
        }

        match base.canonicalize() {
            Ok(resolved) => return Ok(append(resolved, &tail)),
            Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e),
            Err(_) => {}
        }

        match (base.parent(), base.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name);
                base = parent;
            }
            _ => return Ok(absolute.clone()),
        }
    }
}

fn append(base: PathBuf, tail: &[&OsStr]) -> PathBuf {
    tail.iter().rev().fold(base, |path, name| path.join(name))
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
