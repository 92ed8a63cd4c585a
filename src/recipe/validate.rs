// src/recipe/validate.rs

//! Recipe metadata validation
//!
//! Every rule is evaluated independently and every violation is reported,
//! so one pass over a file surfaces all of its problems.

use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use url::Url;

/// Maximum description length, in characters
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Fields every recipe must define
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "description", "homepage"];

/// Percent-decoding passes applied before the scheme check
const MAX_DECODE_PASSES: usize = 3;

/// URL schemes that may never appear anywhere in a homepage
pub const DANGEROUS_SCHEMES: [&str; 4] = ["javascript", "vbscript", "data", "file"];

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

// A scheme only counts when it is not the tail of a longer token, so
// `metadata:` is not read as `data:`.
static DANGEROUS_SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)(?:^|[^a-z0-9+.\-])(?:{}):",
        DANGEROUS_SCHEMES.join("|")
    ))
    .unwrap()
});

/// Category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Path resolves outside the recipes root
    Traversal,
    /// Path does not follow `<letter>/<name>.toml`
    Pattern,
    /// A required field is absent
    MissingField,
    /// A field is present but violates a content rule
    Format,
    /// The file is not valid TOML
    Parse,
    /// The file could not be read
    Read,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValidationErrorKind::Traversal => "traversal",
            ValidationErrorKind::Pattern => "pattern",
            ValidationErrorKind::MissingField => "missing-field",
            ValidationErrorKind::Format => "format",
            ValidationErrorKind::Parse => "parse",
            ValidationErrorKind::Read => "read",
        };
        f.write_str(label)
    }
}

/// One violated constraint in one recipe file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub path: PathBuf,
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: &Path, kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Validate the field mapping of a recipe file
///
/// Returns an empty list when the mapping is valid. Fields other than the
/// required three are ignored.
pub fn validate_metadata(path: &Path, fields: &toml::Table) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for field in REQUIRED_FIELDS {
        let value = match fields.get(field) {
            Some(value) => value,
            None => {
                errors.push(ValidationError::new(
                    path,
                    ValidationErrorKind::MissingField,
                    format!("Missing required field '{}'", field),
                ));
                continue;
            }
        };

        let Some(text) = value.as_str() else {
            errors.push(ValidationError::new(
                path,
                ValidationErrorKind::Format,
                format!("Field '{}' must be a string, found {}", field, value.type_str()),
            ));
            continue;
        };

        let messages = match field {
            "name" => check_name(path, text),
            "description" => check_description(text),
            _ => check_homepage(text),
        };
        errors.extend(
            messages
                .into_iter()
                .map(|message| ValidationError::new(path, ValidationErrorKind::Format, message)),
        );
    }

    errors
}

fn check_name(path: &Path, name: &str) -> Vec<String> {
    let mut problems = Vec::new();

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    if name != stem {
        problems.push(format!(
            "Name '{}' does not match filename '{}'",
            name, stem
        ));
    }

    if !NAME_RE.is_match(name) {
        problems.push(format!(
            "Name '{}' contains invalid characters (allowed: a-z, 0-9, -)",
            name
        ));
    }

    problems
}

fn check_description(description: &str) -> Vec<String> {
    let mut problems = Vec::new();

    if description.trim().is_empty() {
        problems.push("Description must not be empty".to_string());
    }

    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        problems.push(format!(
            "Description length {} exceeds limit of {} characters",
            len, MAX_DESCRIPTION_LEN
        ));
    }

    if description.chars().any(is_forbidden_control) {
        problems.push("Description contains control characters".to_string());
    }

    problems
}

fn check_homepage(homepage: &str) -> Vec<String> {
    let mut problems = Vec::new();

    if !homepage.starts_with("https://") {
        problems.push(format!("Homepage '{}' must start with https://", homepage));
    }

    match Url::parse(homepage) {
        Ok(url) if url.has_host() => {}
        Ok(_) => problems.push(format!("Homepage '{}' is not a valid URL: missing host", homepage)),
        Err(e) => problems.push(format!("Homepage '{}' is not a valid URL: {}", homepage, e)),
    }

    if contains_dangerous_scheme(homepage) {
        problems.push(format!("Homepage '{}' contains a dangerous scheme", homepage));
    }

    problems
}

/// Look for a dangerous scheme in the raw text and in each decoded layer
///
/// Decoding repeats so `javascript%253A` is caught as well as
/// `javascript%3A`.
fn contains_dangerous_scheme(homepage: &str) -> bool {
    let mut text = homepage.to_string();
    for _ in 0..=MAX_DECODE_PASSES {
        if DANGEROUS_SCHEME_RE.is_match(&text) {
            return true;
        }
        let bytes = urlencoding::decode_binary(text.as_bytes());
        let decoded = String::from_utf8_lossy(&bytes).into_owned();
        if decoded == text {
            return false;
        }
        text = decoded;
    }
    false
}

/// C0 controls and DEL
fn is_forbidden_control(c: char) -> bool {
    c < '\u{20}' || c == '\u{7f}'
}
