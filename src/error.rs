//! Error types for mappr-config

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Project file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Snapshot '{0}' not found")]
    SnapshotNotFound(String),

}

pub type Result<T> = std::result::Result<T, Error>;

/// A single problem found while validating a project document.
///
/// Every variant carries the dotted path of the offending field, e.g.
/// `snapshots[2].layout.settings.nodeSizeMin`. Errors about the root object
/// use the path `$`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{path}: missing required field")]
    MissingRequiredField { path: String },

    #[error("{path}: unrecognized field")]
    UnknownField { path: String },

    #[error("{path}: '{value}' is not one of [{}]", .allowed.join(", "))]
    InvalidEnumValue {
        path: String,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("{path}: {value} is outside [{min}, {max}]")]
    InvalidRange {
        path: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{path}: '{value}' is not a valid color")]
    InvalidColor { path: String, value: String },

    #[error("{path}: snapshot id '{id}' is used by snapshots[{first}] and snapshots[{second}]")]
    DuplicateSnapshotId {
        path: String,
        id: String,
        first: usize,
        second: usize,
    },

    #[error("{path}: '{id}' does not match any snapshot id")]
    DanglingReference { path: String, id: String },

    #[error("{path}: {message}")]
    MalformedInput { path: String, message: String },
}

impl ValidationError {
    /// Path of the field this error refers to
    pub fn path(&self) -> &str {
        match self {
            ValidationError::MissingRequiredField { path }
            | ValidationError::UnknownField { path }
            | ValidationError::InvalidEnumValue { path, .. }
            | ValidationError::InvalidRange { path, .. }
            | ValidationError::InvalidColor { path, .. }
            | ValidationError::DuplicateSnapshotId { path, .. }
            | ValidationError::DanglingReference { path, .. }
            | ValidationError::MalformedInput { path, .. } => path,
        }
    }
}

/// Every problem found in one validation pass. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Wrap collected errors, returning `None` when nothing was found
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn single(error: ValidationError) -> Self {
        Self(vec![error])
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Find the first error reported for `path`
    pub fn at(&self, path: &str) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.path() == path)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.0.len())?;
        for err in &self.0 {
            write!(f, "\n  - {}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
