//! Error types for form configuration loading
//!
//! Validation failures are never errors: a failing rule is reported through the
//! field's `is_valid` flag and error index. These errors only cover loading
//! declarative form definitions from disk or from serialized text.

use std::path::PathBuf;
use thiserror::Error;

pub type FormsResult<T> = Result<T, FormsError>;

/// Errors raised while reading declarative form definitions
#[derive(Debug, Error)]
pub enum FormsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported form definition format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid rule pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

impl FormsError {
    /// Create an unsupported format error for a definition file
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }

    /// Create an invalid pattern error for a custom rule
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}
