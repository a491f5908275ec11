//! Error type shared by the store and its codecs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`crate::AssociationStore`] and the codecs.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("File \"{}\" not found!", .0.display())]
    NotFound(PathBuf),

    #[error("File \"{}\" already exists!", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Malformed line {line}: {content:?} (expected TAG<==>FILE)")]
    MalformedLine { line: usize, content: String },

    #[error("Name {0:?} cannot be written as a TAG<==>FILE line")]
    Unrepresentable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "yaml")]
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl StoreError {
    /// Whether this error is a missing-file error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
