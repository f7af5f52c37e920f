//! Story loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading a story file.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    #[error("Story file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported story format '{extension}' (expected .toml or .json)")]
    UnsupportedFormat { extension: String },

    #[error("Failed to read story file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Invalid TOML story: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON story: {0}")]
    Json(#[from] serde_json::Error),
}
