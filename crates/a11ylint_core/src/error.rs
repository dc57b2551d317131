//! Linter error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or consulting a [`Configuration`](crate::Configuration).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text is not valid JSON or JSONC.
    #[error("Invalid config syntax: {0}")]
    Syntax(String),

    /// A category or group entry is not an object.
    #[error("Expected an object at {0}")]
    NotAnObject(String),

    /// A rule entry is not a boolean.
    #[error("Expected true or false at {0}")]
    NotABoolean(String),

    /// The file names a category, group or rule the catalog does not know.
    #[error("Unknown configuration entry {0}")]
    UnknownEntry(String),

    /// A catalog rule has no entry in the file.
    #[error("Missing configuration entry {0}")]
    MissingEntry(String),

    /// A rule asked the gate about a key that was never configured.
    #[error("No configuration entry for rule {0}")]
    UnknownRule(String),
}

/// Errors that can occur during linting.
#[derive(Debug, Error)]
pub enum LinterError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Document could not be loaded.
    #[error("Document error: {0}")]
    Document(#[from] a11ylint_ast::DocumentError),

    /// File I/O error.
    #[error("File error: {0}")]
    File(String),
}

impl LinterError {
    /// Creates a file error.
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }
}
