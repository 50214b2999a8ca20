use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while producing the README.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The output file could not be created or written.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A template is missing its `{repo}` slot.
    #[error("Template '{name}' has no {{repo}} slot: {template}")]
    Template { name: String, template: String },

    /// A project identifier is empty.
    #[error("Project identifier at position {index} is empty")]
    EmptyProject { index: usize },

    /// The default output path could not be derived from the executable.
    #[error("Cannot resolve output path: {0}")]
    OutputPath(String),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
