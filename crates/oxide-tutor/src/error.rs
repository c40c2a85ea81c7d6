//! Error types for the tutor.

use std::path::PathBuf;

/// Errors that can occur while loading data or looking up tasks.
#[derive(Debug, thiserror::Error)]
pub enum TutorError {
    /// No exercise or challenge has this id.
    #[error("No exercise or challenge with id '{0}'")]
    UnknownTask(String),

    /// A dataset file could not be read.
    #[error("Failed to read dataset '{path}': {source}")]
    DatasetRead {
        /// Path of the dataset file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A dataset file could not be decoded.
    #[error(transparent)]
    Sandbox(#[from] oxide_sandbox::SandboxError),
}

/// Result type for tutor operations.
pub type Result<T> = std::result::Result<T, TutorError>;
