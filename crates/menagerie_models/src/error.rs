//! # Model Error Types
//!
//! All errors that can occur while configuring or selecting models.
//! Building a model never fails.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the model layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// No species goes by this name.
    #[error("unknown species: {0}")]
    UnknownSpecies(String),

    /// Configuration text could not be parsed or holds unusable values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("failed to read configuration {path:?}: {reason}")]
    ConfigRead {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        reason: String,
    },
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
