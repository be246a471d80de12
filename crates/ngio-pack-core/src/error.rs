//! Error types for packaging operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `PackError`.
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors that can occur while packaging a build directory.
#[derive(Error, Debug)]
pub enum PackError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Source directory does not exist.
    #[error("build directory not found: {path}")]
    SourceNotFound {
        /// The resolved source directory.
        path: PathBuf,
    },

    /// Layout could not be derived from the program location.
    #[error("cannot resolve project root from {path}")]
    LayoutUnresolved {
        /// The path the layout was derived from.
        path: PathBuf,
    },

    /// Entry path cannot be stored in a zip archive.
    #[error("invalid entry name: {path}")]
    InvalidEntryName {
        /// The offending filesystem path.
        path: PathBuf,
    },

    /// Configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
