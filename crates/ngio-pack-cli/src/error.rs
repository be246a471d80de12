//! Error conversion utilities for CLI.
//!
//! Converts ngio-pack-core's typed errors (thiserror) into user-facing
//! errors (anyhow), adding guidance where the user can act on it.

use anyhow::anyhow;
use ngio_pack_core::PackError;
use std::path::Path;

/// Converts `PackError` to a user-friendly anyhow error.
///
/// A missing build directory yields a single line naming the path.
pub fn convert_pack_error(err: PackError, output: Option<&Path>) -> anyhow::Error {
    match err {
        PackError::SourceNotFound { path } => {
            anyhow!("Build directory not found: {}", path.display())
        }
        PackError::LayoutUnresolved { path } => {
            anyhow!(
                "Cannot derive the project root from '{}'\n\
                 HINT: Pass --root <DIR> to choose the project directory.",
                path.display()
            )
        }
        PackError::InvalidEntryName { path } => {
            anyhow!(
                "Cannot store '{}' in a zip archive\n\
                 HINT: File names must be valid UTF-8.",
                path.display()
            )
        }
        PackError::Io(io_err) => match output {
            Some(output) => anyhow!(
                "I/O error while writing '{}': {}",
                output.display(),
                io_err
            ),
            None => anyhow!("I/O error: {io_err}"),
        },
        other => anyhow::Error::from(other).context("Packaging failed"),
    }
}

/// Adds CLI context to a core result.
pub fn add_pack_context<T>(
    result: Result<T, PackError>,
    output: Option<&Path>,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_pack_error(e, output))
}
