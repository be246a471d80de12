//! Exclusion and entry naming rules.

use crate::PackConfig;
use crate::PackError;
use crate::Result;
use std::path::Path;

/// Checks whether a file name ends with one of the excluded suffixes.
///
/// Matching is case-sensitive.
///
/// # Examples
///
/// ```
/// use ngio_pack_core::PackConfig;
/// use ngio_pack_core::filters;
///
/// let config = PackConfig::default();
/// assert!(filters::is_excluded("game.swf", &config));
/// assert!(!filters::is_excluded("game.SWF", &config));
/// assert!(!filters::is_excluded("index.html", &config));
/// ```
#[must_use]
pub fn is_excluded(file_name: &str, config: &PackConfig) -> bool {
    config
        .excluded_suffixes
        .iter()
        .any(|suffix| file_name.ends_with(suffix.as_str()))
}

/// Computes the zip entry name for `path` relative to `root`.
///
/// Entry names always use `/` as separator, whatever the host uses.
///
/// # Examples
///
/// ```
/// use ngio_pack_core::filters;
/// use std::path::Path;
///
/// let name = filters::archive_name(
///     Path::new("/project/build/assets/logo.png"),
///     Path::new("/project/build"),
/// )?;
/// assert_eq!(name, "assets/logo.png");
/// # Ok::<(), ngio_pack_core::PackError>(())
/// ```
///
/// # Errors
///
/// Returns `InvalidEntryName` if the path is not under `root`, equals
/// `root`, or is not valid UTF-8.
pub fn archive_name(path: &Path, root: &Path) -> Result<String> {
    let invalid = || PackError::InvalidEntryName {
        path: path.to_path_buf(),
    };

    let relative = path.strip_prefix(root).map_err(|_| invalid())?;

    let mut name = String::new();
    for component in relative.components() {
        let part = component.as_os_str().to_str().ok_or_else(invalid)?;
        if !name.is_empty() {
            name.push('/');
        }
        name.push_str(part);
    }

    if name.is_empty() {
        return Err(invalid());
    }

    Ok(normalize_separators(&name))
}

/// Replaces backslash separators with forward slashes.
#[must_use]
pub fn normalize_separators(name: &str) -> String {
    name.replace('\\', "/")
}
