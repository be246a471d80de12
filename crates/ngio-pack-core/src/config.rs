//! Configuration for packaging runs.

use crate::PackError;
use crate::Result;

/// Suffix of files left out of the archive by default.
pub const DEFAULT_EXCLUDED_SUFFIX: &str = ".swf";

/// Configuration for a packaging run.
///
/// The defaults reproduce the fixed packaging behavior: `.swf` files are
/// excluded and symlinks are followed. Entries always use the zip
/// library's default deflate settings.
///
/// # Examples
///
/// ```
/// use ngio_pack_core::PackConfig;
///
/// let config = PackConfig::default();
/// assert_eq!(config.excluded_suffixes, vec![".swf".to_string()]);
///
/// let custom = PackConfig::default()
///     .with_excluded_suffixes(vec![".swf".into(), ".map".into()]);
/// assert!(custom.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PackConfig {
    /// File name suffixes excluded from the archive.
    ///
    /// Matching is case-sensitive and applies to files only.
    ///
    /// Default: `[".swf"]`.
    pub excluded_suffixes: Vec<String>,

    /// Follow symlinks while traversing, packaging their targets.
    ///
    /// Default: `true`.
    pub follow_symlinks: bool,

    /// Record unix permission bits on each entry.
    ///
    /// Default: `true`.
    pub preserve_permissions: bool,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            excluded_suffixes: vec![DEFAULT_EXCLUDED_SUFFIX.to_string()],
            follow_symlinks: true,
            preserve_permissions: true,
        }
    }
}

impl PackConfig {
    /// Creates a new `PackConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the excluded suffixes.
    #[must_use]
    pub fn with_excluded_suffixes(mut self, suffixes: Vec<String>) -> Self {
        self.excluded_suffixes = suffixes;
        self
    }

    /// Sets whether to follow symlinks.
    #[must_use]
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Sets whether to preserve permissions.
    #[must_use]
    pub fn with_preserve_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an excluded suffix is empty (it would exclude
    /// every file).
    pub fn validate(&self) -> Result<()> {
        if self.excluded_suffixes.iter().any(String::is_empty) {
            return Err(PackError::InvalidConfig {
                reason: "excluded suffix must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
