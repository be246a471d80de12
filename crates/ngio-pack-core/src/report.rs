//! Packaging operation reporting.

use std::path::Path;
use std::time::Duration;

/// Report of a packaging run.
///
/// `archive_size` is read back from disk after the archive is finalized, so
/// it includes the zip headers and central directory.
///
/// # Examples
///
/// ```
/// use ngio_pack_core::PackReport;
/// use std::path::Path;
///
/// let mut report = PackReport::default();
/// report.archive_size = 2048;
/// assert_eq!(
///     report.summary_line(Path::new("/project/NGIO.zip")),
///     "Created NGIO.zip (2048 bytes)"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackReport {
    /// Number of files written to the archive.
    pub files_added: usize,

    /// Number of files left out by the exclusion rule.
    pub files_excluded: usize,

    /// Total uncompressed bytes read from source files.
    pub bytes_read: u64,

    /// Size of the finished archive on disk.
    pub archive_size: u64,

    /// Entry names in the order they were written.
    pub entries: Vec<String>,

    /// Duration of the whole run.
    pub duration: Duration,

    /// Non-fatal issues seen during traversal.
    pub warnings: Vec<String>,
}

impl PackReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the compression ratio (uncompressed / archive size).
    ///
    /// Returns 0.0 when either side is zero.
    ///
    /// ```
    /// use ngio_pack_core::PackReport;
    ///
    /// let mut report = PackReport::new();
    /// report.bytes_read = 1000;
    /// report.archive_size = 250;
    /// assert_eq!(report.compression_ratio(), 4.0);
    /// ```
    #[must_use]
    pub fn compression_ratio(&self) -> f64 {
        if self.archive_size == 0 || self.bytes_read == 0 {
            return 0.0;
        }
        self.bytes_read as f64 / self.archive_size as f64
    }

    /// Formats the one-line confirmation printed after a successful run.
    #[must_use]
    pub fn summary_line(&self, output: &Path) -> String {
        let name = output
            .file_name()
            .map_or_else(|| output.display().to_string(), |n| n.to_string_lossy().into_owned());
        format!("Created {name} ({} bytes)", self.archive_size)
    }
}
