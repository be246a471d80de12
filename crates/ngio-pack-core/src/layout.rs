//! Resolution of the source directory and output archive paths.
//!
//! The packager takes no runtime inputs: both paths hang off the project
//! root, which is the parent of the directory holding the program.

use crate::PackError;
use crate::Result;
use std::path::Path;
use std::path::PathBuf;

/// Name of the directory that gets packaged.
pub const SOURCE_DIR_NAME: &str = "build";

/// File name of the produced archive.
pub const OUTPUT_FILE_NAME: &str = "NGIO.zip";

/// Paths used by a single packaging run.
///
/// # Examples
///
/// ```
/// use ngio_pack_core::PackLayout;
/// use std::path::Path;
///
/// let layout = PackLayout::from_root("/project");
/// assert_eq!(layout.source_dir, Path::new("/project/build"));
/// assert_eq!(layout.output, Path::new("/project/NGIO.zip"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackLayout {
    /// Project root both other paths are derived from.
    pub root: PathBuf,

    /// Directory whose contents are packaged.
    pub source_dir: PathBuf,

    /// Archive file written on success.
    pub output: PathBuf,
}

impl PackLayout {
    /// Builds the fixed layout below `root`.
    #[must_use]
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            source_dir: root.join(SOURCE_DIR_NAME),
            output: root.join(OUTPUT_FILE_NAME),
            root,
        }
    }

    /// Derives the layout from an executable path.
    ///
    /// The root is the parent of the directory containing the executable,
    /// so `/project/bin/ngio-pack` packages `/project/build` into
    /// `/project/NGIO.zip`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ngio_pack_core::PackLayout;
    /// use std::path::Path;
    ///
    /// let layout = PackLayout::from_executable("/project/bin/ngio-pack")?;
    /// assert_eq!(layout.root, Path::new("/project"));
    /// # Ok::<(), ngio_pack_core::PackError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `LayoutUnresolved` if the path has fewer than two ancestors.
    pub fn from_executable(exe: impl AsRef<Path>) -> Result<Self> {
        let exe = exe.as_ref();
        let root = exe
            .parent()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| PackError::LayoutUnresolved {
                path: exe.to_path_buf(),
            })?;
        Ok(Self::from_root(root))
    }

    /// Derives the layout from the currently running executable.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable path cannot be determined.
    pub fn from_current_exe() -> Result<Self> {
        let exe = std::env::current_exe()?;
        Self::from_executable(exe)
    }

    /// Overrides the archive path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}
