//! Directory traversal producing the ordered list of archive entries.

use crate::PackConfig;
use crate::PackError;
use crate::Result;
use crate::filters;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// A file selected for the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackEntry {
    /// Full filesystem path to the file.
    pub path: PathBuf,

    /// Entry name inside the archive, `/`-separated.
    pub archive_name: String,

    /// File size in bytes at traversal time.
    pub size: u64,
}

/// Outcome of walking the source directory.
#[derive(Debug, Clone, Default)]
pub struct WalkResult {
    /// Files to archive, in traversal order.
    pub entries: Vec<PackEntry>,

    /// Number of files dropped by the exclusion rule.
    pub excluded: usize,

    /// Entries that were neither files nor directories and got skipped.
    pub warnings: Vec<String>,
}

/// Walks `source_dir` and collects every file that is not excluded.
///
/// Traversal is depth-first with entries sorted by file name inside each
/// directory, so two runs over the same tree yield the same order. The
/// exclusion rule only applies to files: a directory named `assets.swf` is
/// still descended into.
///
/// # Examples
///
/// ```no_run
/// use ngio_pack_core::PackConfig;
/// use ngio_pack_core::walker::collect_entries;
/// use std::path::Path;
///
/// let result = collect_entries(Path::new("build"), &PackConfig::default())?;
/// for entry in &result.entries {
///     println!("{}", entry.archive_name);
/// }
/// # Ok::<(), ngio_pack_core::PackError>(())
/// ```
///
/// # Errors
///
/// Returns an error if any directory or file metadata cannot be read, if a
/// symlink loop is found, or if an entry name is not valid UTF-8.
pub fn collect_entries(source_dir: &Path, config: &PackConfig) -> Result<WalkResult> {
    let mut result = WalkResult::default();

    let walker = WalkDir::new(source_dir)
        .min_depth(1)
        .follow_links(config.follow_symlinks)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| {
            PackError::Io(std::io::Error::other(format!("walkdir error: {e}")))
        })?;
        let file_type = entry.file_type();

        if file_type.is_dir() {
            continue;
        }

        if !file_type.is_file() {
            result
                .warnings
                .push(format!("Skipped non-regular file: {}", entry.path().display()));
            continue;
        }

        let file_name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| PackError::InvalidEntryName {
                path: entry.path().to_path_buf(),
            })?;

        if filters::is_excluded(file_name, config) {
            result.excluded += 1;
            continue;
        }

        let metadata = entry.metadata().map_err(|e| {
            PackError::Io(std::io::Error::other(format!(
                "cannot read metadata for {}: {e}",
                entry.path().display()
            )))
        })?;

        result.entries.push(PackEntry {
            archive_name: filters::archive_name(entry.path(), source_dir)?,
            path: entry.into_path(),
            size: metadata.len(),
        });
    }

    Ok(result)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(result: &WalkResult) -> Vec<&str> {
        result
            .entries
            .iter()
            .map(|e| e.archive_name.as_str())
            .collect()
    }

    #[test]
    fn test_collect_excludes_swf() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub/b.txt"), "bb").unwrap();
        fs::write(root.join("sub/c.swf"), "ccc").unwrap();

        let result = collect_entries(root, &PackConfig::default()).unwrap();

        assert_eq!(names(&result), vec!["a.txt", "sub/b.txt"]);
        assert_eq!(result.excluded, 1);
        assert_eq!(result.entries[1].size, 2);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_collect_sorted_depth_first() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("b/inner")).unwrap();
        fs::write(root.join("c.txt"), "").unwrap();
        fs::write(root.join("a.txt"), "").unwrap();
        fs::write(root.join("b/inner/z.txt"), "").unwrap();
        fs::write(root.join("b/y.txt"), "").unwrap();

        let result = collect_entries(root, &PackConfig::default()).unwrap();

        assert_eq!(
            names(&result),
            vec!["a.txt", "b/inner/z.txt", "b/y.txt", "c.txt"]
        );
    }

    #[test]
    fn test_collect_descends_into_swf_named_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir(root.join("assets.swf")).unwrap();
        fs::write(root.join("assets.swf/logo.png"), "png").unwrap();

        let result = collect_entries(root, &PackConfig::default()).unwrap();

        assert_eq!(names(&result), vec!["assets.swf/logo.png"]);
        assert_eq!(result.excluded, 0);
    }

    #[test]
    fn test_collect_empty_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("empty")).unwrap();

        let result = collect_entries(temp.path(), &PackConfig::default()).unwrap();

        assert!(result.entries.is_empty());
        assert_eq!(result.excluded, 0);
    }

    #[test]
    fn test_collect_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let result = collect_entries(&temp.path().join("nope"), &PackConfig::default());
        assert!(matches!(result.unwrap_err(), PackError::Io(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_follows_symlinks() {
        let temp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("shared.js"), "js").unwrap();
        std::os::unix::fs::symlink(outside.path().join("shared.js"), temp.path().join("link.js"))
            .unwrap();

        let result = collect_entries(temp.path(), &PackConfig::default()).unwrap();
        assert_eq!(names(&result), vec!["link.js"]);
        assert_eq!(result.entries[0].size, 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_skips_symlinks_when_not_following() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("real.js"), "js").unwrap();
        std::os::unix::fs::symlink(temp.path().join("real.js"), temp.path().join("link.js"))
            .unwrap();

        let config = PackConfig::default().with_follow_symlinks(false);
        let result = collect_entries(temp.path(), &config).unwrap();

        assert_eq!(names(&result), vec!["real.js"]);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("link.js"));
    }
}
