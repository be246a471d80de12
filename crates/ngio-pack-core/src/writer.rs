//! Zip archive writing.

use crate::PackConfig;
use crate::PackReport;
use crate::ProgressCallback;
use crate::Result;
use crate::walker::PackEntry;
use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Writes `entries` into a zip archive on `writer`, in slice order.
///
/// Only file entries are written; the archive holds no directory records.
/// Updates `files_added`, `bytes_read` and `entries` on the report and
/// returns the writer once the central directory has been written.
///
/// # Examples
///
/// ```
/// use ngio_pack_core::NoopProgress;
/// use ngio_pack_core::PackConfig;
/// use ngio_pack_core::PackReport;
/// use ngio_pack_core::writer::write_zip;
/// use std::io::Cursor;
///
/// let mut report = PackReport::new();
/// let cursor = write_zip(
///     Cursor::new(Vec::new()),
///     &[],
///     &PackConfig::default(),
///     &mut report,
///     &mut NoopProgress,
/// )?;
/// assert!(!cursor.into_inner().is_empty());
/// # Ok::<(), ngio_pack_core::PackError>(())
/// ```
///
/// # Errors
///
/// Returns an error if a source file cannot be read or the archive cannot
/// be written.
pub fn write_zip<W: Write + Seek>(
    writer: W,
    entries: &[PackEntry],
    config: &PackConfig,
    report: &mut PackReport,
    progress: &mut dyn ProgressCallback,
) -> Result<W> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let total = entries.len();

    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];

    for (idx, entry) in entries.iter().enumerate() {
        progress.on_entry_start(&entry.archive_name, total, idx + 1);
        add_file(&mut zip, entry, config, options, progress, &mut buffer, report)?;
        progress.on_entry_complete(&entry.archive_name);
    }

    let writer = zip
        .finish()
        .map_err(|e| std::io::Error::other(format!("failed to finish ZIP archive: {e}")))?;

    Ok(writer)
}

fn add_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    entry: &PackEntry,
    config: &PackConfig,
    options: SimpleFileOptions,
    progress: &mut dyn ProgressCallback,
    buffer: &mut [u8],
    report: &mut PackReport,
) -> Result<()> {
    let mut file = File::open(&entry.path)?;

    let file_options = if config.preserve_permissions {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = file.metadata()?;
            options.unix_permissions(metadata.permissions().mode())
        }
        #[cfg(not(unix))]
        {
            options
        }
    } else {
        options
    }
    .large_file(needs_zip64(entry.size));

    zip.start_file(entry.archive_name.as_str(), file_options)
        .map_err(|e| std::io::Error::other(format!("failed to start file in ZIP: {e}")))?;

    let mut bytes_read = 0u64;
    loop {
        let n = file.read(buffer)?;
        if n == 0 {
            break;
        }
        zip.write_all(&buffer[..n])?;
        bytes_read += n as u64;
        progress.on_bytes_written(n as u64);
    }

    report.files_added += 1;
    report.bytes_read += bytes_read;
    report.entries.push(entry.archive_name.clone());

    Ok(())
}

/// Entries at or above 4 GiB need ZIP64 headers.
fn needs_zip64(size: u64) -> bool {
    size >= u64::from(u32::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::NoopProgress;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;
    use zip::ZipArchive;

    fn entry(dir: &TempDir, name: &str, content: &[u8]) -> PackEntry {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        PackEntry {
            path,
            archive_name: name.to_string(),
            size: content.len() as u64,
        }
    }

    fn write(entries: &[PackEntry], config: &PackConfig) -> (Vec<u8>, PackReport) {
        let mut report = PackReport::new();
        let cursor = write_zip(
            Cursor::new(Vec::new()),
            entries,
            config,
            &mut report,
            &mut NoopProgress,
        )
        .unwrap();
        (cursor.into_inner(), report)
    }

    #[test]
    fn test_write_zip_preserves_order_and_content() {
        let dir = TempDir::new().unwrap();
        let entries = vec![
            entry(&dir, "b.txt", b"second"),
            entry(&dir, "a/nested.bin", &[0, 1, 2, 255]),
        ];

        let (bytes, report) = write(&entries, &PackConfig::default());

        assert_eq!(report.files_added, 2);
        assert_eq!(report.bytes_read, 10);
        assert_eq!(report.entries, vec!["b.txt", "a/nested.bin"]);

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).unwrap().name(), "b.txt");

        let mut content = Vec::new();
        archive
            .by_name("a/nested.bin")
            .unwrap()
            .read_to_end(&mut content)
            .unwrap();
        assert_eq!(content, vec![0, 1, 2, 255]);
    }

    #[test]
    fn test_write_zip_empty_is_valid() {
        let (bytes, report) = write(&[], &PackConfig::default());
        assert_eq!(report.files_added, 0);

        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }

    #[test]
    fn test_write_zip_uses_deflate() {
        let dir = TempDir::new().unwrap();
        let payload = b"aaaa".repeat(1000);
        let entries = vec![entry(&dir, "data.txt", &payload)];

        let (bytes, _) = write(&entries, &PackConfig::default());
        assert!(bytes.len() < payload.len());

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(
            archive.by_index(0).unwrap().compression(),
            CompressionMethod::Deflated
        );
    }

    #[test]
    fn test_needs_zip64_threshold() {
        assert!(!needs_zip64(0));
        assert!(!needs_zip64(u64::from(u32::MAX) - 1));
        assert!(needs_zip64(u64::from(u32::MAX)));
        assert!(needs_zip64(8 * 1024 * 1024 * 1024));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_zip_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let e = entry(&dir, "run.sh", b"#!/bin/sh\n");
        fs::set_permissions(&e.path, fs::Permissions::from_mode(0o755)).unwrap();

        let (bytes, _) = write(&[e], &PackConfig::default());
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mode = archive.by_index(0).unwrap().unix_mode().unwrap();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn test_write_zip_progress_events() {
        #[derive(Default)]
        struct Recorder {
            started: Vec<(String, usize, usize)>,
            bytes: u64,
            completed: usize,
        }

        impl ProgressCallback for Recorder {
            fn on_entry_start(&mut self, name: &str, total: usize, current: usize) {
                self.started.push((name.to_string(), total, current));
            }

            fn on_bytes_written(&mut self, bytes: u64) {
                self.bytes += bytes;
            }

            fn on_entry_complete(&mut self, _name: &str) {
                self.completed += 1;
            }

            fn on_complete(&mut self) {}
        }

        let dir = TempDir::new().unwrap();
        let entries = vec![entry(&dir, "x.txt", b"xx"), entry(&dir, "y.txt", b"yyy")];
        let mut recorder = Recorder::default();
        let mut report = PackReport::new();

        write_zip(
            Cursor::new(Vec::new()),
            &entries,
            &PackConfig::default(),
            &mut report,
            &mut recorder,
        )
        .unwrap();

        assert_eq!(
            recorder.started,
            vec![("x.txt".to_string(), 2, 1), ("y.txt".to_string(), 2, 2)]
        );
        assert_eq!(recorder.bytes, 5);
        assert_eq!(recorder.completed, 2);
    }

    #[test]
    fn test_write_zip_missing_source_file() {
        let dir = TempDir::new().unwrap();
        let entries = vec![PackEntry {
            path: dir.path().join("gone.txt"),
            archive_name: "gone.txt".to_string(),
            size: 0,
        }];
        let mut report = PackReport::new();

        let result = write_zip(
            Cursor::new(Vec::new()),
            &entries,
            &PackConfig::default(),
            &mut report,
            &mut NoopProgress,
        );
        assert!(matches!(result.unwrap_err(), crate::PackError::Io(_)));
    }
}
