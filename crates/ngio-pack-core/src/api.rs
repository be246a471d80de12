//! High-level packaging API.

use crate::NoopProgress;
use crate::PackConfig;
use crate::PackError;
use crate::PackLayout;
use crate::PackReport;
use crate::ProgressCallback;
use crate::Result;
use crate::walker::collect_entries;
use crate::writer::write_zip;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::time::Instant;

/// Packages `layout.source_dir` into `layout.output`.
///
/// The run is a single linear pass: check that the source directory
/// exists, collect entries, write the archive, then read its size back
/// from disk. If the source directory is missing nothing is written and a
/// previous archive at `layout.output` is left untouched.
///
/// # Examples
///
/// ```no_run
/// use ngio_pack_core::PackConfig;
/// use ngio_pack_core::PackLayout;
/// use ngio_pack_core::package;
///
/// let layout = PackLayout::from_current_exe()?;
/// let report = package(&layout, &PackConfig::default())?;
/// println!("{}", report.summary_line(&layout.output));
/// # Ok::<(), ngio_pack_core::PackError>(())
/// ```
///
/// # Errors
///
/// Returns `SourceNotFound` if the source directory does not exist, and an
/// I/O error for any traversal, read or write failure.
pub fn package(layout: &PackLayout, config: &PackConfig) -> Result<PackReport> {
    package_with_progress(layout, config, &mut NoopProgress)
}

/// Same as [`package`], reporting progress while entries are written.
///
/// # Errors
///
/// See [`package`].
pub fn package_with_progress(
    layout: &PackLayout,
    config: &PackConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<PackReport> {
    let start = Instant::now();
    config.validate()?;

    if !layout.source_dir.is_dir() {
        return Err(PackError::SourceNotFound {
            path: layout.source_dir.clone(),
        });
    }

    let walk = collect_entries(&layout.source_dir, config)?;

    let mut report = PackReport {
        files_excluded: walk.excluded,
        warnings: walk.warnings,
        ..PackReport::default()
    };

    let file = File::create(&layout.output)?;
    let mut writer = write_zip(
        BufWriter::new(file),
        &walk.entries,
        config,
        &mut report,
        progress,
    )?;
    writer.flush()?;
    drop(writer);

    report.archive_size = std::fs::metadata(&layout.output)?.len();
    report.duration = start.elapsed();

    progress.on_complete();

    Ok(report)
}
