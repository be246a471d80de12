//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use ngio_pack_core::PackReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct PackOutput {
    output_path: String,
    archive_size: u64,
    files_added: usize,
    files_excluded: usize,
    bytes_read: u64,
    compression_ratio: f64,
    entries: Vec<String>,
    duration_ms: u128,
    warnings: Vec<String>,
}

impl PackOutput {
    fn from_report(output_path: &Path, report: &PackReport) -> Self {
        Self {
            output_path: output_path.display().to_string(),
            archive_size: report.archive_size,
            files_added: report.files_added,
            files_excluded: report.files_excluded,
            bytes_read: report.bytes_read,
            compression_ratio: report.compression_ratio(),
            entries: report.entries.clone(),
            duration_ms: report.duration.as_millis(),
            warnings: report.warnings.clone(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_pack_result(&self, output_path: &Path, report: &PackReport) -> Result<()> {
        let output = JsonOutput::success("pack", PackOutput::from_report(output_path, report));
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::error("pack", format!("{error:#}"));
        let _ = Self::output(&output);
    }
}
