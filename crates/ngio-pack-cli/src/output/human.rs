//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use super::format_size;
use anyhow::Result;
use console::Term;
use console::style;
use ngio_pack_core::PackReport;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    err_term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    fn write_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("WARNING: {message}"));
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_pack_result(&self, output_path: &Path, report: &PackReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.verbose {
            for name in &report.entries {
                let _ = self.term.write_line(&format!("  adding: {name}"));
            }
        }

        let summary = report.summary_line(output_path);
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {summary}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(&summary);
        }

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Archive:        {}", output_path.display()));
            let _ = self
                .term
                .write_line(&format!("  Files added:    {}", report.files_added));
            let _ = self
                .term
                .write_line(&format!("  Files excluded: {}", report.files_excluded));
            let _ = self.term.write_line(&format!(
                "  Source size:    {}",
                format_size(report.bytes_read)
            ));
            let _ = self
                .term
                .write_line(&format!("  Duration:       {:?}", report.duration));
        }

        if report.has_warnings() {
            for warning in &report.warnings {
                self.write_warning(warning);
            }
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Errors are shown even in quiet mode
        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("ERROR: {error:?}"));
        }
    }
}
