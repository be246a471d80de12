//! Packaging command: build directory in, NGIO.zip out.

use crate::cli::Cli;
use crate::error::add_pack_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use ngio_pack_core::package;
use ngio_pack_core::package_with_progress;

pub fn execute(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let layout = add_pack_context(cli.pack_layout(), None)?;
    let config = cli.pack_config();

    let report = if !cli.quiet && !cli.json && CliProgress::should_show() {
        let mut progress = CliProgress::new("Packing");
        package_with_progress(&layout, &config, &mut progress)
    } else {
        package(&layout, &config)
    };
    let report = add_pack_context(report, Some(layout.output.as_path()))?;

    formatter.format_pack_result(&layout.output, &report)
}
