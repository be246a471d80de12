//! CLI argument parsing using clap.
//!
//! Every flag is optional; running with no arguments packages
//! `<install-dir>/../build` into `<install-dir>/../NGIO.zip`.

use clap::Parser;
use ngio_pack_core::PackConfig;
use ngio_pack_core::PackLayout;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ngio-pack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root holding the build directory
    /// (default: parent of the directory containing this executable)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Archive path (default: <ROOT>/NGIO.zip)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// File suffix to leave out of the archive; repeat to add more.
    /// Replaces the default `.swf`
    #[arg(short = 'x', long = "exclude", value_name = "SUFFIX")]
    pub exclude: Vec<String>,

    /// Skip symlinks instead of packaging their targets
    #[arg(long)]
    pub no_follow_symlinks: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,
}

impl Cli {
    /// Builds the packaging configuration from the flags.
    pub fn pack_config(&self) -> PackConfig {
        let mut config = PackConfig::default().with_follow_symlinks(!self.no_follow_symlinks);
        if !self.exclude.is_empty() {
            config = config.with_excluded_suffixes(self.exclude.clone());
        }
        config
    }

    /// Resolves source and output paths, falling back to the executable
    /// location when `--root` is absent.
    pub fn pack_layout(&self) -> ngio_pack_core::Result<PackLayout> {
        let layout = match &self.root {
            Some(root) => PackLayout::from_root(root),
            None => PackLayout::from_current_exe()?,
        };
        Ok(match &self.output {
            Some(output) => layout.with_output(output),
            None => layout,
        })
    }
}
