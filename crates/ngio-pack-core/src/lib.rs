//! Build output packager.
//!
//! `ngio-pack-core` walks a build directory, drops files matching an
//! excluded suffix (`.swf` by default) and writes everything else into a
//! zip archive with `/`-separated entry names.
//!
//! # Examples
//!
//! ```no_run
//! use ngio_pack_core::PackConfig;
//! use ngio_pack_core::PackLayout;
//! use ngio_pack_core::package;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let layout = PackLayout::from_root("/path/to/project");
//! let report = package(&layout, &PackConfig::default())?;
//! println!("{}", report.summary_line(&layout.output));
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod filters;
pub mod layout;
pub mod progress;
pub mod report;
pub mod walker;
pub mod writer;

pub use api::package;
pub use api::package_with_progress;
pub use config::PackConfig;
pub use error::PackError;
pub use error::Result;
pub use layout::PackLayout;
pub use progress::NoopProgress;
pub use progress::ProgressCallback;
pub use report::PackReport;
pub use walker::PackEntry;
