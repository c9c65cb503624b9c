//! CLI Adapter
//!
//! Command-line interfaces for the reporter and the browser.
//! Uses clap derive macros for argument parsing.

mod commands;
mod logging;

pub use commands::{BrowseCli, ReportCli};
pub use logging::{init_file_logging, init_stderr_logging, stderr_level};
