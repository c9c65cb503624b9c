//! Logging Setup
//!
//! The reporter logs to stderr so stdout carries only the report. The
//! browser owns the terminal, so its logs go to a file.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Level for the reporter's stderr logs
pub fn stderr_level(verbose: bool, debug: bool) -> &'static str {
    if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    }
}

pub fn init_stderr_logging(verbose: bool, debug: bool) -> Result<()> {
    let filter = EnvFilter::new(stderr_level(verbose, debug));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// Append logs to `path`, creating parent directories as needed
pub fn init_file_logging(path: &Path, level: &str, debug: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let level = if debug { "debug" } else { level };
    let filter = EnvFilter::try_new(level).with_context(|| format!("Invalid log level '{}'", level))?;

    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
