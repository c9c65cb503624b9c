//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits and the
//! process-facing surfaces:
//! - Moralis: market-data HTTP client (`TokenSource`)
//! - CLI: argument parsing and logging setup
//! - TUI: terminal driver for the interactive browser

pub mod moralis;
pub mod cli;
pub mod tui;

pub use moralis::{MoralisClient, MoralisConfig};
pub use cli::{BrowseCli, ReportCli};
