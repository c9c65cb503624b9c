//! CLI Definitions
//!
//! Argument parsers for the batch reporter (`topvc`) and the interactive
//! browser (`topvc-browse`).

use clap::Parser;
use std::path::PathBuf;

use crate::domain::{parse_count, ParamError, Timeframe};

/// topvc - top DEX tokens by volume and price change
#[derive(Parser, Debug)]
#[command(
    name = "topvc",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Print the top tokens by volume and by price change for each DEX and timeframe",
    allow_negative_numbers = true
)]
pub struct ReportCli {
    /// Number of top tokens by volume (N)
    #[arg(value_name = "N", value_parser = parse_top_volume)]
    pub top_volume: usize,

    /// Number of top tokens by price change (M)
    #[arg(value_name = "M", value_parser = parse_top_change)]
    pub top_change: usize,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Restrict the report to these exchanges (repeatable)
    #[arg(short, long = "exchange", value_name = "NAME")]
    pub exchanges: Vec<String>,

    /// Restrict the report to these timeframes (repeatable)
    #[arg(short, long = "timeframe", value_name = "TIMEFRAME")]
    pub timeframes: Vec<Timeframe>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// topvc-browse - interactive table of top DEX tokens
#[derive(Parser, Debug)]
#[command(
    name = "topvc-browse",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Browse the top tokens by volume and by price change in a terminal table",
    long_about = "Keys: tab cycles inputs, enter applies the focused input, r reloads, \
                  left/h and right/l change page, q or ctrl+c quits."
)]
pub struct BrowseCli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the log file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

fn parse_top_volume(value: &str) -> Result<usize, ParamError> {
    parse_count("N", value)
}

fn parse_top_change(value: &str) -> Result<usize, ParamError> {
    parse_count("M", value)
}
