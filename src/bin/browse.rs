//! topvc-browse - interactive table of the top DEX tokens
//!
//! Fetches every configured (exchange, timeframe) pair, then lets the user
//! page, filter and re-rank the combined rows in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;

use topvc::adapters::cli::{init_file_logging, BrowseCli};
use topvc::adapters::{tui, MoralisClient};
use topvc::application::browser::BrowserState;
use topvc::application::RankingService;
use topvc::config::load_config_or_default;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (the API key goes here, not in the config file)
    dotenvy::dotenv().ok();

    let cli = BrowseCli::parse();

    let config = load_config_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(|| config.logging.log_file_path());
    init_file_logging(&log_file, &config.logging.level, cli.debug)?;

    // Fatal before the terminal is taken over
    let api_key = config.resolve_api_key()?;
    let client = MoralisClient::new(config.api.client_config(api_key))
        .context("Failed to create Moralis client")?;

    let settings = config.browser.settings();
    tracing::info!(
        exchanges = ?settings.exchanges,
        timeframes = ?settings.timeframes,
        "Starting browser"
    );

    let service = Arc::new(RankingService::new(client));
    tui::run(service, BrowserState::new(settings))
        .await
        .context("Terminal UI failed")?;

    Ok(())
}
