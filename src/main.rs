//! topvc - batch report of the top DEX tokens by volume and price change
//!
//! Usage: `topvc <N> <M>` prints, for every configured timeframe and
//! exchange, the top N tokens by volume and the top M by price change.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;

use topvc::adapters::cli::{init_stderr_logging, ReportCli};
use topvc::adapters::MoralisClient;
use topvc::application::{RankingService, ReportPlan, Reporter};
use topvc::config::load_config_or_default;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (the API key goes here, not in the config file)
    dotenvy::dotenv().ok();

    let cli = ReportCli::parse();
    init_stderr_logging(cli.verbose, cli.debug)?;

    let config = load_config_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    // Fatal before any network call
    let api_key = config.resolve_api_key()?;

    let exchanges = if cli.exchanges.is_empty() {
        config.report.exchanges.clone()
    } else {
        cli.exchanges.clone()
    };
    let timeframes = if cli.timeframes.is_empty() {
        config.report.timeframes.clone()
    } else {
        cli.timeframes.clone()
    };
    let plan = ReportPlan::new(exchanges, timeframes, cli.top_volume, cli.top_change)
        .context("Invalid report selection")?;

    let client = MoralisClient::new(config.api.client_config(api_key))
        .context("Failed to create Moralis client")?;
    let reporter = Reporter::new(RankingService::new(client));

    tracing::info!(
        pairs = plan.pair_count(),
        top_volume = cli.top_volume,
        top_change = cli.top_change,
        "Starting report"
    );

    let stdout = io::stdout();
    let summary = reporter
        .run(&plan, &mut stdout.lock())
        .await
        .context("Failed to write report")?;

    if summary.failures.is_empty() {
        tracing::info!(rendered = summary.rendered, "Report complete");
    } else {
        tracing::warn!(
            rendered = summary.rendered,
            failed = summary.failures.len(),
            "Report complete with skipped exchanges"
        );
    }

    Ok(())
}
