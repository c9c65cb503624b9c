//! Batch Reporter
//!
//! Walks every configured timeframe (outer) and exchange (inner), writing
//! a volume table and a change table per pair. A failed pair is logged
//! and skipped; the run always continues.

use std::io::{self, Write};

use crate::domain::{report, ExchangeRegistry, RegistryError, Timeframe};
use crate::ports::TokenSource;

use super::ranking::{RankingError, RankingService};

/// What to report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPlan {
    exchanges: Vec<String>,
    timeframes: Vec<Timeframe>,
    top_volume: usize,
    top_change: usize,
}

impl ReportPlan {
    /// Every exchange must be known to the registry
    pub fn new(
        exchanges: Vec<String>,
        timeframes: Vec<Timeframe>,
        top_volume: usize,
        top_change: usize,
    ) -> Result<Self, RegistryError> {
        for exchange in &exchanges {
            ExchangeRegistry::lookup(exchange)?;
        }
        Ok(Self {
            exchanges,
            timeframes,
            top_volume,
            top_change,
        })
    }

    pub fn exchanges(&self) -> &[String] {
        &self.exchanges
    }

    pub fn timeframes(&self) -> &[Timeframe] {
        &self.timeframes
    }

    /// Number of (exchange, timeframe) pairs
    pub fn pair_count(&self) -> usize {
        self.exchanges.len() * self.timeframes.len()
    }
}

/// One (exchange, timeframe) pair that produced no output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairFailure {
    pub exchange: String,
    pub timeframe: Timeframe,
    pub error: RankingError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Pairs whose tables were written
    pub rendered: usize,
    pub failures: Vec<PairFailure>,
}

pub struct Reporter<S> {
    service: RankingService<S>,
}

impl<S: TokenSource> Reporter<S> {
    pub fn new(service: RankingService<S>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &RankingService<S> {
        &self.service
    }

    /// Fetch sequentially and write the report to `out`. Only write errors
    /// abort the run.
    pub async fn run<W: Write>(&self, plan: &ReportPlan, out: &mut W) -> io::Result<ReportSummary> {
        let mut summary = ReportSummary::default();

        for &timeframe in &plan.timeframes {
            writeln!(out, "Timeframe: {}", timeframe)?;

            for exchange in &plan.exchanges {
                let ranked = match self
                    .service
                    .fetch_ranked(exchange, Some(timeframe), plan.top_volume, plan.top_change)
                    .await
                {
                    Ok(ranked) => ranked,
                    Err(e) => {
                        tracing::error!(
                            exchange = %exchange,
                            timeframe = %timeframe,
                            error = %e,
                            "Failed to fetch tokens"
                        );
                        summary.failures.push(PairFailure {
                            exchange: exchange.clone(),
                            timeframe,
                            error: e,
                        });
                        continue;
                    }
                };

                let volume_title = format!("DEX: {} - Top Volume Tokens", exchange);
                let change_title = format!("DEX: {} - Top Change Tokens", exchange);
                out.write_all(report::render(&volume_title, &ranked.by_volume).as_bytes())?;
                out.write_all(report::render(&change_title, &ranked.by_change).as_bytes())?;
                summary.rendered += 1;
            }
        }

        out.flush()?;
        Ok(summary)
    }
}
