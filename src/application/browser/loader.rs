//! Fetch-all for the browser: one ranked fetch per (exchange, timeframe)
//! pair, flattened into display rows.

use chrono::Utc;

use crate::application::ranking::RankingService;
use crate::domain::flatten;
use crate::ports::TokenSource;

use super::events::{BrowserEvent, FetchRequest};

/// Run every pair sequentially. Failed pairs are logged and skipped; only
/// when all of them fail is the result `LoadFailed`.
pub async fn fetch_all<S: TokenSource>(
    service: &RankingService<S>,
    request: &FetchRequest,
) -> BrowserEvent {
    let mut rows = Vec::new();
    let mut failed = 0;
    let mut last_error = None;

    for exchange in &request.exchanges {
        for &timeframe in &request.timeframes {
            match service
                .fetch_ranked(exchange, Some(timeframe), request.top_volume, request.top_change)
                .await
            {
                Ok(ranked) => rows.extend(flatten(exchange, timeframe, &ranked)),
                Err(e) => {
                    tracing::error!(
                        exchange = %exchange,
                        timeframe = %timeframe,
                        error = %e,
                        "Failed to fetch tokens"
                    );
                    failed += 1;
                    last_error = Some(e);
                }
            }
        }
    }

    let pairs = request.pair_count();
    match last_error {
        Some(e) if failed == pairs => {
            BrowserEvent::LoadFailed(format!("All {} fetches failed; last error: {}", pairs, e))
        }
        _ => {
            tracing::info!(rows = rows.len(), failed, pairs, "Fetch-all complete");
            BrowserEvent::DataLoaded {
                rows,
                loaded_at: Utc::now(),
            }
        }
    }
}
