use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ExchangeDescriptor, Timeframe, TokenMetric};

/// Market data error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Missing or unusable credential; not retryable
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream returned HTTP {code}")]
    UpstreamStatus { code: u16 },

    #[error("Decode error: {0}")]
    Decode(String),
}

/// Token list query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenQuery {
    /// Result size hint sent upstream
    pub limit: usize,
    /// Aggregation window; `None` leaves it to the upstream default
    pub timeframe: Option<Timeframe>,
}

impl TokenQuery {
    /// Ask for twice the larger ranking size so both rankings have
    /// candidates left after truncation
    pub fn for_counts(top_volume: usize, top_change: usize, timeframe: Option<Timeframe>) -> Self {
        Self {
            limit: top_volume.max(top_change).saturating_mul(2).max(1),
            timeframe,
        }
    }
}

/// Source of per-exchange token metrics
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Fetch the current token list for one exchange. Every call is a
    /// fresh round trip; nothing is cached or retried.
    async fn fetch_tokens(
        &self,
        exchange: &ExchangeDescriptor,
        query: &TokenQuery,
    ) -> Result<Vec<TokenMetric>, FetchError>;
}
