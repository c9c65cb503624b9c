//! Ranking Service
//!
//! Registry lookup, fetch with the size hint, then rank. Shared by the
//! reporter and the browser.

use thiserror::Error;

use crate::domain::{rank, ExchangeRegistry, RankedSet, RegistryError, Timeframe};
use crate::ports::{FetchError, TokenQuery, TokenSource};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RankingError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

pub struct RankingService<S> {
    source: S,
}

impl<S: TokenSource> RankingService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Top `top_volume` tokens by volume and `top_change` by price change
    /// for one exchange and timeframe
    pub async fn fetch_ranked(
        &self,
        exchange: &str,
        timeframe: Option<Timeframe>,
        top_volume: usize,
        top_change: usize,
    ) -> Result<RankedSet, RankingError> {
        let descriptor = ExchangeRegistry::lookup(exchange)?;
        let query = TokenQuery::for_counts(top_volume, top_change, timeframe);

        let tokens = self.source.fetch_tokens(descriptor, &query).await?;
        tracing::debug!(
            exchange = descriptor.name,
            timeframe = ?timeframe,
            fetched = tokens.len(),
            "Ranking tokens"
        );

        Ok(rank(&tokens, top_volume, top_change))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TokenMetric;
    use crate::ports::MockTokenSource;

    fn tokens() -> Vec<TokenMetric> {
        vec![
            TokenMetric::new("0x1", "AAA", 10.0, 1.0, 1.0),
            TokenMetric::new("0x2", "BBB", 30.0, -4.0, 1.0),
            TokenMetric::new("0x3", "CCC", 20.0, 9.0, 1.0),
        ]
    }

    #[tokio::test]
    async fn test_fetch_ranked_sends_size_hint() {
        let mut source = MockTokenSource::new();
        source
            .expect_fetch_tokens()
            .withf(|exchange, query| {
                exchange.name == "uniswap"
                    && query.limit == 20
                    && query.timeframe == Some(Timeframe::ThirtyMinutes)
            })
            .times(1)
            .returning(|_, _| Ok(tokens()));

        let service = RankingService::new(source);
        let ranked = service
            .fetch_ranked("uniswap", Some(Timeframe::ThirtyMinutes), 10, 3)
            .await
            .unwrap();

        let volume: Vec<_> = ranked.by_volume.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(volume, vec!["BBB", "CCC", "AAA"]);
        let change: Vec<_> = ranked.by_change.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(change, vec!["CCC", "AAA", "BBB"]);
    }

    #[tokio::test]
    async fn test_unknown_exchange_never_fetches() {
        let mut source = MockTokenSource::new();
        source.expect_fetch_tokens().never();

        let service = RankingService::new(source);
        let err = service.fetch_ranked("sushiswap", None, 5, 5).await.unwrap_err();

        assert_eq!(
            err,
            RankingError::Registry(RegistryError::UnknownExchange("sushiswap".to_string()))
        );
    }

    #[tokio::test]
    async fn test_fetch_error_is_passed_through() {
        let mut source = MockTokenSource::new();
        source
            .expect_fetch_tokens()
            .times(1)
            .returning(|_, _| Err(FetchError::UpstreamStatus { code: 429 }));

        let service = RankingService::new(source);
        let err = service.fetch_ranked("orca", None, 1, 1).await.unwrap_err();

        assert_eq!(err, RankingError::Fetch(FetchError::UpstreamStatus { code: 429 }));
    }

    #[tokio::test]
    async fn test_zero_counts_still_request_one() {
        let mut source = MockTokenSource::new();
        source
            .expect_fetch_tokens()
            .withf(|_, query| query.limit == 1)
            .times(1)
            .returning(|_, _| Ok(tokens()));

        let service = RankingService::new(source);
        let ranked = service.fetch_ranked("raydium", None, 0, 0).await.unwrap();
        assert!(ranked.is_empty());
    }
}
