use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use super::market_data::{FetchError, TokenQuery, TokenSource};
use crate::domain::{ExchangeDescriptor, TokenMetric};

/// Stub token source that records calls and returns canned responses
/// per exchange name
#[derive(Debug, Default, Clone)]
pub struct StubTokenSource {
    calls: Arc<Mutex<Vec<(String, TokenQuery)>>>,
    responses: Arc<Mutex<HashMap<String, Result<Vec<TokenMetric>, FetchError>>>>,
}

impl StubTokenSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the tokens returned for an exchange
    pub fn with_tokens(self, exchange: &str, tokens: Vec<TokenMetric>) -> Self {
        self.set_response(exchange, Ok(tokens));
        self
    }

    /// Builder method to make an exchange fail
    pub fn with_error(self, exchange: &str, error: FetchError) -> Self {
        self.set_response(exchange, Err(error));
        self
    }

    /// Replace the response for an exchange on a live stub
    pub fn set_response(&self, exchange: &str, response: Result<Vec<TokenMetric>, FetchError>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(exchange.to_string(), response);
    }

    /// All recorded calls as (exchange name, query)
    pub fn calls(&self) -> Vec<(String, TokenQuery)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl TokenSource for StubTokenSource {
    async fn fetch_tokens(
        &self,
        exchange: &ExchangeDescriptor,
        query: &TokenQuery,
    ) -> Result<Vec<TokenMetric>, FetchError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((exchange.name.to_string(), *query));
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(exchange.name)
            .cloned()
            .unwrap_or_else(|| {
                Err(FetchError::Transport(format!(
                    "No response configured for {}",
                    exchange.name
                )))
            })
    }
}
