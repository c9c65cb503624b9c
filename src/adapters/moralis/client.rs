//! Moralis API Client
//!
//! HTTP client for the Moralis DEX token-list endpoint:
//! `GET {base}/erc20/{network}/dex/{exchange}/tokens?limit=..&timeframe=..`
//! authenticated with the `X-API-Key` header.
//!
//! One request per call. Non-2xx responses are returned as
//! `FetchError::UpstreamStatus` without retrying; the caller decides
//! whether to skip the exchange or abort.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::types::decode_tokens;
use crate::domain::{ExchangeDescriptor, TokenMetric};
use crate::ports::{FetchError, TokenQuery, TokenSource};

pub const DEFAULT_BASE_URL: &str = "https://deep-index.moralis.io/api/v2.2";
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Moralis client configuration
#[derive(Clone)]
pub struct MoralisConfig {
    /// Base URL without trailing slash
    pub base_url: String,
    pub api_key: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl MoralisConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Keep the key out of logs
impl fmt::Debug for MoralisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoralisConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct MoralisClient {
    config: MoralisConfig,
    http: Client,
}

impl MoralisClient {
    /// Create a client. An empty API key is a configuration error.
    pub fn new(config: MoralisConfig) -> Result<Self, FetchError> {
        if config.api_key.trim().is_empty() {
            return Err(FetchError::Configuration("API key is empty".into()));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Token-list URL for one exchange
    pub fn tokens_url(&self, exchange: &ExchangeDescriptor) -> String {
        format!(
            "{}/erc20/{}/dex/{}/tokens",
            self.config.base_url.trim_end_matches('/'),
            exchange.network,
            exchange.exchange_id
        )
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl TokenSource for MoralisClient {
    async fn fetch_tokens(
        &self,
        exchange: &ExchangeDescriptor,
        query: &TokenQuery,
    ) -> Result<Vec<TokenMetric>, FetchError> {
        let url = self.tokens_url(exchange);

        let mut req = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .query(&[("limit", query.limit.to_string())]);

        if let Some(timeframe) = query.timeframe {
            req = req.query(&[("timeframe", timeframe.as_code())]);
        }

        tracing::debug!(
            exchange = exchange.name,
            url = %url,
            limit = query.limit,
            timeframe = ?query.timeframe,
            "Fetching token metrics"
        );

        let response = req
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus {
                code: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let tokens = decode_tokens(&body)?;
        tracing::debug!(exchange = exchange.name, count = tokens.len(), "Token metrics received");
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExchangeRegistry;

    #[test]
    fn test_config_default() {
        let config = MoralisConfig::new("key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = MoralisConfig::new("super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn test_client_requires_key() {
        let result = MoralisClient::new(MoralisConfig::new("   "));
        assert!(matches!(result, Err(FetchError::Configuration(_))));
    }

    #[test]
    fn test_tokens_url() {
        let client =
            MoralisClient::new(MoralisConfig::new("key").with_base_url("http://localhost:9000/")).unwrap();
        let pancake = ExchangeRegistry::lookup("pancakeswap").unwrap();

        assert_eq!(
            client.tokens_url(pancake),
            "http://localhost:9000/erc20/0x38/dex/0x10ed43c718714eb63d5aa57b78b54704e256024e/tokens"
        );
    }
}
