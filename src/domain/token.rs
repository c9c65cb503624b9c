use serde::{Deserialize, Serialize};

/// 24h metrics for one token, as produced by a single fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMetric {
    /// Token contract / mint address
    pub address: String,
    /// Token symbol
    pub symbol: String,
    /// 24-hour trading volume in USD
    pub volume_24h: f64,
    /// 24-hour price change percentage
    pub price_change_pct_24h: f64,
    /// Current price in USD
    pub usd_price: f64,
}

impl TokenMetric {
    pub fn new(
        address: impl Into<String>,
        symbol: impl Into<String>,
        volume_24h: f64,
        price_change_pct_24h: f64,
        usd_price: f64,
    ) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.into(),
            volume_24h,
            price_change_pct_24h,
            usd_price,
        }
    }
}
