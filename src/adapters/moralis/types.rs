//! Moralis token-list response types
//!
//! Field names differ between API revisions (`token_address` vs `address`,
//! `volume_24h` vs `volume24h`) and numeric fields are sometimes sent as
//! strings, so decoding is lenient on both counts. A missing numeric field
//! reads as zero.

use serde::{Deserialize, Deserializer};

use crate::domain::TokenMetric;
use crate::ports::FetchError;

#[derive(Debug, Deserialize)]
pub struct TokensResponse {
    pub tokens: Vec<MoralisToken>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoralisToken {
    #[serde(alias = "address", default)]
    pub token_address: String,
    #[serde(alias = "symbol", default)]
    pub token_symbol: String,
    #[serde(alias = "volume24h", default, deserialize_with = "lenient_f64")]
    pub volume_24h: f64,
    #[serde(
        alias = "priceChangePercentage24h",
        default,
        deserialize_with = "lenient_f64"
    )]
    pub price_change_percentage_24h: f64,
    #[serde(alias = "usdPrice", default, deserialize_with = "lenient_f64")]
    pub usd_price: f64,
}

impl From<MoralisToken> for TokenMetric {
    fn from(t: MoralisToken) -> Self {
        TokenMetric {
            address: t.token_address,
            symbol: t.token_symbol,
            volume_24h: t.volume_24h,
            price_change_pct_24h: t.price_change_percentage_24h,
            usd_price: t.usd_price,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(NumberOrString::Number(n)) => Ok(n),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(0.0),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid number: {s:?}"))),
    }
}

/// Decode a token-list body into domain metrics
pub fn decode_tokens(body: &str) -> Result<Vec<TokenMetric>, FetchError> {
    let response: TokensResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(response.tokens.into_iter().map(TokenMetric::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_decode_snake_case_numbers() {
        let body = r#"{"tokens":[{"token_address":"0xabc","token_symbol":"PEPE",
            "volume_24h":1500.5,"price_change_percentage_24h":-3.25,"usd_price":0.0001}]}"#;
        let tokens = decode_tokens(body).unwrap();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].address, "0xabc");
        assert_eq!(tokens[0].symbol, "PEPE");
        assert_relative_eq!(tokens[0].volume_24h, 1500.5);
        assert_relative_eq!(tokens[0].price_change_pct_24h, -3.25);
        assert_relative_eq!(tokens[0].usd_price, 0.0001);
    }

    #[test]
    fn test_decode_alternate_names_and_strings() {
        let body = r#"{"tokens":[{"address":"0x123","symbol":"TOK1","volume24h":"1000000",
            "price_change_percentage_24h":"5.0","usd_price":"1.0"}]}"#;
        let tokens = decode_tokens(body).unwrap();

        assert_eq!(tokens[0].address, "0x123");
        assert_relative_eq!(tokens[0].volume_24h, 1_000_000.0);
        assert_relative_eq!(tokens[0].price_change_pct_24h, 5.0);
    }

    #[test]
    fn test_missing_and_null_numbers_default_to_zero() {
        let body = r#"{"tokens":[{"token_address":"0x1","token_symbol":"X","usd_price":null}]}"#;
        let tokens = decode_tokens(body).unwrap();
        assert_eq!(tokens[0].volume_24h, 0.0);
        assert_eq!(tokens[0].usd_price, 0.0);
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        assert!(matches!(decode_tokens("not json"), Err(FetchError::Decode(_))));
        assert!(matches!(decode_tokens(r#"{"result":[]}"#), Err(FetchError::Decode(_))));
        assert!(matches!(
            decode_tokens(r#"{"tokens":[{"volume_24h":"lots"}]}"#),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn test_empty_token_list() {
        assert!(decode_tokens(r#"{"tokens":[]}"#).unwrap().is_empty());
    }
}
