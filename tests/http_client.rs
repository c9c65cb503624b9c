//! Moralis Client HTTP Tests
//!
//! Runs `MoralisClient` against a one-shot local HTTP server to check the
//! request it sends and how each kind of response maps to `FetchError`.

use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use topvc::adapters::moralis::{MoralisClient, MoralisConfig};
use topvc::domain::{ExchangeRegistry, Timeframe};
use topvc::ports::{FetchError, TokenQuery, TokenSource};

// ============================================================================
// Test Server
// ============================================================================

/// Serve one request with `status` and `body`; the handle yields the raw
/// request head
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&request).into_owned()
    });

    (base_url, handle)
}

fn client(base_url: &str) -> MoralisClient {
    let config = MoralisConfig::new("test-key")
        .with_base_url(base_url)
        .with_timeout(Duration::from_secs(5));
    MoralisClient::new(config).unwrap()
}

const TOKENS_BODY: &str = r#"{
  "tokens": [
    {"token_address": "0xabc", "token_symbol": "WETH", "volume_24h": 1500.5,
     "price_change_percentage_24h": -1.25, "usd_price": 3000.0},
    {"token_address": "0xdef", "token_symbol": "PEPE", "volume_24h": "42",
     "price_change_percentage_24h": "9.5", "usd_price": null}
  ]
}"#;

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_successful_fetch_sends_key_limit_and_timeframe() {
    let (base_url, server) = serve_once("200 OK", TOKENS_BODY).await;
    let uniswap = ExchangeRegistry::lookup("uniswap").unwrap();
    let query = TokenQuery::for_counts(10, 4, Some(Timeframe::FiveMinutes));

    let tokens = client(&base_url).fetch_tokens(uniswap, &query).await.unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].symbol, "WETH");
    assert_eq!(tokens[1].volume_24h, 42.0);
    assert_eq!(tokens[1].usd_price, 0.0);

    let request = server.await.unwrap().to_lowercase();
    let request_line = request.lines().next().unwrap();
    assert!(request_line.starts_with("get /erc20/0x1/dex/"));
    assert!(request_line.contains(&format!("/{}/tokens?", uniswap.exchange_id.to_lowercase())));
    assert!(request_line.contains("limit=20"));
    assert!(request_line.contains("timeframe=5m"));
    assert!(request.contains("x-api-key: test-key"));
}

#[tokio::test]
async fn test_query_without_timeframe() {
    let (base_url, server) = serve_once("200 OK", r#"{"tokens": []}"#).await;
    let orca = ExchangeRegistry::lookup("orca").unwrap();
    let query = TokenQuery::for_counts(1, 1, None);

    let tokens = client(&base_url).fetch_tokens(orca, &query).await.unwrap();
    assert!(tokens.is_empty());

    let request = server.await.unwrap();
    let request_line = request.lines().next().unwrap();
    assert!(request_line.contains("/erc20/solana/dex/"));
    assert!(request_line.contains("limit=2"));
    assert!(!request_line.contains("timeframe"));
}

#[tokio::test]
async fn test_server_error_maps_to_upstream_status() {
    let (base_url, _server) = serve_once("500 Internal Server Error", r#"{"message":"boom"}"#).await;
    let pancakeswap = ExchangeRegistry::lookup("pancakeswap").unwrap();

    let err = client(&base_url)
        .fetch_tokens(pancakeswap, &TokenQuery::for_counts(5, 5, None))
        .await
        .unwrap_err();

    assert_eq!(err, FetchError::UpstreamStatus { code: 500 });
}

#[tokio::test]
async fn test_unauthorized_maps_to_upstream_status() {
    let (base_url, _server) = serve_once("401 Unauthorized", r#"{"message":"Invalid key"}"#).await;
    let uniswap = ExchangeRegistry::lookup("uniswap").unwrap();

    let err = client(&base_url)
        .fetch_tokens(uniswap, &TokenQuery::for_counts(5, 5, None))
        .await
        .unwrap_err();

    assert_eq!(err, FetchError::UpstreamStatus { code: 401 });
}

#[tokio::test]
async fn test_malformed_body_maps_to_decode() {
    let (base_url, _server) = serve_once("200 OK", "{\"tokens\": [").await;
    let uniswap = ExchangeRegistry::lookup("uniswap").unwrap();

    let err = client(&base_url)
        .fetch_tokens(uniswap, &TokenQuery::for_counts(5, 5, None))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_connection_refused_maps_to_transport() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let uniswap = ExchangeRegistry::lookup("uniswap").unwrap();
    let err = client(&base_url)
        .fetch_tokens(uniswap, &TokenQuery::for_counts(5, 5, None))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)), "got {:?}", err);
}

#[test]
fn test_missing_key_is_configuration_error() {
    let err = MoralisClient::new(MoralisConfig::new("")).unwrap_err();
    assert!(matches!(err, FetchError::Configuration(_)));
}
