//! Moralis Adapter
//!
//! Implementation of the `TokenSource` port for the Moralis market-data API.

mod client;
mod types;

pub use client::{MoralisClient, MoralisConfig, API_KEY_HEADER, DEFAULT_BASE_URL};
pub use types::{decode_tokens, MoralisToken, TokensResponse};
