//! topvc - top DEX tokens by volume and price change
//!
//! Fetches per-exchange token metrics from the Moralis API, ranks them by
//! 24h volume and by 24h price change, and presents the rankings as a
//! plain-text report or an interactive terminal table.
//!
//! # Modules
//!
//! - `domain`: Exchange registry, token metrics, ranking, report and row formatting, paging
//! - `ports`: Trait abstraction for the market-data source (`TokenSource`)
//! - `adapters`: Moralis HTTP client, CLI, terminal UI
//! - `config`: Configuration loading and validation
//! - `application`: Ranking service, batch reporter, browser state machine

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod config;
pub mod application;
