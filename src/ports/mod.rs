//! Ports Layer - Trait definitions for external dependencies
//!
//! This module defines the interfaces (ports) that adapters must implement.
//! Following hexagonal architecture, these traits abstract:
//! - Market data: per-exchange token metrics (`TokenSource`)

pub mod market_data;
pub mod mocks;

pub use market_data::{FetchError, TokenQuery, TokenSource};
pub use mocks::StubTokenSource;

#[cfg(test)]
pub use market_data::MockTokenSource;
