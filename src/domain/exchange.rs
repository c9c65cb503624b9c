//! Exchange Registry
//!
//! Static mapping from a logical exchange name to the network and
//! exchange address the market-data API needs to scope a token query.
//! The table is fixed at compile time and never mutated.

use thiserror::Error;

/// Identifies one trading venue on one network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeDescriptor {
    /// Logical name used in configuration and output (e.g. "uniswap")
    pub name: &'static str,
    /// Chain id (hex for EVM chains) or network slug ("solana")
    pub network: &'static str,
    /// Exchange / router address on that network
    pub exchange_id: &'static str,
}

/// Registry errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown exchange: {0}")]
    UnknownExchange(String),
}

const EXCHANGES: &[ExchangeDescriptor] = &[
    ExchangeDescriptor {
        name: "uniswap",
        network: "0x1",
        exchange_id: "0x1c87257f5e8609940bc751a07bb085bb7f8cdbe",
    },
    // BSC
    ExchangeDescriptor {
        name: "pancakeswap",
        network: "0x38",
        exchange_id: "0x10ed43c718714eb63d5aa57b78b54704e256024e",
    },
    // Base
    ExchangeDescriptor {
        name: "aerodrome",
        network: "0x2105",
        exchange_id: "0x6b75a6f6c4c47c3a43b5a6c3a43b5a6c3a43b5a6",
    },
    ExchangeDescriptor {
        name: "raydium",
        network: "solana",
        exchange_id: "675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8",
    },
    ExchangeDescriptor {
        name: "orca",
        network: "solana",
        exchange_id: "9W959DqEETiGZocYWCQPaJ6sBmUzgfxXfqGeTEdp3aQP",
    },
    ExchangeDescriptor {
        name: "meteora",
        network: "solana",
        exchange_id: "Eo7WjKq67rjJQSZxS6z3YkapzY3eMj6Xy8X5EQVn5Ua",
    },
];

/// Read-only, process-wide exchange lookup
pub struct ExchangeRegistry;

impl ExchangeRegistry {
    /// Look up an exchange by name (ASCII case-insensitive)
    pub fn lookup(name: &str) -> Result<&'static ExchangeDescriptor, RegistryError> {
        EXCHANGES
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| RegistryError::UnknownExchange(name.to_string()))
    }

    /// Whether an exchange with this name is registered
    pub fn contains(name: &str) -> bool {
        Self::lookup(name).is_ok()
    }

    /// All registered descriptors, in table order
    pub fn all() -> &'static [ExchangeDescriptor] {
        EXCHANGES
    }

    /// All registered exchange names, in table order
    pub fn names() -> impl Iterator<Item = &'static str> {
        EXCHANGES.iter().map(|d| d.name)
    }
}
