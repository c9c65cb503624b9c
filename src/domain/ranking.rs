//! Top-N Ranking
//!
//! Selects the highest-volume and highest-change tokens from one fetch.
//! Each ranking sorts its own copy of the input, so the two selections
//! never share ordering state and the caller's slice is left untouched.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::token::TokenMetric;

/// The two rankings derived from one fetch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedSet {
    /// Descending 24h volume, at most N entries
    pub by_volume: Vec<TokenMetric>,
    /// Descending 24h price change, at most M entries
    pub by_change: Vec<TokenMetric>,
}

impl RankedSet {
    pub fn is_empty(&self) -> bool {
        self.by_volume.is_empty() && self.by_change.is_empty()
    }
}

/// Rank `tokens` into the top `top_volume` by volume and the top
/// `top_change` by price change. A count of zero yields an empty list.
pub fn rank(tokens: &[TokenMetric], top_volume: usize, top_change: usize) -> RankedSet {
    RankedSet {
        by_volume: top_by(tokens, top_volume, |t| t.volume_24h),
        by_change: top_by(tokens, top_change, |t| t.price_change_pct_24h),
    }
}

fn top_by<F>(tokens: &[TokenMetric], count: usize, key: F) -> Vec<TokenMetric>
where
    F: Fn(&TokenMetric) -> f64,
{
    if count == 0 {
        return Vec::new();
    }

    let mut sorted = tokens.to_vec();
    // sort_by is stable: equal keys keep their input order
    sorted.sort_by(|a, b| descending(sort_key(key(a)), sort_key(key(b))));
    sorted.truncate(count);
    sorted
}

/// NaN ranks below every real value; -0.0 and 0.0 compare equal
fn sort_key(value: f64) -> f64 {
    if value.is_nan() {
        f64::NEG_INFINITY
    } else if value == 0.0 {
        0.0
    } else {
        value
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
