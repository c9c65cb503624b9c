//! Aggregation windows for volume / change figures.
//!
//! The upstream API is queried with the short codes (`5m`, `30m`, `1h`).
//! The long names are accepted when parsing configuration only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeframeError {
    #[error("Unknown timeframe '{0}' (expected 5m, 30m or 1h)")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Timeframe {
    FiveMinutes,
    ThirtyMinutes,
    OneHour,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [
        Timeframe::FiveMinutes,
        Timeframe::ThirtyMinutes,
        Timeframe::OneHour,
    ];

    /// Wire value sent as the `timeframe` query parameter
    pub fn as_code(&self) -> &'static str {
        match self {
            Timeframe::FiveMinutes => "5m",
            Timeframe::ThirtyMinutes => "30m",
            Timeframe::OneHour => "1h",
        }
    }

    pub fn long_name(&self) -> &'static str {
        match self {
            Timeframe::FiveMinutes => "fiveMinutes",
            Timeframe::ThirtyMinutes => "thirtyMinutes",
            Timeframe::OneHour => "oneHour",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl FromStr for Timeframe {
    type Err = TimeframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Timeframe::ALL
            .into_iter()
            .find(|tf| {
                tf.as_code().eq_ignore_ascii_case(trimmed)
                    || tf.long_name().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| TimeframeError::Unknown(s.to_string()))
    }
}

impl TryFrom<String> for Timeframe {
    type Error = TimeframeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Timeframe> for String {
    fn from(tf: Timeframe) -> Self {
        tf.as_code().to_string()
    }
}
