//! Flattened, display-ready rows for the browser table.

use std::fmt;

use super::ranking::RankedSet;
use super::timeframe::Timeframe;
use super::token::TokenMetric;

/// Which ranking a row came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKind {
    Volume,
    Change,
}

impl fmt::Display for RankKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankKind::Volume => f.write_str("Volume"),
            RankKind::Change => f.write_str("Change"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub exchange: String,
    pub timeframe: Timeframe,
    pub kind: RankKind,
    pub address: String,
    pub symbol: String,
    pub volume: String,
    pub change: String,
    pub price: String,
}

impl DisplayRow {
    pub fn from_metric(
        exchange: &str,
        timeframe: Timeframe,
        kind: RankKind,
        token: &TokenMetric,
    ) -> Self {
        Self {
            exchange: exchange.to_string(),
            timeframe,
            kind,
            address: token.address.clone(),
            symbol: token.symbol.clone(),
            volume: format!("{:.0}", token.volume_24h),
            change: format!("{:.2}%", token.price_change_pct_24h),
            price: format!("{:.4}", token.usd_price),
        }
    }

    /// Case-insensitive substring match on exchange, address or symbol.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.exchange.to_lowercase().contains(needle)
            || self.address.to_lowercase().contains(needle)
            || self.symbol.to_lowercase().contains(needle)
    }

    /// Cells in table column order
    pub fn cells(&self) -> [String; 8] {
        [
            self.exchange.clone(),
            self.timeframe.to_string(),
            self.kind.to_string(),
            self.address.clone(),
            self.symbol.clone(),
            self.volume.clone(),
            self.change.clone(),
            self.price.clone(),
        ]
    }
}

pub const COLUMN_TITLES: [&str; 8] = [
    "DEX",
    "Timeframe",
    "Type",
    "Token",
    "Symbol",
    "Volume",
    "Change %",
    "Price",
];

/// Volume rows first, then change rows, each in ranking order
pub fn flatten(exchange: &str, timeframe: Timeframe, ranked: &RankedSet) -> Vec<DisplayRow> {
    let volume = ranked
        .by_volume
        .iter()
        .map(|t| DisplayRow::from_metric(exchange, timeframe, RankKind::Volume, t));
    let change = ranked
        .by_change
        .iter()
        .map(|t| DisplayRow::from_metric(exchange, timeframe, RankKind::Change, t));
    volume.chain(change).collect()
}

/// Rows matching `filter`; an empty filter keeps everything
pub fn filter_rows(rows: &[DisplayRow], filter: &str) -> Vec<DisplayRow> {
    if filter.is_empty() {
        return rows.to_vec();
    }
    let needle = filter.to_lowercase();
    rows.iter().filter(|r| r.matches(&needle)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ranking::rank;

    fn metric(address: &str, symbol: &str) -> TokenMetric {
        TokenMetric::new(address, symbol, 1234.56, -3.456, 0.123456)
    }

    #[test]
    fn test_row_formatting() {
        let row = DisplayRow::from_metric(
            "uniswap",
            Timeframe::OneHour,
            RankKind::Volume,
            &metric("0xabc", "PEPE"),
        );
        assert_eq!(row.volume, "1235");
        assert_eq!(row.change, "-3.46%");
        assert_eq!(row.price, "0.1235");
        assert_eq!(row.cells()[1], "1h");
        assert_eq!(row.cells()[2], "Volume");
    }

    #[test]
    fn test_flatten_orders_volume_then_change() {
        let tokens = vec![
            TokenMetric::new("0x1", "A", 10.0, 5.0, 1.0),
            TokenMetric::new("0x2", "B", 20.0, 1.0, 1.0),
        ];
        let ranked = rank(&tokens, 2, 1);
        let rows = flatten("orca", Timeframe::FiveMinutes, &ranked);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].kind, RankKind::Volume);
        assert_eq!(rows[0].symbol, "B");
        assert_eq!(rows[2].kind, RankKind::Change);
        assert_eq!(rows[2].symbol, "A");
        assert!(rows.iter().all(|r| r.exchange == "orca"));
    }

    #[test]
    fn test_filter_matches_exchange_address_symbol() {
        let rows = vec![
            DisplayRow::from_metric("uniswap", Timeframe::OneHour, RankKind::Volume, &metric("0xdead", "AAA")),
            DisplayRow::from_metric("orca", Timeframe::OneHour, RankKind::Volume, &metric("0xbeef", "BBB")),
            DisplayRow::from_metric("orca", Timeframe::OneHour, RankKind::Change, &metric("0xcafe", "UNI")),
        ];

        assert_eq!(filter_rows(&rows, "UNI").len(), 2);
        assert_eq!(filter_rows(&rows, "BEEF").len(), 1);
        assert_eq!(filter_rows(&rows, "bbb").len(), 1);
        assert_eq!(filter_rows(&rows, "").len(), 3);
        assert!(filter_rows(&rows, "zzz").is_empty());
    }

    #[test]
    fn test_filter_ignores_formatted_columns() {
        let rows = vec![DisplayRow::from_metric(
            "orca",
            Timeframe::OneHour,
            RankKind::Volume,
            &metric("0x1", "AAA"),
        )];
        // "1235" only appears in the volume column
        assert!(filter_rows(&rows, "1235").is_empty());
    }
}
