//! Plain-text ranking tables for the batch report.

use std::fmt::Write;

use super::token::TokenMetric;

/// Longest address shown; longer ones are cut and end in `...`
pub const MAX_ADDRESS_WIDTH: usize = 20;
const ELLIPSIS: &str = "...";
const RULE_WIDTH: usize = 80;

/// Shorten an address to at most `MAX_ADDRESS_WIDTH` characters
pub fn truncate_address(address: &str) -> String {
    if address.chars().count() <= MAX_ADDRESS_WIDTH {
        return address.to_string();
    }
    let keep = MAX_ADDRESS_WIDTH - ELLIPSIS.len();
    let mut short: String = address.chars().take(keep).collect();
    short.push_str(ELLIPSIS);
    short
}

/// Render one titled table: title, header, rule, one line per token,
/// blank line.
pub fn render(title: &str, tokens: &[TokenMetric]) -> String {
    let mut out = String::new();
    // fmt::Write into a String cannot fail
    let _ = writeln!(out, "{title}");
    let _ = writeln!(
        out,
        "{:<10} {:<20} {:<15} {:<15} {:<10}",
        "Symbol", "Address", "Volume", "Change %", "Price"
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    for t in tokens {
        let _ = writeln!(
            out,
            "{:<10} {:<20} {:<15.2} {:<15.2} {:<10.2}",
            t.symbol,
            truncate_address(&t.address),
            t.volume_24h,
            t.price_change_pct_24h,
            t.usd_price
        );
    }
    out.push('\n');
    out
}
