//! Domain Layer - Core ranking and presentation logic
//!
//! Pure types and functions with no I/O. All external interactions happen
//! through the ports layer.
//!
//! - `exchange`: static exchange registry
//! - `token`: per-token 24h metrics
//! - `timeframe`: aggregation windows
//! - `ranking`: top-N by volume / top-M by change
//! - `report`: plain-text tables for the batch report
//! - `display_row`: flattened rows and filtering for the browser
//! - `pager`: page arithmetic for the browser table
//! - `params`: parsing of user-supplied counts and page sizes

pub mod exchange;
pub mod token;
pub mod timeframe;
pub mod ranking;
pub mod report;
pub mod display_row;
pub mod pager;
pub mod params;

pub use exchange::{ExchangeDescriptor, ExchangeRegistry, RegistryError};
pub use token::TokenMetric;
pub use timeframe::{Timeframe, TimeframeError};
pub use ranking::{rank, RankedSet};
pub use display_row::{filter_rows, flatten, DisplayRow, RankKind, COLUMN_TITLES};
pub use pager::Pager;
pub use params::{parse_count, parse_page_size, ParamError};
