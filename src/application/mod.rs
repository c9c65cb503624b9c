//! Application Layer
//!
//! Use cases built on the domain and the `TokenSource` port: ranking one
//! exchange, the batch report and the interactive browser model.

pub mod browser;
pub mod ranking;
pub mod reporter;

pub use ranking::{RankingError, RankingService};
pub use reporter::{PairFailure, ReportPlan, ReportSummary, Reporter};
