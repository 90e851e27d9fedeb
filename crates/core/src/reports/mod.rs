//! Financial report generation.
//!
//! Four report builders, each a pure function of an immutable transaction
//! snapshot, master-data snapshots, and an explicit date range:
//! - Cash Book (per-register running balance, daily/monthly buckets)
//! - Cash-Flow Statement (operating/investing/financing, transfers split out)
//! - Reconciliation (full-history replay; the standing drift detector)
//! - Budget vs Actual (target vs approved actuals per budget row)
//!
//! Only APPROVED entries ever contribute to a report. The builders never
//! mutate anything; drift surfaces as a reported value, not an error.

pub mod budget_actual;
pub mod cash_book;
pub mod cash_flow;
pub mod classify;
pub mod error;
pub mod reconciliation;
pub mod types;

#[cfg(test)]
mod cash_book_props;
#[cfg(test)]
mod reconciliation_props;
#[cfg(test)]
pub(crate) mod testutil;

pub use budget_actual::build_budget_actual;
pub use cash_book::build_cash_book;
pub use cash_flow::build_cash_flow;
pub use classify::{CashFlowSectionKind, KeywordClassifier, SectionClassifier};
pub use error::ReportError;
pub use reconciliation::build_reconciliation;
pub use types::*;
