//! Budget tracking and variance analysis.
//!
//! Budgets are read-only inputs to reporting: a per-period target amount
//! per account, optionally scoped to one register. They never mutate the
//! ledger or any balance.

pub mod error;
pub mod service;
pub mod types;
pub mod variance;

pub use error::BudgetError;
pub use service::BudgetService;
pub use types::{Budget, BudgetFilter, BudgetKind, CreateBudgetInput, UpdateBudgetInput};
pub use variance::BudgetVariance;
