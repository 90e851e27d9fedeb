//! In-process store for the Kasbook ledger.
//!
//! This crate is the explicit repository layer: one repository per
//! aggregate over a shared store guarded by a single lock. Every mutating
//! operation runs as one atomic unit against that lock; in particular the
//! approve transition applies the status change and the register balance
//! delta indivisibly, and it is the only code path in the system that
//! writes a balance. Report reads go through `MemStore::snapshot`, which
//! clones a consistent view so multi-step report scans never mix pre- and
//! post-commit state and never block writers.

pub mod repositories;
pub mod store;

pub use repositories::{
    AccountRepository, BudgetRepository, RegisterRepository, ReportRepository,
    TransactionRepository,
};
pub use store::{MemStore, Snapshot};
