//! Cash transaction ledger.
//!
//! This module implements the append-style transaction log:
//! - Domain types for ledger entries and their signed cash deltas
//! - Draft validation against the chart of accounts and registers
//! - Paired transfer construction and the unpaired-leg integrity scan
//!
//! Entries are never deleted; they are created PENDING and only ever
//! transitioned through the workflow state machine.

pub mod error;
pub mod service;
pub mod transfer;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::LedgerError;
pub use service::{AccountRef, LedgerService, RegisterRef};
pub use transfer::{unpaired_transfer_legs, UnpairedLeg, UnpairedReason};
pub use types::{
    ApprovalStatus, CreateTransactionInput, Transaction, TransactionFilter, TransactionKind,
    TransferInput,
};
