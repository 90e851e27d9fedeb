//! Cash and bank registers.
//!
//! A register holds an opening balance fixed at creation and a materialized
//! current balance. The current balance is a cache over the transaction
//! ledger: its only legal writer is the approve transition, and the
//! reconciliation report exists to detect any divergence.

pub mod error;
pub mod service;
pub mod types;

pub use error::RegisterError;
pub use service::RegisterService;
pub use types::{
    CashBankRegister, CreateRegisterInput, RegisterFilter, RegisterType, UpdateRegisterInput,
};
