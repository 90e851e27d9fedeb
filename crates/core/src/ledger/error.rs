//! Ledger error types for validation and reference errors.

use thiserror::Error;

use crate::coa::AccountType;
use crate::ledger::types::TransactionKind;
use kasbook_shared::types::{AccountId, RegisterId, TransactionId};
use kasbook_shared::AppError;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Entry amount cannot be zero.
    #[error("Amount cannot be zero")]
    ZeroAmount,

    /// Entry amount cannot be negative.
    #[error("Amount cannot be negative")]
    NegativeAmount,

    /// Account type does not allow this transaction kind.
    #[error("Kind {kind} requires a matching account, got {account_type} account {account_id}")]
    KindMismatch {
        /// The transaction kind.
        kind: TransactionKind,
        /// The account's type.
        account_type: AccountType,
        /// The offending account.
        account_id: AccountId,
    },

    /// Transfer source and destination must differ.
    #[error("Transfer source and destination register must differ")]
    SameRegisterTransfer,

    /// Description is empty.
    #[error("Description must not be empty")]
    EmptyDescription,

    // ========== Reference Errors ==========
    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Account is inactive and cannot take new transactions.
    #[error("Account {0} is inactive")]
    AccountInactive(AccountId),

    /// Register not found.
    #[error("Register not found: {0}")]
    RegisterNotFound(RegisterId),

    /// Register is inactive and cannot take new transactions.
    #[error("Register {0} is inactive")]
    RegisterInactive(RegisterId),

    /// Transaction not found.
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroAmount => "ZERO_AMOUNT",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::KindMismatch { .. } => "KIND_ACCOUNT_MISMATCH",
            Self::SameRegisterTransfer => "SAME_REGISTER_TRANSFER",
            Self::EmptyDescription => "EMPTY_DESCRIPTION",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::AccountInactive(_) => "ACCOUNT_INACTIVE",
            Self::RegisterNotFound(_) => "REGISTER_NOT_FOUND",
            Self::RegisterInactive(_) => "REGISTER_INACTIVE",
            Self::TransactionNotFound(_) => "TRANSACTION_NOT_FOUND",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ZeroAmount
            | Self::NegativeAmount
            | Self::KindMismatch { .. }
            | Self::SameRegisterTransfer
            | Self::EmptyDescription
            | Self::AccountInactive(_)
            | Self::RegisterInactive(_) => 400,

            Self::AccountNotFound(_) | Self::RegisterNotFound(_) | Self::TransactionNotFound(_) => {
                404
            }
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::AccountNotFound(_)
            | LedgerError::RegisterNotFound(_)
            | LedgerError::TransactionNotFound(_) => Self::NotFound(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
