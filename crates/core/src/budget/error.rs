//! Budget error types.

use thiserror::Error;

use crate::budget::types::BudgetKind;
use crate::coa::AccountType;
use kasbook_shared::types::{AccountId, BudgetId, RegisterId};
use kasbook_shared::AppError;

/// Errors that can occur during budget operations.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// Budget amount must be positive.
    #[error("Budget amount must be positive")]
    NonPositiveAmount,

    /// Period end before period start.
    #[error("Budget period end {end} is before start {start}")]
    InvalidPeriod {
        /// Period start.
        start: chrono::NaiveDate,
        /// Period end.
        end: chrono::NaiveDate,
    },

    /// Budget kind does not match the account's type.
    #[error("Budget kind {kind} does not match {account_type} account {account_id}")]
    KindMismatch {
        /// The budget kind.
        kind: BudgetKind,
        /// The account's type.
        account_type: AccountType,
        /// The offending account.
        account_id: AccountId,
    },

    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Register not found.
    #[error("Register not found: {0}")]
    RegisterNotFound(RegisterId),

    /// Budget not found.
    #[error("Budget not found: {0}")]
    NotFound(BudgetId),
}

impl BudgetError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount => "NON_POSITIVE_BUDGET_AMOUNT",
            Self::InvalidPeriod { .. } => "INVALID_BUDGET_PERIOD",
            Self::KindMismatch { .. } => "BUDGET_KIND_MISMATCH",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::RegisterNotFound(_) => "REGISTER_NOT_FOUND",
            Self::NotFound(_) => "BUDGET_NOT_FOUND",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NonPositiveAmount | Self::InvalidPeriod { .. } | Self::KindMismatch { .. } => 400,
            Self::AccountNotFound(_) | Self::RegisterNotFound(_) | Self::NotFound(_) => 404,
        }
    }
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::AccountNotFound(_)
            | BudgetError::RegisterNotFound(_)
            | BudgetError::NotFound(_) => Self::NotFound(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(BudgetError::NonPositiveAmount.status_code(), 400);
        assert_eq!(BudgetError::NotFound(BudgetId::new()).status_code(), 404);
    }
}
