//! Budget validation and construction.

use chrono::Utc;
use rust_decimal::Decimal;

use super::error::BudgetError;
use super::types::{Budget, CreateBudgetInput, UpdateBudgetInput};
use crate::coa::AccountType;
use kasbook_shared::types::{AccountId, BudgetId, RegisterId};

/// Stateless service for budget business rules.
pub struct BudgetService;

impl BudgetService {
    /// Validates a creation input and builds the budget row.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError` if the amount is not positive, the period is
    /// inverted, the account is missing or of the wrong type for the budget
    /// kind, or the register scope does not exist.
    pub fn create<A, R>(
        input: CreateBudgetInput,
        account_type: A,
        register_exists: R,
    ) -> Result<Budget, BudgetError>
    where
        A: Fn(AccountId) -> Option<AccountType>,
        R: Fn(RegisterId) -> bool,
    {
        if input.amount <= Decimal::ZERO {
            return Err(BudgetError::NonPositiveAmount);
        }
        if input.period_end < input.period_start {
            return Err(BudgetError::InvalidPeriod {
                start: input.period_start,
                end: input.period_end,
            });
        }

        let account_type = account_type(input.account_id)
            .ok_or(BudgetError::AccountNotFound(input.account_id))?;
        if account_type != input.kind.account_type() {
            return Err(BudgetError::KindMismatch {
                kind: input.kind,
                account_type,
                account_id: input.account_id,
            });
        }
        if let Some(register_id) = input.register_id
            && !register_exists(register_id)
        {
            return Err(BudgetError::RegisterNotFound(register_id));
        }

        Ok(Budget {
            id: BudgetId::new(),
            period_start: input.period_start,
            period_end: input.period_end,
            kind: input.kind,
            amount: input.amount,
            account_id: input.account_id,
            register_id: input.register_id,
            notes: input.notes,
            created_at: Utc::now(),
        })
    }

    /// Applies an update to an existing budget row.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::NonPositiveAmount` if the new amount is not
    /// positive.
    pub fn apply_update(budget: &mut Budget, input: UpdateBudgetInput) -> Result<(), BudgetError> {
        if let Some(amount) = input.amount {
            if amount <= Decimal::ZERO {
                return Err(BudgetError::NonPositiveAmount);
            }
            budget.amount = amount;
        }
        if let Some(notes) = input.notes {
            budget.notes = notes;
        }
        Ok(())
    }
}
