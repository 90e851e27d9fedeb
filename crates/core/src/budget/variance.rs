//! Budget variance calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Budget vs actual variance for one budget row.
///
/// `variance = budget - actual` for both kinds. The percentage is `None`
/// when the budget amount is zero or negative: a zero budget has an
/// undefined ratio, not an on-target one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetVariance {
    /// Budgeted amount.
    pub budget_amount: Decimal,
    /// Actual amount from approved transactions.
    pub actual_amount: Decimal,
    /// Variance amount (budget - actual).
    pub variance: Decimal,
    /// Variance as a percentage of the budget, when defined.
    pub variance_pct: Option<Decimal>,
}

impl BudgetVariance {
    /// Calculates the variance for one budget/actual pair.
    #[must_use]
    pub fn new(budget_amount: Decimal, actual_amount: Decimal) -> Self {
        let variance = budget_amount - actual_amount;
        let variance_pct = if budget_amount > Decimal::ZERO {
            Some((variance / budget_amount * Decimal::ONE_HUNDRED).round_dp(2))
        } else {
            None
        };

        Self {
            budget_amount,
            actual_amount,
            variance,
            variance_pct,
        }
    }
}
