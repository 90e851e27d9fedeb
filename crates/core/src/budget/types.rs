//! Budget domain types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::coa::AccountType;
use crate::ledger::TransactionKind;
use kasbook_shared::types::{AccountId, BudgetId, RegisterId};
use kasbook_shared::DateRange;

/// Direction a budget targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetKind {
    /// Income target.
    Income,
    /// Expense ceiling.
    Expense,
}

impl BudgetKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Parses a budget kind from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    /// The account type this budget kind targets.
    #[must_use]
    pub fn account_type(&self) -> AccountType {
        match self {
            Self::Income => AccountType::Income,
            Self::Expense => AccountType::Expense,
        }
    }

    /// The transaction kind counted as actuals for this budget.
    #[must_use]
    pub fn transaction_kind(&self) -> TransactionKind {
        match self {
            Self::Income => TransactionKind::Income,
            Self::Expense => TransactionKind::Expense,
        }
    }
}

impl std::fmt::Display for BudgetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A budget row: a target amount for one account over one period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier.
    pub id: BudgetId,
    /// First day of the budget period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the budget period (inclusive).
    pub period_end: NaiveDate,
    /// Income target or expense ceiling.
    pub kind: BudgetKind,
    /// Target amount.
    pub amount: Decimal,
    /// Account the target applies to.
    pub account_id: AccountId,
    /// Register scope; `None` applies across all registers.
    pub register_id: Option<RegisterId>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Budget {
    /// Returns true if the budget period overlaps `range`.
    #[must_use]
    pub fn overlaps(&self, range: DateRange) -> bool {
        range.overlaps(self.period_start, self.period_end)
    }
}

/// Input for creating a budget row.
#[derive(Debug, Clone)]
pub struct CreateBudgetInput {
    /// First day of the period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the period (inclusive).
    pub period_end: NaiveDate,
    /// Income target or expense ceiling.
    pub kind: BudgetKind,
    /// Target amount (must be positive).
    pub amount: Decimal,
    /// Account the target applies to.
    pub account_id: AccountId,
    /// Register scope; `None` applies across all registers.
    pub register_id: Option<RegisterId>,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// Input for updating a budget row.
#[derive(Debug, Clone, Default)]
pub struct UpdateBudgetInput {
    /// New amount.
    pub amount: Option<Decimal>,
    /// New notes.
    pub notes: Option<Option<String>>,
}

/// Filter for listing budgets.
#[derive(Debug, Clone, Default)]
pub struct BudgetFilter {
    /// Restrict to one kind.
    pub kind: Option<BudgetKind>,
    /// Restrict to one account.
    pub account_id: Option<AccountId>,
    /// Restrict to one register scope.
    pub register_id: Option<RegisterId>,
    /// Keep only budgets overlapping this range.
    pub overlapping: Option<DateRange>,
}

impl BudgetFilter {
    /// Returns true if `budget` matches this filter.
    ///
    /// A register filter matches budgets scoped to that register and
    /// budgets with no register scope (they apply everywhere).
    #[must_use]
    pub fn matches(&self, budget: &Budget) -> bool {
        if let Some(kind) = self.kind
            && budget.kind != kind
        {
            return false;
        }
        if let Some(account_id) = self.account_id
            && budget.account_id != account_id
        {
            return false;
        }
        if let Some(register_id) = self.register_id
            && budget.register_id.is_some_and(|scoped| scoped != register_id)
        {
            return false;
        }
        if let Some(range) = self.overlapping
            && !budget.overlaps(range)
        {
            return false;
        }
        true
    }
}
