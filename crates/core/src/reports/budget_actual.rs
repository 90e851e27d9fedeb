//! Budget vs actual builder.
//!
//! Matches each budget row overlapping the period against the approved
//! actuals for its (kind, account, register-scope) group within the period.

use rust_decimal::Decimal;
use std::collections::HashMap;

use super::types::{BudgetActualReport, BudgetActualRow, BudgetActualTotals};
use crate::budget::{Budget, BudgetFilter, BudgetKind, BudgetVariance};
use crate::coa::Account;
use crate::ledger::{ApprovalStatus, Transaction};
use kasbook_shared::types::{AccountId, RegisterId};
use kasbook_shared::DateRange;

/// Builds the budget vs actual report for `range`.
///
/// Budgets are kept when they overlap the period and pass the kind and
/// register filters; a register filter also keeps unscoped budgets since
/// they apply everywhere. Actuals for a budget scoped to one register only
/// count that register's transactions; unscoped budgets count all.
#[must_use]
pub fn build_budget_actual(
    range: DateRange,
    kind: Option<BudgetKind>,
    register_id: Option<RegisterId>,
    budgets: &[Budget],
    accounts: &[Account],
    txns: &[Transaction],
) -> BudgetActualReport {
    let filter = BudgetFilter {
        kind,
        account_id: None,
        register_id,
        overlapping: Some(range),
    };
    let account_index: HashMap<AccountId, &Account> =
        accounts.iter().map(|a| (a.id, a)).collect();

    let mut rows: Vec<BudgetActualRow> = budgets
        .iter()
        .filter(|b| filter.matches(b))
        .map(|budget| {
            let actual: Decimal = txns
                .iter()
                .filter(|t| {
                    t.status == ApprovalStatus::Approved
                        && t.kind == budget.kind.transaction_kind()
                        && t.account_id == budget.account_id
                        && budget.register_id.is_none_or(|r| t.register_id == r)
                        && range.contains(t.txn_date)
                })
                .map(|t| t.amount)
                .sum();

            let (account_code, account_name) = account_index.get(&budget.account_id).map_or_else(
                || (budget.account_id.to_string(), budget.account_id.to_string()),
                |a| (a.code.clone(), a.name.clone()),
            );

            BudgetActualRow {
                budget_id: budget.id,
                account_id: budget.account_id,
                account_code,
                account_name,
                kind: budget.kind,
                register_id: budget.register_id,
                period_start: budget.period_start,
                period_end: budget.period_end,
                variance: BudgetVariance::new(budget.amount, actual),
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        a.account_code
            .cmp(&b.account_code)
            .then_with(|| a.period_start.cmp(&b.period_start))
    });

    let mut totals = BudgetActualTotals::default();
    for row in &rows {
        totals.budget_amount += row.variance.budget_amount;
        totals.actual_amount += row.variance.actual_amount;
        totals.variance += row.variance.variance;
    }

    BudgetActualReport {
        report_type: "budget_vs_actual".to_string(),
        period_start: range.start,
        period_end: range.end,
        kind,
        register_id,
        rows,
        totals,
    }
}
