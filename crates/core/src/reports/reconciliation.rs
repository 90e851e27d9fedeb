//! Reconciliation builder.
//!
//! Replays each register's entire approved history from its configured
//! opening balance and compares the result against the stored materialized
//! balance. A nonzero variance means the cache has drifted from the ledger;
//! the report surfaces it for human review and never corrects it.

use rust_decimal::Decimal;

use super::types::{ReconciliationReport, ReconciliationRow, ReconciliationTotals};
use crate::ledger::{ApprovalStatus, Transaction};
use crate::register::CashBankRegister;
use kasbook_shared::types::RegisterId;
use kasbook_shared::DateRange;

/// Builds the reconciliation report for `range`.
///
/// Scope is one register when `register_id` is given, otherwise all
/// registers. The period bounds only split the replay into pre-range and
/// in-range parts; the drift check always covers the full history.
#[must_use]
pub fn build_reconciliation(
    range: DateRange,
    register_id: Option<RegisterId>,
    registers: &[CashBankRegister],
    txns: &[Transaction],
) -> ReconciliationReport {
    let mut rows: Vec<ReconciliationRow> = registers
        .iter()
        .filter(|r| register_id.is_none_or(|id| r.id == id))
        .map(|register| replay_register(range, register, txns))
        .collect();
    rows.sort_by(|a, b| a.register_code.cmp(&b.register_code));

    let mut totals = ReconciliationTotals::default();
    for row in &rows {
        totals.opening_balance += row.opening_balance;
        totals.opening_at_start += row.opening_at_start;
        totals.period_inflow += row.period_inflow;
        totals.period_outflow += row.period_outflow;
        totals.period_net += row.period_net;
        totals.closing_at_end_range += row.closing_at_end_range;
        totals.ledger_balance_current += row.ledger_balance_current;
        totals.stored_balance += row.stored_balance;
        totals.variance_current += row.variance_current;
    }

    ReconciliationReport {
        report_type: "reconciliation".to_string(),
        period_start: range.start,
        period_end: range.end,
        rows,
        totals,
    }
}

fn replay_register(
    range: DateRange,
    register: &CashBankRegister,
    txns: &[Transaction],
) -> ReconciliationRow {
    let mut pre_range = Decimal::ZERO;
    let mut period_inflow = Decimal::ZERO;
    let mut period_outflow = Decimal::ZERO;
    let mut all_time = Decimal::ZERO;

    for txn in txns {
        if txn.status != ApprovalStatus::Approved || txn.register_id != register.id {
            continue;
        }
        let delta = txn.delta();
        all_time += delta;
        if txn.txn_date < range.start {
            pre_range += delta;
        } else if range.contains(txn.txn_date) {
            if delta.is_sign_negative() {
                period_outflow += txn.amount;
            } else {
                period_inflow += txn.amount;
            }
        }
    }

    let opening_at_start = register.opening_balance + pre_range;
    let period_net = period_inflow - period_outflow;
    let ledger_balance_current = register.opening_balance + all_time;
    let variance_current = register.balance - ledger_balance_current;

    ReconciliationRow {
        register_id: register.id,
        register_code: register.code.clone(),
        register_name: register.name.clone(),
        register_type: register.register_type,
        opening_balance: register.opening_balance,
        opening_at_start,
        period_inflow,
        period_outflow,
        period_net,
        closing_at_end_range: opening_at_start + period_net,
        ledger_balance_current,
        stored_balance: register.balance,
        variance_current,
    }
}
