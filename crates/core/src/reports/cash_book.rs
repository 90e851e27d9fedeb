//! Cash book builder.
//!
//! A running-balance listing of approved entries over one register or all
//! registers, with daily or monthly buckets whose cumulative closing
//! balances carry across from the report's opening balance.

use rust_decimal::Decimal;
use std::collections::HashSet;

use super::types::{CashBookBucket, CashBookEntry, CashBookReport, GroupBy};
use crate::ledger::{ApprovalStatus, Transaction};
use crate::register::CashBankRegister;
use kasbook_shared::types::RegisterId;
use kasbook_shared::DateRange;

/// Builds the cash book for `range`.
///
/// Scope is one register when `register_id` is given, otherwise all
/// registers. Only APPROVED entries contribute. An empty scope is not an
/// error: the report comes back all-zero with empty arrays.
#[must_use]
pub fn build_cash_book(
    range: DateRange,
    group_by: GroupBy,
    register_id: Option<RegisterId>,
    registers: &[CashBankRegister],
    txns: &[Transaction],
) -> CashBookReport {
    let scope: HashSet<RegisterId> = registers
        .iter()
        .filter(|r| register_id.is_none_or(|id| r.id == id))
        .map(|r| r.id)
        .collect();

    let approved: Vec<&Transaction> = txns
        .iter()
        .filter(|t| t.status == ApprovalStatus::Approved && scope.contains(&t.register_id))
        .collect();

    let configured_opening: Decimal = registers
        .iter()
        .filter(|r| scope.contains(&r.id))
        .map(|r| r.opening_balance)
        .sum();
    let pre_range: Decimal = approved
        .iter()
        .filter(|t| t.txn_date < range.start)
        .map(|t| t.delta())
        .sum();
    let opening_balance = configured_opening + pre_range;

    let mut in_range: Vec<&Transaction> = approved
        .iter()
        .filter(|t| range.contains(t.txn_date))
        .copied()
        .collect();
    in_range.sort_by_key(|t| (t.txn_date, t.seq));

    let mut running = opening_balance;
    let mut entries = Vec::with_capacity(in_range.len());
    let mut grouped: Vec<CashBookBucket> = Vec::new();

    for txn in in_range {
        let delta = txn.delta();
        running += delta;
        let (inflow, outflow) = if delta.is_sign_negative() {
            (Decimal::ZERO, txn.amount)
        } else {
            (txn.amount, Decimal::ZERO)
        };

        entries.push(CashBookEntry {
            transaction_id: txn.id,
            txn_date: txn.txn_date,
            kind: txn.kind,
            description: txn.description.clone(),
            reference_no: txn.reference_no.clone(),
            account_id: txn.account_id,
            register_id: txn.register_id,
            inflow,
            outflow,
            running_balance: running,
        });

        let key = group_by.bucket_key(txn.txn_date);
        match grouped.last_mut() {
            // Entries are sorted, so bucket keys arrive in order.
            Some(bucket) if bucket.key == key => {
                bucket.inflow += inflow;
                bucket.outflow += outflow;
                bucket.net += delta;
                bucket.transaction_count += 1;
                bucket.closing_balance = running;
            }
            _ => grouped.push(CashBookBucket {
                key,
                inflow,
                outflow,
                net: delta,
                transaction_count: 1,
                closing_balance: running,
            }),
        }
    }

    CashBookReport {
        report_type: "cash_book".to_string(),
        period_start: range.start,
        period_end: range.end,
        group_by,
        register_id,
        opening_balance,
        entries,
        grouped,
        closing_balance: running,
    }
}
