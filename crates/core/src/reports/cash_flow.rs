//! Cash-flow statement builder.
//!
//! Classifies approved income/expense entries into OPERATING, INVESTING,
//! and FINANCING per-account aggregates. Transfer legs never enter a
//! section: moving cash between registers is not an operating flow, so
//! their totals are summed separately under `internalTransfers`.

use rust_decimal::Decimal;
use std::collections::HashMap;

use super::classify::{CashFlowSectionKind, SectionClassifier};
use super::types::{
    CashFlowItem, CashFlowReport, CashFlowSection, CashFlowTotals, InternalTransfers,
};
use crate::coa::Account;
use crate::ledger::{ApprovalStatus, Transaction, TransactionKind};
use kasbook_shared::types::AccountId;
use kasbook_shared::DateRange;

/// Builds the cash-flow statement for `range` across all registers.
#[must_use]
pub fn build_cash_flow(
    range: DateRange,
    accounts: &[Account],
    txns: &[Transaction],
    classifier: &dyn SectionClassifier,
) -> CashFlowReport {
    let account_index: HashMap<AccountId, &Account> =
        accounts.iter().map(|a| (a.id, a)).collect();

    let mut transfers = InternalTransfers::default();
    let mut per_account: HashMap<AccountId, CashFlowItem> = HashMap::new();

    for txn in txns {
        if txn.status != ApprovalStatus::Approved || !range.contains(txn.txn_date) {
            continue;
        }

        match txn.kind {
            TransactionKind::TransferIn => transfers.inflow += txn.amount,
            TransactionKind::TransferOut => transfers.outflow += txn.amount,
            TransactionKind::Income | TransactionKind::Expense => {
                let item = per_account.entry(txn.account_id).or_insert_with(|| {
                    let (code, name) = account_index.get(&txn.account_id).map_or_else(
                        || (txn.account_id.to_string(), txn.account_id.to_string()),
                        |a| (a.code.clone(), a.name.clone()),
                    );
                    CashFlowItem {
                        account_id: txn.account_id,
                        account_code: code,
                        account_name: name,
                        inflow: Decimal::ZERO,
                        outflow: Decimal::ZERO,
                        net: Decimal::ZERO,
                        tx_count: 0,
                    }
                });
                if txn.kind == TransactionKind::Income {
                    item.inflow += txn.amount;
                } else {
                    item.outflow += txn.amount;
                }
                item.net = item.inflow - item.outflow;
                item.tx_count += 1;
            }
        }
    }
    transfers.net = transfers.inflow - transfers.outflow;

    let mut operating = CashFlowSection::default();
    let mut investing = CashFlowSection::default();
    let mut financing = CashFlowSection::default();

    for (account_id, item) in per_account {
        let section_kind = account_index.get(&account_id).map_or(
            CashFlowSectionKind::Operating,
            |a| classifier.classify(a.account_type, &a.category),
        );
        let section = match section_kind {
            CashFlowSectionKind::Operating => &mut operating,
            CashFlowSectionKind::Investing => &mut investing,
            CashFlowSectionKind::Financing => &mut financing,
        };
        section.inflow += item.inflow;
        section.outflow += item.outflow;
        section.net += item.net;
        section.items.push(item);
    }

    for section in [&mut operating, &mut investing, &mut financing] {
        section
            .items
            .sort_by(|a, b| b.net.abs().cmp(&a.net.abs()).then_with(|| a.account_code.cmp(&b.account_code)));
    }

    let totals = CashFlowTotals {
        inflow: operating.inflow + investing.inflow + financing.inflow,
        outflow: operating.outflow + investing.outflow + financing.outflow,
        net: operating.net + investing.net + financing.net,
    };

    CashFlowReport {
        report_type: "cash_flow".to_string(),
        period_start: range.start,
        period_end: range.end,
        operating,
        investing,
        financing,
        internal_transfers: transfers,
        totals,
    }
}
