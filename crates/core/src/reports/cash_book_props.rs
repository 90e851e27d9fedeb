//! Property-based tests for cash book aggregation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::cash_book::build_cash_book;
use super::testutil::{approved_txn, register};
use super::types::GroupBy;
use crate::ledger::TransactionKind;
use kasbook_shared::DateRange;

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn kind_strategy() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![
        Just(TransactionKind::Income),
        Just(TransactionKind::Expense),
        Just(TransactionKind::TransferIn),
        Just(TransactionKind::TransferOut),
    ]
}

fn day_in_q1() -> impl Strategy<Value = NaiveDate> {
    (0u64..90u64).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .checked_add_days(chrono::Days::new(offset))
            .unwrap()
    })
}

fn group_by_strategy() -> impl Strategy<Value = GroupBy> {
    prop_oneof![Just(GroupBy::Daily), Just(GroupBy::Monthly)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any entry set and either grouping:
    /// - the last bucket's closing balance equals the report's closing
    /// - bucket counts and nets re-add to the entry totals
    /// - the running balance chain is consistent with the deltas
    #[test]
    fn prop_buckets_reconcile_with_entries(
        opening in amount_strategy(),
        history in prop::collection::vec(
            (amount_strategy(), kind_strategy(), day_in_q1()),
            0..40,
        ),
        group_by in group_by_strategy(),
    ) {
        let kas = register("KAS-01", "Kas Kecil", opening);
        let txns: Vec<_> = history
            .into_iter()
            .enumerate()
            .map(|(i, (amount, kind, date))| {
                approved_txn(&kas, kind, amount, date, i as u64 + 1)
            })
            .collect();

        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        )
        .unwrap();
        let report = build_cash_book(range, group_by, None, &[kas], &txns);

        // Closing = opening + sum of in-range deltas.
        let net: Decimal = report.entries.iter().map(|e| e.inflow - e.outflow).sum();
        prop_assert_eq!(report.closing_balance, report.opening_balance + net);

        // Last bucket carries the overall closing balance.
        if let Some(last) = report.grouped.last() {
            prop_assert_eq!(last.closing_balance, report.closing_balance);
        } else {
            prop_assert!(report.entries.is_empty());
            prop_assert_eq!(report.closing_balance, report.opening_balance);
        }

        // Buckets repartition the entries exactly.
        let bucket_count: u64 = report.grouped.iter().map(|b| b.transaction_count).sum();
        prop_assert_eq!(bucket_count, report.entries.len() as u64);
        let bucket_net: Decimal = report.grouped.iter().map(|b| b.net).sum();
        prop_assert_eq!(bucket_net, net);

        // Running balances chain from the opening balance.
        let mut expected = report.opening_balance;
        for entry in &report.entries {
            expected += entry.inflow - entry.outflow;
            prop_assert_eq!(entry.running_balance, expected);
        }
    }
}
