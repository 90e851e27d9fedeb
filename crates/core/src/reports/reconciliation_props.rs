//! Property-based tests for the reconciliation replay invariant.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::reconciliation::build_reconciliation;
use super::testutil::{approved_txn, register};
use crate::ledger::{ApprovalStatus, TransactionKind};
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

fn status_strategy() -> impl Strategy<Value = ApprovalStatus> {
    prop_oneof![
        Just(ApprovalStatus::Approved),
        Just(ApprovalStatus::Pending),
        Just(ApprovalStatus::Rejected),
        Just(ApprovalStatus::Cancelled),
    ]
}

fn day_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..366u64).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .checked_add_days(chrono::Days::new(offset))
            .unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any history, maintaining the balance by applying each APPROVED
    /// delta (the approve transition's single-writer rule) leaves zero
    /// variance against the full-history replay, whatever mix of statuses
    /// and dates the ledger holds.
    #[test]
    fn prop_replay_reproduces_maintained_balance(
        opening in amount_strategy(),
        history in prop::collection::vec(
            (amount_strategy(), kind_strategy(), status_strategy(), day_strategy()),
            0..40,
        ),
    ) {
        let mut kas = register("KAS-01", "Kas Kecil", opening);
        let mut txns = Vec::with_capacity(history.len());

        for (i, (amount, kind, status, date)) in history.into_iter().enumerate() {
            let mut txn = approved_txn(&kas, kind, amount, date, i as u64 + 1);
            txn.status = status;
            // Single-writer rule: only approved entries move the balance.
            if status == ApprovalStatus::Approved {
                kas.balance += txn.delta();
            }
            txns.push(txn);
        }

        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        )
        .unwrap();
        let report = build_reconciliation(range, None, &[kas], &txns);
        let row = &report.rows[0];

        prop_assert_eq!(row.variance_current, Decimal::ZERO);
        prop_assert_eq!(report.totals.variance_current, Decimal::ZERO);
        // Split consistency: pre-range + in-range + post-range replay must
        // agree with the all-time replay.
        prop_assert_eq!(row.closing_at_end_range, row.opening_at_start + row.period_net);
    }

    /// Any out-of-band balance mutation shows up as exactly its size in
    /// `variance_current`.
    #[test]
    fn prop_drift_surfaces_exactly(
        opening in amount_strategy(),
        drift_cents in (-1_000_000i64..1_000_000i64),
    ) {
        prop_assume!(drift_cents != 0);
        let drift = Decimal::new(drift_cents, 2);
        let mut kas = register("KAS-01", "Kas Kecil", opening);
        kas.balance += drift;

        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .unwrap();
        let report = build_reconciliation(range, None, &[kas], &[]);

        prop_assert_eq!(report.rows[0].variance_current, drift);
    }
}
