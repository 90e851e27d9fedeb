//! Property-based tests for ledger validation and deltas.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::{AccountRef, LedgerService, RegisterRef};
use super::types::{CreateTransactionInput, TransactionKind, TransferInput};
use crate::coa::AccountType;
use kasbook_shared::types::{AccountId, ActorId, RegisterId};

/// Strategy to generate positive decimal amounts (0.01 to 10,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a transaction kind.
fn kind_strategy() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![
        Just(TransactionKind::Income),
        Just(TransactionKind::Expense),
        Just(TransactionKind::TransferIn),
        Just(TransactionKind::TransferOut),
    ]
}

fn matching_account(kind: TransactionKind) -> AccountType {
    match kind {
        TransactionKind::Income => AccountType::Income,
        TransactionKind::Expense => AccountType::Expense,
        TransactionKind::TransferIn | TransactionKind::TransferOut => AccountType::Asset,
    }
}

fn active_register(id: RegisterId) -> Option<RegisterRef> {
    Some(RegisterRef { id, is_active: true })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The delta magnitude always equals the amount, and the sign follows
    /// the kind alone.
    #[test]
    fn prop_delta_sign_follows_kind(
        amount in positive_amount(),
        kind in kind_strategy(),
    ) {
        let delta = kind.delta(amount);
        prop_assert_eq!(delta.abs(), amount);
        match kind {
            TransactionKind::Income | TransactionKind::TransferIn => {
                prop_assert!(delta.is_sign_positive());
            }
            TransactionKind::Expense | TransactionKind::TransferOut => {
                prop_assert!(delta.is_sign_negative());
            }
        }
    }

    /// A validated draft always starts PENDING with empty approval fields,
    /// whatever the input.
    #[test]
    fn prop_draft_starts_pending(
        amount in positive_amount(),
        kind in kind_strategy(),
    ) {
        let input = CreateTransactionInput {
            txn_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            kind,
            amount,
            account_id: AccountId::new(),
            register_id: RegisterId::new(),
            description: "entry".to_string(),
            reference_no: None,
            proof_url: None,
            created_by: ActorId::new(),
        };
        let account_type = matching_account(kind);
        let txn = LedgerService::validate_draft(
            input,
            |id| Some(AccountRef { id, account_type, is_active: true }),
            active_register,
        )
        .unwrap();

        prop_assert_eq!(txn.status, super::types::ApprovalStatus::Pending);
        prop_assert!(txn.checked_by.is_none());
        prop_assert!(txn.approved_by.is_none());
        prop_assert!(txn.rejected_reason.is_none());
    }

    /// Transfer conservation: for any amount, the paired legs' deltas sum
    /// to zero while each leg individually moves the full amount.
    #[test]
    fn prop_transfer_pair_conserves_cash(amount in positive_amount()) {
        let input = TransferInput {
            txn_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            amount,
            from_register_id: RegisterId::new(),
            to_register_id: RegisterId::new(),
            out_account_id: AccountId::new(),
            in_account_id: AccountId::new(),
            description: "transfer".to_string(),
            reference_no: None,
            created_by: ActorId::new(),
        };
        let (out_leg, in_leg) = LedgerService::validate_transfer(
            input,
            |id| Some(AccountRef { id, account_type: AccountType::Asset, is_active: true }),
            active_register,
        )
        .unwrap();

        prop_assert_eq!(out_leg.delta() + in_leg.delta(), Decimal::ZERO);
        prop_assert_eq!(out_leg.delta(), -amount);
        prop_assert_eq!(in_leg.delta(), amount);
        prop_assert_eq!(out_leg.transfer_id, in_leg.transfer_id);
    }
}
