//! Shared fixtures for report builder tests.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::coa::{Account, AccountType};
use crate::ledger::{ApprovalStatus, Transaction, TransactionKind};
use crate::register::{CashBankRegister, RegisterType};
use kasbook_shared::types::{AccountId, ActorId, RegisterId, TransactionId};

pub(crate) fn register(code: &str, name: &str, opening: Decimal) -> CashBankRegister {
    CashBankRegister {
        id: RegisterId::new(),
        code: code.to_string(),
        name: name.to_string(),
        register_type: RegisterType::Cash,
        opening_balance: opening,
        balance: opening,
        account_number: None,
        bank_name: None,
        is_active: true,
        created_at: Utc::now(),
    }
}

pub(crate) fn account(code: &str, name: &str, account_type: AccountType, category: &str) -> Account {
    Account {
        id: AccountId::new(),
        code: code.to_string(),
        name: name.to_string(),
        account_type,
        category: category.to_string(),
        parent_id: None,
        description: None,
        is_active: true,
        created_at: Utc::now(),
    }
}

pub(crate) fn approved_txn(
    register: &CashBankRegister,
    kind: TransactionKind,
    amount: Decimal,
    txn_date: NaiveDate,
    seq: u64,
) -> Transaction {
    let approver = ActorId::new();
    Transaction {
        id: TransactionId::new(),
        seq,
        txn_date,
        kind,
        amount,
        account_id: AccountId::new(),
        register_id: register.id,
        description: format!("{kind} {amount}"),
        reference_no: None,
        proof_url: None,
        transfer_id: None,
        status: ApprovalStatus::Approved,
        checked_by: Some(ActorId::new()),
        approved_by: Some(approver),
        rejected_reason: None,
        created_by: ActorId::new(),
        created_at: Utc::now(),
        checked_at: Some(Utc::now()),
        decided_at: Some(Utc::now()),
    }
}
