//! Shared fixtures for store integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use kasbook_core::coa::{Account, AccountType, CreateAccountInput};
use kasbook_core::ledger::{CreateTransactionInput, Transaction, TransactionKind, TransferInput};
use kasbook_core::register::{CashBankRegister, CreateRegisterInput, RegisterType};
use kasbook_core::workflow::RecordingAuditSink;
use kasbook_store::MemStore;
use kasbook_shared::types::ActorId;

/// A seeded store with the master data the tests share.
pub struct Fixture {
    pub store: MemStore,
    pub sink: Arc<RecordingAuditSink>,
    pub income_account: Account,
    pub expense_account: Account,
    pub mutation_account: Account,
    pub kas: CashBankRegister,
    pub bank: CashBankRegister,
    pub maker: ActorId,
    pub checker: ActorId,
    pub approver: ActorId,
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Seeds a store with one income account, one expense account, one asset
/// account for transfer legs, a cash register opening at 100000, and a bank
/// register opening at 0.
pub fn fixture() -> Fixture {
    let sink = Arc::new(RecordingAuditSink::new());
    let store = MemStore::with_audit_sink(sink.clone());

    let income_account = store
        .accounts()
        .create(CreateAccountInput {
            code: "4-100".to_string(),
            name: "SPP".to_string(),
            account_type: AccountType::Income,
            category: "Pendapatan Sekolah".to_string(),
            parent_id: None,
            description: None,
            is_active: true,
        })
        .unwrap();
    let expense_account = store
        .accounts()
        .create(CreateAccountInput {
            code: "5-100".to_string(),
            name: "Listrik".to_string(),
            account_type: AccountType::Expense,
            category: "Operasional".to_string(),
            parent_id: None,
            description: None,
            is_active: true,
        })
        .unwrap();
    let mutation_account = store
        .accounts()
        .create(CreateAccountInput {
            code: "1-900".to_string(),
            name: "Mutasi Antar Kas".to_string(),
            account_type: AccountType::Asset,
            category: "Mutasi".to_string(),
            parent_id: None,
            description: None,
            is_active: true,
        })
        .unwrap();

    let kas = store
        .registers()
        .create(CreateRegisterInput {
            code: "KAS-01".to_string(),
            name: "Kas Kecil".to_string(),
            register_type: RegisterType::Cash,
            opening_balance: dec!(100_000),
            account_number: None,
            bank_name: None,
            is_active: true,
        })
        .unwrap();
    let bank = store
        .registers()
        .create(CreateRegisterInput {
            code: "BNK-01".to_string(),
            name: "Bank Operasional".to_string(),
            register_type: RegisterType::Bank,
            opening_balance: Decimal::ZERO,
            account_number: Some("1234567890".to_string()),
            bank_name: Some("Bank Sekolah".to_string()),
            is_active: true,
        })
        .unwrap();

    Fixture {
        store,
        sink,
        income_account,
        expense_account,
        mutation_account,
        kas,
        bank,
        maker: ActorId::new(),
        checker: ActorId::new(),
        approver: ActorId::new(),
    }
}

impl Fixture {
    /// Draft input for an income entry on the cash register.
    pub fn income(&self, amount: Decimal, txn_date: NaiveDate) -> CreateTransactionInput {
        CreateTransactionInput {
            txn_date,
            kind: TransactionKind::Income,
            amount,
            account_id: self.income_account.id,
            register_id: self.kas.id,
            description: "Penerimaan SPP".to_string(),
            reference_no: None,
            proof_url: None,
            created_by: self.maker,
        }
    }

    /// Draft input for an expense entry on the cash register.
    pub fn expense(&self, amount: Decimal, txn_date: NaiveDate) -> CreateTransactionInput {
        CreateTransactionInput {
            txn_date,
            kind: TransactionKind::Expense,
            amount,
            account_id: self.expense_account.id,
            register_id: self.kas.id,
            description: "Bayar listrik".to_string(),
            reference_no: None,
            proof_url: None,
            created_by: self.maker,
        }
    }

    /// Draft input for a cash → bank transfer.
    pub fn transfer(&self, amount: Decimal, txn_date: NaiveDate) -> TransferInput {
        TransferInput {
            txn_date,
            amount,
            from_register_id: self.kas.id,
            to_register_id: self.bank.id,
            out_account_id: self.mutation_account.id,
            in_account_id: self.mutation_account.id,
            description: "Setor ke bank".to_string(),
            reference_no: Some("TRF-01".to_string()),
            created_by: self.maker,
        }
    }

    /// Creates, checks, and approves an entry in one go.
    pub fn approved(&self, input: CreateTransactionInput) -> Transaction {
        let txn = self.store.transactions().create(input).unwrap();
        self.store.transactions().check(txn.id, self.checker).unwrap();
        self.store.transactions().approve(txn.id, self.approver).unwrap()
    }
}
