//! Demo seeder for Kasbook development and testing.
//!
//! Seeds a store with a small chart of accounts, two registers, a budget,
//! and a month of transactions, then prints all four reports as JSON.
//!
//! Usage: cargo run --bin seeder

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use std::str::FromStr;

use kasbook_core::budget::{BudgetKind, CreateBudgetInput};
use kasbook_core::coa::{Account, AccountType, CreateAccountInput};
use kasbook_core::ledger::{CreateTransactionInput, TransactionKind, TransferInput};
use kasbook_core::register::{CashBankRegister, CreateRegisterInput, RegisterType};
use kasbook_shared::types::ActorId;
use kasbook_shared::AppConfig;
use kasbook_store::MemStore;

/// Treasurer actor id (consistent for all seeds).
const BENDAHARA_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Principal actor id (consistent for all seeds).
const KEPALA_SEKOLAH_ID: &str = "00000000-0000-0000-0000-000000000002";

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::load().context("failed to load configuration")?;
    tracing_subscriber::fmt()
        .with_env_filter(config.log.filter.clone())
        .init();

    let store = MemStore::new().with_reporting_config(config.reporting);
    let bendahara = ActorId::from_str(BENDAHARA_ID)?;
    let kepala = ActorId::from_str(KEPALA_SEKOLAH_ID)?;

    println!("Seeding chart of accounts...");
    let accounts = seed_accounts(&store)?;

    println!("Seeding registers...");
    let registers = seed_registers(&store)?;

    println!("Seeding budgets...");
    seed_budgets(&store, &accounts)?;

    println!("Seeding transactions...");
    seed_transactions(&store, &accounts, &registers, bendahara, kepala)?;

    println!("Seeding complete!\n");
    print_reports(&store)?;
    Ok(())
}

struct SeededAccounts {
    spp: Account,
    donasi: Account,
    listrik: Account,
    atk: Account,
    peralatan: Account,
    pinjaman: Account,
    mutasi: Account,
}

struct SeededRegisters {
    kas: CashBankRegister,
    bank: CashBankRegister,
}

fn seed_accounts(store: &MemStore) -> Result<SeededAccounts> {
    let create = |code: &str, name: &str, account_type, category: &str| {
        store
            .accounts()
            .create(CreateAccountInput {
                code: code.to_string(),
                name: name.to_string(),
                account_type,
                category: category.to_string(),
                parent_id: None,
                description: None,
                is_active: true,
            })
            .with_context(|| format!("seeding account {code}"))
    };

    Ok(SeededAccounts {
        spp: create("4-100", "SPP Bulanan", AccountType::Income, "Pendapatan Sekolah")?,
        donasi: create("4-200", "Donasi", AccountType::Income, "Pendapatan Lain")?,
        listrik: create("5-100", "Listrik", AccountType::Expense, "Operasional")?,
        atk: create("5-200", "ATK", AccountType::Expense, "Operasional")?,
        peralatan: create(
            "5-300",
            "Pembelian Peralatan",
            AccountType::Expense,
            "Investasi Peralatan",
        )?,
        pinjaman: create("4-900", "Pencairan Pinjaman", AccountType::Income, "Pendanaan")?,
        mutasi: create("1-900", "Mutasi Antar Kas", AccountType::Asset, "Mutasi")?,
    })
}

fn seed_registers(store: &MemStore) -> Result<SeededRegisters> {
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
        .context("seeding cash register")?;
    let bank = store
        .registers()
        .create(CreateRegisterInput {
            code: "BNK-01".to_string(),
            name: "Bank Operasional".to_string(),
            register_type: RegisterType::Bank,
            opening_balance: dec!(5_000_000),
            account_number: Some("1234567890".to_string()),
            bank_name: Some("Bank Sekolah".to_string()),
            is_active: true,
        })
        .context("seeding bank register")?;
    Ok(SeededRegisters { kas, bank })
}

fn seed_budgets(store: &MemStore, accounts: &SeededAccounts) -> Result<()> {
    store
        .budgets()
        .create(CreateBudgetInput {
            period_start: date(2024, 2, 1),
            period_end: date(2024, 2, 29),
            kind: BudgetKind::Expense,
            amount: dec!(500_000),
            account_id: accounts.listrik.id,
            register_id: None,
            notes: Some("Anggaran listrik Februari".to_string()),
        })
        .context("seeding expense budget")?;
    store
        .budgets()
        .create(CreateBudgetInput {
            period_start: date(2024, 2, 1),
            period_end: date(2024, 2, 29),
            kind: BudgetKind::Income,
            amount: dec!(2_000_000),
            account_id: accounts.spp.id,
            register_id: None,
            notes: None,
        })
        .context("seeding income budget")?;
    Ok(())
}

fn seed_transactions(
    store: &MemStore,
    accounts: &SeededAccounts,
    registers: &SeededRegisters,
    bendahara: ActorId,
    kepala: ActorId,
) -> Result<()> {
    let entries = [
        (TransactionKind::Income, dec!(1_500_000), accounts.spp.id, registers.bank.id, "SPP Februari", 5u32),
        (TransactionKind::Income, dec!(250_000), accounts.donasi.id, registers.kas.id, "Donasi wali murid", 7),
        (TransactionKind::Expense, dec!(400_000), accounts.listrik.id, registers.bank.id, "Tagihan listrik", 10),
        (TransactionKind::Expense, dec!(220_000), accounts.listrik.id, registers.kas.id, "Token listrik tambahan", 20),
        (TransactionKind::Expense, dec!(95_000), accounts.atk.id, registers.kas.id, "Kertas dan tinta", 12),
        (TransactionKind::Expense, dec!(750_000), accounts.peralatan.id, registers.bank.id, "Proyektor kelas", 15),
        (TransactionKind::Income, dec!(3_000_000), accounts.pinjaman.id, registers.bank.id, "Pencairan pinjaman yayasan", 2),
    ];

    for (kind, amount, account_id, register_id, description, day) in entries {
        let txn = store
            .transactions()
            .create(CreateTransactionInput {
                txn_date: date(2024, 2, day),
                kind,
                amount,
                account_id,
                register_id,
                description: description.to_string(),
                reference_no: None,
                proof_url: None,
                created_by: bendahara,
            })
            .with_context(|| format!("seeding transaction '{description}'"))?;
        store.transactions().check(txn.id, bendahara)?;
        store.transactions().approve(txn.id, kepala)?;
    }

    // An internal transfer, both legs approved.
    let (out_leg, in_leg) = store
        .transactions()
        .create_transfer(TransferInput {
            txn_date: date(2024, 2, 14),
            amount: dec!(300_000),
            from_register_id: registers.bank.id,
            to_register_id: registers.kas.id,
            out_account_id: accounts.mutasi.id,
            in_account_id: accounts.mutasi.id,
            description: "Isi ulang kas kecil".to_string(),
            reference_no: Some("TRF-2024-02".to_string()),
            created_by: bendahara,
        })
        .context("seeding transfer")?;
    for leg in [out_leg.id, in_leg.id] {
        store.transactions().check(leg, bendahara)?;
        store.transactions().approve(leg, kepala)?;
    }

    // One entry stays pending, one gets rejected: neither may ever show up
    // in a report.
    store.transactions().create(CreateTransactionInput {
        txn_date: date(2024, 2, 26),
        kind: TransactionKind::Expense,
        amount: dec!(80_000),
        account_id: accounts.atk.id,
        register_id: registers.kas.id,
        description: "Spidol (menunggu persetujuan)".to_string(),
        reference_no: None,
        proof_url: None,
        created_by: bendahara,
    })?;
    let dup = store.transactions().create(CreateTransactionInput {
        txn_date: date(2024, 2, 20),
        kind: TransactionKind::Expense,
        amount: dec!(220_000),
        account_id: accounts.listrik.id,
        register_id: registers.kas.id,
        description: "Token listrik tambahan".to_string(),
        reference_no: None,
        proof_url: None,
        created_by: bendahara,
    })?;
    store
        .transactions()
        .reject(dup.id, kepala, "duplikat".to_string())?;

    Ok(())
}

fn print_reports(store: &MemStore) -> Result<()> {
    let reports = store.reports();
    let start = Some(date(2024, 2, 1));
    let end = Some(date(2024, 2, 29));

    println!("=== Cash Book ===");
    let cash_book = reports.cash_book(start, end, None, None)?;
    println!("{}\n", serde_json::to_string_pretty(&cash_book)?);

    println!("=== Cash-Flow Statement ===");
    let cash_flow = reports.cash_flow(start, end)?;
    println!("{}\n", serde_json::to_string_pretty(&cash_flow)?);

    println!("=== Reconciliation ===");
    let reconciliation = reports.reconciliation(start, end, None)?;
    println!("{}\n", serde_json::to_string_pretty(&reconciliation)?);

    println!("=== Budget vs Actual ===");
    let budget = reports.budget_vs_actual(start, end, None, None)?;
    println!("{}\n", serde_json::to_string_pretty(&budget)?);

    let dangling = reports.transfer_integrity();
    if dangling.is_empty() {
        println!("Transfer integrity: clean");
    } else {
        println!(
            "Transfer integrity warnings: {}",
            serde_json::to_string_pretty(&dangling)?
        );
    }
    Ok(())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}
