//! The shared in-process store.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use kasbook_core::budget::Budget;
use kasbook_core::coa::Account;
use kasbook_core::ledger::Transaction;
use kasbook_core::register::CashBankRegister;
use kasbook_core::workflow::{AuditSink, TracingAuditSink};
use kasbook_shared::config::ReportingConfig;
use kasbook_shared::types::{AccountId, BudgetId, RegisterId, TransactionId};

use crate::repositories::{
    AccountRepository, BudgetRepository, RegisterRepository, ReportRepository,
    TransactionRepository,
};

/// All stored state, guarded by one lock.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) accounts: BTreeMap<AccountId, Account>,
    pub(crate) registers: BTreeMap<RegisterId, CashBankRegister>,
    pub(crate) transactions: BTreeMap<TransactionId, Transaction>,
    pub(crate) budgets: BTreeMap<BudgetId, Budget>,
    pub(crate) next_seq: u64,
}

/// A consistent point-in-time copy of the store.
///
/// Taken under the read lock in one step, so a report computed from it can
/// never observe a half-applied mutation, and computing the report holds no
/// lock at all.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// All accounts.
    pub accounts: Vec<Account>,
    /// All registers.
    pub registers: Vec<CashBankRegister>,
    /// All transactions, every status.
    pub transactions: Vec<Transaction>,
    /// All budgets.
    pub budgets: Vec<Budget>,
    /// When the snapshot was taken.
    pub taken_at: DateTime<Utc>,
}

/// The in-process store.
///
/// Mutating repository operations take the write lock for their whole
/// atomic unit; `snapshot` takes the read lock only long enough to clone.
pub struct MemStore {
    state: RwLock<State>,
    audit: Arc<dyn AuditSink>,
    reporting: ReportingConfig,
}

impl MemStore {
    /// Creates an empty store with a tracing-backed audit sink.
    #[must_use]
    pub fn new() -> Self {
        Self::with_audit_sink(Arc::new(TracingAuditSink))
    }

    /// Creates an empty store pushing audit events to `sink`.
    #[must_use]
    pub fn with_audit_sink(sink: Arc<dyn AuditSink>) -> Self {
        Self {
            state: RwLock::new(State::default()),
            audit: sink,
            reporting: ReportingConfig::default(),
        }
    }

    /// Replaces the reporting configuration.
    #[must_use]
    pub fn with_reporting_config(mut self, reporting: ReportingConfig) -> Self {
        self.reporting = reporting;
        self
    }

    /// The chart of accounts repository.
    #[must_use]
    pub fn accounts(&self) -> AccountRepository<'_> {
        AccountRepository::new(self)
    }

    /// The register repository.
    #[must_use]
    pub fn registers(&self) -> RegisterRepository<'_> {
        RegisterRepository::new(self)
    }

    /// The budget repository.
    #[must_use]
    pub fn budgets(&self) -> BudgetRepository<'_> {
        BudgetRepository::new(self)
    }

    /// The transaction repository.
    #[must_use]
    pub fn transactions(&self) -> TransactionRepository<'_> {
        TransactionRepository::new(self)
    }

    /// The report repository.
    #[must_use]
    pub fn reports(&self) -> ReportRepository<'_> {
        ReportRepository::new(self)
    }

    /// Takes a consistent snapshot of the whole store.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let state = self.read();
        Snapshot {
            accounts: state.accounts.values().cloned().collect(),
            registers: state.registers.values().cloned().collect(),
            transactions: state.transactions.values().cloned().collect(),
            budgets: state.budgets.values().cloned().collect(),
            taken_at: Utc::now(),
        }
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn audit(&self) -> &Arc<dyn AuditSink> {
        &self.audit
    }

    pub(crate) fn reporting(&self) -> &ReportingConfig {
        &self.reporting
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemStore").finish_non_exhaustive()
    }
}
