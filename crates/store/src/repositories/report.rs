//! Report repository: snapshot reads wired into the pure builders.
//!
//! Each method takes one consistent snapshot and hands it to the
//! corresponding builder in `kasbook_core::reports`, so a report never
//! mixes pre- and post-commit state and never blocks writers.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use kasbook_core::budget::BudgetKind;
use kasbook_core::ledger::{unpaired_transfer_legs, UnpairedLeg};
use kasbook_core::reports::{
    build_budget_actual, build_cash_book, build_cash_flow, build_reconciliation,
    BudgetActualReport, CashBookReport, CashFlowReport, GroupBy, KeywordClassifier,
    ReconciliationReport, ReportError,
};
use kasbook_shared::types::RegisterId;
use kasbook_shared::{AppResult, DateRange};

use crate::store::MemStore;

/// Read-only repository deriving the four reports from the ledger.
pub struct ReportRepository<'a> {
    store: &'a MemStore,
}

impl<'a> ReportRepository<'a> {
    pub(crate) fn new(store: &'a MemStore) -> Self {
        Self { store }
    }

    /// Builds the cash book. Missing bounds default to the current month;
    /// a missing grouping falls back to the configured default.
    pub fn cash_book(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        group_by: Option<GroupBy>,
        register_id: Option<RegisterId>,
    ) -> AppResult<CashBookReport> {
        let range = self.resolve_range(start, end)?;
        let group_by = match group_by {
            Some(group_by) => group_by,
            None => self.default_group_by()?,
        };
        let snapshot = self.store.snapshot();
        Ok(build_cash_book(
            range,
            group_by,
            register_id,
            &snapshot.registers,
            &snapshot.transactions,
        ))
    }

    /// Builds the cash-flow statement across all registers.
    pub fn cash_flow(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> AppResult<CashFlowReport> {
        let range = self.resolve_range(start, end)?;
        let classifier = KeywordClassifier::from_config(self.store.reporting());
        let snapshot = self.store.snapshot();
        Ok(build_cash_flow(
            range,
            &snapshot.accounts,
            &snapshot.transactions,
            &classifier,
        ))
    }

    /// Builds the reconciliation report, replaying each register's full
    /// approved history. Nonzero variance is logged and returned, never
    /// corrected.
    pub fn reconciliation(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        register_id: Option<RegisterId>,
    ) -> AppResult<ReconciliationReport> {
        let range = self.resolve_range(start, end)?;
        let snapshot = self.store.snapshot();
        let report = build_reconciliation(
            range,
            register_id,
            &snapshot.registers,
            &snapshot.transactions,
        );
        for row in &report.rows {
            if row.variance_current != Decimal::ZERO {
                tracing::warn!(
                    register_id = %row.register_id,
                    register_code = %row.register_code,
                    stored = %row.stored_balance,
                    replayed = %row.ledger_balance_current,
                    variance = %row.variance_current,
                    "register balance has drifted from the ledger"
                );
            }
        }
        Ok(report)
    }

    /// Builds the budget vs actual report.
    pub fn budget_vs_actual(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        kind: Option<BudgetKind>,
        register_id: Option<RegisterId>,
    ) -> AppResult<BudgetActualReport> {
        let range = self.resolve_range(start, end)?;
        let snapshot = self.store.snapshot();
        Ok(build_budget_actual(
            range,
            kind,
            register_id,
            &snapshot.budgets,
            &snapshot.accounts,
            &snapshot.transactions,
        ))
    }

    /// Scans for dangling transfer legs. Findings are data-integrity
    /// warnings for human review.
    #[must_use]
    pub fn transfer_integrity(&self) -> Vec<UnpairedLeg> {
        let snapshot = self.store.snapshot();
        let flagged = unpaired_transfer_legs(&snapshot.transactions);
        for leg in &flagged {
            tracing::warn!(
                transfer_id = %leg.transfer_id,
                txn_id = %leg.transaction_id,
                reason = ?leg.reason,
                "dangling transfer leg"
            );
        }
        flagged
    }

    fn resolve_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> AppResult<DateRange> {
        let range = DateRange::resolve(start, end, Utc::now().date_naive())
            .map_err(ReportError::from)?;
        Ok(range)
    }

    fn default_group_by(&self) -> AppResult<GroupBy> {
        let configured = &self.store.reporting().default_group_by;
        GroupBy::parse(configured)
            .ok_or_else(|| ReportError::UnknownGroupBy(configured.clone()).into())
    }
}
