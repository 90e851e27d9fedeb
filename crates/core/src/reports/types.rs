//! Report DTO types.
//!
//! Exporters consume these verbatim (CSV/XLS/PDF rendering is external),
//! so field names serialize exactly as the report contract names them and
//! no aggregate is left for the consumer to recompute.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::{BudgetKind, BudgetVariance};
use crate::ledger::TransactionKind;
use crate::register::RegisterType;
use kasbook_shared::types::{AccountId, BudgetId, RegisterId, TransactionId};

/// Cash book bucketing granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    /// One bucket per day.
    Daily,
    /// One bucket per calendar month.
    Monthly,
}

impl GroupBy {
    /// Returns the string representation of the grouping.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
        }
    }

    /// Parses a grouping from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "daily" => Some(Self::Daily),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }

    /// The bucket key for a date under this grouping.
    #[must_use]
    pub fn bucket_key(&self, date: NaiveDate) -> String {
        match self {
            Self::Daily => date.format("%Y-%m-%d").to_string(),
            Self::Monthly => date.format("%Y-%m").to_string(),
        }
    }
}

// ============================================================================
// Cash Book
// ============================================================================

/// One ledger entry in the cash book, with its post-entry running balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashBookEntry {
    /// The underlying transaction.
    pub transaction_id: TransactionId,
    /// Transaction date.
    pub txn_date: NaiveDate,
    /// Kind of movement.
    pub kind: TransactionKind,
    /// Description.
    pub description: String,
    /// External reference number.
    pub reference_no: Option<String>,
    /// Account the movement is attributed to.
    pub account_id: AccountId,
    /// Register the cash moved through.
    pub register_id: RegisterId,
    /// Cash in (zero for outgoing kinds).
    pub inflow: Decimal,
    /// Cash out (zero for incoming kinds).
    pub outflow: Decimal,
    /// Balance after this entry.
    pub running_balance: Decimal,
}

/// A daily or monthly cash book bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashBookBucket {
    /// Bucket key ("2024-01-05" daily, "2024-01" monthly).
    pub key: String,
    /// Total inflow in the bucket.
    pub inflow: Decimal,
    /// Total outflow in the bucket.
    pub outflow: Decimal,
    /// Net movement in the bucket.
    pub net: Decimal,
    /// Number of entries in the bucket.
    pub transaction_count: u64,
    /// Cumulative balance at the end of the bucket, carried across buckets
    /// from the report's opening balance.
    pub closing_balance: Decimal,
}

/// Cash book report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashBookReport {
    /// Report type identifier.
    pub report_type: String,
    /// First day of the reporting period.
    pub period_start: NaiveDate,
    /// Last day of the reporting period.
    pub period_end: NaiveDate,
    /// Bucketing granularity.
    pub group_by: GroupBy,
    /// Register scope; `None` covers all registers.
    pub register_id: Option<RegisterId>,
    /// Balance at the start of the period (register opening balances plus
    /// all approved deltas before the period).
    pub opening_balance: Decimal,
    /// Entries in the period, ordered by date then creation order.
    pub entries: Vec<CashBookEntry>,
    /// Entries bucketed by day or month.
    pub grouped: Vec<CashBookBucket>,
    /// Balance at the end of the period.
    pub closing_balance: Decimal,
}

// ============================================================================
// Cash-Flow Statement
// ============================================================================

/// Per-account aggregate within a cash-flow section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowItem {
    /// The account.
    pub account_id: AccountId,
    /// Account code.
    pub account_code: String,
    /// Account name.
    pub account_name: String,
    /// Total inflow for the account.
    pub inflow: Decimal,
    /// Total outflow for the account.
    pub outflow: Decimal,
    /// Net movement (inflow - outflow).
    pub net: Decimal,
    /// Number of contributing transactions.
    pub tx_count: u64,
}

/// One classified section of the cash-flow statement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowSection {
    /// Section inflow (sum of items).
    pub inflow: Decimal,
    /// Section outflow (sum of items).
    pub outflow: Decimal,
    /// Section net (sum of items).
    pub net: Decimal,
    /// Per-account items, sorted by |net| descending.
    pub items: Vec<CashFlowItem>,
}

/// Internal transfer flows, kept out of every classified section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalTransfers {
    /// Sum of TRANSFER_IN amounts.
    pub inflow: Decimal,
    /// Sum of TRANSFER_OUT amounts.
    pub outflow: Decimal,
    /// Net (zero when every pair is intact).
    pub net: Decimal,
}

/// Cash-flow statement totals (sections only; transfers excluded).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowTotals {
    /// Total inflow across the three sections.
    pub inflow: Decimal,
    /// Total outflow across the three sections.
    pub outflow: Decimal,
    /// Total net across the three sections.
    pub net: Decimal,
}

/// Cash-flow statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowReport {
    /// Report type identifier.
    pub report_type: String,
    /// First day of the reporting period.
    pub period_start: NaiveDate,
    /// Last day of the reporting period.
    pub period_end: NaiveDate,
    /// Operating section.
    pub operating: CashFlowSection,
    /// Investing section.
    pub investing: CashFlowSection,
    /// Financing section.
    pub financing: CashFlowSection,
    /// Internal transfer flows, summed separately.
    pub internal_transfers: InternalTransfers,
    /// Section totals (explicitly excludes internal transfers).
    pub totals: CashFlowTotals,
}

// ============================================================================
// Reconciliation
// ============================================================================

/// Reconciliation row for one register.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationRow {
    /// The register.
    pub register_id: RegisterId,
    /// Register code.
    pub register_code: String,
    /// Register name.
    pub register_name: String,
    /// Cash or bank.
    pub register_type: RegisterType,
    /// Configured opening balance.
    pub opening_balance: Decimal,
    /// Opening plus all approved deltas before the period.
    pub opening_at_start: Decimal,
    /// Approved inflow within the period.
    pub period_inflow: Decimal,
    /// Approved outflow within the period.
    pub period_outflow: Decimal,
    /// Period net (inflow - outflow).
    pub period_net: Decimal,
    /// Opening at start plus period net.
    pub closing_at_end_range: Decimal,
    /// Opening plus every approved delta ever (full-history replay).
    pub ledger_balance_current: Decimal,
    /// The stored materialized balance at snapshot time.
    pub stored_balance: Decimal,
    /// Stored balance minus replayed balance. Must be zero; anything else
    /// means the cache has drifted from the ledger.
    pub variance_current: Decimal,
}

/// Reconciliation totals across all scoped registers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationTotals {
    /// Sum of configured opening balances.
    pub opening_balance: Decimal,
    /// Sum of period-start openings.
    pub opening_at_start: Decimal,
    /// Sum of period inflows.
    pub period_inflow: Decimal,
    /// Sum of period outflows.
    pub period_outflow: Decimal,
    /// Sum of period nets.
    pub period_net: Decimal,
    /// Sum of period-end closings.
    pub closing_at_end_range: Decimal,
    /// Sum of replayed balances.
    pub ledger_balance_current: Decimal,
    /// Sum of stored balances.
    pub stored_balance: Decimal,
    /// Sum of variances (zero when no register has drifted).
    pub variance_current: Decimal,
}

/// Reconciliation report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationReport {
    /// Report type identifier.
    pub report_type: String,
    /// First day of the reporting period.
    pub period_start: NaiveDate,
    /// Last day of the reporting period.
    pub period_end: NaiveDate,
    /// Per-register rows.
    pub rows: Vec<ReconciliationRow>,
    /// Sums of every row field, variance included.
    pub totals: ReconciliationTotals,
}

// ============================================================================
// Budget vs Actual
// ============================================================================

/// Budget vs actual row for one budget entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetActualRow {
    /// The budget row.
    pub budget_id: BudgetId,
    /// The budgeted account.
    pub account_id: AccountId,
    /// Account code.
    pub account_code: String,
    /// Account name.
    pub account_name: String,
    /// Income target or expense ceiling.
    pub kind: BudgetKind,
    /// Register scope; `None` means the budget applies across all registers.
    pub register_id: Option<RegisterId>,
    /// First day of the budget period.
    pub period_start: NaiveDate,
    /// Last day of the budget period.
    pub period_end: NaiveDate,
    /// Budget, actual, variance, and percentage.
    #[serde(flatten)]
    pub variance: BudgetVariance,
}

/// Budget vs actual totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetActualTotals {
    /// Sum of budgeted amounts.
    pub budget_amount: Decimal,
    /// Sum of actual amounts.
    pub actual_amount: Decimal,
    /// Sum of variances.
    pub variance: Decimal,
}

/// Budget vs actual report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetActualReport {
    /// Report type identifier.
    pub report_type: String,
    /// First day of the reporting period.
    pub period_start: NaiveDate,
    /// Last day of the reporting period.
    pub period_end: NaiveDate,
    /// Kind filter applied, if any.
    pub kind: Option<BudgetKind>,
    /// Register filter applied, if any.
    pub register_id: Option<RegisterId>,
    /// Matched budget rows.
    pub rows: Vec<BudgetActualRow>,
    /// Sums across all matched rows.
    pub totals: BudgetActualTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_parse() {
        assert_eq!(GroupBy::parse("daily"), Some(GroupBy::Daily));
        assert_eq!(GroupBy::parse("Monthly"), Some(GroupBy::Monthly));
        assert_eq!(GroupBy::parse("weekly"), None);
    }

    #[test]
    fn test_bucket_keys() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(GroupBy::Daily.bucket_key(date), "2024-01-05");
        assert_eq!(GroupBy::Monthly.bucket_key(date), "2024-01");
    }

    #[test]
    fn test_report_dto_field_names() {
        // Exporters match on exact field names; pin the serde casing.
        let bucket = CashBookBucket {
            key: "2024-01".to_string(),
            inflow: Decimal::ZERO,
            outflow: Decimal::ZERO,
            net: Decimal::ZERO,
            transaction_count: 0,
            closing_balance: Decimal::ZERO,
        };
        let json = serde_json::to_value(&bucket).unwrap();
        assert!(json.get("transactionCount").is_some());
        assert!(json.get("closingBalance").is_some());

        let row = BudgetActualRow {
            budget_id: BudgetId::new(),
            account_id: AccountId::new(),
            account_code: "5-100".to_string(),
            account_name: "Listrik".to_string(),
            kind: BudgetKind::Expense,
            register_id: None,
            period_start: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            period_end: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            variance: BudgetVariance::new(Decimal::ONE_HUNDRED, Decimal::ONE_HUNDRED),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert!(json.get("budgetAmount").is_some());
        assert!(json.get("actualAmount").is_some());
        assert!(json.get("variancePct").is_some());
    }
}
