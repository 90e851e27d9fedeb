//! Ledger domain types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kasbook_shared::types::{AccountId, ActorId, RegisterId, TransactionId, TransferId};

/// Kind of cash movement. Amounts are always positive; direction is
/// encoded here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
    /// Incoming leg of an internal transfer.
    TransferIn,
    /// Outgoing leg of an internal transfer.
    TransferOut,
}

impl TransactionKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::TransferIn => "transfer_in",
            Self::TransferOut => "transfer_out",
        }
    }

    /// Parses a kind from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            "transfer_in" => Some(Self::TransferIn),
            "transfer_out" => Some(Self::TransferOut),
            _ => None,
        }
    }

    /// Returns true for either transfer leg.
    #[must_use]
    pub fn is_transfer(&self) -> bool {
        matches!(self, Self::TransferIn | Self::TransferOut)
    }

    /// The signed cash effect of a movement of this kind.
    #[must_use]
    pub fn delta(&self, amount: Decimal) -> Decimal {
        match self {
            Self::Income | Self::TransferIn => amount,
            Self::Expense | Self::TransferOut => -amount,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transaction status in the checker/approver workflow.
///
/// Valid transitions:
/// - Pending → Pending (check marks `checked_by`, status unchanged)
/// - Pending → Approved (approve; applies the delta to the register)
/// - Pending → Rejected (reject)
/// - Pending → Cancelled (cancel)
///
/// Approved, Rejected, and Cancelled are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    /// Awaiting check and approval.
    Pending,
    /// Approved; the register balance reflects this entry.
    Approved,
    /// Rejected with a reason; never touched a balance.
    Rejected,
    /// Cancelled; never touched a balance.
    Cancelled,
}

impl ApprovalStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Returns true once no further transition is possible.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A ledger entry.
///
/// Created PENDING and mutated only through the workflow state machine;
/// entries are never deleted, so the log stays replayable for audit and
/// reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Store-assigned insertion sequence; creation-order tiebreak for
    /// same-day entries.
    pub seq: u64,
    /// Transaction date.
    pub txn_date: NaiveDate,
    /// Kind of movement.
    pub kind: TransactionKind,
    /// Amount, always positive.
    pub amount: Decimal,
    /// Account this movement is attributed to.
    pub account_id: AccountId,
    /// Register the cash moved through.
    pub register_id: RegisterId,
    /// Description.
    pub description: String,
    /// External reference number.
    pub reference_no: Option<String>,
    /// URL of the supporting document.
    pub proof_url: Option<String>,
    /// Shared id linking the two legs of an internal transfer.
    pub transfer_id: Option<TransferId>,
    /// Workflow status.
    pub status: ApprovalStatus,
    /// Checker, once the entry has been checked.
    pub checked_by: Option<ActorId>,
    /// Approver, once the entry has been approved.
    pub approved_by: Option<ActorId>,
    /// Rejection reason, once rejected.
    pub rejected_reason: Option<String>,
    /// Creator.
    pub created_by: ActorId,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// When the entry was checked.
    pub checked_at: Option<DateTime<Utc>>,
    /// When the entry reached a terminal status.
    pub decided_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// The signed cash effect of this entry on its register.
    #[must_use]
    pub fn delta(&self) -> Decimal {
        self.kind.delta(self.amount)
    }
}

/// Input for creating a single income/expense entry.
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    /// Transaction date.
    pub txn_date: NaiveDate,
    /// Income or expense. Transfer legs are created through `TransferInput`.
    pub kind: TransactionKind,
    /// Amount (must be positive).
    pub amount: Decimal,
    /// Account to attribute the movement to.
    pub account_id: AccountId,
    /// Register the cash moves through.
    pub register_id: RegisterId,
    /// Description.
    pub description: String,
    /// External reference number.
    pub reference_no: Option<String>,
    /// URL of the supporting document.
    pub proof_url: Option<String>,
    /// Creating actor (supplied by the identity layer).
    pub created_by: ActorId,
}

/// Input for creating a paired internal transfer.
///
/// Produces two entries sharing one `TransferId`: a TRANSFER_OUT against
/// the source register and a TRANSFER_IN against the destination register,
/// with the same date, amount, and reference.
#[derive(Debug, Clone)]
pub struct TransferInput {
    /// Transaction date for both legs.
    pub txn_date: NaiveDate,
    /// Amount moved (must be positive).
    pub amount: Decimal,
    /// Source register.
    pub from_register_id: RegisterId,
    /// Destination register.
    pub to_register_id: RegisterId,
    /// Account the outgoing leg is attributed to.
    pub out_account_id: AccountId,
    /// Account the incoming leg is attributed to.
    pub in_account_id: AccountId,
    /// Description for both legs.
    pub description: String,
    /// External reference number shared by both legs.
    pub reference_no: Option<String>,
    /// Creating actor.
    pub created_by: ActorId,
}

/// Filter for listing transactions.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Restrict to one status.
    pub status: Option<ApprovalStatus>,
    /// Restrict to one kind.
    pub kind: Option<TransactionKind>,
    /// Restrict to one register.
    pub register_id: Option<RegisterId>,
    /// Restrict to one account.
    pub account_id: Option<AccountId>,
    /// Earliest transaction date (inclusive).
    pub date_from: Option<NaiveDate>,
    /// Latest transaction date (inclusive).
    pub date_to: Option<NaiveDate>,
}

impl TransactionFilter {
    /// Returns true if `txn` matches this filter.
    #[must_use]
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(status) = self.status
            && txn.status != status
        {
            return false;
        }
        if let Some(kind) = self.kind
            && txn.kind != kind
        {
            return false;
        }
        if let Some(register_id) = self.register_id
            && txn.register_id != register_id
        {
            return false;
        }
        if let Some(account_id) = self.account_id
            && txn.account_id != account_id
        {
            return false;
        }
        if let Some(from) = self.date_from
            && txn.txn_date < from
        {
            return false;
        }
        if let Some(to) = self.date_to
            && txn.txn_date > to
        {
            return false;
        }
        true
    }
}
