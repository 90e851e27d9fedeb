//! Workflow transition actions.

use chrono::{DateTime, Utc};

use crate::ledger::ApprovalStatus;
use kasbook_shared::types::ActorId;

/// A validated state transition with audit trail information.
///
/// Each variant captures the action performed, the resulting status, and
/// who did it when. The caller applies the action to the stored entry (and,
/// for `Approve`, to the register balance) in one atomic unit.
#[derive(Debug, Clone)]
pub enum WorkflowAction {
    /// Mark a pending entry as checked. Status stays PENDING.
    Check {
        /// The resulting status (unchanged, Pending).
        new_status: ApprovalStatus,
        /// The checking actor.
        checked_by: ActorId,
        /// When the entry was checked.
        checked_at: DateTime<Utc>,
    },
    /// Approve a checked entry and apply its delta to the register.
    Approve {
        /// The resulting status (Approved).
        new_status: ApprovalStatus,
        /// The approving actor.
        approved_by: ActorId,
        /// When the entry was approved.
        approved_at: DateTime<Utc>,
    },
    /// Reject a pending entry. The balance is untouched.
    Reject {
        /// The resulting status (Rejected).
        new_status: ApprovalStatus,
        /// The rejecting actor.
        rejected_by: ActorId,
        /// The reason for rejection.
        rejected_reason: String,
        /// When the entry was rejected.
        decided_at: DateTime<Utc>,
    },
    /// Cancel a pending entry. The balance is untouched.
    Cancel {
        /// The resulting status (Cancelled).
        new_status: ApprovalStatus,
        /// The cancelling actor.
        cancelled_by: ActorId,
        /// When the entry was cancelled.
        decided_at: DateTime<Utc>,
    },
}

impl WorkflowAction {
    /// Returns the status resulting from this action.
    #[must_use]
    pub fn new_status(&self) -> ApprovalStatus {
        match self {
            Self::Check { new_status, .. }
            | Self::Approve { new_status, .. }
            | Self::Reject { new_status, .. }
            | Self::Cancel { new_status, .. } => *new_status,
        }
    }

    /// Returns the acting actor.
    #[must_use]
    pub fn actor(&self) -> ActorId {
        match self {
            Self::Check { checked_by, .. } => *checked_by,
            Self::Approve { approved_by, .. } => *approved_by,
            Self::Reject { rejected_by, .. } => *rejected_by,
            Self::Cancel { cancelled_by, .. } => *cancelled_by,
        }
    }

    /// Returns the action name for audit records.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Check { .. } => "check",
            Self::Approve { .. } => "approve",
            Self::Reject { .. } => "reject",
            Self::Cancel { .. } => "cancel",
        }
    }
}
