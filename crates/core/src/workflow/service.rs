//! Workflow service for ledger entry state transitions.
//!
//! All methods are associated functions that validate a transition against
//! the entry's current state and return the `WorkflowAction` to apply. The
//! caller is responsible for applying the action atomically; in particular,
//! `approve` must land together with the register balance delta.

use chrono::Utc;

use crate::ledger::ApprovalStatus;
use crate::workflow::error::WorkflowError;
use crate::workflow::types::WorkflowAction;
use kasbook_shared::types::ActorId;

/// Stateless service for managing workflow transitions.
pub struct WorkflowService;

impl WorkflowService {
    /// Mark a pending entry as checked.
    ///
    /// # Arguments
    /// * `current_status` - The entry's current status
    /// * `current_checked_by` - The entry's current checker, if any
    /// * `actor` - The checking actor
    ///
    /// # Returns
    /// * `Ok(WorkflowAction::Check)` - status stays PENDING, checker recorded
    /// * `Err(WorkflowError::NotPending)` if the entry is terminal
    /// * `Err(WorkflowError::AlreadyChecked)` if a checker is already set
    pub fn check(
        current_status: ApprovalStatus,
        current_checked_by: Option<ActorId>,
        actor: ActorId,
    ) -> Result<WorkflowAction, WorkflowError> {
        Self::require_pending(current_status)?;
        if let Some(checked_by) = current_checked_by {
            return Err(WorkflowError::AlreadyChecked { checked_by });
        }
        Ok(WorkflowAction::Check {
            new_status: ApprovalStatus::Pending,
            checked_by: actor,
            checked_at: Utc::now(),
        })
    }

    /// Approve a checked entry.
    ///
    /// The returned action must be applied in the same atomic unit as the
    /// register balance delta: no reader may ever observe APPROVED status
    /// with a stale balance.
    ///
    /// # Returns
    /// * `Ok(WorkflowAction::Approve)` if the entry is PENDING and checked
    /// * `Err(WorkflowError::NotPending)` if the entry is terminal
    /// * `Err(WorkflowError::NotChecked)` if no checker is set
    pub fn approve(
        current_status: ApprovalStatus,
        current_checked_by: Option<ActorId>,
        actor: ActorId,
    ) -> Result<WorkflowAction, WorkflowError> {
        Self::require_pending(current_status)?;
        if current_checked_by.is_none() {
            return Err(WorkflowError::NotChecked);
        }
        Ok(WorkflowAction::Approve {
            new_status: ApprovalStatus::Approved,
            approved_by: actor,
            approved_at: Utc::now(),
        })
    }

    /// Reject a pending entry.
    ///
    /// The balance is untouched. A non-empty reason is required.
    ///
    /// # Returns
    /// * `Ok(WorkflowAction::Reject)` if the entry is PENDING
    /// * `Err(WorkflowError::NotPending)` if the entry is terminal
    /// * `Err(WorkflowError::RejectionReasonRequired)` if the reason is empty
    pub fn reject(
        current_status: ApprovalStatus,
        actor: ActorId,
        reason: String,
    ) -> Result<WorkflowAction, WorkflowError> {
        if reason.trim().is_empty() {
            return Err(WorkflowError::RejectionReasonRequired);
        }
        Self::require_pending(current_status)?;
        Ok(WorkflowAction::Reject {
            new_status: ApprovalStatus::Rejected,
            rejected_by: actor,
            rejected_reason: reason,
            decided_at: Utc::now(),
        })
    }

    /// Cancel a pending entry.
    ///
    /// The balance is untouched.
    ///
    /// # Returns
    /// * `Ok(WorkflowAction::Cancel)` if the entry is PENDING
    /// * `Err(WorkflowError::NotPending)` if the entry is terminal
    pub fn cancel(
        current_status: ApprovalStatus,
        actor: ActorId,
    ) -> Result<WorkflowAction, WorkflowError> {
        Self::require_pending(current_status)?;
        Ok(WorkflowAction::Cancel {
            new_status: ApprovalStatus::Cancelled,
            cancelled_by: actor,
            decided_at: Utc::now(),
        })
    }

    /// Check if a status transition is valid.
    ///
    /// Valid transitions:
    /// - Pending → Approved (approve, after check)
    /// - Pending → Rejected (reject)
    /// - Pending → Cancelled (cancel)
    ///
    /// Approved, Rejected, and Cancelled are terminal.
    #[must_use]
    pub fn is_valid_transition(from: ApprovalStatus, to: ApprovalStatus) -> bool {
        matches!(
            (from, to),
            (
                ApprovalStatus::Pending,
                ApprovalStatus::Approved | ApprovalStatus::Rejected | ApprovalStatus::Cancelled
            )
        )
    }

    fn require_pending(status: ApprovalStatus) -> Result<(), WorkflowError> {
        if status != ApprovalStatus::Pending {
            return Err(WorkflowError::NotPending { status });
        }
        Ok(())
    }
}
