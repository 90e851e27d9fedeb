//! Workflow error types.

use thiserror::Error;

use crate::ledger::ApprovalStatus;
use kasbook_shared::types::ActorId;
use kasbook_shared::AppError;

/// Errors that can occur during workflow transitions.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The entry is not in the required PENDING state.
    #[error("Transaction is {status}, expected pending")]
    NotPending {
        /// The current status.
        status: ApprovalStatus,
    },

    /// The entry has already been checked.
    #[error("Transaction already checked by {checked_by}")]
    AlreadyChecked {
        /// The actor who checked the entry.
        checked_by: ActorId,
    },

    /// Approval requires a prior check.
    #[error("Transaction has not been checked yet")]
    NotChecked,

    /// Rejection reason is required but not provided.
    #[error("Rejection reason is required")]
    RejectionReasonRequired,
}

impl WorkflowError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotPending { .. } => "NOT_PENDING",
            Self::AlreadyChecked { .. } => "ALREADY_CHECKED",
            Self::NotChecked => "NOT_CHECKED",
            Self::RejectionReasonRequired => "REJECTION_REASON_REQUIRED",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotPending { .. } | Self::AlreadyChecked { .. } | Self::NotChecked => 409,
            Self::RejectionReasonRequired => 400,
        }
    }
}

impl From<WorkflowError> for AppError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::RejectionReasonRequired => Self::Validation(err.to_string()),
            _ => Self::StateConflict(err.to_string()),
        }
    }
}
