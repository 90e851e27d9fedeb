//! Checker/approver workflow for ledger entries.
//!
//! This module implements the maker-checker state machine:
//! - `service` - pure transition logic (check, approve, reject, cancel)
//! - `types` - transition actions with audit trail data
//! - `audit` - the audit event hook pushed on every transition
//! - `error` - workflow-specific error types
//!
//! The approve transition is the single place in the system allowed to
//! move a register balance, and it must be applied in the same atomic unit
//! as the status change.

pub mod audit;
pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use audit::{AuditEvent, AuditSink, RecordingAuditSink, TracingAuditSink};
pub use error::WorkflowError;
pub use service::WorkflowService;
pub use types::WorkflowAction;
