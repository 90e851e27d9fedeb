//! Audit event hook for workflow transitions.
//!
//! Every transition produces an `AuditEvent` for external compliance
//! logging. The core only emits; delivery is behind the `AuditSink` trait
//! so embedders can forward events to whatever audit store they run.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Mutex;

use crate::ledger::ApprovalStatus;
use kasbook_shared::types::{ActorId, TransactionId};

/// Entity name recorded on ledger audit events.
pub const AUDIT_ENTITY_TRANSACTION: &str = "Transaction";

/// A single workflow transition, as seen by the audit trail.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    /// The acting user.
    pub actor_id: ActorId,
    /// The entity type.
    pub entity: &'static str,
    /// The entity id.
    pub entity_id: TransactionId,
    /// The action performed ("check", "approve", "reject", "cancel").
    pub action: &'static str,
    /// Status before the transition.
    pub before: ApprovalStatus,
    /// Status after the transition.
    pub after: ApprovalStatus,
    /// The signed balance delta applied, for approvals.
    pub delta: Option<Decimal>,
    /// When the transition happened.
    pub at: DateTime<Utc>,
}

/// Destination for audit events.
///
/// Implementations must be cheap and infallible from the caller's point of
/// view; the ledger does not roll back a committed transition because a
/// sink hiccupped.
pub trait AuditSink: Send + Sync {
    /// Records one transition.
    fn record(&self, event: AuditEvent);
}

/// Sink that forwards events to the `tracing` subscriber.
#[derive(Debug, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, event: AuditEvent) {
        tracing::info!(
            actor = %event.actor_id,
            entity = event.entity,
            entity_id = %event.entity_id,
            action = event.action,
            before = %event.before,
            after = %event.after,
            delta = ?event.delta,
            "audit"
        );
    }
}

/// Sink that buffers events in memory, for tests and embedders that batch.
#[derive(Debug, Default)]
pub struct RecordingAuditSink {
    events: Mutex<Vec<AuditEvent>>,
}

impl RecordingAuditSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl AuditSink for RecordingAuditSink {
    fn record(&self, event: AuditEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
