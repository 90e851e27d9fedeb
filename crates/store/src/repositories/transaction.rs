//! Transaction repository: ledger writes and the approval state machine.
//!
//! Every mutating method here takes the store's write lock for its whole
//! atomic unit. `approve` is the only code path in the system that writes
//! a register balance, and it applies the status change and the delta under
//! one guard: no reader can ever observe APPROVED status with a stale
//! balance. Two racing approvals of the same entry serialize on the lock;
//! the loser finds the entry already terminal and fails with a state
//! conflict instead of double-applying the delta.

use chrono::Utc;

use kasbook_core::ledger::{
    ApprovalStatus, CreateTransactionInput, LedgerError, LedgerService, Transaction,
    TransactionFilter, TransferInput,
};
use kasbook_core::ledger::{AccountRef, RegisterRef};
use kasbook_core::workflow::audit::AUDIT_ENTITY_TRANSACTION;
use kasbook_core::workflow::{AuditEvent, WorkflowAction, WorkflowService};
use kasbook_shared::types::{AccountId, ActorId, PageRequest, PageResponse, RegisterId, TransactionId};
use kasbook_shared::{AppError, AppResult};

use crate::store::{MemStore, State};

/// Repository for ledger transactions.
pub struct TransactionRepository<'a> {
    store: &'a MemStore,
}

impl<'a> TransactionRepository<'a> {
    pub(crate) fn new(store: &'a MemStore) -> Self {
        Self { store }
    }

    /// Creates a PENDING income/expense entry.
    pub fn create(&self, input: CreateTransactionInput) -> AppResult<Transaction> {
        let mut state = self.store.write();
        let mut txn = LedgerService::validate_draft(
            input,
            |id| account_ref(&state, id),
            |id| register_ref(&state, id),
        )?;
        state.next_seq += 1;
        txn.seq = state.next_seq;
        state.transactions.insert(txn.id, txn.clone());
        tracing::debug!(txn_id = %txn.id, kind = %txn.kind, amount = %txn.amount, "transaction created");
        Ok(txn)
    }

    /// Atomically creates both PENDING legs of an internal transfer.
    ///
    /// Either both legs land or neither does; they share one transfer id
    /// and consecutive sequence numbers.
    pub fn create_transfer(&self, input: TransferInput) -> AppResult<(Transaction, Transaction)> {
        let mut state = self.store.write();
        let (mut out_leg, mut in_leg) = LedgerService::validate_transfer(
            input,
            |id| account_ref(&state, id),
            |id| register_ref(&state, id),
        )?;
        state.next_seq += 1;
        out_leg.seq = state.next_seq;
        state.next_seq += 1;
        in_leg.seq = state.next_seq;
        state.transactions.insert(out_leg.id, out_leg.clone());
        state.transactions.insert(in_leg.id, in_leg.clone());
        tracing::debug!(
            transfer_id = ?out_leg.transfer_id,
            out_txn = %out_leg.id,
            in_txn = %in_leg.id,
            amount = %out_leg.amount,
            "transfer created"
        );
        Ok((out_leg, in_leg))
    }

    /// Marks a PENDING entry as checked. Status and balances are untouched.
    pub fn check(&self, id: TransactionId, actor: ActorId) -> AppResult<Transaction> {
        let (txn, event) = {
            let mut state = self.store.write();
            let txn = get_mut(&mut state, id)?;
            let before = txn.status;
            let action = WorkflowService::check(txn.status, txn.checked_by, actor)?;
            if let WorkflowAction::Check {
                checked_by,
                checked_at,
                ..
            } = &action
            {
                txn.checked_by = Some(*checked_by);
                txn.checked_at = Some(*checked_at);
            }
            let txn = txn.clone();
            (txn.clone(), audit_event(&txn, &action, before, None))
        };
        self.store.audit().record(event);
        Ok(txn)
    }

    /// Approves a checked entry and applies its delta to the register
    /// balance, in one atomic unit.
    pub fn approve(&self, id: TransactionId, actor: ActorId) -> AppResult<Transaction> {
        let (txn, event) = {
            let mut state = self.store.write();
            let current = state
                .transactions
                .get(&id)
                .ok_or(LedgerError::TransactionNotFound(id))?;
            let before = current.status;
            let register_id = current.register_id;
            let action = WorkflowService::approve(current.status, current.checked_by, actor)?;

            // Both registers and the entry live under the same guard; the
            // status flip and the balance delta are indivisible.
            if !state.registers.contains_key(&register_id) {
                return Err(AppError::Internal(format!(
                    "register {register_id} missing for transaction {id}"
                )));
            }
            let txn = get_mut(&mut state, id)?;
            let delta = txn.delta();
            if let WorkflowAction::Approve {
                new_status,
                approved_by,
                approved_at,
            } = &action
            {
                txn.status = *new_status;
                txn.approved_by = Some(*approved_by);
                txn.decided_at = Some(*approved_at);
            }
            let txn = txn.clone();
            if let Some(register) = state.registers.get_mut(&register_id) {
                register.balance += delta;
            }
            tracing::info!(
                txn_id = %txn.id,
                register_id = %register_id,
                delta = %delta,
                "transaction approved, balance applied"
            );
            (txn.clone(), audit_event(&txn, &action, before, Some(delta)))
        };
        self.store.audit().record(event);
        Ok(txn)
    }

    /// Rejects a PENDING entry with a reason. Balances are untouched.
    pub fn reject(&self, id: TransactionId, actor: ActorId, reason: String) -> AppResult<Transaction> {
        let (txn, event) = {
            let mut state = self.store.write();
            let txn = get_mut(&mut state, id)?;
            let before = txn.status;
            let action = WorkflowService::reject(txn.status, actor, reason)?;
            if let WorkflowAction::Reject {
                new_status,
                rejected_reason,
                decided_at,
                ..
            } = &action
            {
                txn.status = *new_status;
                txn.rejected_reason = Some(rejected_reason.clone());
                txn.decided_at = Some(*decided_at);
            }
            let txn = txn.clone();
            (txn.clone(), audit_event(&txn, &action, before, None))
        };
        self.store.audit().record(event);
        Ok(txn)
    }

    /// Cancels a PENDING entry. Balances are untouched.
    pub fn cancel(&self, id: TransactionId, actor: ActorId) -> AppResult<Transaction> {
        let (txn, event) = {
            let mut state = self.store.write();
            let txn = get_mut(&mut state, id)?;
            let before = txn.status;
            let action = WorkflowService::cancel(txn.status, actor)?;
            if let WorkflowAction::Cancel {
                new_status,
                decided_at,
                ..
            } = &action
            {
                txn.status = *new_status;
                txn.decided_at = Some(*decided_at);
            }
            let txn = txn.clone();
            (txn.clone(), audit_event(&txn, &action, before, None))
        };
        self.store.audit().record(event);
        Ok(txn)
    }

    /// Looks up a transaction by id.
    pub fn find_by_id(&self, id: TransactionId) -> AppResult<Transaction> {
        let state = self.store.read();
        state
            .transactions
            .get(&id)
            .cloned()
            .ok_or_else(|| LedgerError::TransactionNotFound(id).into())
    }

    /// Lists transactions matching `filter` in ledger order (date, then
    /// creation order).
    pub fn find_many(
        &self,
        filter: &TransactionFilter,
        page: &PageRequest,
    ) -> PageResponse<Transaction> {
        let state = self.store.read();
        let mut matched: Vec<Transaction> = state
            .transactions
            .values()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();
        matched.sort_by_key(|t| (t.txn_date, t.seq));

        let total = matched.len() as u64;
        let data: Vec<Transaction> = matched
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .collect();
        PageResponse::new(data, page.page, page.per_page, total)
    }
}

fn account_ref(state: &State, id: AccountId) -> Option<AccountRef> {
    state.accounts.get(&id).map(|a| AccountRef {
        id: a.id,
        account_type: a.account_type,
        is_active: a.is_active,
    })
}

fn register_ref(state: &State, id: RegisterId) -> Option<RegisterRef> {
    state.registers.get(&id).map(|r| RegisterRef {
        id: r.id,
        is_active: r.is_active,
    })
}

fn get_mut(state: &mut State, id: TransactionId) -> Result<&mut Transaction, LedgerError> {
    state
        .transactions
        .get_mut(&id)
        .ok_or(LedgerError::TransactionNotFound(id))
}

fn audit_event(
    txn: &Transaction,
    action: &WorkflowAction,
    before: ApprovalStatus,
    delta: Option<rust_decimal::Decimal>,
) -> AuditEvent {
    AuditEvent {
        actor_id: action.actor(),
        entity: AUDIT_ENTITY_TRANSACTION,
        entity_id: txn.id,
        action: action.name(),
        before,
        after: txn.status,
        delta,
        at: Utc::now(),
    }
}
