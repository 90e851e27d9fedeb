//! Ledger service for draft validation and construction.
//!
//! Pure business logic with no storage dependencies: account and register
//! lookups are injected so the same rules run against any backing store.

use chrono::Utc;
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{ApprovalStatus, CreateTransactionInput, Transaction, TransactionKind, TransferInput};
use crate::coa::AccountType;
use kasbook_shared::types::{AccountId, ActorId, RegisterId, TransactionId, TransferId};

/// Account fields needed for draft validation.
#[derive(Debug, Clone, Copy)]
pub struct AccountRef {
    /// The account ID.
    pub id: AccountId,
    /// The account type.
    pub account_type: AccountType,
    /// Whether the account is active.
    pub is_active: bool,
}

/// Register fields needed for draft validation.
#[derive(Debug, Clone, Copy)]
pub struct RegisterRef {
    /// The register ID.
    pub id: RegisterId,
    /// Whether the register is active.
    pub is_active: bool,
}

/// Ledger service for transaction validation.
pub struct LedgerService;

impl LedgerService {
    /// Validates a draft and builds the PENDING transaction.
    ///
    /// Checks, in order: amount positive, description present, account
    /// exists/active/type-compatible, register exists/active. Income entries
    /// require an INCOME account, expense entries an EXPENSE account.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if validation fails. Nothing is persisted on
    /// failure; the caller inserts the returned entry.
    pub fn validate_draft<A, R>(
        input: CreateTransactionInput,
        account_lookup: A,
        register_lookup: R,
    ) -> Result<Transaction, LedgerError>
    where
        A: Fn(AccountId) -> Option<AccountRef>,
        R: Fn(RegisterId) -> Option<RegisterRef>,
    {
        Self::validate_amount(input.amount)?;
        if input.description.trim().is_empty() {
            return Err(LedgerError::EmptyDescription);
        }

        let account = Self::require_account(input.account_id, &account_lookup)?;
        Self::validate_kind_compat(input.kind, account)?;
        Self::require_register(input.register_id, &register_lookup)?;

        Ok(Self::build_entry(
            input.txn_date,
            input.kind,
            input.amount,
            input.account_id,
            input.register_id,
            input.description,
            input.reference_no,
            input.proof_url,
            None,
            input.created_by,
        ))
    }

    /// Validates a transfer draft and builds both PENDING legs.
    ///
    /// The legs share one fresh `TransferId`, the same date, amount, and
    /// reference: a TRANSFER_OUT against the source register and a
    /// TRANSFER_IN against the destination. Each leg is then checked and
    /// approved independently.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if the amount is invalid, the registers are
    /// identical, or any referenced account/register is missing or inactive.
    pub fn validate_transfer<A, R>(
        input: TransferInput,
        account_lookup: A,
        register_lookup: R,
    ) -> Result<(Transaction, Transaction), LedgerError>
    where
        A: Fn(AccountId) -> Option<AccountRef>,
        R: Fn(RegisterId) -> Option<RegisterRef>,
    {
        Self::validate_amount(input.amount)?;
        if input.description.trim().is_empty() {
            return Err(LedgerError::EmptyDescription);
        }
        if input.from_register_id == input.to_register_id {
            return Err(LedgerError::SameRegisterTransfer);
        }

        Self::require_account(input.out_account_id, &account_lookup)?;
        Self::require_account(input.in_account_id, &account_lookup)?;
        Self::require_register(input.from_register_id, &register_lookup)?;
        Self::require_register(input.to_register_id, &register_lookup)?;

        let transfer_id = TransferId::new();
        let out_leg = Self::build_entry(
            input.txn_date,
            TransactionKind::TransferOut,
            input.amount,
            input.out_account_id,
            input.from_register_id,
            input.description.clone(),
            input.reference_no.clone(),
            None,
            Some(transfer_id),
            input.created_by,
        );
        let in_leg = Self::build_entry(
            input.txn_date,
            TransactionKind::TransferIn,
            input.amount,
            input.in_account_id,
            input.to_register_id,
            input.description,
            input.reference_no,
            None,
            Some(transfer_id),
            input.created_by,
        );

        Ok((out_leg, in_leg))
    }

    fn validate_amount(amount: Decimal) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }
        if amount.is_sign_negative() {
            return Err(LedgerError::NegativeAmount);
        }
        Ok(())
    }

    fn validate_kind_compat(kind: TransactionKind, account: AccountRef) -> Result<(), LedgerError> {
        let required = match kind {
            TransactionKind::Income => Some(AccountType::Income),
            TransactionKind::Expense => Some(AccountType::Expense),
            // Transfer legs are not constrained to one account type.
            TransactionKind::TransferIn | TransactionKind::TransferOut => None,
        };
        if let Some(required) = required
            && account.account_type != required
        {
            return Err(LedgerError::KindMismatch {
                kind,
                account_type: account.account_type,
                account_id: account.id,
            });
        }
        Ok(())
    }

    fn require_account<A>(id: AccountId, lookup: &A) -> Result<AccountRef, LedgerError>
    where
        A: Fn(AccountId) -> Option<AccountRef>,
    {
        let account = lookup(id).ok_or(LedgerError::AccountNotFound(id))?;
        if !account.is_active {
            return Err(LedgerError::AccountInactive(id));
        }
        Ok(account)
    }

    fn require_register<R>(id: RegisterId, lookup: &R) -> Result<RegisterRef, LedgerError>
    where
        R: Fn(RegisterId) -> Option<RegisterRef>,
    {
        let register = lookup(id).ok_or(LedgerError::RegisterNotFound(id))?;
        if !register.is_active {
            return Err(LedgerError::RegisterInactive(id));
        }
        Ok(register)
    }

    #[allow(clippy::too_many_arguments)]
    fn build_entry(
        txn_date: chrono::NaiveDate,
        kind: TransactionKind,
        amount: Decimal,
        account_id: AccountId,
        register_id: RegisterId,
        description: String,
        reference_no: Option<String>,
        proof_url: Option<String>,
        transfer_id: Option<TransferId>,
        created_by: ActorId,
    ) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            seq: 0, // assigned by the store on insert
            txn_date,
            kind,
            amount,
            account_id,
            register_id,
            description,
            reference_no,
            proof_url,
            transfer_id,
            status: ApprovalStatus::Pending,
            checked_by: None,
            approved_by: None,
            rejected_reason: None,
            created_by,
            created_at: Utc::now(),
            checked_at: None,
            decided_at: None,
        }
    }
}
