//! Chart of accounts validation and construction.

use chrono::Utc;

use super::error::CoaError;
use super::types::{Account, CreateAccountInput, UpdateAccountInput};
use kasbook_shared::types::AccountId;

/// Stateless service for chart of accounts business rules.
///
/// Pure logic with no storage dependencies; existence checks are injected
/// so the same rules run against any backing store.
pub struct CoaService;

impl CoaService {
    /// Validates a creation input and builds the account.
    ///
    /// # Errors
    ///
    /// Returns `CoaError` if the code/name is empty, the code is already
    /// taken, or the parent does not exist.
    pub fn create<C, P>(
        input: CreateAccountInput,
        code_taken: C,
        parent_exists: P,
    ) -> Result<Account, CoaError>
    where
        C: Fn(&str) -> bool,
        P: Fn(AccountId) -> bool,
    {
        let code = input.code.trim().to_string();
        if code.is_empty() {
            return Err(CoaError::EmptyCode);
        }
        if input.name.trim().is_empty() {
            return Err(CoaError::EmptyName);
        }
        if code_taken(&code) {
            return Err(CoaError::DuplicateCode(code));
        }
        if let Some(parent_id) = input.parent_id
            && !parent_exists(parent_id)
        {
            return Err(CoaError::ParentNotFound(parent_id));
        }

        Ok(Account {
            id: AccountId::new(),
            code,
            name: input.name,
            account_type: input.account_type,
            category: input.category,
            parent_id: input.parent_id,
            description: input.description,
            is_active: input.is_active,
            created_at: Utc::now(),
        })
    }

    /// Applies an update to an existing account.
    ///
    /// Code and type never change; deactivation is non-retroactive.
    ///
    /// # Errors
    ///
    /// Returns `CoaError` if the new name is empty or the new parent does
    /// not exist.
    pub fn apply_update<P>(
        account: &mut Account,
        input: UpdateAccountInput,
        parent_exists: P,
    ) -> Result<(), CoaError>
    where
        P: Fn(AccountId) -> bool,
    {
        if let Some(name) = input.name {
            if name.trim().is_empty() {
                return Err(CoaError::EmptyName);
            }
            account.name = name;
        }
        if let Some(parent_id) = input.parent_id {
            if let Some(id) = parent_id
                && !parent_exists(id)
            {
                return Err(CoaError::ParentNotFound(id));
            }
            account.parent_id = parent_id;
        }
        if let Some(category) = input.category {
            account.category = category;
        }
        if let Some(description) = input.description {
            account.description = description;
        }
        if let Some(is_active) = input.is_active {
            account.is_active = is_active;
        }
        Ok(())
    }
}
