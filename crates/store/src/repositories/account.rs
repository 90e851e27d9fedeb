//! Chart of accounts repository.

use kasbook_core::coa::{
    Account, AccountFilter, CoaError, CoaService, CreateAccountInput, UpdateAccountInput,
};
use kasbook_shared::types::{AccountId, PageRequest, PageResponse};
use kasbook_shared::AppResult;

use crate::store::MemStore;

/// Repository for chart of accounts entries.
pub struct AccountRepository<'a> {
    store: &'a MemStore,
}

impl<'a> AccountRepository<'a> {
    pub(crate) fn new(store: &'a MemStore) -> Self {
        Self { store }
    }

    /// Creates an account. The code must be unique.
    pub fn create(&self, input: CreateAccountInput) -> AppResult<Account> {
        let mut state = self.store.write();
        let account = CoaService::create(
            input,
            |code| state.accounts.values().any(|a| a.code == code),
            |id| state.accounts.contains_key(&id),
        )?;
        state.accounts.insert(account.id, account.clone());
        tracing::debug!(account_id = %account.id, code = %account.code, "account created");
        Ok(account)
    }

    /// Updates an account. Code and type are immutable.
    pub fn update(&self, id: AccountId, input: UpdateAccountInput) -> AppResult<Account> {
        let mut state = self.store.write();
        let mut account = state
            .accounts
            .get(&id)
            .cloned()
            .ok_or(CoaError::NotFound(id))?;
        CoaService::apply_update(&mut account, input, |parent| {
            state.accounts.contains_key(&parent)
        })?;
        state.accounts.insert(id, account.clone());
        Ok(account)
    }

    /// Looks up an account by id.
    pub fn find_by_id(&self, id: AccountId) -> AppResult<Account> {
        let state = self.store.read();
        state
            .accounts
            .get(&id)
            .cloned()
            .ok_or_else(|| CoaError::NotFound(id).into())
    }

    /// Lists accounts matching `filter`, ordered by code.
    pub fn find_many(&self, filter: &AccountFilter, page: &PageRequest) -> PageResponse<Account> {
        let state = self.store.read();
        let mut matched: Vec<Account> = state
            .accounts
            .values()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.code.cmp(&b.code));

        let total = matched.len() as u64;
        let data: Vec<Account> = matched
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .collect();
        PageResponse::new(data, page.page, page.per_page, total)
    }
}
