//! Budget repository.

use kasbook_core::budget::{
    Budget, BudgetError, BudgetFilter, BudgetService, CreateBudgetInput, UpdateBudgetInput,
};
use kasbook_shared::types::{BudgetId, PageRequest, PageResponse};
use kasbook_shared::AppResult;

use crate::store::MemStore;

/// Repository for budget rows.
pub struct BudgetRepository<'a> {
    store: &'a MemStore,
}

impl<'a> BudgetRepository<'a> {
    pub(crate) fn new(store: &'a MemStore) -> Self {
        Self { store }
    }

    /// Creates a budget row against an existing account (and register scope
    /// when given).
    pub fn create(&self, input: CreateBudgetInput) -> AppResult<Budget> {
        let mut state = self.store.write();
        let budget = BudgetService::create(
            input,
            |id| state.accounts.get(&id).map(|a| a.account_type),
            |id| state.registers.contains_key(&id),
        )?;
        state.budgets.insert(budget.id, budget.clone());
        tracing::debug!(budget_id = %budget.id, "budget created");
        Ok(budget)
    }

    /// Updates a budget row's amount or notes.
    pub fn update(&self, id: BudgetId, input: UpdateBudgetInput) -> AppResult<Budget> {
        let mut state = self.store.write();
        let mut budget = state
            .budgets
            .get(&id)
            .cloned()
            .ok_or(BudgetError::NotFound(id))?;
        BudgetService::apply_update(&mut budget, input)?;
        state.budgets.insert(id, budget.clone());
        Ok(budget)
    }

    /// Looks up a budget row by id.
    pub fn find_by_id(&self, id: BudgetId) -> AppResult<Budget> {
        let state = self.store.read();
        state
            .budgets
            .get(&id)
            .cloned()
            .ok_or_else(|| BudgetError::NotFound(id).into())
    }

    /// Lists budget rows matching `filter`, ordered by period start.
    pub fn find_many(&self, filter: &BudgetFilter, page: &PageRequest) -> PageResponse<Budget> {
        let state = self.store.read();
        let mut matched: Vec<Budget> = state
            .budgets
            .values()
            .filter(|b| filter.matches(b))
            .cloned()
            .collect();
        matched.sort_by_key(|b| (b.period_start, b.account_id));

        let total = matched.len() as u64;
        let data: Vec<Budget> = matched
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .collect();
        PageResponse::new(data, page.page, page.per_page, total)
    }
}
