//! Cash/bank register repository.
//!
//! CRUD only. Neither operation here can touch `balance`: the approve
//! transition in the transaction repository is its single writer.

use kasbook_core::register::{
    CashBankRegister, CreateRegisterInput, RegisterError, RegisterFilter, RegisterService,
    UpdateRegisterInput,
};
use kasbook_shared::types::{PageRequest, PageResponse, RegisterId};
use kasbook_shared::AppResult;

use crate::store::MemStore;

/// Repository for cash/bank registers.
pub struct RegisterRepository<'a> {
    store: &'a MemStore,
}

impl<'a> RegisterRepository<'a> {
    pub(crate) fn new(store: &'a MemStore) -> Self {
        Self { store }
    }

    /// Creates a register. The code must be unique; the balance starts at
    /// the opening balance.
    pub fn create(&self, input: CreateRegisterInput) -> AppResult<CashBankRegister> {
        let mut state = self.store.write();
        let register = RegisterService::create(input, |code| {
            state.registers.values().any(|r| r.code == code)
        })?;
        state.registers.insert(register.id, register.clone());
        tracing::debug!(register_id = %register.id, code = %register.code, "register created");
        Ok(register)
    }

    /// Updates a register's metadata.
    pub fn update(&self, id: RegisterId, input: UpdateRegisterInput) -> AppResult<CashBankRegister> {
        let mut state = self.store.write();
        let mut register = state
            .registers
            .get(&id)
            .cloned()
            .ok_or(RegisterError::NotFound(id))?;
        RegisterService::apply_update(&mut register, input)?;
        state.registers.insert(id, register.clone());
        Ok(register)
    }

    /// Looks up a register by id.
    pub fn find_by_id(&self, id: RegisterId) -> AppResult<CashBankRegister> {
        let state = self.store.read();
        state
            .registers
            .get(&id)
            .cloned()
            .ok_or_else(|| RegisterError::NotFound(id).into())
    }

    /// Lists registers matching `filter`, ordered by code.
    pub fn find_many(
        &self,
        filter: &RegisterFilter,
        page: &PageRequest,
    ) -> PageResponse<CashBankRegister> {
        let state = self.store.read();
        let mut matched: Vec<CashBankRegister> = state
            .registers
            .values()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.code.cmp(&b.code));

        let total = matched.len() as u64;
        let data: Vec<CashBankRegister> = matched
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .collect();
        PageResponse::new(data, page.page, page.per_page, total)
    }
}
