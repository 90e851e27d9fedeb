//! Register validation and construction.

use chrono::Utc;

use super::error::RegisterError;
use super::types::{CashBankRegister, CreateRegisterInput, UpdateRegisterInput};
use kasbook_shared::types::RegisterId;

/// Stateless service for register business rules.
pub struct RegisterService;

impl RegisterService {
    /// Validates a creation input and builds the register.
    ///
    /// The materialized balance starts at the opening balance; from here on
    /// only the approve transition may move it.
    ///
    /// # Errors
    ///
    /// Returns `RegisterError` if the code/name is empty or the code is
    /// already taken.
    pub fn create<C>(input: CreateRegisterInput, code_taken: C) -> Result<CashBankRegister, RegisterError>
    where
        C: Fn(&str) -> bool,
    {
        let code = input.code.trim().to_string();
        if code.is_empty() {
            return Err(RegisterError::EmptyCode);
        }
        if input.name.trim().is_empty() {
            return Err(RegisterError::EmptyName);
        }
        if code_taken(&code) {
            return Err(RegisterError::DuplicateCode(code));
        }

        Ok(CashBankRegister {
            id: RegisterId::new(),
            code,
            name: input.name,
            register_type: input.register_type,
            opening_balance: input.opening_balance,
            balance: input.opening_balance,
            account_number: input.account_number,
            bank_name: input.bank_name,
            is_active: input.is_active,
            created_at: Utc::now(),
        })
    }

    /// Applies an update to an existing register.
    ///
    /// # Errors
    ///
    /// Returns `RegisterError` if the new name is empty.
    pub fn apply_update(
        register: &mut CashBankRegister,
        input: UpdateRegisterInput,
    ) -> Result<(), RegisterError> {
        if let Some(name) = input.name {
            if name.trim().is_empty() {
                return Err(RegisterError::EmptyName);
            }
            register.name = name;
        }
        if let Some(account_number) = input.account_number {
            register.account_number = account_number;
        }
        if let Some(bank_name) = input.bank_name {
            register.bank_name = bank_name;
        }
        if let Some(is_active) = input.is_active {
            register.is_active = is_active;
        }
        Ok(())
    }
}
