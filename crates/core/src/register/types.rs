//! Cash/bank register domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kasbook_shared::types::RegisterId;

/// Kind of holding account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegisterType {
    /// Physical cash (petty cash box, drawer).
    Cash,
    /// Bank account.
    Bank,
}

impl RegisterType {
    /// Returns the string representation of the type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Bank => "bank",
        }
    }

    /// Parses a register type from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cash" => Some(Self::Cash),
            "bank" => Some(Self::Bank),
            _ => None,
        }
    }
}

impl std::fmt::Display for RegisterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A cash or bank register.
///
/// `balance` must always equal `opening_balance` plus the sum of signed
/// deltas of every APPROVED transaction referencing this register. It is a
/// materialized aggregate, not a source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashBankRegister {
    /// Unique identifier.
    pub id: RegisterId,
    /// Register code (unique within the register list).
    pub code: String,
    /// Register name.
    pub name: String,
    /// Cash or bank.
    pub register_type: RegisterType,
    /// Opening balance, fixed at creation.
    pub opening_balance: Decimal,
    /// Materialized current balance.
    pub balance: Decimal,
    /// Bank account number, for BANK registers.
    pub account_number: Option<String>,
    /// Bank name, for BANK registers.
    pub bank_name: Option<String>,
    /// Whether new transactions may reference this register.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Input for creating a register.
#[derive(Debug, Clone)]
pub struct CreateRegisterInput {
    /// Register code (must be unique).
    pub code: String,
    /// Register name.
    pub name: String,
    /// Cash or bank.
    pub register_type: RegisterType,
    /// Opening balance.
    pub opening_balance: Decimal,
    /// Bank account number.
    pub account_number: Option<String>,
    /// Bank name.
    pub bank_name: Option<String>,
    /// Whether the register starts active.
    pub is_active: bool,
}

/// Input for updating a register.
///
/// The balance is deliberately absent: the approve transition is its only
/// writer, and the opening balance is fixed at creation.
#[derive(Debug, Clone, Default)]
pub struct UpdateRegisterInput {
    /// New name.
    pub name: Option<String>,
    /// New bank account number.
    pub account_number: Option<Option<String>>,
    /// New bank name.
    pub bank_name: Option<Option<String>>,
    /// Activate or deactivate.
    pub is_active: Option<bool>,
}

/// Filter for listing registers.
#[derive(Debug, Clone, Default)]
pub struct RegisterFilter {
    /// Restrict to one register type.
    pub register_type: Option<RegisterType>,
    /// Restrict by active flag.
    pub is_active: Option<bool>,
    /// Case-insensitive substring match on code or name.
    pub search: Option<String>,
}

impl RegisterFilter {
    /// Returns true if `register` matches this filter.
    #[must_use]
    pub fn matches(&self, register: &CashBankRegister) -> bool {
        if let Some(register_type) = self.register_type
            && register.register_type != register_type
        {
            return false;
        }
        if let Some(is_active) = self.is_active
            && register.is_active != is_active
        {
            return false;
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = register.code.to_lowercase().contains(&needle)
                || register.name.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }
}
