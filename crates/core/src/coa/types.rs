//! Chart of accounts domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kasbook_shared::types::AccountId;

/// Account classification in the chart of accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Asset account.
    Asset,
    /// Liability account.
    Liability,
    /// Equity account.
    Equity,
    /// Income account.
    Income,
    /// Expense account.
    Expense,
}

impl AccountType {
    /// Returns the string representation of the type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
            Self::Equity => "equity",
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Parses an account type from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asset" => Some(Self::Asset),
            "liability" => Some(Self::Liability),
            "equity" => Some(Self::Equity),
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A chart of accounts entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Account code (unique within the registry).
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Free-text category; used only for report classification.
    pub category: String,
    /// Parent account for display hierarchy. Never aggregated.
    pub parent_id: Option<AccountId>,
    /// Optional description.
    pub description: Option<String>,
    /// Whether new transactions may reference this account.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Input for creating an account.
#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    /// Account code (must be unique).
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Free-text category.
    pub category: String,
    /// Parent account for display hierarchy.
    pub parent_id: Option<AccountId>,
    /// Optional description.
    pub description: Option<String>,
    /// Whether the account starts active.
    pub is_active: bool,
}

/// Input for updating an account.
///
/// Code and type are identity and stay immutable once any transaction
/// references the account; they are deliberately absent here.
#[derive(Debug, Clone, Default)]
pub struct UpdateAccountInput {
    /// New name.
    pub name: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New parent account.
    pub parent_id: Option<Option<AccountId>>,
    /// New description.
    pub description: Option<Option<String>>,
    /// Activate or deactivate.
    pub is_active: Option<bool>,
}

/// Filter for listing accounts.
#[derive(Debug, Clone, Default)]
pub struct AccountFilter {
    /// Restrict to one account type.
    pub account_type: Option<AccountType>,
    /// Restrict by active flag.
    pub is_active: Option<bool>,
    /// Case-insensitive substring match on code or name.
    pub search: Option<String>,
}

impl AccountFilter {
    /// Returns true if `account` matches this filter.
    #[must_use]
    pub fn matches(&self, account: &Account) -> bool {
        if let Some(account_type) = self.account_type
            && account.account_type != account_type
        {
            return false;
        }
        if let Some(is_active) = self.is_active
            && account.is_active != is_active
        {
            return false;
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = account.code.to_lowercase().contains(&needle)
                || account.name.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }
}
