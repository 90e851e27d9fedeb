//! Chart of accounts error types.

use thiserror::Error;

use kasbook_shared::types::AccountId;
use kasbook_shared::AppError;

/// Errors that can occur during chart of accounts operations.
#[derive(Debug, Error)]
pub enum CoaError {
    /// Account code already exists.
    #[error("Account code '{0}' already exists")]
    DuplicateCode(String),

    /// Account code is empty.
    #[error("Account code must not be empty")]
    EmptyCode,

    /// Account name is empty.
    #[error("Account name must not be empty")]
    EmptyName,

    /// Parent account not found.
    #[error("Parent account not found: {0}")]
    ParentNotFound(AccountId),

    /// Account not found.
    #[error("Account not found: {0}")]
    NotFound(AccountId),
}

impl CoaError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateCode(_) => "DUPLICATE_ACCOUNT_CODE",
            Self::EmptyCode => "EMPTY_ACCOUNT_CODE",
            Self::EmptyName => "EMPTY_ACCOUNT_NAME",
            Self::ParentNotFound(_) => "PARENT_ACCOUNT_NOT_FOUND",
            Self::NotFound(_) => "ACCOUNT_NOT_FOUND",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::DuplicateCode(_) => 409,
            Self::EmptyCode | Self::EmptyName => 400,
            Self::ParentNotFound(_) | Self::NotFound(_) => 404,
        }
    }
}

impl From<CoaError> for AppError {
    fn from(err: CoaError) -> Self {
        match err {
            CoaError::DuplicateCode(_) => Self::Conflict(err.to_string()),
            CoaError::EmptyCode | CoaError::EmptyName => Self::Validation(err.to_string()),
            CoaError::ParentNotFound(_) | CoaError::NotFound(_) => Self::NotFound(err.to_string()),
        }
    }
}
