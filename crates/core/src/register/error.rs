//! Register error types.

use thiserror::Error;

use kasbook_shared::types::RegisterId;
use kasbook_shared::AppError;

/// Errors that can occur during register operations.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// Register code already exists.
    #[error("Register code '{0}' already exists")]
    DuplicateCode(String),

    /// Register code is empty.
    #[error("Register code must not be empty")]
    EmptyCode,

    /// Register name is empty.
    #[error("Register name must not be empty")]
    EmptyName,

    /// Register not found.
    #[error("Register not found: {0}")]
    NotFound(RegisterId),
}

impl RegisterError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateCode(_) => "DUPLICATE_REGISTER_CODE",
            Self::EmptyCode => "EMPTY_REGISTER_CODE",
            Self::EmptyName => "EMPTY_REGISTER_NAME",
            Self::NotFound(_) => "REGISTER_NOT_FOUND",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::DuplicateCode(_) => 409,
            Self::EmptyCode | Self::EmptyName => 400,
            Self::NotFound(_) => 404,
        }
    }
}

impl From<RegisterError> for AppError {
    fn from(err: RegisterError) -> Self {
        match err {
            RegisterError::DuplicateCode(_) => Self::Conflict(err.to_string()),
            RegisterError::EmptyCode | RegisterError::EmptyName => {
                Self::Validation(err.to_string())
            }
            RegisterError::NotFound(_) => Self::NotFound(err.to_string()),
        }
    }
}
