//! # App Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Handling Strategy
//! Every command returns `Result<T, AppError>`; the REPL renders the error's
//! Display text as an inline message and keeps the session alive. Lower
//! layers stay typed (`CoreError`, `StoreError`, `AuthError`) and convert
//! losslessly via `#[from]`.

use thiserror::Error;
use zweeti_core::{CoreError, ValidationError};
use zweeti_store::StoreError;

use crate::auth::AuthError;

/// Error surfaced to the cashier.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input didn't pass caller-side validation.
    #[error("{0}")]
    Validation(String),

    /// The operation is not allowed in the current bill state.
    #[error("{0}")]
    BusinessRule(String),

    /// Ledger invariant refusal (should be prevented by validation).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Durable store failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Login collaborator failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Terminal I/O failure.
    #[error("terminal i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Creates a validation error with a cashier-facing message.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    /// Creates a business-rule error with a cashier-facing message.
    pub fn business(message: impl Into<String>) -> Self {
        AppError::BusinessRule(message.into())
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type for terminal commands.
pub type AppResult<T> = Result<T, AppError>;
