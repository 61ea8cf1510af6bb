//! # Error Types
//!
//! Domain-specific error types for zweeti-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Error Types                             │
//! │                                                                 │
//! │  zweeti-core errors (this file)                                 │
//! │  ├── CoreError        - Ledger invariant refusals               │
//! │  └── ValidationError  - Caller-side input validation            │
//! │                                                                 │
//! │  zweeti-store errors (separate crate)                           │
//! │  └── StoreError       - Durable store failures                  │
//! │                                                                 │
//! │  Terminal app errors                                            │
//! │  └── AppError         - What the cashier sees                   │
//! │                                                                 │
//! │  Flow: ValidationError → CoreError → StoreError → AppError      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Ledger-level errors.
///
/// The ledger deliberately has almost no validation of its own - callers
/// validate before calling in. These variants only cover inputs that would
/// construct a line item violating its invariants.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Line items need a non-empty display label.
    #[error("item name must not be empty")]
    EmptyItemName,

    /// Unit prices are non-negative; zero (a free item) is fine.
    #[error("unit price must not be negative (got {paise} paise)")]
    NegativeUnitPrice { paise: i64 },

    /// Quantity must be a positive integer.
    #[error("quantity must be at least 1 (got {quantity})")]
    InvalidQuantity { quantity: i64 },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Caller-side input validation errors.
///
/// Surfaced to the cashier as inline messages before any ledger call runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. a malformed phone number or OTP code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidQuantity { quantity: 0 };
        assert_eq!(err.to_string(), "quantity must be at least 1 (got 0)");

        let err = CoreError::NegativeUnitPrice { paise: -100 };
        assert_eq!(
            err.to_string(),
            "unit price must not be negative (got -100 paise)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "item".to_string(),
        };
        assert_eq!(err.to_string(), "item is required");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 999,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 999");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
