//! # Error Types
//!
//! Input validation errors for revive-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Error Types                             │
//! │                                                                 │
//! │  revive-core (this file)                                        │
//! │  └── ValidationError  - Input validation failures               │
//! │                                                                 │
//! │  revive-db (separate crate)                                     │
//! │  └── StorageError     - Database operation failures             │
//! │                                                                 │
//! │  revive-shop (separate crate)                                   │
//! │  ├── AuthError        - Login failures                          │
//! │  ├── SaleError        - Barcode sale failures                   │
//! │  └── Catalog/Repair/CustomerError - per-service composites      │
//! │                                                                 │
//! │  Validation failures are rejected at the service boundary       │
//! │  BEFORE any storage access - invalid input never causes a       │
//! │  partial write.                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// These occur when caller input doesn't meet requirements. Always
/// recoverable: the caller fixes the input and retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required { field: "name" };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "stock",
            min: 0,
            max: 1_000_000,
        };
        assert_eq!(err.to_string(), "stock must be between 0 and 1000000");
    }
}
