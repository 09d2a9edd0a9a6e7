//! # Error Types
//!
//! Domain-specific error types for bfood-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bfood-core errors (this file)                                         │
//! │  ├── CoreError        - Cart / order rule violations                   │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bfood-api errors (separate crate)                                     │
//! │  └── ClientError      - HTTP / decode / config failures                │
//! │                                                                         │
//! │  waiter app errors                                                     │
//! │  └── CommandError     - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ──┐                                 │
//! │                          ClientError ─┴──► CommandError → Terminal     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Ordering rule violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Decrement was requested for a product that has no cart entry.
    #[error("Product {0} is not in the cart")]
    ItemNotInCart(String),

    /// The product is not part of the current listing.
    #[error("Product {0} not found")]
    ProductNotFound(String),

    /// Orders cannot be built from an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// An order needs a table before it can be submitted.
    #[error("No table selected for this order")]
    TableNotSelected,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., control characters in a label).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ItemNotInCart("p-42".to_string());
        assert_eq!(err.to_string(), "Product p-42 is not in the cart");
        assert_eq!(CoreError::EmptyCart.to_string(), "Cart is empty");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "table".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "Validation error: table is required");
    }
}
