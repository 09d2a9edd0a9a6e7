//! # Validation Module
//!
//! Input validation for values typed by the waiter.
//!
//! The backend performs its own checks; these exist so the client never
//! sends an order it already knows is malformed.

use crate::error::ValidationError;
use crate::MAX_TABLE_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a table label from the table prompt.
///
/// ## Rules
/// - Leading/trailing whitespace is ignored
/// - Must not be empty after trimming
/// - At most [`MAX_TABLE_LENGTH`] characters
/// - No control characters
///
/// ## Returns
/// The trimmed label.
///
/// ```rust
/// use bfood_core::validation::validate_table;
///
/// assert_eq!(validate_table(" 4 ").unwrap(), "4");
/// assert!(validate_table("").is_err());
/// ```
pub fn validate_table(input: &str) -> ValidationResult<String> {
    let table = input.trim();

    if table.is_empty() {
        return Err(ValidationError::Required {
            field: "table".to_string(),
        });
    }

    if table.chars().count() > MAX_TABLE_LENGTH {
        return Err(ValidationError::TooLong {
            field: "table".to_string(),
            max: MAX_TABLE_LENGTH,
        });
    }

    if table.chars().any(char::is_control) {
        return Err(ValidationError::InvalidFormat {
            field: "table".to_string(),
            reason: "must not contain control characters".to_string(),
        });
    }

    Ok(table.to_string())
}
