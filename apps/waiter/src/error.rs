//! # Command Error Type
//!
//! Unified error type for waiter commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Waiter App                         │
//! │                                                                         │
//! │  Terminal                     Rust                                      │
//! │  ────────                     ────                                      │
//! │                                                                         │
//! │  > confirm                                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, CommandError>                                         │  │
//! │  │         │                                                        │  │
//! │  │  HTTP failure? ──── ClientError::Status { .. } ────┐            │  │
//! │  │         │                                          ▼            │  │
//! │  │  Rule violation? ── CoreError::EmptyCart ──── CommandError ────►│  │
//! │  │         │                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  error [EMPTY_CART]: Add at least one product before confirming        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use bfood_api::ClientError;
use bfood_core::{CoreError, ValidationError};

use crate::state::SessionError;

/// Error returned from waiter commands.
///
/// ```json
/// { "code": "TABLE_NOT_SELECTED", "message": "Choose a table before confirming the order" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown product, category position or cart line
    NotFound,

    /// Input validation failed
    ValidationError,

    EmptyCart,

    TableNotSelected,

    /// The action is disabled while a request is in flight or a confirmation is open
    Busy,

    /// The backend could not be reached or answered with an error
    Network,

    /// The backend returned `false` for an order
    OrderRejected,

    /// A table already has an open order
    OrderInProgress,

    /// Unparseable terminal input
    InvalidCommand,

    Internal,
}

impl CommandError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CommandError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        CommandError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        CommandError::new(ErrorCode::ValidationError, message)
    }

    pub fn invalid_command(message: impl Into<String>) -> Self {
        CommandError::new(ErrorCode::InvalidCommand, message)
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::validation(err.to_string())
    }
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotInCart(id) => CommandError::not_found("Cart item", &id),
            CoreError::ProductNotFound(id) => CommandError::not_found("Product", &id),
            CoreError::EmptyCart => CommandError::new(
                ErrorCode::EmptyCart,
                "Add at least one product before confirming",
            ),
            CoreError::TableNotSelected => CommandError::new(
                ErrorCode::TableNotSelected,
                "Choose a table before confirming the order",
            ),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ClientError> for CommandError {
    fn from(err: ClientError) -> Self {
        if err.is_config_error() {
            tracing::error!("API client misconfigured: {}", err);
            return CommandError::new(ErrorCode::Internal, err.to_string());
        }

        // Transport detail goes to the log; the waiter gets a short message
        tracing::warn!("Backend request failed: {}", err);
        let mut message = match err.status() {
            Some(status) => format!("The server answered with HTTP {}", status),
            None if matches!(err, ClientError::Decode { .. }) => {
                "The server sent an unexpected response".to_string()
            }
            None => "Could not reach the server".to_string(),
        };
        if err.is_retryable() {
            message.push_str(", try again");
        }
        CommandError::new(ErrorCode::Network, message)
    }
}

impl From<SessionError> for CommandError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Core(e) => e.into(),
            SessionError::Client(e) => e.into(),
            SessionError::Busy(what) => {
                CommandError::new(ErrorCode::Busy, format!("Please wait, {}", what))
            }
            SessionError::OrderRejected(table) => CommandError::new(
                ErrorCode::OrderRejected,
                format!("The order for table {} was not accepted", table),
            ),
            SessionError::OrderInProgress(table) => CommandError::new(
                ErrorCode::OrderInProgress,
                format!("Table {} already has an open order; cancel it first", table),
            ),
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CommandError {}
