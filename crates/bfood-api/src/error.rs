//! # Client Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Client Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Response            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidUrl     │  │  Transport      │  │  Status (non-2xx)       │ │
//! │  │  InvalidConfig  │  │  Timeout        │  │  Decode                 │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in the client retries. `is_retryable` exists so the front end can
//! tell the waiter whether trying again might help.

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// The configured base URL is not a usable http(s) URL.
    #[error("Invalid API base URL: {0}")]
    InvalidUrl(String),

    /// Any other invalid client setting.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The request never produced a response (DNS, refused, reset, TLS).
    #[error("Request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The configured timeout elapsed.
    #[error("Request to {path} timed out")]
    Timeout { path: String },

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// The backend answered with a non-success status.
    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    /// The body was not the JSON we expected.
    #[error("Could not decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

impl ClientError {
    /// Wraps a reqwest failure, separating timeouts from other transport errors.
    pub(crate) fn from_reqwest(path: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout {
                path: path.to_string(),
            }
        } else {
            ClientError::Transport {
                path: path.to_string(),
                source: err,
            }
        }
    }

    /// True when the same request might succeed later.
    ///
    /// Transport failures, timeouts and 5xx responses qualify; config
    /// problems, 4xx and decode failures do not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Transport { .. } | ClientError::Timeout { .. } => true,
            ClientError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ClientError::InvalidUrl(_) | ClientError::InvalidConfig(_)
        )
    }

    /// HTTP status if the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
