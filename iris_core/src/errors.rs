//! # Error Types
//!
//! Structured error types for iris_core. Every failure along the request
//! flow (bad field text, no response, non-2xx status, unreadable body)
//! lands in one [`IrisError`] so the flow can map it to a single error state.
//!
//! ## Example
//!
//! ```rust
//! use iris_core::errors::{IrisError, IrisResult};
//!
//! fn check_width(width: f64) -> IrisResult<f64> {
//!     if !width.is_finite() {
//!         return Err(IrisError::invalid_input(
//!             "petal_width",
//!             width.to_string(),
//!             "Value must be a finite number",
//!         ));
//!     }
//!     Ok(width)
//! }
//!
//! assert!(check_width(f64::NAN).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for iris_core operations
pub type IrisResult<T> = Result<T, IrisError>;

/// Longest response body kept inside an [`IrisError::HttpStatus`]
pub const MAX_ERROR_BODY_CHARS: usize = 512;

/// Structured error type for the classification request flow.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum IrisError {
    /// A form field could not be turned into a usable measurement
    #[error("Invalid input for '{field}': {value:?} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// No HTTP response was obtained (DNS, connect, TLS, timeout)
    #[error("Transport error: {reason}")]
    Transport { reason: String },

    /// The endpoint answered with a non-2xx status
    #[error("Prediction endpoint returned HTTP {status}")]
    HttpStatus { status: u16, body: String },

    /// The endpoint answered 2xx but the body is not a usable prediction
    #[error("Malformed response: {reason}")]
    MalformedResponse { reason: String },

    /// A classification is already pending; the new submission was ignored
    #[error("A classification request is already in flight")]
    RequestInFlight,

    /// Endpoint or client configuration is unusable
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

impl IrisError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        IrisError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a Transport error
    pub fn transport(reason: impl Into<String>) -> Self {
        IrisError::Transport {
            reason: reason.into(),
        }
    }

    /// Create an HttpStatus error, truncating the body
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        let body: String = body.into();
        let body = if body.chars().count() > MAX_ERROR_BODY_CHARS {
            body.chars().take(MAX_ERROR_BODY_CHARS).collect()
        } else {
            body
        };
        IrisError::HttpStatus { status, body }
    }

    /// Create a MalformedResponse error
    pub fn malformed(reason: impl Into<String>) -> Self {
        IrisError::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// Create a Config error
    pub fn config(reason: impl Into<String>) -> Self {
        IrisError::Config {
            reason: reason.into(),
        }
    }

    /// True for failures that originate at the prediction endpoint
    /// rather than in the user's input or the local setup.
    pub fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            IrisError::Transport { .. } | IrisError::HttpStatus { .. } | IrisError::MalformedResponse { .. }
        )
    }

    /// Check if resubmitting the same input may succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            IrisError::Transport { .. } | IrisError::RequestInFlight => true,
            IrisError::HttpStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            IrisError::InvalidInput { .. } => "INVALID_INPUT",
            IrisError::Transport { .. } => "TRANSPORT",
            IrisError::HttpStatus { .. } => "HTTP_STATUS",
            IrisError::MalformedResponse { .. } => "MALFORMED_RESPONSE",
            IrisError::RequestInFlight => "REQUEST_IN_FLIGHT",
            IrisError::Config { .. } => "CONFIG",
        }
    }
}
