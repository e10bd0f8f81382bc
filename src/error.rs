//! Error types for the Khalti client
//!
//! Every fallible operation in this crate returns [`Result`], whose error type is
//! [`KhaltiError`]. The variants map onto the three failure classes a caller has to
//! tell apart:
//!
//! - [`KhaltiError::Validation`] - caller input was rejected before any request was sent
//! - [`KhaltiError::Network`] - the request never produced a usable HTTP response
//! - [`KhaltiError::Api`] - Khalti answered with an error status or a body that is not JSON
//!
//! Configuration and local I/O problems get their own variants. Nothing is retried.
//!
//! # Examples
//!
//! ```
//! use rust_khalti::{KhaltiError, Result};
//!
//! fn require_pidx(pidx: &str) -> Result<()> {
//!     if pidx.is_empty() {
//!         return Err(KhaltiError::validation("pidx", "Payment ID (pidx) is required"));
//!     }
//!     Ok(())
//! }
//!
//! let err = require_pidx("").unwrap_err();
//! assert!(err.is_validation());
//! assert_eq!(err.field(), Some("pidx"));
//! ```

use serde_json::Value;
use thiserror::Error;

/// Result type alias for Khalti operations
pub type Result<T> = std::result::Result<T, KhaltiError>;

/// Errors that can occur when talking to Khalti
#[derive(Debug, Error)]
pub enum KhaltiError {
    /// A required request field is missing, empty or malformed
    #[error("Validation error: {message}")]
    Validation {
        /// Name of the offending field (`customer_info.email` for nested fields)
        field: String,
        /// Human-readable description
        message: String,
    },

    /// Transport failure: connect error, timeout or unreadable body
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Khalti returned an error status or an unparseable body
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Message extracted from the response (`detail`) or a fallback
        message: String,
        /// Parsed response body, when it was valid JSON
        body: Option<Value>,
    },

    /// Invalid client configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Local I/O failure (reading a config file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure outside of response handling
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KhaltiError {
    /// Create a validation error for `field`
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create the standard "`field` is required" validation error
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("{} is required", field);
        Self::Validation { field, message }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an API error
    pub fn api(status: u16, message: impl Into<String>, body: Option<Value>) -> Self {
        Self::Api {
            status,
            message: message.into(),
            body,
        }
    }

    /// Whether this error was raised by local input validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Whether this error is a transport failure
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Whether this error came from the remote API
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Name of the invalid field for validation errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// HTTP status for API errors
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parsed response body for API errors
    pub fn response_body(&self) -> Option<&Value> {
        match self {
            Self::Api { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_field_message() {
        let err = KhaltiError::missing_field("customer_info.email");
        assert!(err.is_validation());
        assert_eq!(err.field(), Some("customer_info.email"));
        assert_eq!(
            err.to_string(),
            "Validation error: customer_info.email is required"
        );
    }

    #[test]
    fn test_api_error_accessors() {
        let body = json!({"detail": "Invalid token.", "status_code": 401});
        let err = KhaltiError::api(401, "Invalid token.", Some(body.clone()));

        assert!(err.is_api());
        assert!(!err.is_network());
        assert_eq!(err.status_code(), Some(401));
        assert_eq!(err.response_body(), Some(&body));
        assert_eq!(err.to_string(), "API error (401): Invalid token.");
    }

    #[test]
    fn test_config_error_has_no_status() {
        let err = KhaltiError::config("Secret key is required");
        assert_eq!(err.status_code(), None);
        assert_eq!(err.field(), None);
        assert!(err.to_string().contains("Secret key is required"));
    }
}
