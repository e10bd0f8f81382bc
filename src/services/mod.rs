//! Khalti API services
//!
//! Each service validates the caller's parameters, sends one request through the
//! shared [`HttpClient`](crate::http::HttpClient) and returns the decoded response
//! body unchanged.
//!
//! - [`EPaymentService`] - redirect-based e-payment: initiate, lookup, status
//! - [`WalletService`] - mobile wallet payment: initiate, verify
//! - [`TransactionService`] - merchant transactions: list, find
//!
//! # Validation
//!
//! A required field is missing when it is absent or *empty*: `null`, `false`, `0`,
//! `""`, `"0"`, `[]` or `{}`. The resulting [`KhaltiError::Validation`] names the
//! field, prefixed with its parent for nested objects (`customer_info.email`).

pub mod epayment;
pub mod transaction;
pub mod wallet;


pub use epayment::EPaymentService;
pub use transaction::TransactionService;
pub use wallet::WalletService;

use crate::types::Params;
use crate::{KhaltiError, Result};
use serde_json::Value;

/// Whether `value` counts as not provided
pub(crate) fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Check that every field in `required` is present and non-empty
pub(crate) fn require_fields(params: &Params, required: &[&str], prefix: &str) -> Result<()> {
    for field in required {
        let missing = params.get(*field).map_or(true, is_empty_value);
        if missing {
            return Err(KhaltiError::missing_field(format!("{}{}", prefix, field)));
        }
    }
    Ok(())
}
