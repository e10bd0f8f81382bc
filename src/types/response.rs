//! Typed views over Khalti responses
//!
//! Services return the decoded JSON verbatim. These types are optional and can be
//! decoded from a response with [`decode`].

use crate::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decode a response body into a typed view
pub fn decode<T: DeserializeOwned>(response: &Value) -> Result<T> {
    Ok(T::deserialize(response)?)
}

/// Response of `/epayment/initiate/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EPaymentInitiation {
    /// Payment identifier used by lookup and status calls
    pub pidx: String,
    /// Checkout page the customer must be redirected to
    pub payment_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    /// Seconds until the payment link expires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

/// State of an e-payment as reported by lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Completed,
    Pending,
    Initiated,
    Refunded,
    Expired,
    #[serde(rename = "User canceled")]
    UserCanceled,
    #[serde(rename = "Partially Refunded")]
    PartiallyRefunded,
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    /// Whether the merchant should deliver the order
    pub fn is_completed(&self) -> bool {
        matches!(self, PaymentStatus::Completed)
    }

    /// Whether the payment can no longer complete
    pub fn is_final(&self) -> bool {
        !matches!(
            self,
            PaymentStatus::Pending | PaymentStatus::Initiated | PaymentStatus::Unknown
        )
    }
}

/// Response of `/epayment/lookup/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EPaymentLookup {
    pub pidx: String,
    /// Amount in paisa
    pub total_amount: u64,
    pub status: PaymentStatus,
    #[serde(default)]
    pub transaction_id: Option<String>,
    /// Fee in paisa
    #[serde(default)]
    pub fee: u64,
    #[serde(default)]
    pub refunded: bool,
}
