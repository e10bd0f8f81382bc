//! Request parameter types
//!
//! Every service call accepts any [`Serialize`] value that serializes to a JSON
//! object. The structs here are typed conveniences; a [`Params`] map or a
//! `serde_json::json!` literal works just as well.

use crate::{KhaltiError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Plain key-value request parameters
pub type Params = Map<String, Value>;

/// Serialize `params` into a [`Params`] map
///
/// Fails with a validation error when the value is not a JSON object.
pub fn to_params<P: Serialize + ?Sized>(params: &P) -> Result<Params> {
    match serde_json::to_value(params)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Params::new()),
        _ => Err(KhaltiError::validation(
            "params",
            "Request parameters must be a key-value object",
        )),
    }
}

/// Customer details attached to an e-payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl CustomerInfo {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// One line of an amount breakdown, in paisa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountBreakdown {
    pub label: String,
    pub amount: u64,
}

/// A product line shown on the Khalti checkout page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub identity: String,
    pub name: String,
    /// Total price in paisa
    pub total_price: u64,
    pub quantity: u32,
    /// Unit price in paisa
    pub unit_price: u64,
}

/// Parameters for starting a redirect-based e-payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EPaymentRequest {
    /// Where Khalti redirects the customer after payment
    pub return_url: String,
    /// Merchant website root
    pub website_url: String,
    /// Amount in paisa
    pub amount: u64,
    pub purchase_order_id: String,
    pub purchase_order_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_info: Option<CustomerInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_breakdown: Option<Vec<AmountBreakdown>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_details: Option<Vec<ProductDetail>>,
}

impl EPaymentRequest {
    /// Create a new e-payment request
    pub fn new(
        return_url: impl Into<String>,
        website_url: impl Into<String>,
        amount: u64,
        purchase_order_id: impl Into<String>,
        purchase_order_name: impl Into<String>,
    ) -> Self {
        Self {
            return_url: return_url.into(),
            website_url: website_url.into(),
            amount,
            purchase_order_id: purchase_order_id.into(),
            purchase_order_name: purchase_order_name.into(),
            customer_info: None,
            amount_breakdown: None,
            product_details: None,
        }
    }

    /// Attach customer details
    pub fn with_customer_info(mut self, customer_info: CustomerInfo) -> Self {
        self.customer_info = Some(customer_info);
        self
    }

    /// Add an amount breakdown line
    pub fn with_amount_breakdown(mut self, label: impl Into<String>, amount: u64) -> Self {
        self.amount_breakdown
            .get_or_insert_with(Vec::new)
            .push(AmountBreakdown {
                label: label.into(),
                amount,
            });
        self
    }

    /// Add a product line
    pub fn with_product(mut self, product: ProductDetail) -> Self {
        self.product_details.get_or_insert_with(Vec::new).push(product);
        self
    }
}

/// Parameters for starting a wallet payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletPaymentRequest {
    /// Merchant public key; filled from the configuration when `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    /// Customer's Khalti-registered mobile number
    pub mobile: String,
    /// Customer's Khalti transaction PIN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_pin: Option<String>,
    /// Amount in paisa
    pub amount: u64,
    pub product_identity: String,
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
}

impl WalletPaymentRequest {
    /// Create a new wallet payment request
    pub fn new(
        mobile: impl Into<String>,
        amount: u64,
        product_identity: impl Into<String>,
        product_name: impl Into<String>,
    ) -> Self {
        Self {
            public_key: None,
            mobile: mobile.into(),
            transaction_pin: None,
            amount,
            product_identity: product_identity.into(),
            product_name: product_name.into(),
            product_url: None,
        }
    }

    /// Set the merchant public key explicitly
    pub fn with_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = Some(public_key.into());
        self
    }

    /// Set the customer's transaction PIN
    pub fn with_transaction_pin(mut self, pin: impl Into<String>) -> Self {
        self.transaction_pin = Some(pin.into());
        self
    }

    /// Set the product URL
    pub fn with_product_url(mut self, url: impl Into<String>) -> Self {
        self.product_url = Some(url.into());
        self
    }
}

/// Query filters for listing merchant transactions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Any further filters, sent verbatim
    #[serde(flatten)]
    pub extra: Params,
}

impl TransactionFilters {
    /// Create empty filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Add an arbitrary filter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
