//! Mobile wallet payment flow

use super::require_fields;
use crate::http::HttpClient;
use crate::logger::{redact, Logger};
use crate::types::{endpoints, to_params};
use crate::{KhaltiError, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Fields every wallet payment initiation must carry
pub const INITIATE_REQUIRED: &[&str] = &[
    "public_key",
    "mobile",
    "amount",
    "product_identity",
    "product_name",
];

/// Client for the Khalti wallet payment API
#[derive(Debug, Clone)]
pub struct WalletService {
    http: Arc<HttpClient>,
    logger: Arc<Logger>,
    /// Merchant public key from the configuration
    public_key: Option<String>,
}

impl WalletService {
    /// Create a new wallet service
    pub fn new(http: Arc<HttpClient>, logger: Arc<Logger>, public_key: Option<String>) -> Self {
        Self {
            http,
            logger,
            public_key,
        }
    }

    /// Start a wallet payment
    ///
    /// `params` must contain `public_key`, `mobile`, `amount` (paisa),
    /// `product_identity` and `product_name`. A missing `public_key` is taken from
    /// the configuration when one is set there.
    pub async fn initiate<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value> {
        let mut params = to_params(params)?;

        if let Some(public_key) = &self.public_key {
            let absent = params.get("public_key").map_or(true, Value::is_null);
            if absent {
                params.insert("public_key".to_string(), json!(public_key));
            }
        }

        self.logger
            .info("Initiating wallet payment", &json!({ "params": redact(&params) }));

        require_fields(&params, INITIATE_REQUIRED, "")?;

        let response = self.http.post(endpoints::WALLET_INITIATE, &params).await?;

        self.logger.info(
            "Wallet payment initiated successfully",
            &json!({ "response": response }),
        );

        Ok(response)
    }

    /// Verify a wallet payment token for `amount` paisa
    pub async fn verify(&self, token: &str, amount: u64) -> Result<Value> {
        if token.is_empty() {
            return Err(KhaltiError::validation("token", "Payment token is required"));
        }

        if amount == 0 {
            return Err(KhaltiError::validation(
                "amount",
                "Amount must be a valid number",
            ));
        }

        self.logger.info(
            "Verifying wallet payment",
            &json!({ "token": token, "amount": amount }),
        );

        let response = self
            .http
            .post(
                endpoints::WALLET_VERIFY,
                &json!({ "token": token, "amount": amount }),
            )
            .await?;

        self.logger.info(
            "Wallet payment verified successfully",
            &json!({ "response": response }),
        );

        Ok(response)
    }
}
