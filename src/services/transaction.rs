//! Merchant transaction lookup

use crate::http::HttpClient;
use crate::logger::Logger;
use crate::types::endpoints;
use crate::{KhaltiError, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Client for the Khalti merchant transaction API
#[derive(Debug, Clone)]
pub struct TransactionService {
    http: Arc<HttpClient>,
    logger: Arc<Logger>,
}

impl TransactionService {
    /// Create a new transaction service
    pub fn new(http: Arc<HttpClient>, logger: Arc<Logger>) -> Self {
        Self { http, logger }
    }

    /// List merchant transactions, with `params` sent as query filters
    pub async fn list<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value> {
        let params = crate::types::to_params(params)?;
        self.logger
            .info("Listing transactions", &json!({ "params": params }));

        let response = self
            .http
            .get(endpoints::MERCHANT_TRANSACTIONS, &params)
            .await?;

        let count = response
            .get("records")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);
        self.logger
            .info("Transactions listed successfully", &json!({ "count": count }));

        Ok(response)
    }

    /// Get the details of one transaction by `idx`
    pub async fn find(&self, idx: &str) -> Result<Value> {
        if idx.is_empty() {
            return Err(KhaltiError::validation("idx", "Transaction ID (idx) is required"));
        }

        self.logger
            .info("Getting transaction details", &json!({ "idx": idx }));

        let response = self
            .http
            .get(&endpoints::merchant_transaction(idx), &Value::Null)
            .await?;

        self.logger
            .info("Transaction details retrieved successfully", &Value::Null);

        Ok(response)
    }
}
