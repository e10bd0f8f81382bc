//! Redirect-based e-payment flow

use super::require_fields;
use crate::http::HttpClient;
use crate::logger::Logger;
use crate::types::{endpoints, to_params};
use crate::{KhaltiError, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Fields every e-payment initiation must carry
pub const INITIATE_REQUIRED: &[&str] = &[
    "return_url",
    "website_url",
    "amount",
    "purchase_order_id",
    "purchase_order_name",
];

/// Fields required inside `customer_info` when it is given
pub const CUSTOMER_INFO_REQUIRED: &[&str] = &["name", "email", "phone"];

/// Client for the Khalti e-payment (KPG-2) API
#[derive(Debug, Clone)]
pub struct EPaymentService {
    http: Arc<HttpClient>,
    logger: Arc<Logger>,
}

impl EPaymentService {
    /// Create a new e-payment service
    pub fn new(http: Arc<HttpClient>, logger: Arc<Logger>) -> Self {
        Self { http, logger }
    }

    /// Start a payment and get back the `pidx` and checkout URL
    ///
    /// `params` must contain `return_url`, `website_url`, `amount` (paisa),
    /// `purchase_order_id` and `purchase_order_name`. An optional `customer_info`
    /// object must contain `name`, `email` and `phone`.
    pub async fn initiate<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value> {
        let params = to_params(params)?;
        self.logger
            .info("Initiating e-payment", &json!({ "params": params }));

        require_fields(&params, INITIATE_REQUIRED, "")?;

        match params.get("customer_info") {
            None | Some(Value::Null) => {}
            Some(Value::Object(customer_info)) => {
                require_fields(customer_info, CUSTOMER_INFO_REQUIRED, "customer_info.")?
            }
            Some(_) => {
                return Err(KhaltiError::validation(
                    "customer_info",
                    "customer_info must be an object",
                ))
            }
        }

        let response = self.http.post(endpoints::EPAYMENT_INITIATE, &params).await?;

        self.logger.info(
            "E-payment initiated successfully",
            &json!({ "response": response }),
        );

        Ok(response)
    }

    /// Look up a payment by `pidx`
    ///
    /// This is the call to make after Khalti redirects the customer back; only a
    /// `Completed` status means the order should be fulfilled.
    pub async fn verify(&self, pidx: &str) -> Result<Value> {
        require_pidx(pidx)?;

        self.logger.info("Verifying e-payment", &json!({ "pidx": pidx }));

        let response = self
            .http
            .post(endpoints::EPAYMENT_LOOKUP, &json!({ "pidx": pidx }))
            .await?;

        self.logger.info(
            "E-payment verified successfully",
            &json!({ "response": response }),
        );

        Ok(response)
    }

    /// Check the status of a payment by `pidx`
    pub async fn status(&self, pidx: &str) -> Result<Value> {
        require_pidx(pidx)?;

        self.logger
            .info("Checking e-payment status", &json!({ "pidx": pidx }));

        let response = self
            .http
            .post(endpoints::EPAYMENT_STATUS, &json!({ "pidx": pidx }))
            .await?;

        self.logger.info(
            "E-payment status checked successfully",
            &json!({ "response": response }),
        );

        Ok(response)
    }
}

fn require_pidx(pidx: &str) -> Result<()> {
    if pidx.is_empty() {
        return Err(KhaltiError::validation(
            "pidx",
            "Payment ID (pidx) is required",
        ));
    }
    Ok(())
}
