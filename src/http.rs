//! HTTP transport for the Khalti API
//!
//! [`HttpClient`] owns the `reqwest` client, the resolved base URL and the merchant
//! secret key. It turns every response into either decoded JSON or a
//! [`KhaltiError`]:
//!
//! - transport failures become [`KhaltiError::Network`]
//! - a body that is not JSON becomes [`KhaltiError::Api`] without a body
//! - a status of 400 or above becomes [`KhaltiError::Api`] carrying the parsed body
//!
//! The body is parsed before the status is looked at, so an HTML error page from a
//! proxy surfaces as an invalid-JSON API error with the proxy's status code.

use crate::logger::{redact, Logger};
use crate::types::{to_params, Configuration, Params};
use crate::{KhaltiError, Result};
use ::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Message used when a response body cannot be decoded
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON response from API";

/// Message used when an error response has no `detail`
pub const UNKNOWN_API_ERROR: &str = "Unknown API error";

/// Authenticated JSON client bound to one Khalti base URL
#[derive(Clone)]
pub struct HttpClient {
    /// Base URL, without trailing slash
    base_url: String,
    /// Merchant secret key
    secret_key: String,
    /// HTTP client
    client: Client,
    logger: Arc<Logger>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(config: &Configuration, logger: Arc<Logger>) -> Result<Self> {
        config.validate()?;

        let mut client_builder = Client::builder();

        // Zero disables the timeout
        if !config.timeout.is_zero() {
            client_builder = client_builder.timeout(config.timeout);
        }

        let client = client_builder
            .build()
            .map_err(|e| KhaltiError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url().trim_end_matches('/').to_string(),
            secret_key: config.secret_key.clone(),
            client,
            logger,
        })
    }

    /// Get the base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the absolute URL for an endpoint
    pub fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Send a GET request with `params` as the query string
    pub async fn get<P: Serialize + ?Sized>(&self, endpoint: &str, params: &P) -> Result<Value> {
        let params = to_params(params)?;
        let mut url = url::Url::parse(&self.build_url(endpoint))
            .map_err(|e| KhaltiError::config(format!("Invalid request URL: {}", e)))?;

        let query = query_pairs(&params);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        self.logger
            .debug("Making GET request", &json!({ "url": url.as_str() }));
        tracing::debug!("Sending request to: GET {}", url);

        let request = self.client.get(url);
        self.execute(request).await
    }

    /// Send a POST request with `body` as JSON
    pub async fn post<P: Serialize + ?Sized>(&self, endpoint: &str, body: &P) -> Result<Value> {
        let body = to_params(body)?;
        let url = self.build_url(endpoint);

        self.logger.debug(
            "Making POST request",
            &json!({ "url": url, "data": redact(&body) }),
        );
        tracing::debug!("Sending request to: POST {}", url);

        let request = self.client.post(&url).json(&body);
        self.execute(request).await
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Value> {
        let request = request
            .header(AUTHORIZATION, format!("Key {}", self.secret_key))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                self.logger
                    .error("Network error", &json!({ "error": e.to_string() }));
                return Err(KhaltiError::Network(e));
            }
        };

        let status = response.status().as_u16();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                self.logger
                    .error("Network error", &json!({ "error": e.to_string() }));
                return Err(KhaltiError::Network(e));
            }
        };

        let data: Value = match serde_json::from_str(&text) {
            Ok(data) => data,
            Err(_) => {
                self.logger
                    .error("Invalid JSON response", &json!({ "response": text }));
                return Err(KhaltiError::api(status, INVALID_JSON_MESSAGE, None));
            }
        };

        if status >= 400 {
            let message = data
                .get("detail")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_API_ERROR)
                .to_string();
            self.logger.error(
                "API error",
                &json!({ "status": status, "message": message, "response": data }),
            );
            return Err(KhaltiError::api(status, message, Some(data)));
        }

        Ok(data)
    }
}

/// Flatten request parameters into query pairs
///
/// `null` values are skipped, strings are sent as-is and every other value by its
/// JSON text.
fn query_pairs(params: &Params) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(s) => Some((key.clone(), s.clone())),
            other => Some((key.clone(), other.to_string())),
        })
        .collect()
}
