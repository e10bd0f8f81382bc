//! Core types for the Khalti client
//!
//! # Architecture
//!
//! The types module is organized as follows:
//! - [`config`] - Client configuration and log levels
//! - [`environment`] - Sandbox/live selection and base URLs
//! - [`request`] - Request parameter maps and typed request builders
//! - [`response`] - Optional typed views over response bodies
//! - [`amount`] - NPR/paisa conversions
//! - [`constants`] - Base URLs and endpoint paths
//!
//! # Examples
//!
//! ## Building a Configuration
//!
//! ```
//! use rust_khalti::types::{Configuration, Environment, LogLevel};
//! use std::time::Duration;
//!
//! # fn example() -> rust_khalti::Result<()> {
//! let config = Configuration::new("live_secret_key_68791341fdd94846a146f0457ff7b455")?
//!     .with_environment(Environment::Live)
//!     .with_timeout(Duration::from_secs(15))
//!     .with_logging(true)
//!     .with_log_level(LogLevel::Warning);
//!
//! assert_eq!(config.base_url(), "https://khalti.com/api/v2");
//! # Ok(())
//! # }
//! ```
//!
//! ## Creating an E-Payment Request
//!
//! ```
//! use rust_khalti::types::{npr_to_paisa, CustomerInfo, EPaymentRequest};
//! use rust_decimal::Decimal;
//!
//! # fn example() -> rust_khalti::Result<()> {
//! let request = EPaymentRequest::new(
//!     "https://example.com/khalti/verify",   // return_url
//!     "https://example.com",                 // website_url
//!     npr_to_paisa(Decimal::from(10))?,      // amount (1000 paisa)
//!     "ORDER-1001",                          // purchase_order_id
//!     "Test Order",                          // purchase_order_name
//! )
//! .with_customer_info(CustomerInfo::new("Ram Bahadur", "ram@example.com", "9800000001"));
//! # Ok(())
//! # }
//! ```

pub mod amount;
pub mod config;
pub mod constants;
pub mod environment;
pub mod request;
pub mod response;

// Re-export commonly used types
pub use amount::{npr_to_paisa, paisa_to_npr};
pub use config::{Configuration, LogLevel};
pub use constants::{endpoints, LIVE_BASE_URL, SANDBOX_BASE_URL};
pub use environment::Environment;
pub use request::{
    to_params, AmountBreakdown, CustomerInfo, EPaymentRequest, Params, ProductDetail,
    TransactionFilters, WalletPaymentRequest,
};
pub use response::{decode, EPaymentInitiation, EPaymentLookup, PaymentStatus};
