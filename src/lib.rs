//! # Khalti Rust Client
//!
//! An async, typed client for the [Khalti](https://khalti.com) payment gateway API.
//!
//! ## Features
//!
//! - **E-payment**: start a redirect checkout, then look up or check its status by `pidx`
//! - **Wallet payment**: initiate and verify mobile wallet payments
//! - **Transactions**: list and fetch merchant transactions
//! - **Typed errors**: validation, network and API failures are distinct [`KhaltiError`] variants
//! - **Logging**: `tracing` events plus an optional append-only log file
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rust_khalti::{Khalti, types::{Configuration, CustomerInfo, EPaymentRequest}};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Configuration::new("test_secret_key_f59e8b7d18b4499ca40f68195a846e9b")?
//!         .with_logging(true);
//!     let khalti = Khalti::new(config)?;
//!
//!     let request = EPaymentRequest::new(
//!         "https://example.com/khalti/verify",
//!         "https://example.com",
//!         1000, // paisa
//!         "ORDER-1001",
//!         "Test Order",
//!     )
//!     .with_customer_info(CustomerInfo::new("Ram Bahadur", "ram@example.com", "9800000001"));
//!
//!     let response = khalti.e_payment().initiate(&request).await?;
//!     println!("Redirect the customer to {}", response["payment_url"]);
//!
//!     // After Khalti redirects back with ?pidx=...
//!     let lookup = khalti.e_payment().verify("bZQLD9wRVWo4CdESSfuSsB").await?;
//!     println!("Payment status: {}", lookup["status"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Handling Errors
//!
//! ```rust,no_run
//! use rust_khalti::{Khalti, KhaltiError};
//!
//! # async fn example(khalti: Khalti) {
//! match khalti.e_payment().status("").await {
//!     Err(KhaltiError::Validation { field, message }) => eprintln!("{}: {}", field, message),
//!     Err(KhaltiError::Api { status, body, .. }) => eprintln!("Khalti said {}: {:?}", status, body),
//!     Err(KhaltiError::Network(e)) => eprintln!("Could not reach Khalti: {}", e),
//!     Err(e) => eprintln!("Error: {}", e),
//!     Ok(response) => println!("{}", response),
//! }
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **`types`**: Configuration, environments, request builders and response views
//! - **`http`**: Authenticated JSON transport and error mapping
//! - **`services`**: E-payment, wallet and transaction services
//! - **`client`**: The [`Khalti`] entry point
//! - **`logger`**: Append-only file logger
//! - **`cli`**: Argument parsing behind the `khalti` binary
//! - **`error`**: Error types

pub mod cli;
pub mod client;
pub mod error;
pub mod http;
pub mod logger;
pub mod services;
pub mod types;

// Re-exports for convenience
pub use client::Khalti;
pub use error::{KhaltiError, Result};
pub use crate::http::HttpClient;
pub use logger::Logger;
pub use services::{EPaymentService, TransactionService, WalletService};
pub use types::{Configuration, Environment, LogLevel, Params};

/// Current version of the Khalti client library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
