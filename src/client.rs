//! Entry point tying configuration and services together

use crate::http::HttpClient;
use crate::logger::Logger;
use crate::services::{EPaymentService, TransactionService, WalletService};
use crate::types::{Configuration, Environment};
use crate::{KhaltiError, Result};
use std::path::Path;
use std::sync::Arc;

/// Khalti API client
///
/// Holds the configuration and one instance of each service. All services share a
/// single [`HttpClient`] and [`Logger`].
#[derive(Debug, Clone)]
pub struct Khalti {
    config: Configuration,
    e_payment: EPaymentService,
    wallet: WalletService,
    transaction: TransactionService,
}

impl Khalti {
    /// Create a client from a configuration
    pub fn new(config: Configuration) -> Result<Self> {
        config.validate()?;

        let logger = Arc::new(Logger::new(&config));
        let http = Arc::new(HttpClient::new(&config, logger.clone())?);

        Ok(Self {
            e_payment: EPaymentService::new(http.clone(), logger.clone()),
            wallet: WalletService::new(http.clone(), logger.clone(), config.public_key.clone()),
            transaction: TransactionService::new(http, logger),
            config,
        })
    }

    /// Create a client from a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(Configuration::from_file(path)?)
    }

    /// Create a client from `KHALTI_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(Configuration::from_env()?)
    }

    /// E-payment service
    pub fn e_payment(&self) -> &EPaymentService {
        &self.e_payment
    }

    /// Wallet payment service
    pub fn wallet(&self) -> &WalletService {
        &self.wallet
    }

    /// Merchant transaction service
    pub fn transaction(&self) -> &TransactionService {
        &self.transaction
    }

    /// Current configuration
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Switch environment; later calls go to the new base URL
    pub fn set_environment(&mut self, environment: Environment) -> Result<()> {
        let config = self.config.clone().with_environment(environment);
        *self = Self::new(config)?;
        Ok(())
    }

    /// Replace the merchant secret key
    pub fn set_secret_key(&mut self, secret_key: impl Into<String>) -> Result<()> {
        let secret_key = secret_key.into();
        if secret_key.is_empty() {
            return Err(KhaltiError::config("Secret key is required"));
        }

        let mut config = self.config.clone();
        config.secret_key = secret_key;
        *self = Self::new(config)?;
        Ok(())
    }

    /// Replace the merchant public key
    pub fn set_public_key(&mut self, public_key: impl Into<String>) -> Result<()> {
        let config = self.config.clone().with_public_key(public_key);
        *self = Self::new(config)?;
        Ok(())
    }
}
