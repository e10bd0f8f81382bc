//! API environment selection

use super::constants::{LIVE_BASE_URL, SANDBOX_BASE_URL};
use crate::KhaltiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Khalti environment a client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Test environment at dev.khalti.com
    #[default]
    Sandbox,
    /// Production environment
    Live,
}

impl Environment {
    /// Get the environment identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Live => "live",
        }
    }

    /// Get the API base URL for this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_BASE_URL,
            Environment::Live => LIVE_BASE_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = KhaltiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sandbox" => Ok(Environment::Sandbox),
            "live" => Ok(Environment::Live),
            other => Err(KhaltiError::config(format!(
                "Invalid environment: {}. Must be 'live' or 'sandbox'",
                other
            ))),
        }
    }
}
