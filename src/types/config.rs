//! Client configuration

use super::constants::{DEFAULT_LOG_PATH, DEFAULT_TIMEOUT_SECS};
use super::environment::Environment;
use crate::{KhaltiError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Severity of a log record, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Get the level name as written to the log file
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = KhaltiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "critical" => Ok(LogLevel::Critical),
            _ => Err(KhaltiError::config(format!("Invalid log level: {}", s))),
        }
    }
}

/// Khalti client configuration
///
/// Built with [`Configuration::new`] and the `with_*` methods, or loaded with
/// [`Configuration::from_file`] / [`Configuration::from_env`].
#[derive(Clone)]
pub struct Configuration {
    /// Target environment
    pub environment: Environment,
    /// Merchant secret key, sent as `Authorization: Key <secret_key>`
    pub secret_key: String,
    /// Merchant public key, used by wallet payments
    pub public_key: Option<String>,
    /// Request timeout; zero disables it
    pub timeout: Duration,
    /// Whether the file logger writes anything
    pub logging_enabled: bool,
    /// Log file location
    pub log_path: PathBuf,
    /// Minimum level written to the log file
    pub log_level: LogLevel,
    /// Overrides the environment's base URL
    pub base_url: Option<String>,
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("environment", &self.environment)
            .field("secret_key", &"<redacted>")
            .field("public_key", &self.public_key)
            .field("timeout", &self.timeout)
            .field("logging_enabled", &self.logging_enabled)
            .field("log_path", &self.log_path)
            .field("log_level", &self.log_level)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Configuration {
    /// Create a sandbox configuration with default settings
    pub fn new(secret_key: impl Into<String>) -> Result<Self> {
        let config = Self {
            environment: Environment::default(),
            secret_key: secret_key.into(),
            public_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            logging_enabled: false,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            log_level: LogLevel::default(),
            base_url: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    ///
    /// Keys follow the Khalti SDK convention: `environment`, `secretKey`,
    /// `publicKey`, `timeout` (seconds), `enableLogging`, `logPath`, `logLevel`
    /// and `baseUrl`. Unknown keys are ignored.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(KhaltiError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path)?;
        let file: ConfigFile = serde_json::from_str(&contents)?;
        file.try_into()
    }

    /// Load configuration from `KHALTI_*` environment variables
    ///
    /// `KHALTI_SECRET_KEY` is required; `KHALTI_PUBLIC_KEY`, `KHALTI_ENVIRONMENT`,
    /// `KHALTI_TIMEOUT`, `KHALTI_LOG_ENABLED`, `KHALTI_LOG_PATH`,
    /// `KHALTI_LOG_LEVEL` and `KHALTI_BASE_URL` are optional.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("KHALTI_SECRET_KEY").unwrap_or_default();
        let mut config = Self::new(secret_key)?;

        if let Some(environment) = lookup("KHALTI_ENVIRONMENT") {
            config.environment = environment.parse()?;
        }
        if let Some(public_key) = lookup("KHALTI_PUBLIC_KEY").filter(|k| !k.is_empty()) {
            config.public_key = Some(public_key);
        }
        if let Some(timeout) = lookup("KHALTI_TIMEOUT") {
            let secs: u64 = timeout.trim().parse().map_err(|_| {
                KhaltiError::config(format!("Invalid KHALTI_TIMEOUT: {}", timeout))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(enabled) = lookup("KHALTI_LOG_ENABLED") {
            config.logging_enabled = parse_flag("KHALTI_LOG_ENABLED", &enabled)?;
        }
        if let Some(path) = lookup("KHALTI_LOG_PATH").filter(|p| !p.is_empty()) {
            config.log_path = PathBuf::from(path);
        }
        if let Some(level) = lookup("KHALTI_LOG_LEVEL") {
            config.log_level = level.parse()?;
        }
        if let Some(base_url) = lookup("KHALTI_BASE_URL").filter(|u| !u.is_empty()) {
            config.base_url = Some(base_url);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.secret_key.is_empty() {
            return Err(KhaltiError::config("Secret key is required"));
        }

        if let Some(base_url) = &self.base_url {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(KhaltiError::config(
                    "Base URL must start with http:// or https://",
                ));
            }
            url::Url::parse(base_url)
                .map_err(|e| KhaltiError::config(format!("Invalid base URL: {}", e)))?;
        }

        Ok(())
    }

    /// Get the API base URL for the configured environment
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }

    /// Set the environment
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Set the merchant public key
    pub fn with_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = Some(public_key.into());
        self
    }

    /// Set the request timeout (`Duration::ZERO` waits indefinitely)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable the file logger
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.logging_enabled = enabled;
        self
    }

    /// Set the log file path
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    /// Set the minimum log level
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Send requests to `base_url` instead of the environment's URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// On-disk configuration layout
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    environment: Option<String>,
    secret_key: Option<String>,
    public_key: Option<String>,
    timeout: Option<u64>,
    enable_logging: Option<bool>,
    log_path: Option<PathBuf>,
    log_level: Option<String>,
    base_url: Option<String>,
}

impl TryFrom<ConfigFile> for Configuration {
    type Error = KhaltiError;

    fn try_from(file: ConfigFile) -> Result<Self> {
        let mut config = Configuration::new(file.secret_key.unwrap_or_default())?;

        if let Some(environment) = file.environment {
            config.environment = environment.parse()?;
        }
        config.public_key = file.public_key.filter(|k| !k.is_empty());
        if let Some(timeout) = file.timeout {
            config.timeout = Duration::from_secs(timeout);
        }
        if let Some(enabled) = file.enable_logging {
            config.logging_enabled = enabled;
        }
        if let Some(path) = file.log_path {
            config.log_path = path;
        }
        if let Some(level) = file.log_level {
            config.log_level = level.parse()?;
        }
        config.base_url = file.base_url;

        config.validate()?;
        Ok(config)
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(KhaltiError::config(format!("Invalid {}: {}", name, value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Configuration::new("test_secret_key").unwrap();

        assert_eq!(config.environment, Environment::Sandbox);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.logging_enabled);
        assert_eq!(config.log_path, PathBuf::from("logs/khalti.log"));
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.base_url(), "https://dev.khalti.com/api/v2");
    }

    #[test]
    fn test_empty_secret_key_rejected() {
        let err = Configuration::new("").unwrap_err();
        assert!(matches!(err, KhaltiError::Config { .. }));
        assert!(err.to_string().contains("Secret key is required"));
    }

    #[test]
    fn test_base_url_follows_environment() {
        let config = Configuration::new("key")
            .unwrap()
            .with_environment(Environment::Live);
        assert_eq!(config.base_url(), "https://khalti.com/api/v2");

        let config = config.with_environment(Environment::Sandbox);
        assert_eq!(config.base_url(), "https://dev.khalti.com/api/v2");
    }

    #[test]
    fn test_base_url_override() {
        let config = Configuration::new("key")
            .unwrap()
            .with_environment(Environment::Live)
            .with_base_url("http://127.0.0.1:8080");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
        assert!(config.validate().is_ok());

        let config = config.with_base_url("ftp://example.com");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_secret_key() {
        let config = Configuration::new("live_secret_key_123").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("live_secret_key_123"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_log_level_ordering_and_parsing() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Critical);
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_from_lookup() {
        let config = Configuration::from_lookup(lookup_from(&[
            ("KHALTI_SECRET_KEY", "secret"),
            ("KHALTI_PUBLIC_KEY", "public"),
            ("KHALTI_ENVIRONMENT", "live"),
            ("KHALTI_TIMEOUT", "10"),
            ("KHALTI_LOG_ENABLED", "true"),
            ("KHALTI_LOG_PATH", "/tmp/khalti.log"),
            ("KHALTI_LOG_LEVEL", "debug"),
            ("KHALTI_BASE_URL", "http://127.0.0.1:8080/api/v2"),
        ]))
        .unwrap();

        assert_eq!(config.secret_key, "secret");
        assert_eq!(config.public_key.as_deref(), Some("public"));
        assert_eq!(config.environment, Environment::Live);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.logging_enabled);
        assert_eq!(config.log_path, PathBuf::from("/tmp/khalti.log"));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.base_url.as_deref(), Some("http://127.0.0.1:8080/api/v2"));
        assert_eq!(config.base_url(), "http://127.0.0.1:8080/api/v2");
    }

    #[test]
    fn test_from_lookup_base_url() {
        // Empty means unset
        let config = Configuration::from_lookup(lookup_from(&[
            ("KHALTI_SECRET_KEY", "secret"),
            ("KHALTI_BASE_URL", ""),
        ]))
        .unwrap();
        assert_eq!(config.base_url, None);
        assert_eq!(config.base_url(), "https://dev.khalti.com/api/v2");

        let err = Configuration::from_lookup(lookup_from(&[
            ("KHALTI_SECRET_KEY", "secret"),
            ("KHALTI_BASE_URL", "dev.khalti.com/api/v2"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("Base URL must start with http:// or https://"));
    }

    #[test]
    fn test_from_lookup_zero_timeout() {
        let config = Configuration::from_lookup(lookup_from(&[
            ("KHALTI_SECRET_KEY", "secret"),
            ("KHALTI_TIMEOUT", "0"),
        ]))
        .unwrap();
        assert!(config.timeout.is_zero());
    }

    #[test]
    fn test_from_lookup_requires_secret_key() {
        let err = Configuration::from_lookup(lookup_from(&[("KHALTI_ENVIRONMENT", "live")]))
            .unwrap_err();
        assert!(err.to_string().contains("Secret key is required"));
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        let bad_env = Configuration::from_lookup(lookup_from(&[
            ("KHALTI_SECRET_KEY", "secret"),
            ("KHALTI_ENVIRONMENT", "staging"),
        ]));
        assert!(bad_env.is_err());

        let bad_timeout = Configuration::from_lookup(lookup_from(&[
            ("KHALTI_SECRET_KEY", "secret"),
            ("KHALTI_TIMEOUT", "soon"),
        ]));
        assert!(bad_timeout.is_err());

        let bad_flag = Configuration::from_lookup(lookup_from(&[
            ("KHALTI_SECRET_KEY", "secret"),
            ("KHALTI_LOG_ENABLED", "maybe"),
        ]));
        assert!(bad_flag.is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "environment": "live",
                "secretKey": "file_secret",
                "publicKey": "file_public",
                "timeout": 5,
                "enableLogging": true,
                "logLevel": "error",
                "baseUrl": "https://proxy.example.com/khalti/api/v2",
                "unrelated": 1
            }}"#
        )
        .unwrap();

        let config = Configuration::from_file(file.path()).unwrap();
        assert_eq!(config.environment, Environment::Live);
        assert_eq!(config.secret_key, "file_secret");
        assert_eq!(config.public_key.as_deref(), Some("file_public"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.logging_enabled);
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.base_url(), "https://proxy.example.com/khalti/api/v2");
    }

    #[test]
    fn test_from_file_rejects_bad_base_url() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"secretKey": "file_secret", "baseUrl": "ftp://example.com"}}"#
        )
        .unwrap();

        let err = Configuration::from_file(file.path()).unwrap_err();
        assert!(matches!(err, KhaltiError::Config { .. }));
    }

    #[test]
    fn test_from_missing_file() {
        let err = Configuration::from_file("/nonexistent/khalti.json").unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn test_from_file_without_secret_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"environment": "sandbox"}}"#).unwrap();

        let err = Configuration::from_file(file.path()).unwrap_err();
        assert!(matches!(err, KhaltiError::Config { .. }));
    }
}
