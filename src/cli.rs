//! Command-line front end
//!
//! Backs the `khalti` binary. Arguments are parsed into a [`Command`] before
//! any configuration is read, so bad input fails without touching the network.

use crate::types::TransactionFilters;
use crate::{Khalti, KhaltiError, Result};
use serde_json::Value;
use std::str::FromStr;

/// Usage text printed for `help`
pub const USAGE: &str = "\
Usage: khalti <command> [args]

Commands:
   lookup <pidx>                     Look up an e-payment
   status <pidx>                     Check e-payment status
   transactions [page] [page_size]   List merchant transactions
   transaction <idx>                 Show one merchant transaction
   wallet-verify <token> <amount>    Verify a wallet payment (amount in paisa)

Environment variables:
   KHALTI_SECRET_KEY   Merchant secret key (required)
   KHALTI_PUBLIC_KEY   Merchant public key
   KHALTI_ENVIRONMENT  sandbox (default) or live
   KHALTI_TIMEOUT      Request timeout in seconds (default: 30, 0 disables)
   KHALTI_LOG_ENABLED  Write the SDK log file (default: false)
   KHALTI_LOG_PATH     Log file path (default: logs/khalti.log)
   KHALTI_LOG_LEVEL    debug, info, warning, error or critical
   KHALTI_BASE_URL     Override the API base URL";

/// A parsed `khalti` invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print [`USAGE`]
    Help,
    Lookup { pidx: String },
    Status { pidx: String },
    Transactions { filters: TransactionFilters },
    Transaction { idx: String },
    WalletVerify { token: String, amount: u64 },
}

impl Command {
    /// Parse the arguments that follow the program name
    pub fn parse(args: &[String]) -> Result<Self> {
        let arg = |i: usize, name: &str| {
            args.get(i)
                .cloned()
                .ok_or_else(|| KhaltiError::missing_field(name))
        };

        let command = match args.first().map(String::as_str) {
            None | Some("help") | Some("--help") | Some("-h") => Self::Help,
            Some("lookup") => Self::Lookup {
                pidx: arg(1, "pidx")?,
            },
            Some("status") => Self::Status {
                pidx: arg(1, "pidx")?,
            },
            Some("transactions") => {
                let mut filters = TransactionFilters::new();
                if let Some(page) = args.get(1) {
                    filters = filters.with_page(parse_number(page, "page")?);
                }
                if let Some(page_size) = args.get(2) {
                    filters = filters.with_page_size(parse_number(page_size, "page_size")?);
                }
                Self::Transactions { filters }
            }
            Some("transaction") => Self::Transaction {
                idx: arg(1, "idx")?,
            },
            Some("wallet-verify") => Self::WalletVerify {
                token: arg(1, "token")?,
                amount: parse_number(&arg(2, "amount")?, "amount")?,
            },
            Some(other) => {
                return Err(KhaltiError::validation(
                    "command",
                    format!("Unknown command: {}\n\n{}", other, USAGE),
                ))
            }
        };

        Ok(command)
    }

    /// Run the command against `khalti`
    ///
    /// `Help` has nothing to send and returns the usage text as a JSON string.
    pub async fn execute(&self, khalti: &Khalti) -> Result<Value> {
        match self {
            Self::Help => Ok(Value::String(USAGE.to_string())),
            Self::Lookup { pidx } => khalti.e_payment().verify(pidx).await,
            Self::Status { pidx } => khalti.e_payment().status(pidx).await,
            Self::Transactions { filters } => khalti.transaction().list(filters).await,
            Self::Transaction { idx } => khalti.transaction().find(idx).await,
            Self::WalletVerify { token, amount } => khalti.wallet().verify(token, *amount).await,
        }
    }
}

fn parse_number<T: FromStr>(value: &str, field: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| KhaltiError::validation(field, format!("{} must be a number", field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Configuration;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(&[]).unwrap(), Command::Help);
        assert_eq!(Command::parse(&args(&["--help"])).unwrap(), Command::Help);
        assert_eq!(
            Command::parse(&args(&["lookup", "bZQLD9wRVWo4CdESSfuSsB"])).unwrap(),
            Command::Lookup {
                pidx: "bZQLD9wRVWo4CdESSfuSsB".to_string()
            }
        );
        assert_eq!(
            Command::parse(&args(&["wallet-verify", "tok", "1000"])).unwrap(),
            Command::WalletVerify {
                token: "tok".to_string(),
                amount: 1000
            }
        );
        assert_eq!(
            Command::parse(&args(&["transactions", "2", "50"])).unwrap(),
            Command::Transactions {
                filters: TransactionFilters::new().with_page(2).with_page_size(50)
            }
        );
    }

    #[test]
    fn test_parse_non_numeric_amount() {
        let err = Command::parse(&args(&["wallet-verify", "t", "abc"])).unwrap_err();
        assert_eq!(err.field(), Some("amount"));
        assert!(err.to_string().contains("amount must be a number"));
    }

    #[test]
    fn test_parse_non_numeric_page() {
        let err = Command::parse(&args(&["transactions", "first"])).unwrap_err();
        assert_eq!(err.field(), Some("page"));
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = Command::parse(&args(&["refund", "abc"])).unwrap_err();
        assert_eq!(err.field(), Some("command"));
        assert!(err.to_string().contains("Unknown command: refund"));
    }

    #[test]
    fn test_parse_missing_arguments() {
        let err = Command::parse(&args(&["lookup"])).unwrap_err();
        assert_eq!(err.field(), Some("pidx"));

        let err = Command::parse(&args(&["transaction"])).unwrap_err();
        assert_eq!(err.field(), Some("idx"));

        let err = Command::parse(&args(&["wallet-verify", "tok"])).unwrap_err();
        assert_eq!(err.field(), Some("amount"));
    }

    #[tokio::test]
    async fn test_execute_lookup() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/epayment/lookup/")
            .match_header("authorization", "Key test_secret_key")
            .match_body(Matcher::Json(json!({"pidx": "abc"})))
            .with_status(200)
            .with_body(json!({"pidx": "abc", "status": "Completed"}).to_string())
            .create_async()
            .await;

        let config = Configuration::new("test_secret_key")
            .unwrap()
            .with_base_url(server.url());
        let khalti = Khalti::new(config).unwrap();

        let command = Command::parse(&args(&["lookup", "abc"])).unwrap();
        let response = command.execute(&khalti).await.unwrap();
        mock.assert_async().await;
        assert_eq!(response["status"], "Completed");
    }

    #[tokio::test]
    async fn test_execute_help_sends_nothing() {
        let config = Configuration::new("test_secret_key")
            .unwrap()
            .with_base_url("http://127.0.0.1:1");
        let khalti = Khalti::new(config).unwrap();

        let response = Command::Help.execute(&khalti).await.unwrap();
        assert_eq!(response, Value::String(USAGE.to_string()));
    }
}
