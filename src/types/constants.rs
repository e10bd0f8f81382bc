//! Base URLs and endpoint paths of the Khalti API

/// Sandbox API base URL
pub const SANDBOX_BASE_URL: &str = "https://dev.khalti.com/api/v2";

/// Live API base URL
pub const LIVE_BASE_URL: &str = "https://khalti.com/api/v2";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default log file location
pub const DEFAULT_LOG_PATH: &str = "logs/khalti.log";

/// Endpoint paths, relative to the base URL
pub mod endpoints {
    /// Start a redirect-based e-payment
    pub const EPAYMENT_INITIATE: &str = "/epayment/initiate/";
    /// Look up (verify) an e-payment by pidx
    pub const EPAYMENT_LOOKUP: &str = "/epayment/lookup/";
    /// Check the status of an e-payment by pidx
    pub const EPAYMENT_STATUS: &str = "/epayment/status/";
    /// Start a wallet payment
    pub const WALLET_INITIATE: &str = "/payment/initiate/";
    /// Verify a wallet payment token
    pub const WALLET_VERIFY: &str = "/payment/verify/";
    /// Merchant transaction listing
    pub const MERCHANT_TRANSACTIONS: &str = "/merchant-transaction/";

    /// Path of a single merchant transaction
    ///
    /// `idx` is percent-encoded so it always stays one path segment.
    pub fn merchant_transaction(idx: &str) -> String {
        use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

        format!(
            "{}{}/",
            MERCHANT_TRANSACTIONS,
            utf8_percent_encode(idx, NON_ALPHANUMERIC)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::endpoints;

    #[test]
    fn test_merchant_transaction_path() {
        assert_eq!(
            endpoints::merchant_transaction("GFq9PFS7b2iYvL8Lir9oXe"),
            "/merchant-transaction/GFq9PFS7b2iYvL8Lir9oXe/"
        );
    }

    #[test]
    fn test_merchant_transaction_path_is_single_segment() {
        assert_eq!(
            endpoints::merchant_transaction("../a b"),
            "/merchant-transaction/%2E%2E%2Fa%20b/"
        );
    }
}
