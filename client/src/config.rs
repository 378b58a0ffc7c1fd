//! # Client Configuration
//!
//! Endpoint URLs and passthrough chain settings loaded from environment
//! variables. Configuration is validated when loaded so a bad URL fails at
//! startup rather than on the first request.
//!
//! ## Variables
//!
//! | Variable | Default |
//! |----------|---------|
//! | `API_BASE_URL` | `http://localhost:3001/api` |
//! | `USERS_API` … `AUTH_API` | `{API_BASE_URL}/{resource}` |
//! | `API_TIMEOUT_SECS` | unset (no timeout) |
//! | `TOKEN_STORE_PATH` | unset (in-memory token store) |
//!
//! Chain RPC URLs and explorer API keys are carried through untouched for the
//! front ends that need them.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use lib_utils::envs::{get_env_opt, get_env_or, get_env_parse_opt};
use reqwest::Url;

use crate::core::error::{AppError, Result};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";

/// One absolute URL per REST resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub users: String,
    pub wallets: String,
    pub transactions: String,
    pub kyc: String,
    pub liquidity: String,
    pub dashboard: String,
    pub analytics: String,
    pub auth: String,
}

impl Endpoints {
    /// Derive every endpoint from a common base URL.
    pub fn from_base(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            users: format!("{base}/users"),
            wallets: format!("{base}/wallets"),
            transactions: format!("{base}/transactions"),
            kyc: format!("{base}/kyc"),
            liquidity: format!("{base}/liquidity"),
            dashboard: format!("{base}/dashboard"),
            analytics: format!("{base}/analytics"),
            auth: format!("{base}/auth"),
        }
    }

    fn from_env(base_url: &str) -> Self {
        let defaults = Self::from_base(base_url);
        Self {
            users: get_env_or("USERS_API", defaults.users),
            wallets: get_env_or("WALLETS_API", defaults.wallets),
            transactions: get_env_or("TRANSACTIONS_API", defaults.transactions),
            kyc: get_env_or("KYC_API", defaults.kyc),
            liquidity: get_env_or("LIQUIDITY_API", defaults.liquidity),
            dashboard: get_env_or("DASHBOARD_API", defaults.dashboard),
            analytics: get_env_or("ANALYTICS_API", defaults.analytics),
            auth: get_env_or("AUTH_API", defaults.auth),
        }
    }

    fn iter(&self) -> [(&'static str, &str); 8] {
        [
            ("USERS_API", self.users.as_str()),
            ("WALLETS_API", self.wallets.as_str()),
            ("TRANSACTIONS_API", self.transactions.as_str()),
            ("KYC_API", self.kyc.as_str()),
            ("LIQUIDITY_API", self.liquidity.as_str()),
            ("DASHBOARD_API", self.dashboard.as_str()),
            ("ANALYTICS_API", self.analytics.as_str()),
            ("AUTH_API", self.auth.as_str()),
        ]
    }
}

/// Chain RPC endpoints and third-party keys. Not used by the client itself.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ChainConfig {
    pub ethereum_rpc_url: Option<String>,
    pub polygon_rpc_url: Option<String>,
    pub bsc_rpc_url: Option<String>,
    pub etherscan_api_key: Option<String>,
    pub polygonscan_api_key: Option<String>,
    pub bscscan_api_key: Option<String>,
    pub walletconnect_project_id: Option<String>,
}

impl ChainConfig {
    fn from_env() -> Self {
        Self {
            ethereum_rpc_url: get_env_opt("ETHEREUM_RPC_URL"),
            polygon_rpc_url: get_env_opt("POLYGON_RPC_URL"),
            bsc_rpc_url: get_env_opt("BSC_RPC_URL"),
            etherscan_api_key: get_env_opt("ETHERSCAN_API_KEY"),
            polygonscan_api_key: get_env_opt("POLYGONSCAN_API_KEY"),
            bscscan_api_key: get_env_opt("BSCSCAN_API_KEY"),
            walletconnect_project_id: get_env_opt("WALLETCONNECT_PROJECT_ID"),
        }
    }
}

// API keys stay out of logs.
impl fmt::Debug for ChainConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(value: &Option<String>) -> &'static str {
            if value.is_some() {
                "<set>"
            } else {
                "<unset>"
            }
        }

        f.debug_struct("ChainConfig")
            .field("ethereum_rpc_url", &self.ethereum_rpc_url)
            .field("polygon_rpc_url", &self.polygon_rpc_url)
            .field("bsc_rpc_url", &self.bsc_rpc_url)
            .field("etherscan_api_key", &redact(&self.etherscan_api_key))
            .field("polygonscan_api_key", &redact(&self.polygonscan_api_key))
            .field("bscscan_api_key", &redact(&self.bscscan_api_key))
            .field("walletconnect_project_id", &redact(&self.walletconnect_project_id))
            .finish()
    }
}

/// Complete client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub endpoints: Endpoints,
    /// Per-request timeout. `None` means requests wait indefinitely.
    pub request_timeout: Option<Duration>,
    /// Where the session token is persisted. `None` keeps it in memory.
    pub token_store_path: Option<PathBuf>,
    pub chain: ChainConfig,
}

impl ClientConfig {
    /// Configuration with every endpoint derived from `base_url` and nothing else set.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let api_base_url = base_url.into();
        Self {
            endpoints: Endpoints::from_base(&api_base_url),
            api_base_url,
            request_timeout: None,
            token_store_path: None,
            chain: ChainConfig::default(),
        }
    }

    /// Load configuration from environment variables and validate it.
    pub fn from_env() -> Result<Self> {
        let api_base_url = get_env_or("API_BASE_URL", DEFAULT_API_BASE_URL);

        let request_timeout = match get_env_parse_opt::<u64>("API_TIMEOUT_SECS")? {
            Some(0) => return Err(AppError::Config("API_TIMEOUT_SECS must be greater than 0".to_string())),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        let config = Self {
            endpoints: Endpoints::from_env(&api_base_url),
            api_base_url,
            request_timeout,
            token_store_path: get_env_opt("TOKEN_STORE_PATH").map(PathBuf::from),
            chain: ChainConfig::from_env(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Every URL must be absolute `http` or `https`.
    pub fn validate(&self) -> Result<()> {
        validate_url("API_BASE_URL", &self.api_base_url)?;
        for (name, url) in self.endpoints.iter() {
            validate_url(name, url)?;
        }
        for (name, url) in [
            ("ETHEREUM_RPC_URL", &self.chain.ethereum_rpc_url),
            ("POLYGON_RPC_URL", &self.chain.polygon_rpc_url),
            ("BSC_RPC_URL", &self.chain.bsc_rpc_url),
        ] {
            if let Some(url) = url {
                validate_url(name, url)?;
            }
        }
        Ok(())
    }
}

fn validate_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|e| AppError::Config(format!("{name} is not a valid URL ({value}): {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::Config(format!("{name} must use http or https, got {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_derive_from_base() {
        let endpoints = Endpoints::from_base("https://api.wallet.example.com/api/");
        assert_eq!(endpoints.users, "https://api.wallet.example.com/api/users");
        assert_eq!(endpoints.kyc, "https://api.wallet.example.com/api/kyc");
        assert_eq!(endpoints.auth, "https://api.wallet.example.com/api/auth");
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::with_base_url(DEFAULT_API_BASE_URL);
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.token_store_path, None);
    }

    #[test]
    fn test_rejects_relative_and_non_http_urls() {
        let mut config = ClientConfig::with_base_url(DEFAULT_API_BASE_URL);
        config.endpoints.users = "/api/users".to_string();
        assert!(matches!(config.validate(), Err(AppError::Config(msg)) if msg.starts_with("USERS_API")));

        let mut config = ClientConfig::with_base_url(DEFAULT_API_BASE_URL);
        config.chain.ethereum_rpc_url = Some("wss://mainnet.example.org".to_string());
        assert!(matches!(config.validate(), Err(AppError::Config(msg)) if msg.contains("http or https")));
    }

    // Steps share one test because these variable names are process-wide and
    // nothing else in this crate reads them.
    #[test]
    fn test_from_env() {
        const VARS: [&str; 11] = [
            "API_BASE_URL",
            "USERS_API",
            "WALLETS_API",
            "TRANSACTIONS_API",
            "KYC_API",
            "LIQUIDITY_API",
            "DASHBOARD_API",
            "ANALYTICS_API",
            "AUTH_API",
            "API_TIMEOUT_SECS",
            "TOKEN_STORE_PATH",
        ];
        for var in VARS {
            std::env::remove_var(var);
        }

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.endpoints.users, "http://localhost:3001/api/users");
        assert_eq!(config.request_timeout, None);

        std::env::set_var("API_BASE_URL", "https://api.wallet.example.com/v1");
        std::env::set_var("USERS_API", "https://users.internal.example.com/users");
        std::env::set_var("API_TIMEOUT_SECS", "15");
        std::env::set_var("TOKEN_STORE_PATH", "/tmp/wallet-session.json");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.endpoints.users, "https://users.internal.example.com/users");
        assert_eq!(config.endpoints.kyc, "https://api.wallet.example.com/v1/kyc");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.token_store_path, Some(PathBuf::from("/tmp/wallet-session.json")));

        std::env::set_var("API_TIMEOUT_SECS", "0");
        assert!(matches!(ClientConfig::from_env(), Err(AppError::Config(msg)) if msg.contains("API_TIMEOUT_SECS")));

        std::env::set_var("API_TIMEOUT_SECS", "fifteen");
        assert!(matches!(ClientConfig::from_env(), Err(AppError::Config(msg)) if msg.contains("API_TIMEOUT_SECS")));

        std::env::remove_var("API_TIMEOUT_SECS");
        std::env::set_var("API_BASE_URL", "not a url");
        assert!(matches!(ClientConfig::from_env(), Err(AppError::Config(msg)) if msg.starts_with("API_BASE_URL")));

        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_debug_redacts_keys() {
        let chain = ChainConfig {
            etherscan_api_key: Some("ABCDEF123".to_string()),
            ..Default::default()
        };
        let rendered = format!("{chain:?}");
        assert!(!rendered.contains("ABCDEF123"));
        assert!(rendered.contains("<set>"));
    }
}
