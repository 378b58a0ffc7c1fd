//! Custodial wallets and their token balances.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::query::{push_filter, Filters, Pagination};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Decimal string, kept verbatim to avoid float rounding.
    pub balance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd_value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub user_id: String,
    pub address: String,
    pub network: String,
    pub balance: String,
    pub currency: String,
    #[serde(default)]
    pub tokens: Vec<TokenBalance>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletFilters {
    pub search: Option<String>,
    pub user_id: Option<String>,
    pub network: Option<String>,
    pub is_active: Option<bool>,
}

impl Filters for WalletFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_filter(&mut pairs, "search", &self.search);
        push_filter(&mut pairs, "userId", &self.user_id);
        push_filter(&mut pairs, "network", &self.network);
        push_filter(&mut pairs, "isActive", &self.is_active);
        pairs
    }
}

/// `GET /wallets` response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletsResponse {
    pub wallets: Vec<Wallet>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateWalletRequest {
    pub network: String,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWalletStatusRequest {
    pub is_active: bool,
}
