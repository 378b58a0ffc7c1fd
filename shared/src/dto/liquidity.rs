//! Liquidity pools managed from the admin dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::query::{push_filter, Filters, Pagination};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolStatus {
    Active,
    Paused,
}

impl PoolStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PoolStatus::Active => "active",
            PoolStatus::Paused => "paused",
        }
    }
}

impl fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoolToken {
    pub symbol: String,
    pub address: String,
    pub decimals: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPair {
    pub token0: PoolToken,
    pub token1: PoolToken,
}

impl TokenPair {
    /// Display label such as `ETH/USDC`.
    pub fn label(&self) -> String {
        format!("{}/{}", self.token0.symbol, self.token1.symbol)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityPool {
    pub id: String,
    pub name: String,
    pub token_pair: TokenPair,
    /// Total value locked, in USD.
    pub tvl: f64,
    /// Annual percentage yield, as a percentage (12.5 = 12.5%).
    pub apy: f64,
    #[serde(rename = "volume24h", default)]
    pub volume_24h: f64,
    #[serde(rename = "fees24h", default)]
    pub fees_24h: f64,
    pub network: String,
    pub status: PoolStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolFilters {
    pub search: Option<String>,
    pub network: Option<String>,
    pub status: Option<PoolStatus>,
}

impl Filters for PoolFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_filter(&mut pairs, "search", &self.search);
        push_filter(&mut pairs, "network", &self.network);
        push_filter(&mut pairs, "status", &self.status);
        pairs
    }
}

/// `GET /liquidity` response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PoolsResponse {
    pub pools: Vec<LiquidityPool>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePoolRequest {
    pub name: String,
    pub token_pair: TokenPair,
    pub network: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePoolRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PoolStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apy: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_parses_24h_metrics() {
        let pool: LiquidityPool = serde_json::from_str(
            r#"{
                "id": "p1",
                "name": "ETH/USDC 0.3%",
                "tokenPair": {
                    "token0": {"symbol": "ETH", "address": "0x0", "decimals": 18},
                    "token1": {"symbol": "USDC", "address": "0x1", "decimals": 6}
                },
                "tvl": 1250000.5,
                "apy": 12.4,
                "volume24h": 340000.0,
                "fees24h": 1020.0,
                "network": "ethereum",
                "status": "active",
                "createdAt": "2023-11-20T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(pool.token_pair.label(), "ETH/USDC");
        assert_eq!(pool.volume_24h, 340000.0);
        assert_eq!(pool.token_pair.token1.decimals, 6);
    }
}
