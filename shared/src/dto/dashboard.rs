//! Dashboard headline metrics and the recent-activity feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_users: u64,
    pub active_users: u64,
    pub total_transactions: u64,
    /// Lifetime transaction volume in USD.
    pub transaction_volume: f64,
    pub pending_kyc: u64,
    pub total_tvl: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: String,
    /// Event category, e.g. `user_registered` or `kyc_submitted`.
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// `GET /dashboard/activity` response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityResponse {
    pub activities: Vec<ActivityItem>,
}
