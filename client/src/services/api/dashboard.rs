//! # Dashboard Endpoints
//!
//! Headline metrics and the recent-activity feed for the admin home screen.

use async_trait::async_trait;
use shared::dto::{ActivityItem, ActivityResponse, DashboardMetrics};

use super::client::ApiClient;
use crate::core::error::ApiError;
use crate::core::service::DashboardApi;

/// Get headline metrics.
#[tracing::instrument(skip(client))]
pub async fn get_metrics(client: &ApiClient) -> Result<DashboardMetrics, ApiError> {
    let url = ApiClient::resource_url(&client.endpoints().dashboard, &["metrics"])?;
    client.get(url, &[], "Failed to fetch dashboard metrics").await
}

/// Get the newest `limit` activity entries.
#[tracing::instrument(skip(client))]
pub async fn get_recent_activity(client: &ApiClient, limit: u32) -> Result<Vec<ActivityItem>, ApiError> {
    let url = ApiClient::resource_url(&client.endpoints().dashboard, &["activity"])?;
    let response: ActivityResponse = client
        .get(url, &[("limit", limit.to_string())], "Failed to fetch recent activity")
        .await?;
    Ok(response.activities)
}

#[async_trait]
impl DashboardApi for ApiClient {
    async fn get_metrics(&self) -> Result<DashboardMetrics, ApiError> {
        get_metrics(self).await
    }

    async fn get_recent_activity(&self, limit: u32) -> Result<Vec<ActivityItem>, ApiError> {
        get_recent_activity(self, limit).await
    }
}
