//! # Analytics Endpoints

use async_trait::async_trait;
use shared::dto::{AnalyticsOverview, TimeRange};

use super::client::ApiClient;
use crate::core::error::ApiError;
use crate::core::service::AnalyticsApi;

/// Get chart series for `range`.
#[tracing::instrument(skip(client), fields(range = %range))]
pub async fn get_overview(client: &ApiClient, range: TimeRange) -> Result<AnalyticsOverview, ApiError> {
    let url = ApiClient::endpoint(&client.endpoints().analytics)?;
    client
        .get(url, &[("range", range.to_string())], "Failed to fetch analytics")
        .await
}

#[async_trait]
impl AnalyticsApi for ApiClient {
    async fn get_overview(&self, range: TimeRange) -> Result<AnalyticsOverview, ApiError> {
        get_overview(self, range).await
    }
}
