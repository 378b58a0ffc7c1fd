//! # Liquidity Pool Endpoints

use async_trait::async_trait;
use shared::dto::{CreatePoolRequest, ListQuery, LiquidityPool, Page, PoolFilters, PoolsResponse, UpdatePoolRequest};

use super::client::ApiClient;
use crate::core::error::ApiError;
use crate::core::service::{LiquidityApi, ListSource};

/// List pools matching `query`.
#[tracing::instrument(skip(client, query), fields(page = query.page, limit = query.limit))]
pub async fn list_pools(client: &ApiClient, query: &ListQuery<PoolFilters>) -> Result<PoolsResponse, ApiError> {
    let url = ApiClient::endpoint(&client.endpoints().liquidity)?;
    client.get(url, &query.to_query_pairs(), "Failed to fetch liquidity pools").await
}

pub async fn get_pool(client: &ApiClient, id: &str) -> Result<LiquidityPool, ApiError> {
    let url = ApiClient::resource_url(&client.endpoints().liquidity, &[id])?;
    client.get(url, &[], "Failed to fetch liquidity pool").await
}

#[tracing::instrument(skip(client, request), fields(name = %request.name, network = %request.network))]
pub async fn create_pool(client: &ApiClient, request: &CreatePoolRequest) -> Result<LiquidityPool, ApiError> {
    let url = ApiClient::endpoint(&client.endpoints().liquidity)?;
    client.post(url, request, "Failed to create liquidity pool").await
}

#[tracing::instrument(skip(client, update))]
pub async fn update_pool(client: &ApiClient, id: &str, update: &UpdatePoolRequest) -> Result<LiquidityPool, ApiError> {
    let url = ApiClient::resource_url(&client.endpoints().liquidity, &[id])?;
    client.put(url, update, "Failed to update liquidity pool").await
}

#[async_trait]
impl ListSource<LiquidityPool, PoolFilters> for ApiClient {
    async fn list(&self, query: &ListQuery<PoolFilters>) -> Result<Page<LiquidityPool>, ApiError> {
        let response = list_pools(self, query).await?;
        Ok(Page {
            items: response.pools,
            pagination: response.pagination,
        })
    }

    async fn get(&self, id: &str) -> Result<LiquidityPool, ApiError> {
        get_pool(self, id).await
    }
}

#[async_trait]
impl LiquidityApi for ApiClient {
    async fn create_pool(&self, request: &CreatePoolRequest) -> Result<LiquidityPool, ApiError> {
        create_pool(self, request).await
    }

    async fn update_pool(&self, id: &str, update: &UpdatePoolRequest) -> Result<LiquidityPool, ApiError> {
        update_pool(self, id, update).await
    }
}
