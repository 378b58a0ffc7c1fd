//! # Wallet Endpoints
//!
//! Admins browse and freeze wallets; mobile users list their own and open new ones.

use async_trait::async_trait;
use shared::dto::{
    CreateWalletRequest, ListQuery, Page, UpdateWalletStatusRequest, Wallet, WalletFilters, WalletsResponse,
};

use super::client::ApiClient;
use crate::core::error::ApiError;
use crate::core::service::{ListSource, WalletsApi};

/// List wallets matching `query`.
#[tracing::instrument(skip(client, query), fields(page = query.page, limit = query.limit))]
pub async fn list_wallets(client: &ApiClient, query: &ListQuery<WalletFilters>) -> Result<WalletsResponse, ApiError> {
    let url = ApiClient::endpoint(&client.endpoints().wallets)?;
    client.get(url, &query.to_query_pairs(), "Failed to fetch wallets").await
}

/// Get a single wallet with its token balances.
pub async fn get_wallet(client: &ApiClient, id: &str) -> Result<Wallet, ApiError> {
    let url = ApiClient::resource_url(&client.endpoints().wallets, &[id])?;
    client.get(url, &[], "Failed to fetch wallet details").await
}

/// Open a new wallet on `request.network`.
#[tracing::instrument(skip(client, request), fields(network = %request.network, currency = %request.currency))]
pub async fn create_wallet(client: &ApiClient, request: &CreateWalletRequest) -> Result<Wallet, ApiError> {
    let url = ApiClient::endpoint(&client.endpoints().wallets)?;
    client.post(url, request, "Failed to create wallet").await
}

/// Freeze (`active = false`) or unfreeze a wallet.
#[tracing::instrument(skip(client))]
pub async fn set_wallet_active(client: &ApiClient, id: &str, active: bool) -> Result<Wallet, ApiError> {
    let url = ApiClient::resource_url(&client.endpoints().wallets, &[id, "status"])?;
    client
        .put(url, &UpdateWalletStatusRequest { is_active: active }, "Failed to update wallet status")
        .await
}

#[async_trait]
impl ListSource<Wallet, WalletFilters> for ApiClient {
    async fn list(&self, query: &ListQuery<WalletFilters>) -> Result<Page<Wallet>, ApiError> {
        let response = list_wallets(self, query).await?;
        Ok(Page {
            items: response.wallets,
            pagination: response.pagination,
        })
    }

    async fn get(&self, id: &str) -> Result<Wallet, ApiError> {
        get_wallet(self, id).await
    }
}

#[async_trait]
impl WalletsApi for ApiClient {
    async fn create_wallet(&self, request: &CreateWalletRequest) -> Result<Wallet, ApiError> {
        create_wallet(self, request).await
    }

    async fn set_wallet_active(&self, id: &str, active: bool) -> Result<Wallet, ApiError> {
        set_wallet_active(self, id, active).await
    }
}
