//! # Transaction Endpoints
//!
//! Transaction history, sending from the mobile wallet, and admin status overrides.

use async_trait::async_trait;
use shared::dto::{
    ListQuery, Page, SendTransactionRequest, Transaction, TransactionFilters, TransactionStatus,
    TransactionsResponse, UpdateTransactionStatusRequest,
};

use super::client::ApiClient;
use crate::core::error::ApiError;
use crate::core::service::{ListSource, TransactionsApi};

/// List transactions matching `query`.
#[tracing::instrument(skip(client, query), fields(page = query.page, limit = query.limit))]
pub async fn list_transactions(
    client: &ApiClient,
    query: &ListQuery<TransactionFilters>,
) -> Result<TransactionsResponse, ApiError> {
    let url = ApiClient::endpoint(&client.endpoints().transactions)?;
    client.get(url, &query.to_query_pairs(), "Failed to fetch transactions").await
}

/// Get a single transaction.
pub async fn get_transaction(client: &ApiClient, id: &str) -> Result<Transaction, ApiError> {
    let url = ApiClient::resource_url(&client.endpoints().transactions, &[id])?;
    client.get(url, &[], "Failed to fetch transaction details").await
}

/// Send funds from one of the user's wallets.
#[tracing::instrument(skip(client, request), fields(
    wallet_id = %request.wallet_id,
    token = %request.token,
    network = %request.network,
    amount = %request.amount
))]
pub async fn send_transaction(client: &ApiClient, request: &SendTransactionRequest) -> Result<Transaction, ApiError> {
    tracing::info!("Submitting transaction");
    let url = ApiClient::endpoint(&client.endpoints().transactions)?;
    client.post(url, request, "Failed to send transaction").await
}

/// Override a transaction's status (admin reconciliation).
#[tracing::instrument(skip(client), fields(status = %status))]
pub async fn update_transaction_status(
    client: &ApiClient,
    id: &str,
    status: TransactionStatus,
) -> Result<Transaction, ApiError> {
    let url = ApiClient::resource_url(&client.endpoints().transactions, &[id, "status"])?;
    client
        .put(url, &UpdateTransactionStatusRequest { status }, "Failed to update transaction status")
        .await
}

#[async_trait]
impl ListSource<Transaction, TransactionFilters> for ApiClient {
    async fn list(&self, query: &ListQuery<TransactionFilters>) -> Result<Page<Transaction>, ApiError> {
        let response = list_transactions(self, query).await?;
        Ok(Page {
            items: response.transactions,
            pagination: response.pagination,
        })
    }

    async fn get(&self, id: &str) -> Result<Transaction, ApiError> {
        get_transaction(self, id).await
    }
}

#[async_trait]
impl TransactionsApi for ApiClient {
    async fn send_transaction(&self, request: &SendTransactionRequest) -> Result<Transaction, ApiError> {
        send_transaction(self, request).await
    }

    async fn update_transaction_status(&self, id: &str, status: TransactionStatus) -> Result<Transaction, ApiError> {
        update_transaction_status(self, id, status).await
    }
}
