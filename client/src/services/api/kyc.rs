//! # KYC Endpoints
//!
//! Review queue for admins and document submission for mobile users.

use async_trait::async_trait;
use shared::dto::{KycFilters, KycRequest, KycRequestsResponse, ListQuery, Page, RejectKycRequest, SubmitKycRequest};

use super::client::ApiClient;
use crate::core::error::ApiError;
use crate::core::service::{KycApi, ListSource};

/// List KYC requests matching `query`.
#[tracing::instrument(skip(client, query), fields(page = query.page, limit = query.limit))]
pub async fn list_kyc_requests(
    client: &ApiClient,
    query: &ListQuery<KycFilters>,
) -> Result<KycRequestsResponse, ApiError> {
    let url = ApiClient::endpoint(&client.endpoints().kyc)?;
    client.get(url, &query.to_query_pairs(), "Failed to fetch KYC requests").await
}

/// Get a single KYC request with its documents.
pub async fn get_kyc_request(client: &ApiClient, id: &str) -> Result<KycRequest, ApiError> {
    let url = ApiClient::resource_url(&client.endpoints().kyc, &[id])?;
    client.get(url, &[], "Failed to fetch KYC request").await
}

/// Approve a request.
#[tracing::instrument(skip(client))]
pub async fn approve_kyc(client: &ApiClient, id: &str) -> Result<KycRequest, ApiError> {
    tracing::info!("Approving KYC request");
    let url = ApiClient::resource_url(&client.endpoints().kyc, &[id, "approve"])?;
    client
        .put(url, &serde_json::json!({}), "Failed to approve KYC request")
        .await
}

/// Reject a request with a reason shown to the user.
#[tracing::instrument(skip(client, reason))]
pub async fn reject_kyc(client: &ApiClient, id: &str, reason: &str) -> Result<KycRequest, ApiError> {
    tracing::info!("Rejecting KYC request");
    let url = ApiClient::resource_url(&client.endpoints().kyc, &[id, "reject"])?;
    let body = RejectKycRequest {
        reason: reason.to_string(),
    };
    client.put(url, &body, "Failed to reject KYC request").await
}

/// Submit identity documents for review.
#[tracing::instrument(skip(client, request), fields(document_type = %request.document_type, documents = request.documents.len()))]
pub async fn submit_kyc(client: &ApiClient, request: &SubmitKycRequest) -> Result<KycRequest, ApiError> {
    let url = ApiClient::endpoint(&client.endpoints().kyc)?;
    client.post(url, request, "Failed to submit KYC documents").await
}

#[async_trait]
impl ListSource<KycRequest, KycFilters> for ApiClient {
    async fn list(&self, query: &ListQuery<KycFilters>) -> Result<Page<KycRequest>, ApiError> {
        let response = list_kyc_requests(self, query).await?;
        Ok(Page {
            items: response.requests,
            pagination: response.pagination,
        })
    }

    async fn get(&self, id: &str) -> Result<KycRequest, ApiError> {
        get_kyc_request(self, id).await
    }
}

#[async_trait]
impl KycApi for ApiClient {
    async fn approve_kyc(&self, id: &str) -> Result<KycRequest, ApiError> {
        approve_kyc(self, id).await
    }

    async fn reject_kyc(&self, id: &str, reason: &str) -> Result<KycRequest, ApiError> {
        reject_kyc(self, id, reason).await
    }

    async fn submit_kyc(&self, request: &SubmitKycRequest) -> Result<KycRequest, ApiError> {
        submit_kyc(self, request).await
    }
}
