//! # User Endpoints
//!
//! Admin user management: list, detail, profile update and status changes.

use async_trait::async_trait;
use shared::dto::{
    ListQuery, Page, UpdateUserRequest, UpdateUserStatusRequest, User, UserFilters, UserStatus, UsersResponse,
};

use super::client::ApiClient;
use crate::core::error::ApiError;
use crate::core::service::{ListSource, UsersApi};

/// List users matching `query`.
#[tracing::instrument(skip(client, query), fields(page = query.page, limit = query.limit))]
pub async fn list_users(client: &ApiClient, query: &ListQuery<UserFilters>) -> Result<UsersResponse, ApiError> {
    let url = ApiClient::endpoint(&client.endpoints().users)?;
    client.get(url, &query.to_query_pairs(), "Failed to fetch users").await
}

/// Get a single user.
pub async fn get_user(client: &ApiClient, id: &str) -> Result<User, ApiError> {
    let url = ApiClient::resource_url(&client.endpoints().users, &[id])?;
    client.get(url, &[], "Failed to fetch user details").await
}

/// Update profile fields.
#[tracing::instrument(skip(client, update))]
pub async fn update_user(client: &ApiClient, id: &str, update: &UpdateUserRequest) -> Result<User, ApiError> {
    let url = ApiClient::resource_url(&client.endpoints().users, &[id])?;
    client.put(url, update, "Failed to update user").await
}

/// Activate, deactivate or suspend a user.
#[tracing::instrument(skip(client), fields(status = %status))]
pub async fn update_user_status(client: &ApiClient, id: &str, status: UserStatus) -> Result<User, ApiError> {
    let url = ApiClient::resource_url(&client.endpoints().users, &[id, "status"])?;
    client
        .put(url, &UpdateUserStatusRequest { status }, "Failed to update user status")
        .await
}

#[async_trait]
impl ListSource<User, UserFilters> for ApiClient {
    async fn list(&self, query: &ListQuery<UserFilters>) -> Result<Page<User>, ApiError> {
        let response = list_users(self, query).await?;
        Ok(Page {
            items: response.users,
            pagination: response.pagination,
        })
    }

    async fn get(&self, id: &str) -> Result<User, ApiError> {
        get_user(self, id).await
    }
}

#[async_trait]
impl UsersApi for ApiClient {
    async fn update_user(&self, id: &str, update: &UpdateUserRequest) -> Result<User, ApiError> {
        update_user(self, id, update).await
    }

    async fn update_user_status(&self, id: &str, status: UserStatus) -> Result<User, ApiError> {
        update_user_status(self, id, status).await
    }
}
