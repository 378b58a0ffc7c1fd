//! # Authentication Endpoints
//!
//! Login stores the returned token in the client's token store, after which
//! every request carries it. Logout is local: the token is simply forgotten.

use async_trait::async_trait;
use shared::dto::{AuthResponse, LoginRequest, User};

use super::client::ApiClient;
use crate::core::error::{ApiError, Result};
use crate::core::service::AuthApi;

/// Login with email and password, persisting the session token.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<AuthResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let url = ApiClient::resource_url(&client.endpoints().auth, &["login"])?;
    let response: AuthResponse = client.post(url, &request, "Login failed").await?;

    client.token_store().set_token(&response.token)?;

    tracing::info!(
        user_id = %response.user.id,
        duration_ms = start.elapsed().as_millis(),
        "Login successful"
    );
    Ok(response)
}

/// Forget the session token.
pub fn logout(client: &ApiClient) -> Result<()> {
    client.token_store().clear()?;
    tracing::info!("Logged out");
    Ok(())
}

/// Fetch the user the stored token belongs to.
pub async fn current_user(client: &ApiClient) -> std::result::Result<User, ApiError> {
    let url = ApiClient::resource_url(&client.endpoints().auth, &["me"])?;
    client.get(url, &[], "Failed to load profile").await
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        login(self, email, password).await
    }

    fn logout(&self) -> Result<()> {
        logout(self)
    }

    fn has_session(&self) -> bool {
        self.token_store().token().is_some()
    }

    async fn current_user(&self) -> std::result::Result<User, ApiError> {
        current_user(self).await
    }
}
