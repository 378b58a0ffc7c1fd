//! # API Client
//!
//! One HTTP client for every backend resource. Resource modules describe
//! *what* to call; this module owns *how*: header injection, error
//! translation, response parsing and request logging.

use std::sync::Arc;
use std::time::Instant;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::ErrorResponse;

use crate::config::{ClientConfig, Endpoints};
use crate::core::error::{ApiError, AppError, Result};
use crate::services::token_store::{FileTokenStore, MemoryTokenStore, TokenStore};

/// Header carrying a per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP client for communicating with the backend REST services.
///
/// Cheap to share: wrap it in an `Arc` and hand the same instance to every
/// store. The underlying `reqwest::Client` pools connections internally.
pub struct ApiClient {
    pub(crate) client: Client,
    config: ClientConfig,
    token_store: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a client with an explicit token store.
    pub fn new(config: ClientConfig, token_store: Arc<dyn TokenStore>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config,
            token_store,
        })
    }

    /// Create a client whose token store follows `config.token_store_path`.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let token_store: Arc<dyn TokenStore> = match &config.token_store_path {
            Some(path) => Arc::new(FileTokenStore::open(path)?),
            None => Arc::new(MemoryTokenStore::new()),
        };
        Self::new(config, token_store)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.config.endpoints
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.token_store
    }

    /// Parse a configured endpoint URL.
    pub(crate) fn endpoint(base: &str) -> std::result::Result<Url, ApiError> {
        Url::parse(base).map_err(|e| ApiError::InvalidRequest(format!("{base}: {e}")))
    }

    /// `base` with extra path segments appended; segments are percent-encoded.
    pub(crate) fn resource_url(base: &str, segments: &[&str]) -> std::result::Result<Url, ApiError> {
        let mut url = Self::endpoint(base)?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidRequest(format!("{base} cannot carry a path")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Start a request with the common headers attached.
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut builder = self
            .client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(REQUEST_ID_HEADER, uuid::Uuid::new_v4().to_string());

        // Read on every request so login/logout take effect immediately.
        if let Some(token) = self.token_store.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
        fallback: &str,
    ) -> std::result::Result<T, ApiError> {
        let builder = self.request(Method::GET, url);
        let builder = if query.is_empty() { builder } else { builder.query(query) };
        self.send(builder, fallback).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
        fallback: &str,
    ) -> std::result::Result<T, ApiError> {
        self.send(self.request(Method::POST, url).json(body), fallback).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
        fallback: &str,
    ) -> std::result::Result<T, ApiError> {
        self.send(self.request(Method::PUT, url).json(body), fallback).await
    }

    /// Execute exactly one request and translate the outcome.
    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        fallback: &str,
    ) -> std::result::Result<T, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        let method = request.method().clone();
        let path = request.url().path().to_string();
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let start = Instant::now();

        tracing::debug!(%method, %path, %request_id, "Sending request");

        let response = self.client.execute(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                %method,
                %path,
                %request_id,
                duration_ms = start.elapsed().as_millis(),
                "Request failed without a response"
            );
            ApiError::network()
        })?;

        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await.map_err(|e| {
                tracing::error!(error = %e, %method, %path, %request_id, "Failed to read response body");
                ApiError::network()
            })?;

            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                tracing::error!(error = %e, %method, %path, %request_id, "Response parse error");
                ApiError::Decode(e.to_string())
            })?;

            tracing::info!(
                %method,
                %path,
                %request_id,
                status = status.as_u16(),
                duration_ms = start.elapsed().as_millis(),
                "Request succeeded"
            );
            Ok(parsed)
        } else {
            let body = response.bytes().await.unwrap_or_default();
            let server_message = serde_json::from_slice::<ErrorResponse>(&body)
                .ok()
                .and_then(|error| error.message);
            let err = ApiError::http(status.as_u16(), server_message, fallback);

            tracing::warn!(
                %method,
                %path,
                %request_id,
                status = status.as_u16(),
                error = %err,
                duration_ms = start.elapsed().as_millis(),
                "Request failed"
            );
            Err(err)
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_base_url", &self.config.api_base_url)
            .field("has_token", &self.token_store.token().is_some())
            .finish()
    }
}
