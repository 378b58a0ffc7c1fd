//! Helpers shared by the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use client::config::ClientConfig;
use client::services::token_store::{MemoryTokenStore, TokenStore};
use client::ApiClient;
use serde_json::{json, Value};
use wiremock::MockServer;

/// Client pointed at `{server}/api` with an in-memory token store.
pub fn api_client(server: &MockServer) -> ApiClient {
    api_client_with_store(server, Arc::new(MemoryTokenStore::new()))
}

pub fn api_client_with_store(server: &MockServer, store: Arc<dyn TokenStore>) -> ApiClient {
    let config = ClientConfig::with_base_url(format!("{}/api", server.uri()));
    ApiClient::new(config, store).expect("client builds")
}

/// Base URL on a port nothing is listening on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/api", port)
}

pub fn user_json(id: &str, email: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "firstName": "Alice",
        "lastName": "Nakamoto",
        "role": "user",
        "status": "active",
        "kycStatus": "pending",
        "walletAddress": "0x52908400098527886E0F7030069857D2E4169EE7",
        "createdAt": "2024-01-15T10:30:00.000Z",
        "updatedAt": "2024-02-01T08:00:00.000Z"
    })
}

pub fn users_page(users: Vec<Value>, page: u32, limit: u32, total: u64) -> Value {
    json!({
        "users": users,
        "pagination": { "page": page, "limit": limit, "total": total }
    })
}

pub fn kyc_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "userId": "u1",
        "user": { "id": "u1", "email": "alice@example.com", "firstName": "Alice", "lastName": "Nakamoto" },
        "documentType": "passport",
        "documents": [
            { "type": "passport", "url": "https://files.example.com/k1/passport.jpg" }
        ],
        "status": status,
        "submittedAt": "2024-03-01T09:00:00Z"
    })
}

pub fn wallet_json(id: &str, is_active: bool) -> Value {
    json!({
        "id": id,
        "userId": "u1",
        "address": "0x52908400098527886E0F7030069857D2E4169EE7",
        "network": "polygon",
        "balance": "12.5",
        "currency": "MATIC",
        "isActive": is_active,
        "createdAt": "2024-01-01T00:00:00Z"
    })
}

pub fn transaction_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "userId": "u1",
        "fromAddress": "0x52908400098527886E0F7030069857D2E4169EE7",
        "toAddress": "0x8617E340B3D01FA5F11F306F4090FD50E238070D",
        "amount": "0.5",
        "token": "ETH",
        "network": "ethereum",
        "type": "transfer",
        "status": status,
        "createdAt": "2024-03-10T12:00:00Z"
    })
}

pub fn pool_json(id: &str, name: &str, apy: f64, status: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "tokenPair": {
            "token0": { "symbol": "ETH", "address": "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", "decimals": 18 },
            "token1": { "symbol": "USDC", "address": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", "decimals": 6 }
        },
        "tvl": 1250000.0,
        "apy": apy,
        "network": "ethereum",
        "status": status,
        "createdAt": "2024-02-01T00:00:00Z"
    })
}
