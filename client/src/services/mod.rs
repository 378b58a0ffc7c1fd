//! # Services Module
//!
//! Backend integration for the wallet front ends.
//!
//! ```text
//! services/
//! ├── api/            - ApiClient and one module per REST resource
//! └── token_store.rs  - Session token storage (memory or file)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Stores (app::stores)                        │
//! │    UsersStore, KycStore, WalletStore, ...    │
//! └───────────────┬──────────────────────────────┘
//!                 │ Arc<dyn ListSource / *Api>
//!                 ▼
//! ┌──────────────────────────────────────────────┐
//! │  ApiClient (api/client.rs)                   │
//! │    + Authorization: Bearer <TokenStore>      │
//! │    + X-Request-Id                            │
//! └───────────────┬──────────────────────────────┘
//!                 │ HTTP/JSON
//!                 ▼
//!      Backend REST services (/api/users, /api/kyc, ...)
//! ```
//!
//! ## Error Handling
//!
//! Every call returns `Result<T, ApiError>`:
//! - HTTP error: server `message`, or the resource fallback ("Failed to fetch users")
//! - No response: [`crate::core::CONNECTION_ERROR_MESSAGE`]
//! - Bad 2xx body: "Failed to parse response: …"
//!
//! There are no retries; a failed call propagates immediately.

pub mod api;
pub mod token_store;

pub use api::ApiClient;
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
