//! # Wallet Client - Library Root
//!
//! Data layer shared by the crypto-wallet admin dashboard and the mobile
//! wallet app: a typed client for the backend REST services and the stores
//! screens read from.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              client (this crate)                       │
//! ├────────────────────────────────────────────────────────┤
//! │  app       - App + domain stores (list, kyc, auth...)  │
//! │  services  - ApiClient, per-resource calls, tokens     │
//! │  core      - ApiError/AppError, service traits         │
//! │  config    - ClientConfig from environment             │
//! │  logging   - tracing subscriber setup                  │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP/JSON (reqwest)
//!          ▼
//! ┌─────────────────────────────────────────────┐
//! │  Backend services: /users /wallets /kyc ... │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Wire types live in the `shared` crate so any other Rust front end can
//! reuse them.
//!
//! ## Module Dependency Graph
//!
//! ```text
//! app::stores ──► core::service (traits) ◄── services::api (ApiClient impls)
//!      │                                         │
//!      └──────────────► core::error ◄────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use client::{App, ClientConfig};
//!
//! # async fn run() -> client::Result<()> {
//! let app = App::from_config(ClientConfig::from_env()?)?;
//! app.auth.login("admin@example.com", "password").await?;
//!
//! app.dashboard.fetch().await;
//! if let Some(metrics) = app.dashboard.metrics() {
//!     println!("{} users, {} pending KYC", metrics.total_users, metrics.pending_kyc);
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod services;

pub use app::App;
pub use config::ClientConfig;
pub use crate::core::{ApiError, AppError, Result};
pub use services::api::ApiClient;
