//! # Backend API Client Module
//!
//! HTTP client for the wallet backend REST services.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs           - Module exports and documentation
//! ├── client.rs        - ApiClient: headers, error translation, logging
//! ├── auth.rs          - Login, logout, current user
//! ├── users.rs         - User list/detail/update/status
//! ├── wallets.rs       - Wallet list/detail/create/freeze
//! ├── transactions.rs  - Transaction list/detail/send/status
//! ├── kyc.rs           - KYC list/detail/approve/reject/submit
//! ├── liquidity.rs     - Pool list/detail/create/update
//! ├── dashboard.rs     - Metrics and activity feed
//! └── analytics.rs     - Chart series
//! ```
//!
//! Each resource module exposes free functions taking `&ApiClient` and
//! implements the matching [`crate::core::service`] traits on `ApiClient` by
//! delegating to them.

pub mod analytics;
pub mod auth;
pub mod client;
pub mod dashboard;
pub mod kyc;
pub mod liquidity;
pub mod transactions;
pub mod users;
pub mod wallets;

pub use client::{ApiClient, REQUEST_ID_HEADER};
