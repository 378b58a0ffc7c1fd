//! # Core Abstractions
//!
//! Error types and the service traits stores depend on.
//!
//! - **[`error`]**: [`ApiError`] for failed requests, [`AppError`] for everything else
//! - **[`service`]**: [`ListSource`] plus one trait per domain (`UsersApi`, `KycApi`, …)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use client::core::service::ListSource;
//! use shared::dto::{User, UserFilters};
//!
//! // In production: the shared HTTP client
//! let users: Arc<dyn ListSource<User, UserFilters>> = api_client.clone();
//!
//! // In tests: an in-memory double
//! let users: Arc<dyn ListSource<User, UserFilters>> = Arc::new(FakeUsers::default());
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, AppError, Result, CONNECTION_ERROR_MESSAGE};
pub use service::{
    AnalyticsApi, AuthApi, DashboardApi, KycApi, LiquidityApi, ListSource, TransactionsApi, UsersApi, WalletsApi,
};
