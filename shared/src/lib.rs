//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the wallet front ends (admin
//! dashboard and mobile wallet) and the backend REST services. All DTOs use
//! JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::query`]**: `Filters`, `Sort`, `Pagination` and `ListQuery`
//!   - one module per REST resource (users, wallets, transactions, kyc, liquidity)
//!   - **[`dto::dashboard`]** / **[`dto::analytics`]**: read-only reporting views
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::short_address`]**: Shorten wallet addresses for tables
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::{ListQuery, Sort, UserFilters, UsersResponse};
//!
//! let query = ListQuery::new(
//!     UserFilters { search: Some("alice".to_string()), ..Default::default() },
//!     Sort::desc("createdAt"),
//!     2,
//!     10,
//! );
//!
//! let response: UsersResponse = reqwest::Client::new()
//!     .get("http://localhost:3001/api/users")
//!     .query(&query.to_query_pairs())
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
