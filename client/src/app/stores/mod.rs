//! # Domain Stores
//!
//! One store per screen. Each owns its state behind `Arc<RwLock<_>>` and talks
//! to the backend only through the [`crate::core::service`] traits.
//!
//! ```text
//! stores/
//! ├── list.rs          - ListStore<T, F>: paging, filters, sort, loading/error
//! ├── users.rs         - UsersStore (status and profile edits)
//! ├── wallets.rs       - WalletsStore (freeze/unfreeze)
//! ├── transactions.rs  - TransactionsStore (date window, manual settlement)
//! ├── kyc.rs           - KycStore (approve/reject/submit)
//! ├── liquidity.rs     - LiquidityStore (create/update pools)
//! ├── dashboard.rs     - DashboardStore (metrics + activity)
//! ├── analytics.rs     - AnalyticsStore (time-range charts)
//! ├── auth.rs          - AuthStore (login/logout/restore)
//! └── wallet.rs        - WalletStore (mobile wallets + send)
//! ```
//!
//! ## Locking
//!
//! Locks are taken for a single read or write and always released before an
//! `.await`. Actions are safe to call from any task.

pub mod analytics;
pub mod auth;
pub mod dashboard;
pub mod kyc;
pub mod liquidity;
pub mod list;
pub mod transactions;
pub mod users;
pub mod wallet;
pub mod wallets;

#[cfg(test)]
pub(crate) mod fixtures;

pub use analytics::AnalyticsStore;
pub use auth::AuthStore;
pub use dashboard::{DashboardStore, DEFAULT_ACTIVITY_LIMIT};
pub use kyc::KycStore;
pub use liquidity::LiquidityStore;
pub use list::{Keyed, ListStore};
pub use transactions::TransactionsStore;
pub use users::UsersStore;
pub use wallet::WalletStore;
pub use wallets::WalletsStore;
