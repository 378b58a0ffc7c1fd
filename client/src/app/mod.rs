//! # Application State
//!
//! [`App`] wires one shared [`ApiClient`] into every domain store. Front ends
//! (the admin console, the mobile shell) hold an `App` and call store actions;
//! stores never call each other.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  App                                                    │
//! │   auth  users  wallets  transactions  kyc  liquidity    │
//! │   dashboard  analytics  wallet (mobile)                 │
//! └───────────────────────────┬─────────────────────────────┘
//!                             │ Arc<dyn ListSource / *Api>
//!                             ▼
//!                   Arc<ApiClient> (one per process)
//! ```
//!
//! ## State Management Pattern
//!
//! ```rust,ignore
//! let app = App::from_config(ClientConfig::from_env()?)?;
//!
//! app.users.set_filters(UserFilters { search: Some("alice".into()), ..Default::default() });
//! app.users.fetch().await;
//!
//! let state = app.users.snapshot(); // items, pagination, is_loading, error
//! ```

pub mod state;
pub mod stores;

pub use state::*;
pub use stores::*;

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::core::error::Result;
use crate::services::api::ApiClient;

/// Every store, sharing one API client.
#[derive(Clone)]
pub struct App {
    pub api: Arc<ApiClient>,
    pub auth: AuthStore,
    pub dashboard: DashboardStore,
    pub users: UsersStore,
    pub wallets: WalletsStore,
    pub transactions: TransactionsStore,
    pub kyc: KycStore,
    pub liquidity: LiquidityStore,
    pub analytics: AnalyticsStore,
    /// Mobile wallet screen.
    pub wallet: WalletStore,
}

impl App {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            auth: AuthStore::new(api.clone()),
            dashboard: DashboardStore::new(api.clone()),
            users: UsersStore::new(api.clone(), api.clone()),
            wallets: WalletsStore::new(api.clone(), api.clone()),
            transactions: TransactionsStore::new(api.clone(), api.clone()),
            kyc: KycStore::new(api.clone(), api.clone()),
            liquidity: LiquidityStore::new(api.clone(), api.clone()),
            analytics: AnalyticsStore::new(api.clone()),
            wallet: WalletStore::new(api.clone(), api.clone(), api.clone()),
            api,
        }
    }

    /// Build the client (token store chosen by config) and all stores.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let api = ApiClient::from_config(config)?;
        Ok(Self::new(Arc::new(api)))
    }
}
