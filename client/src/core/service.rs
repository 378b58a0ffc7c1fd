//! # Service Traits
//!
//! Traits for dependency injection. [`ApiClient`](crate::services::api::ApiClient)
//! implements all of them; stores hold `Arc<dyn …>` so tests can substitute
//! in-memory doubles.

use async_trait::async_trait;
use shared::dto::{
    ActivityItem, AnalyticsOverview, AuthResponse, CreatePoolRequest, CreateWalletRequest, DashboardMetrics,
    Filters, KycRequest, ListQuery, LiquidityPool, Page, SendTransactionRequest, SubmitKycRequest, TimeRange,
    Transaction, TransactionStatus, UpdatePoolRequest, UpdateUserRequest, User, UserStatus, Wallet,
};

use crate::core::error::{ApiError, Result};

/// Paged listing and single-item lookup for one REST resource.
#[async_trait]
pub trait ListSource<T: Send, F: Filters>: Send + Sync {
    /// `GET {resource}?<filters>&page&limit&sortField&sortDirection`
    async fn list(&self, query: &ListQuery<F>) -> std::result::Result<Page<T>, ApiError>;

    /// `GET {resource}/{id}`
    async fn get(&self, id: &str) -> std::result::Result<T, ApiError>;
}

/// User mutations (admin).
#[async_trait]
pub trait UsersApi: Send + Sync {
    async fn update_user(&self, id: &str, update: &UpdateUserRequest) -> std::result::Result<User, ApiError>;

    async fn update_user_status(&self, id: &str, status: UserStatus) -> std::result::Result<User, ApiError>;
}

/// Wallet mutations.
#[async_trait]
pub trait WalletsApi: Send + Sync {
    async fn create_wallet(&self, request: &CreateWalletRequest) -> std::result::Result<Wallet, ApiError>;

    async fn set_wallet_active(&self, id: &str, active: bool) -> std::result::Result<Wallet, ApiError>;
}

/// Transaction mutations.
#[async_trait]
pub trait TransactionsApi: Send + Sync {
    /// Submit an outgoing transfer from one of the user's wallets.
    async fn send_transaction(&self, request: &SendTransactionRequest) -> std::result::Result<Transaction, ApiError>;

    async fn update_transaction_status(
        &self,
        id: &str,
        status: TransactionStatus,
    ) -> std::result::Result<Transaction, ApiError>;
}

/// KYC review and submission.
#[async_trait]
pub trait KycApi: Send + Sync {
    async fn approve_kyc(&self, id: &str) -> std::result::Result<KycRequest, ApiError>;

    async fn reject_kyc(&self, id: &str, reason: &str) -> std::result::Result<KycRequest, ApiError>;

    async fn submit_kyc(&self, request: &SubmitKycRequest) -> std::result::Result<KycRequest, ApiError>;
}

/// Liquidity pool management.
#[async_trait]
pub trait LiquidityApi: Send + Sync {
    async fn create_pool(&self, request: &CreatePoolRequest) -> std::result::Result<LiquidityPool, ApiError>;

    async fn update_pool(&self, id: &str, update: &UpdatePoolRequest) -> std::result::Result<LiquidityPool, ApiError>;
}

/// Dashboard headline data.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn get_metrics(&self) -> std::result::Result<DashboardMetrics, ApiError>;

    async fn get_recent_activity(&self, limit: u32) -> std::result::Result<Vec<ActivityItem>, ApiError>;
}

/// Chart data.
#[async_trait]
pub trait AnalyticsApi: Send + Sync {
    async fn get_overview(&self, range: TimeRange) -> std::result::Result<AnalyticsOverview, ApiError>;
}

/// Session management. Login persists the returned token; logout forgets it.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse>;

    /// Clears the local token. No request is made.
    fn logout(&self) -> Result<()>;

    /// Whether a token is currently stored.
    fn has_session(&self) -> bool;

    /// `GET {auth}/me` with the stored token.
    async fn current_user(&self) -> std::result::Result<User, ApiError>;
}
