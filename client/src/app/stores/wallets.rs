//! # Wallets Store
//!
//! Admin wallet table with freeze/unfreeze.

use std::ops::Deref;
use std::sync::Arc;

use shared::dto::{Sort, Wallet, WalletFilters};

use super::list::{Keyed, ListStore};
use crate::core::error::ApiError;
use crate::core::service::{ListSource, WalletsApi};

impl Keyed for Wallet {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Clone)]
pub struct WalletsStore {
    list: ListStore<Wallet, WalletFilters>,
    api: Arc<dyn WalletsApi>,
}

impl WalletsStore {
    pub fn new(source: Arc<dyn ListSource<Wallet, WalletFilters>>, api: Arc<dyn WalletsApi>) -> Self {
        Self {
            list: ListStore::new("wallets", source, Sort::desc("createdAt")),
            api,
        }
    }

    pub async fn set_active(&self, id: &str, active: bool) -> Result<Wallet, ApiError> {
        self.list.apply(self.api.set_wallet_active(id, active)).await
    }
}

impl Deref for WalletsStore {
    type Target = ListStore<Wallet, WalletFilters>;

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::stores::fixtures::{page, wallet};
    use async_trait::async_trait;
    use shared::dto::{CreateWalletRequest, ListQuery, Page};

    struct FakeWallets;

    #[async_trait]
    impl ListSource<Wallet, WalletFilters> for FakeWallets {
        async fn list(&self, query: &ListQuery<WalletFilters>) -> Result<Page<Wallet>, ApiError> {
            let wallets = vec![wallet("w1", true), wallet("w2", false)];
            Ok(page(
                wallets
                    .into_iter()
                    .filter(|w| query.filters.is_active.is_none_or(|active| w.is_active == active))
                    .collect(),
            ))
        }

        async fn get(&self, id: &str) -> Result<Wallet, ApiError> {
            Ok(wallet(id, true))
        }
    }

    #[async_trait]
    impl WalletsApi for FakeWallets {
        async fn create_wallet(&self, _request: &CreateWalletRequest) -> Result<Wallet, ApiError> {
            Ok(wallet("w3", true))
        }

        async fn set_wallet_active(&self, id: &str, active: bool) -> Result<Wallet, ApiError> {
            Ok(wallet(id, active))
        }
    }

    fn store() -> WalletsStore {
        let fake = Arc::new(FakeWallets);
        WalletsStore::new(fake.clone(), fake)
    }

    #[tokio::test]
    async fn test_filter_by_active_flag() {
        let wallets = store();
        wallets.update_filters(|filters| filters.is_active = Some(false));

        wallets.fetch().await;

        let items = wallets.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "w2");
    }

    #[tokio::test]
    async fn test_freeze_patches_row() {
        let wallets = store();
        wallets.fetch().await;

        wallets.set_active("w1", false).await.unwrap();

        assert!(!wallets.items()[0].is_active);
        assert!(!wallets.is_loading());
    }
}
