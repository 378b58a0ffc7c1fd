//! # Liquidity Store
//!
//! Pool table, largest TVL first. New pools trigger a refetch since their
//! position depends on server-side sort; edits patch in place.

use std::ops::Deref;
use std::sync::Arc;

use shared::dto::{CreatePoolRequest, LiquidityPool, PoolFilters, PoolStatus, Sort, UpdatePoolRequest};

use super::list::{Keyed, ListStore};
use crate::core::error::Result;
use crate::core::service::{LiquidityApi, ListSource};

impl Keyed for LiquidityPool {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Clone)]
pub struct LiquidityStore {
    list: ListStore<LiquidityPool, PoolFilters>,
    api: Arc<dyn LiquidityApi>,
}

impl LiquidityStore {
    pub fn new(source: Arc<dyn ListSource<LiquidityPool, PoolFilters>>, api: Arc<dyn LiquidityApi>) -> Self {
        Self {
            list: ListStore::new("liquidity", source, Sort::desc("tvl")),
            api,
        }
    }

    pub async fn create_pool(&self, request: &CreatePoolRequest) -> Result<LiquidityPool> {
        let created = self.list.track(self.api.create_pool(request)).await?;
        tracing::info!(pool_id = %created.id, pair = %created.token_pair.label(), "Liquidity pool created");
        self.list.fetch().await;
        Ok(created)
    }

    pub async fn update_pool(&self, id: &str, update: &UpdatePoolRequest) -> Result<LiquidityPool> {
        Ok(self.list.apply(self.api.update_pool(id, update)).await?)
    }

    /// Pause or resume a pool.
    pub async fn set_status(&self, id: &str, status: PoolStatus) -> Result<LiquidityPool> {
        let update = UpdatePoolRequest {
            status: Some(status),
            ..Default::default()
        };
        self.update_pool(id, &update).await
    }

    /// Sum of TVL across the loaded page.
    pub fn page_tvl(&self) -> f64 {
        self.list.read(|state| state.items.iter().map(|pool| pool.tvl).sum())
    }
}

impl Deref for LiquidityStore {
    type Target = ListStore<LiquidityPool, PoolFilters>;

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::stores::fixtures::{page, pool};
    use crate::core::error::ApiError;
    use async_trait::async_trait;
    use shared::dto::{ListQuery, Page};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakePools {
        lists: AtomicUsize,
        reject_updates: bool,
    }

    #[async_trait]
    impl ListSource<LiquidityPool, PoolFilters> for FakePools {
        async fn list(&self, _query: &ListQuery<PoolFilters>) -> std::result::Result<Page<LiquidityPool>, ApiError> {
            self.lists.fetch_add(1, Ordering::SeqCst);
            let mut second = pool("p2", PoolStatus::Active);
            second.tvl = 500_000.0;
            Ok(page(vec![pool("p1", PoolStatus::Active), second]))
        }

        async fn get(&self, id: &str) -> std::result::Result<LiquidityPool, ApiError> {
            Ok(pool(id, PoolStatus::Active))
        }
    }

    #[async_trait]
    impl LiquidityApi for FakePools {
        async fn create_pool(
            &self,
            request: &CreatePoolRequest,
        ) -> std::result::Result<LiquidityPool, ApiError> {
            let mut created = pool("p3", PoolStatus::Active);
            created.name = request.name.clone();
            Ok(created)
        }

        async fn update_pool(
            &self,
            id: &str,
            update: &UpdatePoolRequest,
        ) -> std::result::Result<LiquidityPool, ApiError> {
            if self.reject_updates {
                return Err(ApiError::http(422, Some("APY must be non-negative".to_string()), "Failed to update pool"));
            }
            let mut updated = pool(id, update.status.unwrap_or(PoolStatus::Active));
            if let Some(apy) = update.apy {
                updated.apy = apy;
            }
            Ok(updated)
        }
    }

    fn store(fake: Arc<FakePools>) -> LiquidityStore {
        LiquidityStore::new(fake.clone(), fake)
    }

    #[test]
    fn test_default_sort_is_tvl_desc() {
        let pools = store(Arc::new(FakePools::default()));
        assert_eq!(pools.sort(), Sort::desc("tvl"));
    }

    #[tokio::test]
    async fn test_pause_patches_in_place() {
        let pools = store(Arc::new(FakePools::default()));
        pools.fetch().await;

        pools.set_status("p2", PoolStatus::Paused).await.unwrap();

        let items = pools.items();
        assert_eq!(items[0].status, PoolStatus::Active);
        assert_eq!(items[1].status, PoolStatus::Paused);
    }

    #[tokio::test]
    async fn test_create_refetches_list() {
        let fake = Arc::new(FakePools::default());
        let pools = store(fake.clone());
        let template = pool("unused", PoolStatus::Active);

        let request = CreatePoolRequest {
            name: "ETH/USDC 0.3%".to_string(),
            token_pair: template.token_pair,
            network: "ethereum".to_string(),
        };
        let created = pools.create_pool(&request).await.unwrap();

        assert_eq!(created.name, "ETH/USDC 0.3%");
        assert_eq!(fake.lists.load(Ordering::SeqCst), 1);
        assert_eq!(pools.items().len(), 2);
    }

    #[tokio::test]
    async fn test_rejected_update_keeps_row_and_records_error() {
        let fake = Arc::new(FakePools {
            reject_updates: true,
            ..Default::default()
        });
        let pools = store(fake);
        pools.fetch().await;
        let update = UpdatePoolRequest {
            apy: Some(-1.0),
            ..Default::default()
        };

        let err = pools.update_pool("p1", &update).await.unwrap_err();

        assert_eq!(err.to_string(), "APY must be non-negative");
        assert_eq!(pools.error().as_deref(), Some("APY must be non-negative"));
        assert_eq!(pools.items()[0].apy, pool("p1", PoolStatus::Active).apy);
    }

    #[tokio::test]
    async fn test_page_tvl_sums_loaded_rows() {
        let pools = store(Arc::new(FakePools::default()));
        pools.fetch().await;

        assert_eq!(pools.page_tvl(), 1_750_000.0);
    }
}
