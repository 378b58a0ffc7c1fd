//! # Analytics Store
//!
//! Chart series for one selected time window.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::{AnalyticsOverview, TimeRange};

use crate::app::state::AnalyticsState;
use crate::core::service::AnalyticsApi;

#[derive(Clone)]
pub struct AnalyticsStore {
    state: Arc<RwLock<AnalyticsState>>,
    api: Arc<dyn AnalyticsApi>,
}

impl AnalyticsStore {
    pub fn new(api: Arc<dyn AnalyticsApi>) -> Self {
        Self {
            state: Arc::new(RwLock::new(AnalyticsState::default())),
            api,
        }
    }

    pub fn snapshot(&self) -> AnalyticsState {
        self.state.read().clone()
    }

    pub fn range(&self) -> TimeRange {
        self.state.read().range
    }

    pub fn overview(&self) -> Option<AnalyticsOverview> {
        self.state.read().overview.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// Select a window. Takes effect on the next `fetch`.
    pub fn set_range(&self, range: TimeRange) {
        self.state.write().range = range;
    }

    pub async fn fetch(&self) {
        let range = {
            let mut state = self.state.write();
            state.is_loading = true;
            state.error = None;
            state.range
        };

        let result = self.api.get_overview(range).await;

        let mut state = self.state.write();
        match result {
            Ok(overview) => state.overview = Some(overview),
            Err(e) => {
                tracing::warn!(range = %range, error = %e, "Analytics fetch failed");
                state.error = Some(e.to_string());
            }
        }
        state.is_loading = false;
    }
}
