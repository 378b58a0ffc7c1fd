//! # Dashboard Store
//!
//! Headline metrics and the recent-activity feed, loaded together. If either
//! request fails nothing is replaced.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::{ActivityItem, DashboardMetrics};

use crate::app::state::DashboardState;
use crate::core::service::DashboardApi;

/// Activity rows shown on the home screen.
pub const DEFAULT_ACTIVITY_LIMIT: u32 = 10;

#[derive(Clone)]
pub struct DashboardStore {
    state: Arc<RwLock<DashboardState>>,
    api: Arc<dyn DashboardApi>,
    activity_limit: u32,
}

impl DashboardStore {
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self::with_activity_limit(api, DEFAULT_ACTIVITY_LIMIT)
    }

    pub fn with_activity_limit(api: Arc<dyn DashboardApi>, activity_limit: u32) -> Self {
        Self {
            state: Arc::new(RwLock::new(DashboardState::default())),
            api,
            activity_limit: activity_limit.max(1),
        }
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state.read().clone()
    }

    pub fn metrics(&self) -> Option<DashboardMetrics> {
        self.state.read().metrics.clone()
    }

    pub fn recent_activity(&self) -> Vec<ActivityItem> {
        self.state.read().recent_activity.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn clear_error(&self) {
        self.state.write().error = None;
    }

    /// Load metrics and activity concurrently.
    pub async fn fetch(&self) {
        {
            let mut state = self.state.write();
            state.is_loading = true;
            state.error = None;
        }

        let result = tokio::try_join!(self.api.get_metrics(), self.api.get_recent_activity(self.activity_limit));

        let mut state = self.state.write();
        match result {
            Ok((metrics, activity)) => {
                tracing::debug!(activity = activity.len(), "Dashboard loaded");
                state.metrics = Some(metrics);
                state.recent_activity = activity;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Dashboard fetch failed");
                state.error = Some(e.to_string());
            }
        }
        state.is_loading = false;
    }
}
