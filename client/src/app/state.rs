//! # Store State Types
//!
//! Plain state structs held by the stores. Screens read snapshots of these;
//! only store actions write them.

use shared::dto::{
    ActivityItem, AnalyticsOverview, DashboardMetrics, Pagination, Sort, TimeRange, Transaction, User,
};

/// "Current view" of one paged resource list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T, F> {
    /// Current page of items
    pub items: Vec<T>,
    /// Item open in the detail view
    pub selected: Option<T>,
    /// Active filters
    pub filters: F,
    /// Active sort order
    pub sort: Sort,
    /// Page cursor and last known total
    pub pagination: Pagination,
    /// A request started by this store is in flight
    pub is_loading: bool,
    /// Message from the last failed action
    pub error: Option<String>,
}

impl<T, F: Default> ListState<T, F> {
    pub fn new(sort: Sort) -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            filters: F::default(),
            sort,
            pagination: Pagination::default(),
            is_loading: false,
            error: None,
        }
    }
}

/// Admin home screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub metrics: Option<DashboardMetrics>,
    pub recent_activity: Vec<ActivityItem>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Analytics charts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsState {
    pub range: TimeRange,
    pub overview: Option<AnalyticsOverview>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Signed-in user on the mobile client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Outgoing transfer form on the mobile client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendState {
    pub is_sending: bool,
    pub last_transaction: Option<Transaction>,
    pub error: Option<String>,
}
