//! # Generic List Store
//!
//! State and actions shared by every paged resource screen.
//!
//! ## Action Semantics
//!
//! | Action | Effect on `pagination.page` |
//! |--------|-----------------------------|
//! | `set_filters` / `update_filters` | reset to 1 |
//! | `set_limit` | reset to 1 |
//! | `set_sort` | unchanged |
//! | `set_page` | set |
//!
//! `fetch` and `fetch_one` set `is_loading`, await the source, then write the
//! result or the error message and clear `is_loading` on both paths.
//!
//! Requests are neither deduplicated nor cancelled. Two overlapping fetches
//! both run; whichever finishes last writes the list.

use std::future::Future;
use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::{Filters, ListQuery, Pagination, Sort};

use crate::app::state::ListState;
use crate::core::error::ApiError;
use crate::core::service::ListSource;

/// Items that can be matched against an updated copy from the server.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Store for one paged resource.
pub struct ListStore<T, F> {
    state: Arc<RwLock<ListState<T, F>>>,
    source: Arc<dyn ListSource<T, F>>,
    default_sort: Sort,
    name: &'static str,
}

impl<T, F> Clone for ListStore<T, F> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            source: Arc::clone(&self.source),
            default_sort: self.default_sort.clone(),
            name: self.name,
        }
    }
}

impl<T, F> ListStore<T, F>
where
    T: Clone + Send + Sync + 'static,
    F: Filters,
{
    /// `name` labels log lines (e.g. `"users"`).
    pub fn new(name: &'static str, source: Arc<dyn ListSource<T, F>>, default_sort: Sort) -> Self {
        Self {
            state: Arc::new(RwLock::new(ListState::new(default_sort.clone()))),
            source,
            default_sort,
            name,
        }
    }

    // ========== Reads ==========

    /// Copy of the current state.
    pub fn snapshot(&self) -> ListState<T, F> {
        self.state.read().clone()
    }

    /// Borrow the state without cloning.
    pub fn read<R>(&self, f: impl FnOnce(&ListState<T, F>) -> R) -> R {
        f(&self.state.read())
    }

    pub fn items(&self) -> Vec<T> {
        self.state.read().items.clone()
    }

    pub fn selected(&self) -> Option<T> {
        self.state.read().selected.clone()
    }

    pub fn filters(&self) -> F {
        self.state.read().filters.clone()
    }

    pub fn sort(&self) -> Sort {
        self.state.read().sort.clone()
    }

    pub fn pagination(&self) -> Pagination {
        self.state.read().pagination
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// The request the next `fetch` will issue.
    pub fn query(&self) -> ListQuery<F> {
        let state = self.state.read();
        ListQuery::new(
            state.filters.clone(),
            state.sort.clone(),
            state.pagination.page,
            state.pagination.limit,
        )
    }

    // ========== Setters ==========

    /// Replace all filters and go back to the first page.
    pub fn set_filters(&self, filters: F) {
        let mut state = self.state.write();
        state.filters = filters;
        state.pagination.page = 1;
    }

    /// Edit filters in place and go back to the first page.
    pub fn update_filters(&self, edit: impl FnOnce(&mut F)) {
        let mut state = self.state.write();
        edit(&mut state.filters);
        state.pagination.page = 1;
    }

    /// Change sort order. The current page is kept.
    pub fn set_sort(&self, sort: Sort) {
        self.state.write().sort = sort;
    }

    /// Sort by `field`, flipping direction if it is already the sort field.
    pub fn toggle_sort(&self, field: &str) {
        let mut state = self.state.write();
        if state.sort.field == field {
            state.sort.direction = state.sort.direction.toggled();
        } else {
            state.sort = Sort::desc(field);
        }
    }

    /// Pages are 1-based; 0 is treated as 1.
    pub fn set_page(&self, page: u32) {
        self.state.write().pagination.page = page.max(1);
    }

    /// Change page size and go back to the first page.
    pub fn set_limit(&self, limit: u32) {
        let mut state = self.state.write();
        state.pagination.limit = limit.max(1);
        state.pagination.page = 1;
    }

    pub fn select(&self, item: Option<T>) {
        self.state.write().selected = item;
    }

    pub fn clear_error(&self) {
        self.state.write().error = None;
    }

    /// Back to the initial state: no items, default filters and sort, page 1.
    pub fn reset(&self) {
        *self.state.write() = ListState::new(self.default_sort.clone());
    }

    // ========== Async actions ==========

    /// Load the current page with the current filters and sort.
    pub async fn fetch(&self) {
        let query = {
            let mut state = self.state.write();
            state.is_loading = true;
            state.error = None;
            ListQuery::new(
                state.filters.clone(),
                state.sort.clone(),
                state.pagination.page,
                state.pagination.limit,
            )
        };

        tracing::debug!(store = self.name, page = query.page, limit = query.limit, "Fetching list");
        let result = self.source.list(&query).await;

        let mut state = self.state.write();
        match result {
            Ok(page) => {
                tracing::debug!(store = self.name, count = page.items.len(), total = page.pagination.total, "List loaded");
                state.items = page.items;
                state.pagination = page.pagination;
            }
            Err(e) => {
                tracing::warn!(store = self.name, error = %e, status = ?e.status(), "List fetch failed");
                state.error = Some(e.to_string());
            }
        }
        state.is_loading = false;
    }

    /// Load one item into `selected`.
    pub async fn fetch_one(&self, id: &str) {
        {
            let mut state = self.state.write();
            state.is_loading = true;
            state.error = None;
        }

        let result = self.source.get(id).await;

        let mut state = self.state.write();
        match result {
            Ok(item) => state.selected = Some(item),
            Err(e) => {
                tracing::warn!(store = self.name, id, error = %e, "Item fetch failed");
                state.error = Some(e.to_string());
            }
        }
        state.is_loading = false;
    }

    /// Run a mutation that returns an item without touching list state.
    ///
    /// Loading and error are tracked like a fetch.
    pub async fn track<R, Fut>(&self, action: Fut) -> Result<R, ApiError>
    where
        Fut: Future<Output = Result<R, ApiError>> + Send,
    {
        {
            let mut state = self.state.write();
            state.is_loading = true;
            state.error = None;
        }

        let result = action.await;

        let mut state = self.state.write();
        if let Err(e) = &result {
            tracing::warn!(store = self.name, error = %e, "Action failed");
            state.error = Some(e.to_string());
        }
        state.is_loading = false;
        result
    }
}

impl<T, F> ListStore<T, F>
where
    T: Keyed + Clone + Send + Sync + 'static,
    F: Filters,
{
    /// Run a mutation and patch the returned item into `items` and `selected`.
    pub async fn apply<Fut>(&self, action: Fut) -> Result<T, ApiError>
    where
        Fut: Future<Output = Result<T, ApiError>> + Send,
    {
        let updated = self.track(action).await?;
        self.replace_item(updated.clone());
        Ok(updated)
    }

    /// Swap in `updated` wherever an item with the same key is shown.
    pub fn replace_item(&self, updated: T) {
        let mut state = self.state.write();
        if let Some(slot) = state.items.iter_mut().find(|item| item.key() == updated.key()) {
            *slot = updated.clone();
        }
        if state.selected.as_ref().is_some_and(|item| item.key() == updated.key()) {
            state.selected = Some(updated);
        }
    }
}
