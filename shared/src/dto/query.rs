//! # List Query Contract
//!
//! Filtering, sorting and pagination metadata carried alongside every list
//! request and response.
//!
//! ## Query String Layout
//!
//! ```text
//! GET /api/users?search=alice&page=2&limit=10&sortField=createdAt&sortDirection=desc
//!                └── filters ─┘ └───────── ListQuery::to_query_pairs ──────────┘
//! ```
//!
//! Filter pairs come first, in the order the filter struct declares its fields,
//! and unset filters are omitted entirely.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default page size used by every list store.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// The opposite direction, used when a column header is clicked twice.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Sort order for a list: a wire field name plus a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self::desc("createdAt")
    }
}

/// Pagination cursor as returned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
}

impl Pagination {
    /// Number of pages needed to show `total` items, `0` when the limit is zero.
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit))
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            total: 0,
        }
    }
}

/// Resource-specific filter set that knows how to render itself as query pairs.
pub trait Filters: Clone + Default + fmt::Debug + Send + Sync + 'static {
    /// Query pairs for every filter that is set, in declaration order.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;

    fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

/// Append `key=value` when the filter is set. Blank strings count as unset.
pub fn push_filter<V: ToString>(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<V>) {
    if let Some(value) = value {
        let rendered = value.to_string();
        if !rendered.trim().is_empty() {
            pairs.push((key, rendered));
        }
    }
}

/// A full list request: filters, sort order and the page window.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F> {
    pub filters: F,
    pub sort: Sort,
    pub page: u32,
    pub limit: u32,
}

impl<F: Filters> ListQuery<F> {
    pub fn new(filters: F, sort: Sort, page: u32, limit: u32) -> Self {
        Self {
            filters,
            sort,
            page,
            limit,
        }
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.filters.query_pairs();
        pairs.push(("page", self.page.to_string()));
        pairs.push(("limit", self.limit.to_string()));
        pairs.push(("sortField", self.sort.field.clone()));
        pairs.push(("sortDirection", self.sort.direction.to_string()));
        pairs
    }
}

impl<F: Filters> Default for ListQuery<F> {
    fn default() -> Self {
        Self::new(F::default(), Sort::default(), 1, DEFAULT_PAGE_LIMIT)
    }
}

/// One page of a resource list, independent of the resource's response key.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Error body returned by the backend services. Only `message` is read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default)]
    struct SearchOnly {
        search: Option<String>,
    }

    impl Filters for SearchOnly {
        fn query_pairs(&self) -> Vec<(&'static str, String)> {
            let mut pairs = Vec::new();
            push_filter(&mut pairs, "search", &self.search);
            pairs
        }
    }

    #[test]
    fn test_query_pairs_put_filters_before_paging() {
        let query = ListQuery::new(
            SearchOnly {
                search: Some("alice".to_string()),
            },
            Sort::desc("createdAt"),
            2,
            10,
        );

        let pairs = query.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("search", "alice".to_string()),
                ("page", "2".to_string()),
                ("limit", "10".to_string()),
                ("sortField", "createdAt".to_string()),
                ("sortDirection", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_filters_are_omitted() {
        let filters = SearchOnly {
            search: Some("   ".to_string()),
        };
        assert!(filters.is_empty());
        assert!(SearchOnly::default().is_empty());
    }

    #[test]
    fn test_pagination_page_math() {
        let pagination = Pagination {
            page: 2,
            limit: 10,
            total: 25,
        };
        assert_eq!(pagination.total_pages(), 3);
        assert!(pagination.has_next());
        assert!(pagination.has_previous());

        let empty = Pagination {
            page: 1,
            limit: 0,
            total: 25,
        };
        assert_eq!(empty.total_pages(), 0);
        assert!(!empty.has_next());
    }

    #[test]
    fn test_sort_direction_wire_format() {
        assert_eq!(serde_json::to_string(&SortDirection::Asc).unwrap(), "\"asc\"");
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(Sort::default(), Sort::desc("createdAt"));
    }

    #[test]
    fn test_error_response_tolerates_missing_message() {
        let body: ErrorResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(body.message, None);

        let body: ErrorResponse = serde_json::from_str(r#"{"message":"User not found"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("User not found"));
    }
}
