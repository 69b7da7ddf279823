use std::collections::BTreeMap;

use super::codec::{ListQuery, SortOrder};
use super::resolver::{Page, total_pages};

/// Client-side state of a paginated data table.
///
/// Setters update the query the next request will carry; [`TableState::apply`]
/// stores what the server sent back. Changing the page size, search or
/// filters jumps back to the first page.
#[derive(Debug, Clone)]
pub struct TableState<T> {
    pub query: ListQuery,
    pub data: Vec<T>,
    pub total: u64,
}

impl<T> Default for TableState<T> {
    fn default() -> Self {
        Self {
            query: ListQuery::default(),
            data: Vec::new(),
            total: 0,
        }
    }
}

impl<T> TableState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_page(&mut self, page: u64) {
        self.query.page = page.max(1);
    }

    pub fn set_limit(&mut self, limit: u64) {
        self.query.limit = limit.max(1);
        self.query.page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.query.page = 1;
    }

    pub fn set_sort(&mut self, sort_by: impl Into<String>, sort_order: SortOrder) {
        self.query.sort_by = sort_by.into();
        self.query.sort_order = sort_order;
    }

    pub fn set_filters(&mut self, filters: BTreeMap<String, String>) {
        self.query.filters = filters;
        self.query.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.query.filters.clear();
        self.query.search.clear();
        self.query.page = 1;
    }

    /// Path plus query string for the next fetch, e.g. `/api/products?page=2`.
    pub fn request_path(&self, endpoint: &str) -> String {
        let query = self.query.to_query_string();
        if query.is_empty() {
            endpoint.to_string()
        } else {
            format!("{endpoint}?{query}")
        }
    }

    pub fn apply(&mut self, page: Page<T>) {
        self.data = page.data;
        self.total = page.total;
    }

    pub fn page_count(&self) -> u64 {
        total_pages(self.total, self.query.limit)
    }
}
