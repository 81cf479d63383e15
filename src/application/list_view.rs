//! Shared list-view logic: one loaded page, filtered in place, with
//! pagination state for the controls.
//!
//! Both the subscribers and the newsletters table go through [`ListView`];
//! they differ only in their [`Filterable`] implementation.

use crate::domain::entities::Page;

/// A record type that can be narrowed by a view-specific filter.
pub trait Filterable {
    type Filter;

    fn matches(&self, filter: &Self::Filter) -> bool;
}

/// Current page and page count of a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page: u32,
    total_pages: u32,
}

impl PageState {
    /// Both values are clamped to at least 1. The page is not clamped to the
    /// page count; a page past the end simply loads no rows.
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self {
            page: page.max(1),
            total_pages: total_pages.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// `Previous` is disabled on the first page.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// `Next` is disabled on (or past) the last page.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn previous_page(&self) -> Option<u32> {
        self.has_previous().then(|| self.page - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }
}

/// Rows of the currently loaded page.
///
/// Filtering only ever narrows these rows; records on other pages are never
/// consulted.
#[derive(Debug, Clone)]
pub struct ListView<T> {
    pub rows: Vec<T>,
    pub page: PageState,
    /// Number of rows the backend returned for this page, before filtering.
    pub loaded: usize,
    pub total: Option<u64>,
}

impl<T> ListView<T> {
    pub fn from_page(page_number: u32, page: Page<T>) -> Self {
        Self {
            loaded: page.items.len(),
            page: PageState::new(page_number, page.total_pages),
            total: page.total,
            rows: page.items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl<T: Filterable> ListView<T> {
    /// Keeps only the rows matching `filter`.
    pub fn filtered(mut self, filter: &T::Filter) -> Self {
        self.rows.retain(|row| row.matches(filter));
        self
    }
}
