//! One page of records returned by a list call.

/// Records of a single page together with the backend's pagination metadata.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of pages, never below 1.
    pub total_pages: u32,
    /// Total number of records across all pages, when the backend reports it.
    pub total: Option<u64>,
}

impl<T> Page<T> {
    /// Builds a page, deriving the page count from `total` and `limit`
    /// when the backend omitted it.
    pub fn new(items: Vec<T>, pages: Option<u32>, total: Option<u64>, limit: u32) -> Self {
        let derived = total.map(|total| {
            let limit = u64::from(limit.max(1));
            u32::try_from(total.div_ceil(limit)).unwrap_or(u32::MAX)
        });

        Self {
            items,
            total_pages: pages.or(derived).unwrap_or(1).max(1),
            total,
        }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 1,
            total: Some(0),
        }
    }

    /// Record count across all pages, falling back to this page's length.
    pub fn total_count(&self) -> u64 {
        self.total.unwrap_or(self.items.len() as u64)
    }
}
