//! Page arithmetic for the table view.

use std::ops::Range;

/// Default number of rows on one page.
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Current page and page size.
///
/// Pages are 1-indexed. A page size of zero is treated as one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    rows_per_page: usize,
}

impl Pagination {
    /// Create pagination starting on page 1.
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            current_page: 1,
            rows_per_page: rows_per_page.max(1),
        }
    }

    /// The 1-indexed current page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Rows shown on each page.
    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    /// Number of pages needed for `count` rows: `ceil(count / rows_per_page)`.
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.rows_per_page)
    }

    /// Index range of the current page within `count` rows.
    ///
    /// Returns an empty range when the current page lies past the end.
    pub fn page_range(&self, count: usize) -> Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(self.rows_per_page)
            .min(count);
        let end = start.saturating_add(self.rows_per_page).min(count);
        start..end
    }

    /// Jump to a page, clamped to `1..=max(total_pages, 1)`.
    ///
    /// Returns true if the page changed.
    pub fn go_to(&mut self, page: usize, count: usize) -> bool {
        let last = self.total_pages(count).max(1);
        let page = page.clamp(1, last);
        let changed = page != self.current_page;
        self.current_page = page;
        changed
    }

    /// Advance one page if possible.
    pub fn next(&mut self, count: usize) -> bool {
        self.go_to(self.current_page + 1, count)
    }

    /// Go back one page if possible.
    pub fn prev(&mut self, count: usize) -> bool {
        self.go_to(self.current_page.saturating_sub(1), count)
    }

    /// Pull the current page back inside the valid range for `count` rows.
    ///
    /// Returns true if the page had to move.
    pub fn clamp(&mut self, count: usize) -> bool {
        self.go_to(self.current_page, count)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS_PER_PAGE)
    }
}
