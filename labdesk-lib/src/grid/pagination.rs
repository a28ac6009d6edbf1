//! Fixed-size pagination

use std::ops::Range;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 10;

/// Current page of a table, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    current: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pagination {
    /// Creates pagination on page 1. A zero page size is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current: 1,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of pages for `total_rows`; an empty table still has one page.
    pub fn total_pages(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.page_size).max(1)
    }

    /// Moves to the next page. Returns `false` (and stays) on the last page.
    pub fn next(&mut self, total_rows: usize) -> bool {
        if self.current < self.total_pages(total_rows) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous page. Returns `false` (and stays) on page 1.
    pub fn prev(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Keeps the current page within `[1, total_pages]` after the row count changed.
    pub fn clamp(&mut self, total_rows: usize) {
        self.current = self.current.clamp(1, self.total_pages(total_rows));
    }

    /// Index range of the current page within `total_rows` sorted rows.
    pub fn range(&self, total_rows: usize) -> Range<usize> {
        let start = ((self.current - 1) * self.page_size).min(total_rows);
        let end = (start + self.page_size).min(total_rows);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let pages = Pagination::default();
        assert_eq!(pages.total_pages(0), 1);
        assert_eq!(pages.total_pages(10), 1);
        assert_eq!(pages.total_pages(11), 2);
        assert_eq!(pages.total_pages(25), 3);
    }

    #[test]
    fn test_page_sizes_follow_formula() {
        let total = 25;
        let mut pages = Pagination::default();
        for p in 1..=pages.total_pages(total) {
            assert_eq!(pages.current(), p);
            assert_eq!(pages.range(total).len(), PAGE_SIZE.min(total - PAGE_SIZE * (p - 1)));
            pages.next(total);
        }
    }

    #[test]
    fn test_prev_and_next_are_noops_at_bounds() {
        let mut pages = Pagination::default();
        assert!(!pages.prev());
        assert_eq!(pages.current(), 1);

        assert!(pages.next(15));
        assert!(!pages.next(15));
        assert_eq!(pages.current(), 2);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut pages = Pagination::default();
        pages.next(30);
        pages.next(30);
        assert_eq!(pages.current(), 3);

        pages.clamp(12);
        assert_eq!(pages.current(), 2);

        pages.clamp(0);
        assert_eq!(pages.current(), 1);
        assert_eq!(pages.range(0), 0..0);
    }
}
