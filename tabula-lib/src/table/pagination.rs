//! Page windowing.
//!
//! The page descriptor belongs to the caller. The table only slices with it
//! and reports whether moving to the previous or next page makes sense.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Caller-owned pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    /// Current page, 1-based.
    pub current: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Total number of rows across all pages.
    pub total: usize,
}

impl PageDescriptor {
    pub fn new(current: usize, page_size: usize, total: usize) -> Self {
        Self {
            current,
            page_size,
            total,
        }
    }

    /// First page of `total` rows.
    pub fn first(page_size: usize, total: usize) -> Self {
        Self::new(1, page_size, total)
    }

    /// Index range of the current page within `len` ordered rows.
    ///
    /// Not clamped: a page past the end yields an empty range. A zero page
    /// number or page size also yields an empty range.
    pub fn range(&self, len: usize) -> Range<usize> {
        if self.current == 0 || self.page_size == 0 {
            return 0..0;
        }
        let start = (self.current - 1).saturating_mul(self.page_size);
        if start >= len {
            return len..len;
        }
        let end = start.saturating_add(self.page_size).min(len);
        start..end
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.current.saturating_mul(self.page_size) < self.total
    }

    /// Number of pages needed for `total` rows.
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }

    /// Previous page number, if enabled.
    pub fn previous(&self) -> Option<usize> {
        self.has_previous().then(|| self.current - 1)
    }

    /// Next page number, if enabled.
    pub fn next(&self) -> Option<usize> {
        self.has_next().then(|| self.current + 1)
    }
}

/// Visible slice of the ordered rows for a page.
pub fn slice<'a, T>(ordered: &'a [T], page: &PageDescriptor) -> &'a [T] {
    &ordered[page.range(ordered.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_partial_page() {
        let rows: Vec<usize> = (0..25).collect();
        let page = PageDescriptor::new(3, 10, 25);
        assert_eq!(slice(&rows, &page), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let rows: Vec<usize> = (0..25).collect();
        assert!(slice(&rows, &PageDescriptor::new(4, 10, 25)).is_empty());
        assert!(slice(&rows, &PageDescriptor::new(usize::MAX, 10, 25)).is_empty());
    }

    #[test]
    fn test_degenerate_descriptors_are_empty() {
        let rows: Vec<usize> = (0..25).collect();
        assert!(slice(&rows, &PageDescriptor::new(0, 10, 25)).is_empty());
        assert!(slice(&rows, &PageDescriptor::new(1, 0, 25)).is_empty());
    }

    #[test]
    fn test_enablement_hints() {
        let first = PageDescriptor::first(10, 25);
        assert!(!first.has_previous());
        assert!(first.has_next());
        assert_eq!(first.next(), Some(2));
        assert_eq!(first.previous(), None);

        let last = PageDescriptor::new(3, 10, 25);
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert_eq!(last.page_count(), 3);

        let exact = PageDescriptor::new(2, 10, 20);
        assert!(!exact.has_next());
    }
}
