//! Page arithmetic.

use std::ops::{Range, RangeInclusive};

/// What the pagination bar needs to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationDescriptor {
    pub current_page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PaginationDescriptor {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            has_prev: current_page > 1,
            has_next: current_page < total_pages,
        }
    }

    /// Page numbers for the bar, 1-based.
    pub fn pages(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }

    pub fn is_current(&self, page: usize) -> bool {
        page == self.current_page
    }
}

impl Default for PaginationDescriptor {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Number of pages for `len` items; an empty list still has one page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Index range of `page` (1-based) within a list of `len` items.
pub fn page_range(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Page (1-based) holding the item at `index`.
pub fn page_of_index(index: usize, page_size: usize) -> usize {
    index / page_size.max(1) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 4), 1);
        assert_eq!(total_pages(4, 4), 1);
        assert_eq!(total_pages(5, 4), 2);
        assert_eq!(total_pages(10, 4), 3);
    }

    #[test]
    fn test_page_range_clamps() {
        assert_eq!(page_range(1, 4, 10), 0..4);
        assert_eq!(page_range(3, 4, 10), 8..10);
        assert_eq!(page_range(1, 4, 0), 0..0);
        assert_eq!(page_range(9, 4, 10), 10..10);
    }

    #[test]
    fn test_descriptor_flags() {
        let first = PaginationDescriptor::new(1, 3);
        assert!(!first.has_prev && first.has_next);
        let last = PaginationDescriptor::new(3, 3);
        assert!(last.has_prev && !last.has_next);
        assert_eq!(last.pages().collect::<Vec<_>>(), vec![1, 2, 3]);
        let only = PaginationDescriptor::default();
        assert!(!only.has_prev && !only.has_next);
    }

    #[test]
    fn test_page_of_index() {
        assert_eq!(page_of_index(0, 4), 1);
        assert_eq!(page_of_index(3, 4), 1);
        assert_eq!(page_of_index(4, 4), 2);
    }
}
