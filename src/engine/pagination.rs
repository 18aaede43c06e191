//! Pagination state.

use std::ops::Range;

/// Current page over a filtered result of known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl Pagination {
    /// Create pagination at page 1 over an empty result.
    ///
    /// # Arguments
    /// * `page_size` - Records per page; zero is raised to one
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_items: 0,
        }
    }

    /// Adopt a new result length and return to page 1.
    pub fn reset(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = 1;
    }

    /// Current page, starting at 1.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages; never less than one.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    /// Jump to a page.
    ///
    /// # Returns
    /// * `bool` - False (and no change) if `page` is outside `1..=total_pages`
    pub fn set_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            tracing::debug!(page, total = self.total_pages(), "page out of range ignored");
            return false;
        }
        self.current_page = page;
        true
    }

    /// Advance one page if possible.
    pub fn next_page(&mut self) -> bool {
        self.set_page(self.current_page + 1)
    }

    /// Go back one page if possible.
    pub fn prev_page(&mut self) -> bool {
        self.set_page(self.current_page.saturating_sub(1))
    }

    /// Index range of the current page, clipped to the result length.
    pub fn page_range(&self) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(self.total_items);
        let end = (self.current_page * self.page_size).min(self.total_items);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_total_pages() {
        let mut pages = Pagination::new(10);
        pages.reset(25);
        assert_eq!(pages.total_pages(), 3);
        pages.reset(30);
        assert_eq!(pages.total_pages(), 3);
        pages.reset(0);
        assert_eq!(pages.total_pages(), 1);
    }

    #[test]
    fn test_pagination_rejects_out_of_range() {
        let mut pages = Pagination::new(10);
        pages.reset(25);
        assert!(pages.set_page(2));
        assert!(!pages.set_page(4));
        assert_eq!(pages.current_page(), 2);
        assert!(!pages.set_page(0));
        assert_eq!(pages.current_page(), 2);
    }

    #[test]
    fn test_pagination_page_range_clipped() {
        let mut pages = Pagination::new(10);
        pages.reset(25);
        assert_eq!(pages.page_range(), 0..10);
        pages.set_page(3);
        assert_eq!(pages.page_range(), 20..25);
    }

    #[test]
    fn test_pagination_empty_result_has_one_empty_page() {
        let pages = Pagination::new(10);
        assert_eq!(pages.current_page(), 1);
        assert_eq!(pages.page_range(), 0..0);
    }

    #[test]
    fn test_pagination_reset_returns_to_first_page() {
        let mut pages = Pagination::new(5);
        pages.reset(20);
        pages.set_page(3);
        pages.reset(20);
        assert_eq!(pages.current_page(), 1);
    }

    #[test]
    fn test_pagination_next_prev() {
        let mut pages = Pagination::new(10);
        pages.reset(15);
        assert!(!pages.prev_page());
        assert!(pages.next_page());
        assert!(!pages.next_page());
        assert_eq!(pages.current_page(), 2);
        assert!(pages.prev_page());
        assert_eq!(pages.current_page(), 1);
    }

    #[test]
    fn test_pagination_zero_page_size_raised() {
        let mut pages = Pagination::new(0);
        pages.reset(3);
        assert_eq!(pages.total_pages(), 3);
    }
}
