//! Page bounds calculation
//!
//! Pure functions for turning a 1-indexed page number into slice bounds.
//! Unlike a strict paginator, an out-of-range page is not an error: it simply
//! produces an empty slice while still reporting the real page count.

/// Number of posts shown per page on the front page
pub const POSTS_PER_PAGE: usize = 2;

/// Pagination metadata and slice bounds for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub start_index: usize,
    pub end_index: usize,
}

impl Pagination {
    /// Calculate pagination for `page` (1-indexed) over `total_items`
    ///
    /// `page` of 0 is treated as 1 and a `per_page` of 0 as 1, so the result
    /// always satisfies `start_index <= end_index <= total_items`.
    pub fn new(total_items: usize, page: usize, per_page: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);

        let total_pages = total_items.div_ceil(per_page);
        let start_index = (page - 1).saturating_mul(per_page).min(total_items);
        let end_index = start_index.saturating_add(per_page).min(total_items);

        Self {
            current_page: page,
            total_pages,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
            start_index,
            end_index,
        }
    }

    /// Borrow the items that fall on this page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end_index.min(items.len());
        let start = self.start_index.min(end);
        &items[start..end]
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let p = Pagination::new(3, 1, POSTS_PER_PAGE);
        assert_eq!((p.start_index, p.end_index), (0, 2));
        assert_eq!(p.total_pages, 2);
        assert!(p.has_next_page);
        assert!(!p.has_prev_page);
    }

    #[test]
    fn test_last_partial_page() {
        let p = Pagination::new(3, 2, POSTS_PER_PAGE);
        assert_eq!((p.start_index, p.end_index), (2, 3));
        assert_eq!(p.len(), 1);
        assert!(!p.has_next_page);
        assert!(p.has_prev_page);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let p = Pagination::new(3, 5, POSTS_PER_PAGE);
        assert_eq!(p.start_index, 3);
        assert!(p.is_empty());
        assert_eq!(p.total_pages, 2);
        assert!(!p.has_next_page);
        assert!(p.has_prev_page);
        assert!(p.slice(&[1, 2, 3][..]).is_empty());
    }

    #[test]
    fn test_no_items() {
        let p = Pagination::new(0, 1, POSTS_PER_PAGE);
        assert_eq!(p.total_pages, 0);
        assert!(p.is_empty());
        assert!(!p.has_next_page);
        assert!(!p.has_prev_page);
    }

    #[test]
    fn test_exact_boundary() {
        let p = Pagination::new(4, 2, POSTS_PER_PAGE);
        assert_eq!(p.total_pages, 2);
        assert_eq!((p.start_index, p.end_index), (2, 4));
        assert!(!p.has_next_page);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let p = Pagination::new(3, usize::MAX, POSTS_PER_PAGE);
        assert_eq!(p.start_index, 3);
        assert!(p.is_empty());
    }

    #[test]
    fn test_zero_page_and_zero_size_are_clamped() {
        let p = Pagination::new(3, 0, 0);
        assert_eq!(p.current_page, 1);
        assert_eq!((p.start_index, p.end_index), (0, 1));
        assert_eq!(p.total_pages, 3);
    }

    #[test]
    fn test_slice_third_item() {
        let items = ["a", "b", "c"];
        let p = Pagination::new(items.len(), 2, POSTS_PER_PAGE);
        assert_eq!(p.slice(&items[..]), &["c"]);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        for total in 0..10usize {
            let p = Pagination::new(total, 1, POSTS_PER_PAGE);
            assert_eq!(p.total_pages, (total + 1) / 2);
        }
    }
}
