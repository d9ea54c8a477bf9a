//! Client-side pagination over filtered lists.

/// Orders per page on the orders view.
pub const ORDERS_PER_PAGE: usize = 6;

/// Users per page on the users view.
pub const USERS_PER_PAGE: usize = 8;

/// One page of a list, plus the metadata the pagination controls need.
///
/// Pages are 1-indexed. Templates only render navigation within
/// `[1, total_pages]`, so an out-of-range request simply produces an empty
/// page rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on the current page, in their original relative order.
    pub items: Vec<T>,
    /// Current page number (1-indexed, clamped to at least 1).
    pub current: usize,
    /// Total number of pages: `ceil(total_items / page_size)`.
    pub total_pages: usize,
    /// Total items across all pages.
    pub total_items: usize,
}

impl<T> Page<T> {
    /// Slice one page out of `items`.
    ///
    /// Page `p` covers `[(p-1)*size, p*size)`. A page number of 0 is treated
    /// as 1; `size` must be non-zero.
    #[must_use]
    pub fn slice(items: Vec<T>, page_size: usize, page: usize) -> Self {
        debug_assert!(page_size > 0, "page size must be non-zero");

        let total_items = items.len();
        let total_pages = total_items.div_ceil(page_size);
        let current = page.max(1);
        let start = (current - 1).saturating_mul(page_size);

        let items: Vec<T> = items
            .into_iter()
            .skip(start)
            .take(page_size)
            .collect();

        Self {
            items,
            current,
            total_pages,
            total_items,
        }
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current > 1
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    /// All page numbers, for rendering numbered navigation buttons.
    #[must_use]
    pub fn numbers(&self) -> Vec<usize> {
        (1..=self.total_pages).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_items_page_size_six() {
        // 7 orders at page size 6 split 6 + 1 across 2 pages.
        let items: Vec<u32> = (0..7).collect();

        let first = Page::slice(items.clone(), 6, 1);
        assert_eq!(first.items.len(), 6);
        assert_eq!(first.total_pages, 2);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let second = Page::slice(items, 6, 2);
        assert_eq!(second.items, vec![6]);
        assert!(second.has_prev());
        assert!(!second.has_next());
    }

    #[test]
    fn test_pages_partition_the_list_in_order() {
        let items: Vec<u32> = (0..23).collect();
        let size = 8;
        let total_pages = Page::slice(items.clone(), size, 1).total_pages;

        let mut reassembled = Vec::new();
        for page in 1..=total_pages {
            let p = Page::slice(items.clone(), size, page);
            // Interior pages are full; only the last page may be short.
            if page < total_pages {
                assert_eq!(p.items.len(), size);
            } else {
                assert!(p.items.len() <= size);
                assert!(!p.items.is_empty());
            }
            reassembled.extend(p.items);
        }

        assert_eq!(reassembled, items);
    }

    #[test]
    fn test_empty_list_has_no_pages() {
        let page = Page::<u32>::slice(vec![], 6, 1);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_items, 0);
        assert!(page.items.is_empty());
        assert!(!page.has_prev());
        assert!(!page.has_next());
        assert!(page.numbers().is_empty());
    }

    #[test]
    fn test_exact_multiple_has_no_short_page() {
        let items: Vec<u32> = (0..12).collect();
        let page = Page::slice(items, 6, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 6);
    }

    #[test]
    fn test_out_of_range_page_is_empty_not_an_error() {
        let items: Vec<u32> = (0..3).collect();
        let page = Page::slice(items, 6, 9);
        assert!(page.items.is_empty());
        assert_eq!(page.current, 9);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_page_zero_is_treated_as_one() {
        let items: Vec<u32> = (0..3).collect();
        let page = Page::slice(items, 6, 0);
        assert_eq!(page.current, 1);
        assert_eq!(page.items.len(), 3);
    }

    #[test]
    fn test_numbers_enumerates_every_page() {
        let items: Vec<u32> = (0..20).collect();
        let page = Page::slice(items, 8, 1);
        assert_eq!(page.numbers(), vec![1, 2, 3]);
    }
}
