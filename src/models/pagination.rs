//! Windowed pagination over an already-filtered collection.

/// One page of a result set, plus the count metadata computed over the whole
/// filtered source.
///
/// Construction is the only operation: the value is never mutated afterwards
/// and never persisted.
#[derive(Debug, Clone)]
pub struct PaginatedList<T> {
    pub items: Vec<T>,
    pub page_number: i32,
    pub page_size: i32,
    pub total_count: i32,
    pub total_pages: i32,
}

impl<T> PaginatedList<T> {
    /// Window `source` down to the requested page.
    ///
    /// `page_number` is 1-based. A page at or below zero selects from the
    /// start (the effective skip is clamped to zero). A `page_size` at or
    /// below zero yields an empty item list with `total_pages == 0`; the
    /// total-pages division is only performed for a positive page size.
    ///
    /// `total_count` is the full size of `source`, independent of windowing,
    /// and `total_pages` is `ceil(total_count / page_size)`. The source order
    /// is preserved.
    pub fn new(source: Vec<T>, page_number: i32, page_size: i32) -> Self {
        let total_count = source.len() as i32;
        let total_pages = if page_size > 0 {
            (total_count + page_size - 1) / page_size
        } else {
            0
        };

        let skip = (i64::from(page_number) - 1).max(0) * i64::from(page_size.max(0));
        let items = source
            .into_iter()
            .skip(skip as usize)
            .take(page_size.max(0) as usize)
            .collect();

        Self {
            items,
            page_number,
            page_size,
            total_count,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> Vec<i32> {
        vec![1, 2, 3, 4, 5]
    }

    #[test]
    fn test_page_size_zero_returns_empty() {
        let page1 = PaginatedList::new(source(), 0, 0);
        let page2 = PaginatedList::new(source(), 1, 0);

        assert!(page1.items.is_empty());
        assert!(page2.items.is_empty());
        assert_eq!(page1.total_pages, 0);
        assert_eq!(page1.total_count, 5);
    }

    #[test]
    fn test_page_zero_returns_first_page() {
        let page1 = PaginatedList::new(source(), 0, 1);
        let page2 = PaginatedList::new(source(), 0, 2);

        assert_eq!(page1.items, vec![1]);
        assert_eq!(page2.items, vec![1, 2]);
    }

    #[test]
    fn test_negative_page_returns_first_page() {
        let page = PaginatedList::new(source(), -3, 2);

        assert_eq!(page.items, vec![1, 2]);
    }

    #[test]
    fn test_total_count_and_total_pages() {
        let page = PaginatedList::new(source(), 1, 2);

        assert_eq!(page.total_count, 5);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_total_pages_exact_division() {
        let page = PaginatedList::new(vec![1, 2, 3, 4], 1, 2);

        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_first_and_second_page() {
        let page1 = PaginatedList::new(source(), 1, 1);
        let page2 = PaginatedList::new(source(), 2, 1);

        assert_eq!(page1.items, vec![1]);
        assert_eq!(page2.items, vec![2]);
    }

    #[test]
    fn test_page_windows() {
        let page1 = PaginatedList::new(source(), 1, 2);
        let page2 = PaginatedList::new(source(), 2, 2);
        let page3 = PaginatedList::new(source(), 3, 2);

        assert_eq!(page1.items, vec![1, 2]);
        assert_eq!(page2.items, vec![3, 4]);
        assert_eq!(page3.items, vec![5]);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let page = PaginatedList::new(source(), 4, 2);

        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 5);
    }

    #[test]
    fn test_pages_reconstruct_source() {
        let mut collected = Vec::new();
        for page in 1..=3 {
            collected.extend(PaginatedList::new(source(), page, 2).items);
        }

        assert_eq!(collected, source());
    }

    #[test]
    fn test_empty_source() {
        let page = PaginatedList::new(Vec::<i32>::new(), 1, 10);

        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
    }
}
