//! Listing pagination planning.
//!
//! Collections of products and blogs of articles share one algorithm: split
//! an item count into fixed-size windows, give the first page the bare
//! entity route and number the rest.

/// One page of a paginated listing.
///
/// `skip`/`limit` describe the item window the page renders;
/// `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: usize,
    pub skip: usize,
    pub page: usize,
    pub total_pages: usize,
}

/// Plan the pagination windows for `item_count` items.
///
/// Returns `ceil(item_count / page_size)` windows with
/// `skip = (page - 1) * page_size`; no windows for zero items.
///
/// `page_size` must be positive; configuration validation enforces this
/// before the planner ever runs.
pub fn plan(item_count: usize, page_size: usize) -> Vec<PageWindow> {
    debug_assert!(page_size > 0, "page size must be positive");
    if item_count == 0 || page_size == 0 {
        return Vec::new();
    }

    let total_pages = item_count.div_ceil(page_size);
    (1..=total_pages)
        .map(|page| PageWindow {
            limit: page_size,
            skip: (page - 1) * page_size,
            page,
            total_pages,
        })
        .collect()
}

/// Route variant for one page of a listing.
///
/// Page 1 uses the entity's bare route; page `k > 1` appends `/k`.
pub fn page_path(theme_path: &str, page: usize) -> String {
    if page <= 1 {
        theme_path.to_owned()
    } else {
        format!("{theme_path}/{page}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_empty() {
        assert!(plan(0, 9).is_empty());
    }

    #[test]
    fn test_plan_single_partial_page() {
        let windows = plan(5, 9);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0], PageWindow { limit: 9, skip: 0, page: 1, total_pages: 1 });
    }

    #[test]
    fn test_plan_exact_fit() {
        let windows = plan(18, 9);
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[1].skip, 9);
    }

    #[test]
    fn test_plan_partial_last_page() {
        let windows = plan(25, 9);
        assert_eq!(windows.len(), 3);
        assert_eq!(windows[2], PageWindow { limit: 9, skip: 18, page: 3, total_pages: 3 });
    }

    #[test]
    fn test_plan_window_count_matches_ceil() {
        for (item_count, page_size) in [(1usize, 1usize), (10, 3), (9, 9), (100, 7), (6, 6)] {
            let windows = plan(item_count, page_size);
            assert_eq!(windows.len(), item_count.div_ceil(page_size));
        }
    }

    #[test]
    fn test_plan_skips_strictly_increase_by_page_size() {
        let windows = plan(100, 7);
        for pair in windows.windows(2) {
            assert_eq!(pair[1].skip, pair[0].skip + 7);
        }
    }

    #[test]
    fn test_plan_windows_cover_all_items() {
        let windows = plan(25, 9);
        let last = windows.last().unwrap();
        // Last window reaches past the end; earlier windows stay within it
        assert!(last.skip + last.limit >= 25);
        for w in &windows[..windows.len() - 1] {
            assert!(w.skip + w.limit < 25);
        }
    }

    #[test]
    fn test_plan_pages_are_one_based_and_consistent() {
        let windows = plan(30, 10);
        for (i, w) in windows.iter().enumerate() {
            assert_eq!(w.page, i + 1);
            assert_eq!(w.total_pages, 3);
            assert_eq!(w.skip, (w.page - 1) * w.limit);
        }
    }

    #[test]
    fn test_page_path_first_page_bare() {
        assert_eq!(page_path("/collection/sale", 1), "/collection/sale");
    }

    #[test]
    fn test_page_path_later_pages_numbered() {
        assert_eq!(page_path("/collection/sale", 2), "/collection/sale/2");
        assert_eq!(page_path("/blog/news", 10), "/blog/news/10");
    }
}
