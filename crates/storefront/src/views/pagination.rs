//! Page slicing and the sliding page-number window.

/// One element of the rendered page-button row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A numbered page button.
    Page(u32),
    /// A "..." gap between the window and the first/last anchors.
    Ellipsis,
}

/// Pagination over a filtered item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub page_size: usize,
}

impl Pagination {
    /// Paginate `item_count` items, clamping the requested page into range.
    ///
    /// An empty list still has one (empty) page so views always have a
    /// current page to show.
    #[must_use]
    pub fn new(item_count: usize, page_size: usize, requested_page: u32) -> Self {
        let total_pages = if item_count == 0 {
            1
        } else {
            u32::try_from(item_count.div_ceil(page_size)).unwrap_or(1)
        };

        Self {
            current_page: requested_page.clamp(1, total_pages),
            total_pages,
            page_size,
        }
    }

    /// The slice of `items` on the current page.
    #[must_use]
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page as usize - 1) * self.page_size;
        let end = (start + self.page_size).min(items.len());
        items.get(start..end).unwrap_or(&[])
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// The sliding window of page buttons: the current page ± 2, anchored
    /// by the first and last pages with ellipsis gaps where pages are
    /// skipped.
    #[must_use]
    pub fn window(&self) -> Vec<PageItem> {
        if self.total_pages <= 1 {
            return Vec::new();
        }

        let start_page = self.current_page.saturating_sub(2).max(1);
        let end_page = (self.current_page + 2).min(self.total_pages);

        let mut items = Vec::new();
        if start_page > 1 {
            items.push(PageItem::Page(1));
            if start_page > 2 {
                items.push(PageItem::Ellipsis);
            }
        }

        for page in start_page..=end_page {
            items.push(PageItem::Page(page));
        }

        if end_page < self.total_pages {
            if end_page < self.total_pages - 1 {
                items.push(PageItem::Ellipsis);
            }
            items.push(PageItem::Page(self.total_pages));
        }

        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn test_page_count_and_clamping() {
        let p = Pagination::new(25, 12, 1);
        assert_eq!(p.total_pages, 3);

        assert_eq!(Pagination::new(25, 12, 99).current_page, 3);
        assert_eq!(Pagination::new(25, 12, 0).current_page, 1);
        assert_eq!(Pagination::new(0, 12, 5).total_pages, 1);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<u32> = (0..25).collect();

        let first = Pagination::new(items.len(), 12, 1);
        assert_eq!(first.page_slice(&items).len(), 12);

        let last = Pagination::new(items.len(), 12, 3);
        assert_eq!(last.page_slice(&items), &[24]);
    }

    #[test]
    fn test_window_hidden_for_single_page() {
        assert!(Pagination::new(8, 12, 1).window().is_empty());
    }

    #[test]
    fn test_window_small_page_count_shows_everything() {
        let p = Pagination::new(40, 10, 2); // 4 pages
        assert_eq!(
            p.window(),
            vec![Page(1), Page(2), Page(3), Page(4)]
        );
    }

    #[test]
    fn test_window_in_the_middle_of_many_pages() {
        let p = Pagination::new(120, 10, 6); // 12 pages
        assert_eq!(
            p.window(),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Page(8),
                Ellipsis,
                Page(12),
            ]
        );
        assert!(p.has_previous());
        assert!(p.has_next());
    }

    #[test]
    fn test_window_near_the_edges_skips_redundant_anchors() {
        // Page 3 of 12: window starts at 1, no leading anchor or ellipsis
        let near_start = Pagination::new(120, 10, 3);
        assert_eq!(
            near_start.window(),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Ellipsis,
                Page(12),
            ]
        );

        // Page 4 of 12: window starts at 2, anchor without ellipsis
        let at_two = Pagination::new(120, 10, 4);
        assert_eq!(
            at_two.window(),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(12),
            ]
        );

        let near_end = Pagination::new(120, 10, 11);
        assert_eq!(
            near_end.window(),
            vec![
                Page(1),
                Ellipsis,
                Page(9),
                Page(10),
                Page(11),
                Page(12),
            ]
        );
    }
}
