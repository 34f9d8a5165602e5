//! Page state and pagination math for the result list.

use serde::{Deserialize, Serialize};

use crate::search_const::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, PAGE_WINDOW_RADIUS};


/// One entry of the visible page-number window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageItem {
    Page(u64),
    Ellipsis,
}

/// Current page, page size and total count, with the invariant
/// `1 <= current_page <= max(total_pages, 1)` held across every transition.
/// The query offset is always derived from this state, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageState {
    current_page: u64,
    items_per_page: u64,
    total_items: u64,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    /// Starts on page 1 with no known results. A size outside the allowed
    /// set falls back to the default.
    pub fn new(items_per_page: u64) -> Self {
        let items_per_page = if PAGE_SIZE_OPTIONS.contains(&items_per_page) {
            items_per_page
        } else {
            DEFAULT_PAGE_SIZE
        };
        Self {
            current_page: 1,
            items_per_page,
            total_items: 0,
        }
    }

    /// Rebuilds page state from externally carried values (typically a
    /// route). With no known total the requested page is trusted as-is; the
    /// first response clamps it via [`Self::set_total_items`].
    pub fn restored(items_per_page: u64, current_page: u64, total_items: u64) -> Self {
        let mut state = Self::new(items_per_page);
        state.total_items = total_items;
        let max_page = if total_items == 0 {
            current_page.max(1)
        } else {
            state.total_pages()
        };
        state.current_page = current_page.clamp(1, max_page.max(1));
        state
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn items_per_page(&self) -> u64 {
        self.items_per_page
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn total_pages(&self) -> u64 {
        if self.total_items == 0 {
            0
        } else {
            self.total_items.div_ceil(self.items_per_page)
        }
    }

    /// Zero-based index of the first item on the current page.
    pub fn offset(&self) -> u64 {
        (self.current_page - 1) * self.items_per_page
    }

    /// Moves to page `n` if it is within `[1, total_pages]`. Out-of-range
    /// requests are rejected without any state change. Requesting the page
    /// already shown is also rejected, so the caller issues no refetch for
    /// a same-page request.
    pub fn go_to_page(&mut self, n: u64) -> bool {
        if n >= 1 && n <= self.total_pages() && n != self.current_page {
            self.current_page = n;
            true
        } else {
            false
        }
    }

    /// Switches the page size and returns to page 1, since the old offset
    /// loses its meaning. Sizes outside the allowed set are rejected.
    pub fn set_page_size(&mut self, size: u64) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            return false;
        }
        self.items_per_page = size;
        self.current_page = 1;
        true
    }

    /// Records a fresh total and clamps the current page back into range.
    /// Returns true when the clamp moved the page.
    pub fn set_total_items(&mut self, total: u64) -> bool {
        self.total_items = total;
        let max_page = self.total_pages().max(1);
        if self.current_page > max_page {
            self.current_page = max_page;
            true
        } else {
            false
        }
    }

    /// 1-based inclusive item range of the current page. With no results the
    /// range is the empty-but-well-formed `(1, 0)`.
    pub fn item_range(&self) -> (u64, u64) {
        let start = (self.current_page - 1) * self.items_per_page + 1;
        let end = (self.current_page * self.items_per_page).min(self.total_items);
        (start, end)
    }

    /// Page indicators around the current page: first and last page as
    /// anchors, a contiguous window of `PAGE_WINDOW_RADIUS` pages on each
    /// side, and ellipsis markers over any gap. Empty when there is at most
    /// one page, in which case pagination is not shown at all.
    pub fn visible_window(&self) -> Vec<PageItem> {
        let total_pages = self.total_pages();
        if total_pages <= 1 {
            return Vec::new();
        }
        let current = self.current_page;
        let lo = current.saturating_sub(PAGE_WINDOW_RADIUS).max(2);
        let hi = (current + PAGE_WINDOW_RADIUS).min(total_pages - 1);

        let mut window = vec![PageItem::Page(1)];
        if current > PAGE_WINDOW_RADIUS + 2 {
            window.push(PageItem::Ellipsis);
        }
        for page in lo..=hi {
            window.push(PageItem::Page(page));
        }
        if current + PAGE_WINDOW_RADIUS < total_pages - 1 {
            window.push(PageItem::Ellipsis);
        }
        window.push(PageItem::Page(total_pages));
        window
    }
}

/// Strict parse for the free-text "go to page" input: digits only, nothing
/// else. Bounds are checked separately by [`PageState::go_to_page`].
pub fn parse_page_input(input: &str) -> Option<u64> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn page_state(current: u64, size: u64, total: u64) -> PageState {
        let mut state = PageState::new(size);
        state.set_total_items(total);
        assert!(current == 1 || state.go_to_page(current));
        state
    }

    #[test]
    fn total_pages_rounds_up_and_is_zero_when_empty() {
        assert_eq!(page_state(1, 25, 60).total_pages(), 3);
        assert_eq!(page_state(1, 25, 50).total_pages(), 2);
        assert_eq!(page_state(1, 25, 0).total_pages(), 0);
    }

    #[test]
    fn item_range_on_last_partial_page() {
        let state = page_state(3, 25, 60);
        assert_eq!(state.item_range(), (51, 60));
    }

    #[test]
    fn item_range_is_empty_but_well_formed_without_results() {
        let state = page_state(1, 25, 0);
        assert_eq!(state.item_range(), (1, 0));
        assert!(state.visible_window().is_empty());
    }

    #[test]
    fn out_of_range_jumps_are_rejected_without_state_change() {
        let mut state = page_state(2, 10, 45);
        let before = state.clone();
        assert!(!state.go_to_page(0));
        assert!(!state.go_to_page(6));
        assert_eq!(state, before);
    }

    #[test]
    fn same_page_requests_are_rejected_too() {
        let mut state = page_state(3, 10, 45);
        let before = state.clone();
        assert!(!state.go_to_page(3));
        assert_eq!(state, before);
    }

    #[test]
    fn restored_page_is_trusted_until_a_total_clamps_it() {
        // a route can carry a page beyond what the (still unknown) total
        // allows; the page is kept so its offset rides into the first query
        let mut state = PageState::restored(25, 5, 0);
        assert_eq!(state.current_page(), 5);
        assert_eq!(state.offset(), 100);
        // the first response reports 30 items, pulling the page into range
        assert!(state.set_total_items(30));
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.offset(), 25);
    }

    #[test]
    fn restored_page_clamps_immediately_when_the_total_is_known() {
        let state = PageState::restored(25, 9, 30);
        assert_eq!(state.current_page(), 2);
        let state = PageState::restored(25, 0, 30);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut state = page_state(3, 25, 120);
        assert!(state.set_page_size(10));
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.offset(), 0);
        assert!(!state.set_page_size(33));
        assert_eq!(state.items_per_page(), 10);
    }

    #[test]
    fn offset_is_always_derived_from_page_and_size() {
        let mut state = page_state(1, 25, 500);
        for n in [7, 2, 20, 1] {
            assert!(state.go_to_page(n));
            assert_eq!(state.offset(), (n - 1) * 25);
        }
        state.set_page_size(100);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn current_page_stays_in_bounds_after_any_sequence() {
        let mut state = PageState::new(25);
        state.set_total_items(60);
        state.go_to_page(3);
        state.go_to_page(99);
        state.set_page_size(100);
        state.go_to_page(2);
        state.set_total_items(0);
        let max_page = state.total_pages().max(1);
        assert!(state.current_page() >= 1 && state.current_page() <= max_page);
    }

    #[test]
    fn shrinking_totals_clamp_the_current_page() {
        let mut state = page_state(4, 10, 100);
        assert!(state.set_total_items(15));
        assert_eq!(state.current_page(), 2);
        assert!(!state.set_total_items(15));
    }

    #[test]
    fn window_in_the_middle_has_both_ellipses() {
        let state = page_state(10, 10, 200);
        assert_eq!(
            state.visible_window(),
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(8),
                PageItem::Page(9),
                PageItem::Page(10),
                PageItem::Page(11),
                PageItem::Page(12),
                PageItem::Ellipsis,
                PageItem::Page(20),
            ]
        );
    }

    #[test]
    fn window_near_the_edges_drops_the_ellipses() {
        let state = page_state(2, 10, 50);
        assert_eq!(
            state.visible_window(),
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Page(4),
                PageItem::Page(5),
            ]
        );
        let state = page_state(19, 10, 200);
        assert_eq!(
            state.visible_window(),
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(17),
                PageItem::Page(18),
                PageItem::Page(19),
                PageItem::Page(20),
            ]
        );
    }

    #[test]
    fn page_input_must_be_digits_only() {
        assert_eq!(parse_page_input("12"), Some(12));
        assert_eq!(parse_page_input("007"), Some(7));
        assert_eq!(parse_page_input(""), None);
        assert_eq!(parse_page_input(" 3"), None);
        assert_eq!(parse_page_input("3a"), None);
        assert_eq!(parse_page_input("-2"), None);
    }
}
