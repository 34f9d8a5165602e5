//! Projection of a query response into display-ready view state.

use serde::{Deserialize, Serialize};

use crate::candidate_result::Candidate;
use crate::pagination::PageState;


/// Derived view state for a completed response. "Loading" is not modeled
/// here: the projector only runs once a response exists, so `is_empty`
/// really means zero matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultViewModel {
    pub total_pages: u64,
    pub is_empty: bool,
    /// 1-based inclusive item range shown on this page; `(1, 0)` when there
    /// are no results.
    pub start_item: u64,
    pub end_item: u64,
    /// Pagination is rendered only with more than one page.
    pub show_pagination: bool,
}

/// Maps records plus total count into the view model. Records keep the
/// source order; nothing is re-sorted.
pub fn project(records: &[Candidate], total_count: u64, page: &PageState) -> ResultViewModel {
    let total_pages = if total_count == 0 {
        0
    } else {
        total_count.div_ceil(page.items_per_page())
    };
    let start_item = (page.current_page() - 1) * page.items_per_page() + 1;
    let end_item = (page.current_page() * page.items_per_page()).min(total_count);
    ResultViewModel {
        total_pages,
        is_empty: records.is_empty(),
        start_item,
        end_item,
        show_pagination: total_pages > 1,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn records(count: usize) -> Vec<Candidate> {
        (0..count)
            .map(|i| Candidate {
                slug: format!("c{i}"),
                ..Candidate::default()
            })
            .collect()
    }

    #[test]
    fn sixty_items_at_twenty_five_per_page_is_three_pages() {
        let mut page = PageState::new(25);
        page.set_total_items(60);
        page.go_to_page(3);
        let view = project(&records(10), 60, &page);
        assert_eq!(view.total_pages, 3);
        assert_eq!((view.start_item, view.end_item), (51, 60));
        assert!(view.show_pagination);
        assert!(!view.is_empty);
    }

    #[test]
    fn zero_results_suppress_pagination() {
        let page = PageState::new(25);
        let view = project(&records(0), 0, &page);
        assert_eq!(view.total_pages, 0);
        assert!(view.is_empty);
        assert!(!view.show_pagination);
        assert_eq!((view.start_item, view.end_item), (1, 0));
    }

    #[test]
    fn a_single_page_hides_the_pagination_too() {
        let mut page = PageState::new(25);
        page.set_total_items(12);
        let view = project(&records(12), 12, &page);
        assert_eq!(view.total_pages, 1);
        assert!(!view.show_pagination);
        assert_eq!((view.start_item, view.end_item), (1, 12));
    }
}
