//! Query coordination: one owner for {filter, page state, results}.
//!
//! The coordinator is a pure state machine. Every transition that needs a
//! fetch hands back an [`IssuedQuery`]; the caller runs it and feeds the
//! outcome into [`QueryCoordinator::apply_response`]. Responses racing out
//! of order are harmless because only the latest issued request id is ever
//! applied.

use serde::{Deserialize, Serialize};

use crate::candidate_filter::CandidateFilter;
use crate::candidate_query::CandidateQuery;
use crate::candidate_result::CandidateResultSet;
use crate::pagination::{PageState, parse_page_input};
use crate::projector::{ResultViewModel, project};


/// Where the coordinator stands between issuing a query and showing results.
/// `Loading` (no completed response) is distinct from a `Loaded` empty
/// result set and from `Failed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum QueryPhase {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// A query the caller must run, tagged with the id used for stale-response
/// rejection.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedQuery {
    pub request_id: u64,
    pub query: CandidateQuery,
}

/// Outcome of feeding a response back into the coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    /// The response was current and has been applied. When the reported
    /// total pushed the current page out of range, the page was clamped and
    /// the follow-up query must be run too.
    Applied { follow_up: Option<IssuedQuery> },
    /// The response belonged to a superseded request and was discarded.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryCoordinator {
    filter: CandidateFilter,
    page: PageState,
    phase: QueryPhase,
    results: Option<CandidateResultSet>,
    last_issued_id: u64,
}

impl QueryCoordinator {
    /// Builds the coordinator and issues the initial fetch.
    pub fn new(filter: CandidateFilter, current_page: u64, items_per_page: u64) -> (Self, IssuedQuery) {
        let mut coordinator = Self {
            filter,
            page: PageState::restored(items_per_page, current_page, 0),
            phase: QueryPhase::Loading,
            results: None,
            last_issued_id: 0,
        };
        let issued = coordinator.issue();
        (coordinator, issued)
    }

    pub fn filter(&self) -> &CandidateFilter {
        &self.filter
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn phase(&self) -> &QueryPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == QueryPhase::Loading
    }

    pub fn results(&self) -> Option<&CandidateResultSet> {
        self.results.as_ref()
    }

    /// Projection of the current response for rendering. `None` while no
    /// completed response is held (loading or failed).
    pub fn view_model(&self) -> Option<ResultViewModel> {
        self.results
            .as_ref()
            .map(|set| project(&set.candidates, set.total_count, &self.page))
    }

    /// Replaces the active filter, returns to page 1 and issues with
    /// offset 0. Re-applying an identical filter still refetches.
    pub fn set_filter(&mut self, filter: CandidateFilter) -> IssuedQuery {
        self.filter = filter;
        self.page = PageState::restored(self.page.items_per_page(), 1, 0);
        self.issue()
    }

    /// Moves to page `n` and issues with the derived offset; rejected
    /// outside `[1, total_pages]` with no state change and no query. A
    /// request for the current page is a no-op and issues nothing.
    pub fn go_to_page(&mut self, n: u64) -> Option<IssuedQuery> {
        if self.page.go_to_page(n) {
            Some(self.issue())
        } else {
            None
        }
    }

    /// Free-text page jump: digits only, then the same bounds check as
    /// [`Self::go_to_page`].
    pub fn jump_to_page(&mut self, input: &str) -> Option<IssuedQuery> {
        let n = parse_page_input(input)?;
        self.go_to_page(n)
    }

    /// Switches the page size, returns to page 1 and issues with offset 0.
    /// Sizes outside the allowed set are rejected.
    pub fn set_page_size(&mut self, size: u64) -> Option<IssuedQuery> {
        if self.page.set_page_size(size) {
            Some(self.issue())
        } else {
            None
        }
    }

    /// Adopts externally navigated state (browser back/forward). Issues only
    /// when the {filter, page, size} triple actually differs from what the
    /// coordinator already holds.
    pub fn sync(&mut self, filter: CandidateFilter, current_page: u64, items_per_page: u64) -> Option<IssuedQuery> {
        if filter == self.filter
            && current_page == self.page.current_page()
            && items_per_page == self.page.items_per_page()
        {
            return None;
        }
        // known totals stay valid only while the filter is unchanged
        let total_items = if filter == self.filter { self.page.total_items() } else { 0 };
        self.filter = filter;
        self.page = PageState::restored(items_per_page, current_page, total_items);
        Some(self.issue())
    }

    /// Applies a response if it answers the latest issued request; a stale
    /// response is discarded silently. Failure empties the result set and
    /// surfaces the error through the phase.
    pub fn apply_response(
        &mut self,
        request_id: u64,
        response: Result<CandidateResultSet, String>,
    ) -> ResponseOutcome {
        if request_id != self.last_issued_id {
            return ResponseOutcome::Stale;
        }
        match response {
            Ok(result_set) => {
                let page_moved = self.page.set_total_items(result_set.total_count);
                self.results = Some(result_set);
                self.phase = QueryPhase::Loaded;
                let follow_up = if page_moved { Some(self.issue()) } else { None };
                ResponseOutcome::Applied { follow_up }
            }
            Err(message) => {
                self.results = None;
                self.phase = QueryPhase::Failed(message);
                ResponseOutcome::Applied { follow_up: None }
            }
        }
    }

    fn issue(&mut self) -> IssuedQuery {
        self.last_issued_id += 1;
        self.phase = QueryPhase::Loading;
        self.results = None;
        IssuedQuery {
            request_id: self.last_issued_id,
            query: CandidateQuery {
                filters: self.filter.clone(),
                limit: self.page.items_per_page(),
                offset: self.page.offset(),
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate_result::Candidate;

    fn result_set(count: usize, total: u64) -> CandidateResultSet {
        CandidateResultSet {
            candidates: (0..count)
                .map(|i| Candidate {
                    slug: format!("candidate-{i}"),
                    ..Candidate::default()
                })
                .collect(),
            total_count: total,
        }
    }

    fn loaded_coordinator(total: u64) -> QueryCoordinator {
        let (mut coordinator, issued) = QueryCoordinator::new(CandidateFilter::default(), 1, 25);
        let outcome = coordinator.apply_response(issued.request_id, Ok(result_set(25, total)));
        assert_eq!(outcome, ResponseOutcome::Applied { follow_up: None });
        coordinator
    }

    #[test]
    fn initial_query_starts_at_offset_zero() {
        let (coordinator, issued) = QueryCoordinator::new(CandidateFilter::default(), 1, 25);
        assert_eq!(issued.query.limit, 25);
        assert_eq!(issued.query.offset, 0);
        assert!(coordinator.is_loading());
    }

    #[test]
    fn filter_change_resets_to_first_page() {
        let mut coordinator = loaded_coordinator(200);
        coordinator.go_to_page(4).unwrap();
        let filter = CandidateFilter {
            is_technical: Some(true),
            ..CandidateFilter::default()
        };
        let issued = coordinator.set_filter(filter.clone());
        assert_eq!(issued.query.offset, 0);
        assert_eq!(issued.query.filters, filter);
        assert_eq!(coordinator.page().current_page(), 1);
    }

    #[test]
    fn page_size_change_resets_page_and_reissues() {
        let mut coordinator = loaded_coordinator(200);
        coordinator.go_to_page(3).unwrap();
        let issued = coordinator.set_page_size(10).unwrap();
        assert_eq!(issued.query.limit, 10);
        assert_eq!(issued.query.offset, 0);
        assert!(coordinator.set_page_size(33).is_none());
    }

    #[test]
    fn page_change_keeps_filter_and_size() {
        let mut coordinator = loaded_coordinator(200);
        let issued = coordinator.go_to_page(3).unwrap();
        assert_eq!(issued.query.offset, 50);
        assert_eq!(issued.query.limit, 25);
        assert_eq!(issued.query.filters, CandidateFilter::default());
    }

    #[test]
    fn out_of_range_page_issues_nothing() {
        let mut coordinator = loaded_coordinator(60);
        let before = coordinator.clone();
        assert!(coordinator.go_to_page(0).is_none());
        assert!(coordinator.go_to_page(4).is_none());
        // same-page requests issue nothing either
        assert!(coordinator.go_to_page(1).is_none());
        assert_eq!(coordinator, before);
    }

    #[test]
    fn text_page_jump_requires_digits_and_bounds() {
        let mut coordinator = loaded_coordinator(60);
        assert!(coordinator.jump_to_page("x2").is_none());
        assert!(coordinator.jump_to_page("9").is_none());
        let issued = coordinator.jump_to_page("3").unwrap();
        assert_eq!(issued.query.offset, 50);
    }

    #[test]
    fn stale_response_is_discarded() {
        let (mut coordinator, first) = QueryCoordinator::new(CandidateFilter::default(), 1, 25);
        coordinator.apply_response(first.request_id, Ok(result_set(25, 200)));
        let second = coordinator.go_to_page(2).unwrap();
        let third = coordinator.go_to_page(3).unwrap();

        // second's response arrives after third was issued
        assert_eq!(
            coordinator.apply_response(second.request_id, Ok(result_set(25, 999))),
            ResponseOutcome::Stale
        );
        assert!(coordinator.is_loading());

        let outcome = coordinator.apply_response(third.request_id, Ok(result_set(10, 200)));
        assert_eq!(outcome, ResponseOutcome::Applied { follow_up: None });
        assert_eq!(coordinator.results().unwrap().candidates.len(), 10);
        assert_eq!(coordinator.page().total_items(), 200);
    }

    #[test]
    fn failure_empties_results_and_surfaces_the_error() {
        let mut coordinator = loaded_coordinator(60);
        let issued = coordinator.go_to_page(2).unwrap();
        coordinator.apply_response(issued.request_id, Err("upstream down".to_string()));
        assert_eq!(coordinator.results(), None);
        assert_eq!(coordinator.phase(), &QueryPhase::Failed("upstream down".to_string()));
        assert!(coordinator.view_model().is_none());
    }

    #[test]
    fn shrunken_totals_clamp_the_page_and_refetch() {
        let mut coordinator = loaded_coordinator(200);
        let issued = coordinator.go_to_page(8).unwrap();
        let outcome = coordinator.apply_response(issued.request_id, Ok(result_set(0, 30)));
        let ResponseOutcome::Applied { follow_up: Some(follow_up) } = outcome else {
            panic!("expected a follow-up query");
        };
        assert_eq!(coordinator.page().current_page(), 2);
        assert_eq!(follow_up.query.offset, 25);
        coordinator.apply_response(follow_up.request_id, Ok(result_set(5, 30)));
        assert_eq!(coordinator.view_model().unwrap().total_pages, 2);
    }

    #[test]
    fn sync_ignores_identical_route_state() {
        let mut coordinator = loaded_coordinator(60);
        assert!(coordinator.sync(CandidateFilter::default(), 1, 25).is_none());
        let issued = coordinator
            .sync(CandidateFilter::default(), 2, 25)
            .expect("page change must refetch");
        assert_eq!(issued.query.offset, 25);
    }
}
