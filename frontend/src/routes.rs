use dioxus::prelude::*;

use common::candidate_filter::CandidateFilter;
use common::search_const::DEFAULT_PAGE_SIZE;

use crate::components::navbar::Navbar;
use crate::data_definitions::route_param::RouteParam;
use crate::pages::candidate_search_page::CandidateSearchPage;
use crate::pages::home_page::HomePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/candidates/:filter/:current_page/:page_size")]
    CandidateSearchPage {
        filter: RouteParam<CandidateFilter>,
        current_page: u64,
        page_size: u64,
    },

}

impl Route {
    pub fn candidate_search(filter: CandidateFilter, current_page: u64, page_size: u64) -> Self {
        Self::CandidateSearchPage {
            filter: RouteParam::from(filter),
            current_page,
            page_size,
        }
    }

    pub fn candidate_search_start() -> Self {
        Self::candidate_search(CandidateFilter::default(), 1, DEFAULT_PAGE_SIZE)
    }
}
