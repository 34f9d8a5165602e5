//! Candidate directory search page: owns the query coordinator and the
//! selection state, and exposes both to the presentation components.

use dioxus::prelude::*;

use common::candidate_filter::CandidateFilter;
use common::candidate_result::Candidate;
use common::coordinator::{IssuedQuery, QueryCoordinator, QueryPhase, ResponseOutcome};
use common::selection::SelectionState;

use crate::api::candidate_api::search_candidates;
use crate::components::candidate_components::candidate_modal::CandidateModal;
use crate::components::candidate_components::candidate_table::CandidateTable;
use crate::components::candidate_components::filter_panel::FilterPanel;
use crate::components::candidate_components::pagination_controls::PaginationControls;
use crate::components::candidate_components::results_header::ResultsHeader;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::loading_indicator::LoadingIndicator;
use crate::data_definitions::route_param::RouteParam;
use crate::routes::Route;


/// Page-level state handed to every search component through context.
#[derive(Copy, Clone)]
pub struct CandidateSearchState {
    pub coordinator: ReadSignal<QueryCoordinator>,
    pub selection: ReadSignal<SelectionState>,
    pub show_filters: ReadSignal<bool>,
    pub apply_filter: Callback<CandidateFilter>,
    pub go_to_page: Callback<u64>,
    pub jump_to_page: Callback<String>,
    pub set_page_size: Callback<u64>,
    pub select_candidate: Callback<Candidate>,
    pub close_detail: Callback<()>,
    pub toggle_filters: Callback<()>,
}

#[component]
pub fn CandidateSearchPage(
    filter: RouteParam<CandidateFilter>,
    current_page: u64,
    page_size: u64,
) -> Element {
    rsx! {
        Title { "Candidate Directory" }
        CandidateSearchRootComponent {
            filter: filter.0.clone(),
            current_page,
            page_size,
        }
    }
}

/// Runs an issued query and feeds the response back. Responses for
/// superseded requests are dropped by the coordinator; a follow-up query
/// (page clamped after a shrunken total) is chased recursively.
async fn run_issued_query(mut coordinator: Signal<QueryCoordinator>, issued: IssuedQuery) {
    let IssuedQuery { request_id, query } = issued;
    let response = search_candidates(query).await.map_err(|e| e.to_string());
    let outcome = coordinator.write().apply_response(request_id, response);
    if let ResponseOutcome::Applied { follow_up: Some(follow_up) } = outcome {
        Box::pin(run_issued_query(coordinator, follow_up)).await;
    }
}

fn dispatch(coordinator: Signal<QueryCoordinator>, issued: Option<IssuedQuery>) {
    if let Some(issued) = issued {
        spawn(run_issued_query(coordinator, issued));
    }
}

/// Route for the coordinator's current {filter, page, size} triple.
fn route_for(coordinator: &Signal<QueryCoordinator>) -> Route {
    let snapshot = coordinator.peek();
    Route::candidate_search(
        snapshot.filter().clone(),
        snapshot.page().current_page(),
        snapshot.page().items_per_page(),
    )
}

#[component]
fn CandidateSearchRootComponent(
    filter: ReadSignal<CandidateFilter>,
    current_page: ReadSignal<u64>,
    page_size: ReadSignal<u64>,
) -> Element {
    let (mut coordinator, initial_query) = use_hook(|| {
        let (coordinator, initial_query) = QueryCoordinator::new(
            filter.peek().clone(),
            *current_page.peek(),
            *page_size.peek(),
        );
        (Signal::new(coordinator), initial_query)
    });
    use_future(move || {
        let initial_query = initial_query.clone();
        async move { run_issued_query(coordinator, initial_query).await }
    });

    // back/forward navigation changes the route props without going through
    // our callbacks; re-sync the coordinator (no-op when nothing changed)
    use_effect(move || {
        let filter = filter.read().clone();
        let page = *current_page.read();
        let size = *page_size.read();
        let issued = coordinator.write().sync(filter, page, size);
        dispatch(coordinator, issued);
    });

    let mut selection = use_signal(SelectionState::default);
    let mut show_filters = use_signal(|| true);

    let apply_filter = Callback::new(move |new_filter: CandidateFilter| {
        let issued = coordinator.write().set_filter(new_filter);
        dispatch(coordinator, Some(issued));
        navigator().push(route_for(&coordinator));
    });

    let go_to_page = Callback::new(move |page: u64| {
        let issued = coordinator.write().go_to_page(page);
        if issued.is_some() {
            dispatch(coordinator, issued);
            navigator().push(route_for(&coordinator));
        }
    });

    let jump_to_page = Callback::new(move |input: String| {
        let issued = coordinator.write().jump_to_page(&input);
        if issued.is_some() {
            dispatch(coordinator, issued);
            navigator().push(route_for(&coordinator));
        }
    });

    let set_page_size = Callback::new(move |size: u64| {
        let issued = coordinator.write().set_page_size(size);
        if issued.is_some() {
            dispatch(coordinator, issued);
            navigator().push(route_for(&coordinator));
        }
    });

    let select_candidate = Callback::new(move |candidate: Candidate| {
        selection.write().select(candidate);
    });
    let close_detail = Callback::new(move |_: ()| {
        selection.write().close();
    });
    let toggle_filters = Callback::new(move |_: ()| {
        let current = *show_filters.peek();
        show_filters.set(!current);
    });

    use_context_provider(move || CandidateSearchState {
        coordinator: coordinator.into(),
        selection: selection.into(),
        show_filters: show_filters.into(),
        apply_filter,
        go_to_page,
        jump_to_page,
        set_page_size,
        select_candidate,
        close_detail,
        toggle_filters,
    });

    rsx! {
        div {
            id: "x-candidate-search-page",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
                overflow: auto;
            ",
            ResultsHeader {}
            div {
                id: "x-candidate-search-body",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: flex-start;
                    gap: 16px;
                    padding: 16px;
                    width: 100%;
                    box-sizing: border-box;
                ",
                if *show_filters.read() {
                    div {
                        id: "x-candidate-filter-sidebar",
                        style: "
                            flex-shrink: 0;
                            width: 320px;
                        ",
                        FilterPanel {}
                    }
                }
                div {
                    id: "x-candidate-results-section",
                    style: "
                        flex-grow: 1;
                        min-width: 0;
                    ",
                    ResultsView {}
                }
            }
        }
        if selection.read().is_open() {
            CandidateModal {}
        }
    }
}

#[component]
fn ResultsView() -> Element {
    let state = use_context::<CandidateSearchState>();
    let coordinator = state.coordinator;
    let coordinator = coordinator.read();

    match coordinator.phase() {
        QueryPhase::Loading => rsx! { LoadingIndicator {} },
        QueryPhase::Failed(message) => rsx! {
            ComponentErrorDisplay { error_txt: format!("Candidate query failed: {message}") }
        },
        QueryPhase::Loaded => {
            let show_pagination = coordinator
                .view_model()
                .map(|view| view.show_pagination)
                .unwrap_or(false);
            rsx! {
                CandidateTable {}
                if show_pagination {
                    PaginationControls {}
                }
            }
        }
    }
}
