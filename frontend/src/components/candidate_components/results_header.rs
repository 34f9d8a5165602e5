//! Header row above the result list: filter toggle, hit count, page size.

use common::coordinator::QueryPhase;
use common::search_const::PAGE_SIZE_OPTIONS;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSettings};

use crate::pages::candidate_search_page::CandidateSearchState;

#[component]
pub fn ResultsHeader() -> Element {
    rsx! {
        div {
            id: "x-results-header",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 16px;
                padding: 12px 16px;
                width: 100%;
                box-sizing: border-box;
                border-bottom: 1px solid rgba(0,0,0,0.15);
                background-color: white;
            ",
            FilterToggleButton {}
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112); margin: 0;",
                HitCountLabel {}
            }
            // empty space
            div {
                style: "flex-grow: 1;"
            }
            PageSizeSelect {}
        }
    }
}

#[component]
fn FilterToggleButton() -> Element {
    let state = use_context::<CandidateSearchState>();
    let show_filters = state.show_filters;
    let label = use_memo(move || if *show_filters.read() { "Hide Filters" } else { "Show Filters" });
    rsx! {
        button {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                height: 34px;
                padding: 0 12px;
                font-size: 14px;
                border-radius: 8px;
                background: white;
                color: #111827;
                border: 1px solid #D1D5DB;
                cursor: pointer;
            ",
            onclick: move |_| {
                state.toggle_filters.call(());
            },
            Icon { icon: MdSettings, style: "width: 18px; height: 18px; color:#6B7280;" }
            "{label}"
        }
    }
}

#[component]
fn HitCountLabel() -> Element {
    let state = use_context::<CandidateSearchState>();
    let coordinator = state.coordinator;
    let coordinator = coordinator.read();
    match coordinator.phase() {
        QueryPhase::Loading => rsx! { "Loading..." },
        QueryPhase::Failed(_) => rsx! { "Search failed" },
        QueryPhase::Loaded => {
            let total = coordinator.page().total_items();
            rsx! { "{total} candidates found" }
        }
    }
}

#[component]
fn PageSizeSelect() -> Element {
    let state = use_context::<CandidateSearchState>();
    let coordinator = state.coordinator;
    let items_per_page = use_memo(move || coordinator.read().page().items_per_page());
    rsx! {
        label {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                font-size: 14px;
                color: #111827;
            ",
            "Per page:"
            select {
                style: "
                    height: 32px;
                    padding: 0 8px;
                    font-size: 14px;
                    border-radius: 8px;
                    border: 1px solid #D1D5DB;
                    background: white;
                    cursor: pointer;
                ",
                value: "{items_per_page()}",
                onchange: move |event| {
                    if let Ok(size) = event.value().parse::<u64>() {
                        state.set_page_size.call(size);
                    }
                },
                for size in PAGE_SIZE_OPTIONS {
                    option {
                        value: "{size}",
                        selected: size == items_per_page(),
                        "{size}"
                    }
                }
            }
        }
    }
}
