//! Pagination bar under the result list: item range, page window, page jump.

use common::pagination::PageItem;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, IconShape, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

use crate::pages::candidate_search_page::CandidateSearchState;

#[component]
pub fn PaginationControls() -> Element {
    rsx! {
        div {
            id: "x-pagination-controls",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                flex-wrap: wrap;
                gap: 16px;
                padding: 12px 4px;
                width: 100%;
                box-sizing: border-box;
            ",
            ItemRangeLabel {}
            // empty space
            div {
                style: "flex-grow: 1;"
            }
            PageWindowButtons {}
            PageJumpInput {}
        }
    }
}

#[component]
fn ItemRangeLabel() -> Element {
    let state = use_context::<CandidateSearchState>();
    let coordinator = state.coordinator;
    let coordinator = coordinator.read();
    let (start, end) = coordinator.page().item_range();
    let total = coordinator.page().total_items();
    rsx! {
        div {
            style: "font-size: 14px; color: rgba(0,0,0,0.7);",
            "Showing {start}-{end} of {total} candidates"
        }
    }
}

#[component]
fn PageWindowButtons() -> Element {
    let state = use_context::<CandidateSearchState>();
    let coordinator = state.coordinator;
    let current_page = use_memo(move || coordinator.read().page().current_page());
    let total_pages = use_memo(move || coordinator.read().page().total_pages());
    let window = use_memo(move || coordinator.read().page().visible_window());

    let can_go_back = use_memo(move || current_page() > 1);
    let can_go_forward = use_memo(move || current_page() < total_pages());

    let window_items = window().into_iter().enumerate().map(|(position, item)| match item {
        PageItem::Page(page) => rsx! {
            PageNumberButton {
                key: "{position}-{page}",
                page,
                is_current: page == current_page(),
            }
        },
        PageItem::Ellipsis => rsx! {
            span {
                key: "{position}-ellipsis",
                style: "padding: 0 4px; color: rgba(0,0,0,0.5);",
                "..."
            }
        },
    });

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !can_go_back(),
                onclick: move |_| { state.go_to_page.call(current_page() - 1); }
            }
            {window_items}
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: !can_go_forward(),
                onclick: move |_| { state.go_to_page.call(current_page() + 1); }
            }
        }
    }
}

#[component]
fn PageNumberButton(page: u64, is_current: bool) -> Element {
    let state = use_context::<CandidateSearchState>();
    let background = if is_current { "#1C212D" } else { "white" };
    let color = if is_current { "white" } else { "#111827" };
    rsx! {
        button {
            style: "
                min-width: 32px;
                height: 32px;
                padding: 0 6px;
                font-size: 14px;
                border-radius: 8px;
                border: 1px solid #D1D5DB;
                background: {background};
                color: {color};
                cursor: pointer;
            ",
            onclick: move |_| {
                state.go_to_page.call(page);
            },
            "{page}"
        }
    }
}

#[component]
fn PageJumpInput() -> Element {
    let state = use_context::<CandidateSearchState>();
    let mut jump_input = use_signal(String::new);
    let submit = Callback::new(move |_: ()| {
        let input = jump_input.peek().clone();
        // out-of-range and non-numeric jumps are silently ignored
        state.jump_to_page.call(input);
        jump_input.set(String::new());
    });
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
            ",
            span {
                style: "font-size: 14px; color: rgba(0,0,0,0.7);",
                "Go to page:"
            }
            input {
                r#type: "text",
                inputmode: "numeric",
                style: "
                    width: 56px;
                    height: 30px;
                    padding: 0 8px;
                    font-size: 14px;
                    border-radius: 8px;
                    border: 1px solid #D1D5DB;
                ",
                value: "{jump_input}",
                oninput: move |event| {
                    // keep only digits, matching what the jump accepts
                    let digits = event.value().chars().filter(|c| c.is_ascii_digit()).collect::<String>();
                    jump_input.set(digits);
                },
                onkeydown: move |event| {
                    if event.key() == Key::Enter {
                        submit(());
                    }
                },
            }
            button {
                style: "
                    height: 32px;
                    padding: 0 12px;
                    font-size: 14px;
                    border-radius: 8px;
                    border: 1px solid #D1D5DB;
                    background: white;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    submit(());
                },
                "Go"
            }
        }
    }
}

#[component]
fn NavigationButton<I: IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                border: 1px solid #D1D5DB;
                padding: 4px;
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 22px; height: 22px; color: {btn_color};" }
        }
    }
}
