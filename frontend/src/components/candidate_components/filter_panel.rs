//! Filter form for the candidate directory.
//!
//! The form edits a [`RawFilterInput`] locally; nothing reaches the query
//! until Apply normalizes the raw state into a [`CandidateFilter`]. The
//! form is refilled from the active filter whenever navigation changes it,
//! so a restored route always shows the constraints it encodes.

use common::candidate_filter::{RawFilterInput, normalize};
use dioxus::prelude::*;

use crate::pages::candidate_search_page::CandidateSearchState;

const INTEREST_OPTIONS: [&str; 16] = [
    "Technology", "Business", "Marketing", "Finance", "Design", "Sales",
    "Product", "Operations", "Healthcare", "Education", "Environment",
    "Social Impact", "Entertainment", "Travel", "Food", "Fashion",
];

const RESPONSIBILITY_OPTIONS: [&str; 15] = [
    "CEO", "CTO", "CMO", "CFO", "CPO", "COO", "VP Engineering",
    "VP Marketing", "VP Sales", "Head of Product", "Head of Design",
    "Business Development", "Strategy", "Operations", "Legal",
];

const TIMING_OPTIONS: [&str; 6] = [
    "Immediately", "Within 1 month", "Within 3 months",
    "Within 6 months", "Within 1 year", "Flexible",
];


#[component]
pub fn FilterPanel() -> Element {
    let state = use_context::<CandidateSearchState>();
    let coordinator = state.coordinator;

    let mut raw = use_signal(|| coordinator.peek().filter().to_raw_input());
    let active_filter = use_memo(move || coordinator.read().filter().clone());
    // refill the form when navigation swaps the active filter underneath us
    use_effect(move || {
        let refreshed = active_filter.read().to_raw_input();
        raw.set(refreshed);
    });

    let mut show_advanced = use_signal(|| false);
    let advanced_toggle_label = use_memo(move || {
        if *show_advanced.read() { "Hide Advanced Filters" } else { "Show Advanced Filters" }
    });

    let apply = Callback::new(move |_: ()| {
        state.apply_filter.call(normalize(&raw.peek()));
    });
    let clear_all = Callback::new(move |_: ()| {
        raw.set(RawFilterInput::cleared());
        state.apply_filter.call(normalize(&RawFilterInput::cleared()));
    });

    let has_company_selected = use_memo(move || raw.read().has_company == "true");

    rsx! {
        div {
            id: "x-filter-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                background: white;
                border: 1px solid rgba(0,0,0,0.1);
                border-radius: 8px;
                padding: 16px;
                box-sizing: border-box;
            ",
            h3 {
                style: "margin: 0; font-size: 19px; font-weight: 500; color: rgb(75, 87, 112);",
                "Search Filters"
            }

            TextFilterInput {
                label: "Search by Name",
                placeholder: "Search by candidate name...",
                value: raw.read().search_name.clone(),
                on_change: move |value| { raw.write().search_name = value; },
            }
            TextFilterInput {
                label: "General Search",
                placeholder: "Search by intro or achievements...",
                value: raw.read().search.clone(),
                on_change: move |value| { raw.write().search = value; },
            }
            RangeFilterInput {
                label: "Age Range",
                min_value: raw.read().age_min.clone(),
                max_value: raw.read().age_max.clone(),
                on_min_change: move |value| { raw.write().age_min = value; },
                on_max_change: move |value| { raw.write().age_max = value; },
            }
            SelectFilterInput {
                label: "Gender",
                value: raw.read().is_woman.clone(),
                options: vec![("true", "Woman"), ("false", "Man")],
                on_change: move |value| { raw.write().is_woman = value; },
            }
            SelectFilterInput {
                label: "Technical Background",
                value: raw.read().is_technical.clone(),
                options: vec![("true", "Technical"), ("false", "Non-technical")],
                on_change: move |value| { raw.write().is_technical = value; },
            }
            TextFilterInput {
                label: "Location",
                placeholder: "City or location",
                value: raw.read().location.clone(),
                on_change: move |value| { raw.write().location = value; },
            }
            TextFilterInput {
                label: "Country",
                placeholder: "Country",
                value: raw.read().country.clone(),
                on_change: move |value| { raw.write().country = value; },
            }
            SelectFilterInput {
                label: "Timing",
                value: raw.read().timing.clone(),
                options: TIMING_OPTIONS.iter().map(|t| (*t, *t)).collect::<Vec<_>>(),
                on_change: move |value| { raw.write().timing = value; },
            }

            button {
                style: "
                    height: 34px;
                    font-size: 14px;
                    border-radius: 8px;
                    background: white;
                    color: #111827;
                    border: 1px solid #D1D5DB;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    let current = *show_advanced.peek();
                    show_advanced.set(!current);
                },
                "{advanced_toggle_label}"
            }

            if *show_advanced.read() {
                CheckboxGroupInput {
                    label: "Interests",
                    options: INTEREST_OPTIONS.to_vec(),
                    selected: raw.read().interests.clone(),
                    on_toggle: move |(option, checked): (String, bool)| {
                        let mut raw = raw.write();
                        if checked {
                            raw.interests.insert(option);
                        } else {
                            raw.interests.remove(&option);
                        }
                    },
                }
                CheckboxGroupInput {
                    label: "Responsibilities",
                    options: RESPONSIBILITY_OPTIONS.to_vec(),
                    selected: raw.read().responsibilities.clone(),
                    on_toggle: move |(option, checked): (String, bool)| {
                        let mut raw = raw.write();
                        if checked {
                            raw.responsibilities.insert(option);
                        } else {
                            raw.responsibilities.remove(&option);
                        }
                    },
                }
                SelectFilterInput {
                    label: "Has Business Idea",
                    value: raw.read().has_idea.clone(),
                    options: vec![("yes", "Yes"), ("no", "No"), ("maybe", "Maybe")],
                    on_change: move |value| { raw.write().has_idea = value; },
                }
                SelectFilterInput {
                    label: "Has Company",
                    value: raw.read().has_company.clone(),
                    options: vec![("true", "Yes"), ("false", "No")],
                    on_change: move |value| { raw.write().has_company = value; },
                }
                if has_company_selected() {
                    TextFilterInput {
                        label: "Search Company Name",
                        placeholder: "Search by company name...",
                        value: raw.read().search_company.clone(),
                        on_change: move |value| { raw.write().search_company = value; },
                    }
                    SelectFilterInput {
                        label: "Has Company URL",
                        value: raw.read().has_company_url.clone(),
                        options: vec![("true", "Yes"), ("false", "No")],
                        on_change: move |value| { raw.write().has_company_url = value; },
                    }
                }
                SelectFilterInput {
                    label: "Already Has Co-founder",
                    value: raw.read().has_cf.clone(),
                    options: vec![("true", "Yes"), ("false", "No")],
                    on_change: move |value| { raw.write().has_cf = value; },
                }
                SelectFilterInput {
                    label: "Seeking Technical Co-founder",
                    value: raw.read().cf_is_technical.clone(),
                    options: vec![("true", "Yes"), ("false", "No")],
                    on_change: move |value| { raw.write().cf_is_technical = value; },
                }
                TextFilterInput {
                    label: "Preferred Co-founder Location",
                    placeholder: "Preferred location for co-founder",
                    value: raw.read().cf_location.clone(),
                    on_change: move |value| { raw.write().cf_location = value; },
                }
                RangeFilterInput {
                    label: "Preferred Co-founder Age Range",
                    min_value: raw.read().cf_age_min.clone(),
                    max_value: raw.read().cf_age_max.clone(),
                    on_min_change: move |value| { raw.write().cf_age_min = value; },
                    on_max_change: move |value| { raw.write().cf_age_max = value; },
                }
            }

            div {
                style: "display: flex; flex-direction: row; gap: 10px;",
                button {
                    style: "
                        flex-grow: 1;
                        height: 36px;
                        font-size: 14px;
                        border-radius: 8px;
                        background: #1C212D;
                        color: white;
                        border: none;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        apply(());
                    },
                    "Apply Filters"
                }
                button {
                    style: "
                        flex-grow: 1;
                        height: 36px;
                        font-size: 14px;
                        border-radius: 8px;
                        background: white;
                        color: #111827;
                        border: 1px solid #D1D5DB;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        clear_all(());
                    },
                    "Clear All"
                }
            }
        }
    }
}


#[component]
fn FilterGroupLabel(label: String) -> Element {
    rsx! {
        label {
            style: "font-size: 14px; font-weight: 500; color: rgba(0,0,0,0.75);",
            "{label}"
        }
    }
}

#[component]
fn TextFilterInput(label: String, placeholder: String, value: String, on_change: Callback<String>) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px;",
            FilterGroupLabel { label }
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                style: "
                    height: 32px;
                    padding: 0 10px;
                    font-size: 14px;
                    border-radius: 8px;
                    border: 1px solid #D1D5DB;
                ",
                value: "{value}",
                oninput: move |event| {
                    on_change.call(event.value());
                },
            }
        }
    }
}

#[component]
fn RangeFilterInput(
    label: String,
    min_value: String,
    max_value: String,
    on_min_change: Callback<String>,
    on_max_change: Callback<String>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px;",
            FilterGroupLabel { label }
            div {
                style: "display: flex; flex-direction: row; gap: 8px;",
                input {
                    r#type: "number",
                    placeholder: "Min",
                    style: "
                        width: 50%;
                        height: 32px;
                        padding: 0 10px;
                        font-size: 14px;
                        border-radius: 8px;
                        border: 1px solid #D1D5DB;
                        box-sizing: border-box;
                    ",
                    value: "{min_value}",
                    oninput: move |event| {
                        on_min_change.call(event.value());
                    },
                }
                input {
                    r#type: "number",
                    placeholder: "Max",
                    style: "
                        width: 50%;
                        height: 32px;
                        padding: 0 10px;
                        font-size: 14px;
                        border-radius: 8px;
                        border: 1px solid #D1D5DB;
                        box-sizing: border-box;
                    ",
                    value: "{max_value}",
                    oninput: move |event| {
                        on_max_change.call(event.value());
                    },
                }
            }
        }
    }
}

/// Select with a leading "Any" option that maps to the empty raw value.
#[component]
fn SelectFilterInput(
    label: String,
    value: String,
    options: Vec<(&'static str, &'static str)>,
    on_change: Callback<String>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px;",
            FilterGroupLabel { label }
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
                value: "{value}",
                onchange: move |event| {
                    on_change.call(event.value());
                },
                option { value: "", selected: value.is_empty(), "Any" }
                for (option_value, option_label) in options {
                    option {
                        value: "{option_value}",
                        selected: value == option_value,
                        "{option_label}"
                    }
                }
            }
        }
    }
}

#[component]
fn CheckboxGroupInput(
    label: String,
    options: Vec<&'static str>,
    selected: std::collections::BTreeSet<String>,
    on_toggle: Callback<(String, bool)>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px;",
            FilterGroupLabel { label }
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 2px;
                    max-height: 180px;
                    overflow-y: auto;
                    border: 1px solid #E5E7EB;
                    border-radius: 8px;
                    padding: 6px;
                ",
                for option in options {
                    label {
                        key: "{option}",
                        style: "
                            display: flex;
                            flex-direction: row;
                            align-items: center;
                            gap: 8px;
                            font-size: 14px;
                            cursor: pointer;
                            padding: 2px 4px;
                        ",
                        input {
                            r#type: "checkbox",
                            checked: selected.contains(option),
                            onchange: move |event| {
                                on_toggle.call((option.to_string(), event.checked()));
                            },
                        }
                        "{option}"
                    }
                }
            }
        }
    }
}
