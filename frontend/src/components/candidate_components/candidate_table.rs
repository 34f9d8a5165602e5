//! Result table for the candidate directory.

use common::candidate_display::format_date;
use common::candidate_result::Candidate;
use common::profile_links::{cofounder_profile_url, linkedin_url};
use dioxus::prelude::*;

use crate::pages::candidate_search_page::CandidateSearchState;

#[component]
pub fn CandidateTable() -> Element {
    let state = use_context::<CandidateSearchState>();
    let coordinator = state.coordinator;
    let coordinator = coordinator.read();

    let candidates = coordinator
        .results()
        .map(|set| set.candidates.clone())
        .unwrap_or_default();

    if candidates.is_empty() {
        return rsx! {
            div {
                id: "x-no-candidates",
                style: "
                    width: 100%;
                    padding: 60px 0;
                    text-align: center;
                    font-size: 18px;
                    color: rgba(0,0,0,0.6);
                ",
                p { "No candidates found matching your criteria." }
            }
        };
    }

    rsx! {
        div {
            id: "x-candidate-table-container",
            style: "
                width: 100%;
                overflow-x: auto;
                background: white;
                border: 1px solid rgba(0,0,0,0.1);
                border-radius: 8px;
            ",
            table {
                style: "
                    width: 100%;
                    border-collapse: collapse;
                    font-size: 15px;
                ",
                thead {
                    tr {
                        TableHeaderCell { label: "Avatar" }
                        TableHeaderCell { label: "Name" }
                        TableHeaderCell { label: "Gender" }
                        TableHeaderCell { label: "Age" }
                        TableHeaderCell { label: "Technical" }
                        TableHeaderCell { label: "Location" }
                        TableHeaderCell { label: "Last Seen" }
                        TableHeaderCell { label: "LinkedIn" }
                        TableHeaderCell { label: "Profile" }
                    }
                }
                tbody {
                    for candidate in candidates {
                        CandidateRow {
                            key: "{candidate.slug}",
                            candidate,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TableHeaderCell(label: String) -> Element {
    rsx! {
        th {
            style: "
                text-align: left;
                padding: 10px 12px;
                font-weight: 500;
                color: rgb(75, 87, 112);
                border-bottom: 2px solid rgba(0,0,0,0.15);
                white-space: nowrap;
            ",
            "{label}"
        }
    }
}

#[component]
fn CandidateRow(candidate: ReadSignal<Candidate>) -> Element {
    let state = use_context::<CandidateSearchState>();
    let record = candidate.read().clone();
    let last_seen = format_date(record.last_seen_at.as_deref());
    let linkedin_link = record.linkedin.as_deref().and_then(linkedin_url);
    let profile_link = cofounder_profile_url(&record.slug);

    rsx! {
        tr {
            style: "
                cursor: pointer;
                border-bottom: 1px solid rgba(0,0,0,0.08);
            ",
            onclick: move |_| {
                state.select_candidate.call(candidate.read().clone());
            },

            td {
                style: "padding: 8px 12px;",
                CandidateAvatar { candidate }
            }

            td {
                style: "padding: 8px 12px; font-weight: 500;",
                "{record.display_name()}"
            }

            td {
                style: "padding: 8px 12px;",
                GenderBadge { is_woman: record.is_woman }
            }

            td {
                style: "padding: 8px 12px;",
                "{record.age_label()}"
            }

            td {
                style: "padding: 8px 12px;",
                TechnicalBadge { is_technical: record.is_technical }
            }

            td {
                style: "padding: 8px 12px;",
                if let Some(location) = record.location.clone() {
                    "{location}"
                }
            }

            td {
                style: "padding: 8px 12px; white-space: nowrap;",
                "{last_seen}"
            }

            td {
                style: "padding: 8px 12px;",
                if let Some(url) = linkedin_link {
                    ExternalLinkButton { url, label: "LinkedIn" }
                } else {
                    DisabledLinkButton { label: "LinkedIn" }
                }
            }

            td {
                style: "padding: 8px 12px;",
                ExternalLinkButton { url: profile_link, label: "YC Profile" }
            }
        }
    }
}

#[component]
pub fn CandidateAvatar(candidate: ReadSignal<Candidate>) -> Element {
    let record = candidate.read().clone();
    rsx! {
        if let Some(avatar_url) = record.avatar_url.clone() {
            img {
                src: "{avatar_url}",
                alt: "{record.display_name()}",
                style: "width: 36px; height: 36px; border-radius: 50%; object-fit: cover;",
            }
        } else {
            div {
                style: "
                    width: 36px;
                    height: 36px;
                    border-radius: 50%;
                    background: #1C212D;
                    color: white;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 16px;
                    font-weight: 500;
                ",
                "{record.avatar_initial()}"
            }
        }
    }
}

#[component]
pub fn GenderBadge(is_woman: ReadSignal<Option<bool>>) -> Element {
    match *is_woman.read() {
        Some(true) => rsx! {
            span {
                style: "padding: 2px 8px; border-radius: 10px; font-size: 13px; background: #FCE7F3; color: #9D174D;",
                "W"
            }
        },
        Some(false) => rsx! {
            span {
                style: "padding: 2px 8px; border-radius: 10px; font-size: 13px; background: #DBEAFE; color: #1E40AF;",
                "M"
            }
        },
        None => rsx! {},
    }
}

#[component]
pub fn TechnicalBadge(is_technical: ReadSignal<Option<bool>>) -> Element {
    match *is_technical.read() {
        Some(true) => rsx! {
            span {
                style: "padding: 2px 8px; border-radius: 10px; font-size: 13px; background: #DCFCE7; color: #166534;",
                "Tech"
            }
        },
        Some(false) => rsx! {
            span {
                style: "padding: 2px 8px; border-radius: 10px; font-size: 13px; background: #F3F4F6; color: #374151;",
                "Non-Tech"
            }
        },
        None => rsx! { "N/A" },
    }
}

/// Opens in a new tab; never triggers the row's click handler.
#[component]
pub fn ExternalLinkButton(url: String, label: String) -> Element {
    rsx! {
        a {
            href: "{url}",
            target: "_blank",
            rel: "noopener noreferrer",
            style: "
                display: inline-block;
                padding: 4px 10px;
                font-size: 13px;
                border-radius: 8px;
                border: 1px solid #D1D5DB;
                background: white;
                color: #111827;
                text-decoration: none;
                white-space: nowrap;
            ",
            onclick: move |event| {
                event.stop_propagation();
            },
            "{label}"
        }
    }
}

#[component]
fn DisabledLinkButton(label: String) -> Element {
    rsx! {
        span {
            style: "
                display: inline-block;
                padding: 4px 10px;
                font-size: 13px;
                border-radius: 8px;
                border: 1px solid #E5E7EB;
                background: #F9FAFB;
                color: rgba(0,0,0,0.35);
                white-space: nowrap;
            ",
            onclick: move |event| {
                event.stop_propagation();
            },
            "{label}"
        }
    }
}
