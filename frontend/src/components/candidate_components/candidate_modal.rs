//! Detail overlay for a selected candidate.
//!
//! The selection holds its own record snapshot, so a page change or refetch
//! underneath never closes or alters an open detail view.

use common::candidate_display::{format_date, text_lines};
use common::candidate_result::Candidate;
use common::profile_links::{cofounder_profile_url, linkedin_url};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::components::candidate_components::candidate_table::ExternalLinkButton;
use crate::pages::candidate_search_page::CandidateSearchState;

#[component]
pub fn CandidateModal() -> Element {
    let state = use_context::<CandidateSearchState>();
    let selection = state.selection;
    let Some(candidate) = selection.read().detail().cloned() else {
        return rsx! {};
    };

    rsx! {
        div {
            id: "x-candidate-modal-overlay",
            style: "
                position: fixed;
                top: 0;
                left: 0;
                width: 100%;
                height: 100%;
                background: rgba(0,0,0,0.5);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 2000;
            ",
            onclick: move |_| {
                state.close_detail.call(());
            },
            div {
                id: "x-candidate-modal-content",
                style: "
                    display: flex;
                    flex-direction: column;
                    background: white;
                    border-radius: 12px;
                    width: min(860px, calc(100vw - 40px));
                    max-height: calc(100vh - 80px);
                    overflow: hidden;
                ",
                onclick: move |event| {
                    event.stop_propagation();
                },
                ModalHeader { candidate: candidate.clone() }
                ModalBody { candidate: candidate.clone() }
                ModalFooter { candidate: candidate.clone() }
            }
        }
    }
}

#[component]
fn ModalHeader(candidate: ReadSignal<Candidate>) -> Element {
    let state = use_context::<CandidateSearchState>();
    let record = candidate.read().clone();
    let linkedin_link = record.linkedin.as_deref().and_then(linkedin_url);
    let profile_link = cofounder_profile_url(&record.slug);

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: flex-start;
                gap: 16px;
                padding: 20px;
                border-bottom: 1px solid rgba(0,0,0,0.1);
            ",

            LargeAvatar { candidate }

            div {
                style: "display: flex; flex-direction: column; gap: 6px; min-width: 0;",
                h2 {
                    style: "margin: 0; font-size: 26px; font-weight: 500;",
                    "{record.display_name()}"
                }
                div {
                    style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 10px; font-size: 15px; color: rgba(0,0,0,0.7);",
                    span { "{record.age_sentence()}" }
                    if let Some(is_woman) = record.is_woman {
                        span { if is_woman { "Woman" } else { "Man" } }
                    }
                    if let Some(is_technical) = record.is_technical {
                        span { if is_technical { "Technical" } else { "Non-technical" } }
                    }
                }
                if let Some(location) = record.location.clone() {
                    div {
                        style: "font-size: 15px; color: rgba(0,0,0,0.7);",
                        "{location}"
                    }
                }
                if let Some(timing) = record.timing.clone() {
                    div {
                        style: "font-size: 15px;",
                        strong { "Timing: " }
                        "{timing}"
                    }
                }
                if let Some(has_idea) = record.has_idea.clone() {
                    div {
                        style: "font-size: 15px;",
                        strong { "Business Idea: " }
                        "{has_idea}"
                    }
                }
                if let Some(video_link) = record.video_link.clone() {
                    div {
                        style: "font-size: 15px;",
                        strong { "Video: " }
                        a {
                            href: "{video_link}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Watch Video"
                        }
                    }
                }
                if let Some(calendly_link) = record.calendly_link.clone() {
                    div {
                        style: "font-size: 15px;",
                        strong { "Schedule Meeting: " }
                        a {
                            href: "{calendly_link}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Book on Calendly"
                        }
                    }
                }
            }

            // empty space
            div {
                style: "flex-grow: 1;"
            }

            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px; flex-shrink: 0;",
                if let Some(url) = linkedin_link {
                    ExternalLinkButton { url, label: "LinkedIn" }
                }
                ExternalLinkButton { url: profile_link, label: "YC Profile" }
                button {
                    style: "
                        width: 32px;
                        height: 32px;
                        border-radius: 8px;
                        border: 1px solid #D1D5DB;
                        background: white;
                        cursor: pointer;
                        padding: 4px;
                    ",
                    onclick: move |_| {
                        state.close_detail.call(());
                    },
                    Icon { icon: MdClose, style: "width: 22px; height: 22px; color: rgba(0,0,0,0.8);" }
                }
            }
        }
    }
}

#[component]
fn LargeAvatar(candidate: ReadSignal<Candidate>) -> Element {
    let record = candidate.read().clone();
    rsx! {
        if let Some(avatar_url) = record.avatar_url.clone() {
            img {
                src: "{avatar_url}",
                alt: "{record.display_name()}",
                style: "width: 72px; height: 72px; border-radius: 50%; object-fit: cover; flex-shrink: 0;",
            }
        } else {
            div {
                style: "
                    width: 72px;
                    height: 72px;
                    border-radius: 50%;
                    background: #1C212D;
                    color: white;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 30px;
                    font-weight: 500;
                    flex-shrink: 0;
                ",
                "{record.avatar_initial()}"
            }
        }
    }
}

#[component]
fn ModalBody(candidate: ReadSignal<Candidate>) -> Element {
    let record = candidate.read().clone();
    let email_settings = record.email_settings.join(", ");
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                padding: 20px;
                overflow-y: auto;
            ",

            if let Some(intro) = record.intro.clone() {
                DetailSection {
                    title: "Introduction",
                    p { style: "margin: 0; white-space: pre-wrap;", "{intro}" }
                }
            }

            DetailSection {
                title: "Professional Background",

                if let Some(impressive_thing) = record.impressive_thing.clone() {
                    DetailBox {
                        title: "Impressive Achievement",
                        for (index, line) in text_lines(&impressive_thing).into_iter().enumerate() {
                            p {
                                key: "{index}",
                                style: "margin: 0 0 6px 0;",
                                "{line}"
                            }
                        }
                    }
                }

                if let Some(education) = record.education.clone() {
                    DetailBox {
                        title: "Education",
                        TextLineList { text: education }
                    }
                }

                if let Some(employment) = record.employment.clone() {
                    DetailBox {
                        title: "Employment",
                        TextLineList { text: employment }
                    }
                }

                if let Some(company_name) = record.company_name.clone() {
                    DetailBox {
                        title: "Company",
                        div {
                            strong { "Company: " }
                            "{company_name}"
                        }
                        if let Some(company_url) = record.company_url.clone() {
                            div {
                                strong { "Company URL: " }
                                a {
                                    href: "{company_url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{company_url}"
                                }
                            }
                        }
                    }
                }

                CurrentCofounderBox { candidate }

                if let Some(equity) = record.equity.clone() {
                    div {
                        strong { "Equity Expectations: " }
                        "{equity}"
                    }
                }
                if !record.email_settings.is_empty() {
                    div {
                        strong { "Email Settings: " }
                        "{email_settings}"
                    }
                }
            }

            if !record.interests.is_empty() {
                DetailSection {
                    title: "Interests",
                    TagList { tags: record.interests.clone() }
                }
            }

            if !record.responsibilities.is_empty() {
                DetailSection {
                    title: "Preferred Responsibilities",
                    TagList { tags: record.responsibilities.clone() }
                }
            }

            if let Some(ideas) = record.ideas.clone() {
                DetailSection {
                    title: "Business Ideas",
                    p { style: "margin: 0; white-space: pre-wrap;", "{ideas}" }
                }
            }

            CofounderPreferencesSection { candidate }

            if let Some(req_free_text) = record.req_free_text.clone() {
                DetailSection {
                    title: "Additional Requirements",
                    p { style: "margin: 0; white-space: pre-wrap;", "{req_free_text}" }
                }
            }
        }
    }
}

#[component]
fn CurrentCofounderBox(candidate: ReadSignal<Candidate>) -> Element {
    let record = candidate.read().clone();
    let has_anything = record.has_cf.is_some()
        || record.current_cf_linkedin.is_some()
        || record.current_cf_technical.is_some();
    if !has_anything {
        return rsx! {};
    }
    let cf_linkedin_link = record.current_cf_linkedin.as_deref().and_then(linkedin_url);
    rsx! {
        DetailBox {
            title: "Current Co-founder Information",
            if let Some(has_cf) = record.has_cf {
                div {
                    strong { "Has Co-founder: " }
                    if has_cf { "Yes" } else { "No" }
                }
            }
            if let Some(url) = cf_linkedin_link {
                div {
                    strong { "Co-founder LinkedIn: " }
                    a {
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "View LinkedIn Profile"
                    }
                }
            }
            if let Some(cf_technical) = record.current_cf_technical {
                div {
                    strong { "Co-founder Technical Background: " }
                    if cf_technical { "Tech" } else { "Non-Tech" }
                }
            }
        }
    }
}

#[component]
fn CofounderPreferencesSection(candidate: ReadSignal<Candidate>) -> Element {
    let record = candidate.read().clone();
    let age_range = preferred_age_range(record.cf_age_min, record.cf_age_max);
    rsx! {
        DetailSection {
            title: "Co-founder Preferences",

            if let Some(cf_has_idea) = record.cf_has_idea {
                div {
                    strong { "Wants Co-founder with Idea: " }
                    if cf_has_idea { "Yes" } else { "No" }
                    ImportanceNote { importance: record.cf_has_idea_importance.clone() }
                }
            }
            if let Some(cf_is_technical) = record.cf_is_technical {
                div {
                    strong { "Seeking Technical Co-founder: " }
                    if cf_is_technical { "Yes" } else { "No" }
                    ImportanceNote { importance: record.cf_is_technical_importance.clone() }
                }
            }
            if let Some(cf_location) = record.cf_location.clone() {
                div {
                    strong { "Preferred Location: " }
                    "{cf_location}"
                    ImportanceNote { importance: record.cf_location_importance.clone() }
                    if let Some(km_range) = record.cf_location_km_range {
                        span {
                            style: "color: rgba(0,0,0,0.6);",
                            " (Within {km_range} km)"
                        }
                    }
                }
            }
            if let Some(age_range) = age_range {
                div {
                    strong { "Preferred Age Range: " }
                    "{age_range}"
                    ImportanceNote { importance: record.cf_age_importance.clone() }
                }
            }
            if let Some(cf_timing_importance) = record.cf_timing_importance.clone() {
                div {
                    strong { "Timing Importance: " }
                    "{cf_timing_importance}"
                }
            }
            if let Some(cf_interests_importance) = record.cf_interests_importance.clone() {
                div {
                    strong { "Interests Match Importance: " }
                    "{cf_interests_importance}"
                }
            }
            if !record.cf_responsibilities.is_empty() {
                div {
                    strong { "Preferred Co-founder Responsibilities:" }
                    ImportanceNote { importance: record.cf_responsibilities_importance.clone() }
                    TagList { tags: record.cf_responsibilities.clone() }
                }
            }
        }
    }
}

/// Label for the preferred co-founder age range, with one-sided bounds.
fn preferred_age_range(min: Option<u32>, max: Option<u32>) -> Option<String> {
    match (min, max) {
        (Some(min), Some(max)) => Some(format!("{min}-{max}")),
        (Some(min), None) => Some(format!("{min}+")),
        (None, Some(max)) => Some(format!("Up to {max}")),
        (None, None) => None,
    }
}

#[component]
fn ImportanceNote(importance: ReadSignal<Option<String>>) -> Element {
    rsx! {
        if let Some(importance) = importance.read().clone() {
            span {
                style: "color: rgba(0,0,0,0.6);",
                " (Importance: {importance})"
            }
        }
    }
}

#[component]
fn DetailSection(title: String, children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 10px;",
            h3 {
                style: "margin: 0; font-size: 19px; font-weight: 500; color: rgb(75, 87, 112);",
                "{title}"
            }
            {children}
        }
    }
}

#[component]
fn DetailBox(title: String, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                border: 1px solid rgba(0,0,0,0.1);
                border-radius: 8px;
                padding: 12px;
            ",
            h4 {
                style: "margin: 0; font-size: 16px; font-weight: 500;",
                "{title}"
            }
            {children}
        }
    }
}

#[component]
fn TextLineList(text: String) -> Element {
    rsx! {
        ul {
            style: "margin: 0; padding-left: 20px;",
            for (index, line) in text_lines(&text).into_iter().enumerate() {
                li {
                    key: "{index}",
                    "{line}"
                }
            }
        }
    }
}

#[component]
fn TagList(tags: Vec<String>) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px;",
            for tag in tags {
                span {
                    key: "{tag}",
                    style: "
                        padding: 3px 10px;
                        border-radius: 12px;
                        font-size: 13px;
                        background: #EEF2FF;
                        border: 1px solid #C7D2FE;
                        color: #3730A3;
                    ",
                    "{tag}"
                }
            }
        }
    }
}

#[component]
fn ModalFooter(candidate: ReadSignal<Candidate>) -> Element {
    let record = candidate.read().clone();
    let last_seen = format_date(record.last_seen_at.as_deref());
    let saved_at = format_date(record.saved_at.as_deref());
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 24px;
                padding: 14px 20px;
                border-top: 1px solid rgba(0,0,0,0.1);
                font-size: 14px;
                color: rgba(0,0,0,0.7);
            ",
            div {
                strong { "Last Seen: " }
                "{last_seen}"
            }
            div {
                strong { "Profile Created: " }
                "{saved_at}"
            }
        }
    }
}
