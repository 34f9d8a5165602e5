use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;

use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Candidate Directory - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}

            // Cards Row
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                CandidateSearchCard {}
            }
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Welcome to the" }
            span { style: "color:#4F46E5;", "Candidate Directory" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 30px;
                line-height: 1.6;
                max-width: 620px;
                font-weight: 500;
            ",
            "Find your co-founder faster. Filter thousands of candidate profiles by background, location, timing and preferences."
        }
    }
}

#[component]
fn CandidateSearchCard() -> Element {
    rsx! {
        div {
            id: "x-card-candidate-search",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                min-height: 240px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",

            // Title
            div {
                style: "
                    font-size: 30px;
                    font-weight: 500;
                ",
                "Candidate Search"
            }

            // Description
            div {
                style: "
                    font-size: 20px;
                    font-weight: 500;
                    line-height: 1.5;
                    color: rgba(255,255,255,0.92);
                ",
                "Browse the full candidate directory. Combine filters for age, gender, technical background, interests and co-founder preferences, then open any profile for the details."
            }

            // Divider spacing
            div { style: "height: 8px; padding-top: 7px; margin-top:7px; border-top: 1px solid white; width: 100%; " }

            Link {
                to: Route::candidate_search_start(),
                div {
                    style: "
                        display:flex;
                        align-items:center;
                        justify-content:center;
                        gap: 10px;
                        background-color: white;
                        border-radius: 9999px;
                        padding: 10px 14px;
                        height: 42px;
                        color: #111827;
                        font-size: 16px;
                        font-weight: 500;
                    ",
                    Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
                    "Start Browsing"
                }
            }
        }
    }
}
