//! Top-level navigation sidebar.

use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

use dioxus_free_icons::icons::md_action_icons::MdHome;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_social_icons::MdGroup;
use dioxus_free_icons::icons::md_social_icons::MdPerson;
use dioxus_free_icons::{Icon, IconShape};


/// Inline color scheme for the page container. The theme lives in an
/// in-memory signal only; a reload returns to light.
fn page_theme_style(dark_mode: bool) -> &'static str {
    if dark_mode {
        "color-scheme: dark; background-color: #111827; color: #F9FAFB;"
    } else {
        "color-scheme: light; background-color: #F5F6F8; color: #111827;"
    }
}

fn theme_toggle_glyph(dark_mode: bool) -> &'static str {
    if dark_mode { "☀️" } else { "🌙" }
}


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    let dark_mode = use_signal(|| false);
    let page_style = use_memo(move || page_theme_style(*dark_mode.read()));
    rsx! {

        div {
            id: "x-nav-container",

            style: "
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",


            div {
                id: "x-nav-sidebar",
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 40px;
                    width: 70px;
                    height: 100%;
                    background-color: #1C212D;
                    border: 1px solid #000000;
                    padding: 16px;
                ",

                // top part
                NavbarTopLogo {},
                NavbarTopIconLinks {},

                // empty space
                div {
                    style: "flex-grow:1;"
                }
                // bottom part
                NavbarBottomIconLinks { dark_mode },
            },

            div {
                id: "x-page-container",
                style: "flex-grow:1; min-width: 100px; {page_style}",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn NavbarTopLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage {},
            span {
                style: "color:#8EA2FF;",
                Icon { icon: MdGroup, style: "width: 38px; height: 38px;" }
            }
        }
    }
}

#[component]
fn NavbarTopIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",
            IconLink { to: Route::HomePage {}, icon: MdHome, label: "Home" }
            IconLink { to: Route::candidate_search_start(), icon: MdSearch, label: "Candidate Search" }
        }
    }
}


#[component]
fn NavbarBottomIconLinks(dark_mode: Signal<bool>) -> Element {
    rsx! {

        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",

            ThemeToggleButton { dark_mode }
            IconLink { to: Route::HomePage {}, icon: MdPerson, label: "Profile" }
        }
    }
}

#[component]
fn ThemeToggleButton(mut dark_mode: Signal<bool>) -> Element {
    let glyph = theme_toggle_glyph(*dark_mode.read());
    rsx! {
        button {
            aria_label: "Toggle dark mode",
            title: "Toggle dark mode",
            style: "
                border: none;
                background: none;
                cursor: pointer;
                font-size: 22px;
                padding: 0;
            ",
            onclick: move |_| {
                let current = *dark_mode.peek();
                dark_mode.set(!current);
            },
            "{glyph}"
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                style: "color:white;",
                title: "{label}",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_theme_gets_its_own_color_scheme() {
        assert!(page_theme_style(false).contains("color-scheme: light"));
        assert!(page_theme_style(true).contains("color-scheme: dark"));
        assert_ne!(page_theme_style(false), page_theme_style(true));
    }

    #[test]
    fn toggle_glyph_offers_the_other_theme() {
        assert_eq!(theme_toggle_glyph(false), "🌙");
        assert_eq!(theme_toggle_glyph(true), "☀️");
    }
}
