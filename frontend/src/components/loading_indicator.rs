use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "
                width: 100%;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 60px 0;
            ",
            div {
                style: "color:black; font-size: 26px; border: 1px solid black; padding: 10px; border-radius: 5px; margin: 15px;",
                "Loading candidates..."
            }
        }
    }
}
