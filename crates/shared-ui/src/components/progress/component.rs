use dioxus::prelude::*;

/// Labelled percentage bar for hearing progress. `percent` is clamped to
/// 0..=100 and `tone` picks the fill colour.
#[component]
pub fn ProgressBar(percent: u8, #[props(default)] tone: String) -> Element {
    let percent = percent.min(100);
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "progress-bar",
            div {
                class: "progress-bar-fill",
                "data-tone": "{tone}",
                style: "width: {percent}%;",
            }
            span { class: "progress-bar-label", "{percent}%" }
        }
    }
}
