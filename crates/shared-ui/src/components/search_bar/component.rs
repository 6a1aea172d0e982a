use dioxus::prelude::*;

/// Row of filter controls above a table. `summary` shows the match count.
#[component]
pub fn SearchBar(#[props(default)] summary: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            {children}
            if !summary.is_empty() {
                span { class: "search-bar-summary", "{summary}" }
            }
        }
    }
}
