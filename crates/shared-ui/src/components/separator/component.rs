use dioxus::prelude::*;
use dioxus_primitives::separator as prim;

/// Divider between toolbar groups or form sections. With a `caption` it
/// renders as a labelled rule above the section it introduces.
#[component]
pub fn Separator(
    #[props(default = true)] horizontal: bool,
    #[props(default)] caption: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if caption.is_empty() {
            prim::Separator { class: "separator", horizontal }
        } else {
            div { class: "separator-captioned",
                span { class: "separator-caption", "{caption}" }
                prim::Separator { class: "separator", horizontal: true }
            }
        }
    }
}
