use dioxus::prelude::*;

/// Vertical list of label/value rows, used by the case details panels.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "detail-list", {children} }
    }
}

/// One label/value row. Pass `value` for text or children for rich content.
/// Blank text values render as `N/A`.
#[component]
pub fn DetailItem(
    label: &'static str,
    #[props(default)]
    value: String,
    children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());
    let shown = if value.trim().is_empty() { "N/A".to_string() } else { value };

    rsx! {
        div { class: "detail-item",
            span { class: "detail-item-label", "{label}" }
            span { class: "detail-item-value",
                if has_children {
                    {children}
                } else {
                    span { "{shown}" }
                }
            }
        }
    }
}
