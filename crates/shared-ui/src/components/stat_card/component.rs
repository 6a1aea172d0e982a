use dioxus::prelude::*;

use crate::components::badge::BadgeVariant;

/// Dashboard counter tile: a big number with a caption.
///
/// `tone` reuses the badge palette for the accent stripe.
#[component]
pub fn StatCard(
    title: String,
    value: String,
    #[props(default)] caption: String,
    #[props(default)] tone: BadgeVariant,
    #[props(default)] icon: Option<Element>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let tone_class = match tone {
        BadgeVariant::Success => "success",
        BadgeVariant::Warning => "warning",
        BadgeVariant::Info => "info",
        BadgeVariant::Destructive => "destructive",
        BadgeVariant::Secondary | BadgeVariant::Outline => "muted",
        BadgeVariant::Primary => "primary",
    };
    let clickable = onclick.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: if clickable { "stat-card clickable" } else { "stat-card" },
            "data-tone": tone_class,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            div { class: "stat-card-head",
                span { class: "stat-card-title", "{title}" }
                if let Some(icon) = icon {
                    span { class: "stat-card-icon", {icon} }
                }
            }
            span { class: "stat-card-value", "{value}" }
            if !caption.is_empty() {
                span { class: "stat-card-caption", "{caption}" }
            }
        }
    }
}

/// Grid container for a row of `StatCard`s.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-grid", {children} }
    }
}
