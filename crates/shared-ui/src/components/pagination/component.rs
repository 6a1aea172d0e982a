use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Page numbers to render around `current`: first, last and a window of
/// `radius` either side. `None` marks a gap.
pub fn page_window(current: usize, total_pages: usize, radius: usize) -> Vec<Option<usize>> {
    let total_pages = total_pages.max(1);
    let current = current.clamp(1, total_pages);
    let lo = current.saturating_sub(radius).max(1);
    let hi = (current + radius).min(total_pages);

    let mut out = Vec::new();
    if lo > 1 {
        out.push(Some(1));
        if lo > 2 {
            out.push(None);
        }
    }
    out.extend((lo..=hi).map(Some));
    if hi < total_pages {
        if hi + 1 < total_pages {
            out.push(None);
        }
        out.push(Some(total_pages));
    }
    out
}

/// 1-based page controls: Previous, numbered pages, Next.
///
/// `page` is owned by the caller so search boxes can reset it to 1.
#[component]
pub fn Pagination(page: Signal<usize>, total_pages: usize) -> Element {
    let total_pages = total_pages.max(1);
    let current = (*page.read()).clamp(1, total_pages);

    if total_pages <= 1 {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "pagination", "aria-label": "Pagination",
            Button {
                variant: ButtonVariant::Outline,
                disabled: current == 1,
                onclick: move |_| page.set(current.saturating_sub(1).max(1)),
                "Previous"
            }
            for slot in page_window(current, total_pages, 2) {
                match slot {
                    Some(n) => rsx! {
                        button {
                            class: "pagination-page",
                            r#type: "button",
                            "data-active": if n == current { "true" } else { "false" },
                            onclick: move |_| page.set(n),
                            "{n}"
                        }
                    },
                    None => rsx! {
                        span { class: "pagination-gap", "\u{2026}" }
                    },
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                disabled: current == total_pages,
                onclick: move |_| page.set((current + 1).min(total_pages)),
                "Next"
            }
        }
    }
}
