use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

/// Shown when a signed-in user opens a page that belongs to another role.
#[component]
pub fn Unauthorized() -> Element {
    let mut auth = use_auth();
    let home = auth.role().and_then(Route::dashboard_for);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "403" }
                h1 { class: "not-found-title", "Unauthorized" }
                p { class: "not-found-message",
                    "Your account does not have access to this page."
                }
                if let Some(route) = home {
                    Link { to: route, class: "not-found-link", "Back to Dashboard" }
                }
                button {
                    class: "not-found-link secondary",
                    r#type: "button",
                    onclick: move |_| {
                        auth.logout();
                        navigator().replace(Route::Login {});
                    },
                    "Sign in as someone else"
                }
            }
        }
    }
}
