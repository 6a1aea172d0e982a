use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

/// Where the "back" link of the 404 page points: the role's dashboard when
/// signed in, the login screen otherwise.
fn way_back(role: Option<shared_types::UserRole>) -> (Route, &'static str) {
    match role.and_then(Route::dashboard_for) {
        Some(dashboard) => (dashboard, "Back to Dashboard"),
        None => (Route::Login {}, "Go to Login"),
    }
}

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let auth = use_auth();
    let path = format!("/{}", route.join("/"));
    let (target, label) = way_back(auth.role());
    tracing::debug!(%path, "no route matched");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "Nothing in CourtSys lives at "
                    code { "{path}" }
                    "."
                }
                Link { to: target, class: "not-found-link", "{label}" }
            }
        }
    }
}
