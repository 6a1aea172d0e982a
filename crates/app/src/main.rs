use dioxus::prelude::*;
use shared_types::Session;

mod auth;
mod flash;
mod format_helpers;
pub mod notify;
mod platform;
mod routes;
use auth::{AuthState, SessionHandle};
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    client::init_tracing();

    let config = client::config::load_config();
    tracing::info!(platform = client_platform(), api = config.api_base(), "starting CourtSys");

    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else {
        "unknown"
    }
}

/// Root component. Opens the session store once, then mounts the router
/// with the restored session in context.
#[component]
fn App() -> Element {
    let boot = use_resource(|| async move {
        let store = platform::open_session_store().await;
        let session = client::restore(store.as_ref());
        (SessionHandle::new(store), session)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            match boot() {
                Some((store, session)) => rsx! {
                    Shell { store, session }
                },
                None => rsx! {
                    div { class: "auth-guard-loading",
                        p { "Loading..." }
                    }
                },
            }
        }
    }
}

#[component]
fn Shell(store: SessionHandle, session: Option<Session>) -> Element {
    let config = client::config();
    use_context_provider(|| config.clone());
    use_context_provider(|| AuthState::new(config, store, session));

    rsx! {
        Router::<Route> {}
    }
}
