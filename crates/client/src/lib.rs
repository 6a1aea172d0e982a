//! HTTP client and session plumbing for the court case front-end.
//!
//! Everything here is UI-agnostic so the dashboards and the integration
//! tests drive the same code.

pub mod api;
pub mod config;
pub mod http;
pub mod poller;
pub mod session;

pub use api::{
    sign_in, sign_out, CaseQuery, LoginOutcome, RegistrarOverview, WRONG_CREDENTIALS,
};
pub use config::config;
pub use http::ApiClient;
pub use poller::{confirm_read, poll_loop, NotificationFeed, ReadOutcome};
pub use session::{restore, token_expired, MemorySessionStore, SessionStore};

#[cfg(not(target_arch = "wasm32"))]
pub use session::FileSessionStore;

/// Install a `tracing` subscriber honouring `RUST_LOG`. Safe to call more
/// than once.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,client=debug,app=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
