use client::{sign_out, ApiClient, SessionStore};
use dioxus::prelude::*;
use shared_types::{AppConfig, Session, User, UserRole};
use std::sync::Arc;

/// Shared handle to the platform session store.
#[derive(Clone)]
pub struct SessionHandle(Arc<dyn SessionStore>);

impl SessionHandle {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self(store)
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.0.as_ref()
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Global authentication state. The session is read from storage once in
/// `App`; screens only ever see this context.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthState {
    pub session: Signal<Option<Session>>,
    api: Signal<ApiClient>,
    store: Signal<SessionHandle>,
}

impl AuthState {
    pub fn new(config: &AppConfig, store: SessionHandle, session: Option<Session>) -> Self {
        let mut api = ApiClient::from_config(config);
        api.set_token(session.as_ref().map(|s| s.token.clone()));
        Self {
            session: Signal::new(session),
            api: Signal::new(api),
            store: Signal::new(store),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.session.read().as_ref().map(Session::role)
    }

    /// The signed-in user, or an empty placeholder while logged out.
    pub fn user(&self) -> User {
        self.session
            .read()
            .as_ref()
            .map(|s| s.user.clone())
            .unwrap_or_default()
    }

    pub fn user_id(&self) -> String {
        self.session
            .read()
            .as_ref()
            .map(|s| s.user_id().to_string())
            .unwrap_or_default()
    }

    pub fn store(&self) -> SessionHandle {
        self.store.read().clone()
    }

    /// Adopt a session that `client::sign_in` has already persisted.
    pub fn establish(&mut self, session: Session) {
        let token = session.token.clone();
        self.api.with_mut(|api| api.set_token(Some(token)));
        self.session.set(Some(session));
    }

    pub fn logout(&mut self) {
        if let Err(e) = sign_out(self.store().store()) {
            tracing::warn!(error = %e, "failed to clear stored session");
        }
        self.api.with_mut(|api| api.set_token(None));
        self.session.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to the API client carrying the current bearer token. Call it with
/// `api()` inside async blocks to get an owned client.
pub fn use_api() -> Signal<ApiClient> {
    use_auth().api
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}
