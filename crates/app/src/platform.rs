//! Timers and session persistence that differ between the browser and
//! desktop builds.
//!
//! The browser has no tokio runtime and no filesystem, so both go through
//! the Dioxus eval bridge there.

use client::SessionStore;
use std::sync::Arc;
use std::time::Duration;

#[cfg(not(feature = "desktop"))]
use client::session::{from_storage_pair, to_storage_pair, TOKEN_KEY, USER_KEY};
#[cfg(not(feature = "desktop"))]
use client::MemorySessionStore;
#[cfg(not(feature = "desktop"))]
use dioxus::prelude::{document, spawn_forever};
#[cfg(not(feature = "desktop"))]
use shared_types::{AppError, Session};

#[cfg(feature = "desktop")]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(not(feature = "desktop"))]
pub async fn sleep(duration: Duration) {
    let js = format!(
        "await new Promise(resolve => setTimeout(resolve, {})); return true;",
        duration.as_millis()
    );
    if let Err(e) = document::eval(&js).await {
        tracing::debug!(error = ?e, "timer eval failed");
    }
}

#[cfg(feature = "desktop")]
pub async fn open_session_store() -> Arc<dyn SessionStore> {
    let store = client::FileSessionStore::default_location();
    tracing::debug!(path = %store.path().display(), "using file session store");
    Arc::new(store)
}

#[cfg(not(feature = "desktop"))]
pub async fn open_session_store() -> Arc<dyn SessionStore> {
    Arc::new(BrowserSessionStore::hydrate().await)
}

/// `localStorage` under the `token` and `user` keys.
///
/// Reads are async in the eval bridge, so the pair is loaded once into an
/// in-memory cache; writes go to both.
#[cfg(not(feature = "desktop"))]
pub struct BrowserSessionStore {
    cache: MemorySessionStore,
}

#[cfg(not(feature = "desktop"))]
impl BrowserSessionStore {
    pub async fn hydrate() -> Self {
        let store = Self {
            cache: MemorySessionStore::new(),
        };
        let token = read_item(TOKEN_KEY).await;
        let user = read_item(USER_KEY).await;
        if let Some(session) = from_storage_pair(token, user) {
            if let Err(e) = store.cache.save(&session) {
                tracing::warn!(error = %e, "could not cache stored session");
            }
        }
        store
    }
}

#[cfg(not(feature = "desktop"))]
impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<Session> {
        self.cache.load()
    }

    fn save(&self, session: &Session) -> Result<(), AppError> {
        let (token, user) = to_storage_pair(session)?;
        let js = format!(
            "localStorage.setItem({}, {}); localStorage.setItem({}, {});",
            js_string(TOKEN_KEY)?,
            js_string(&token)?,
            js_string(USER_KEY)?,
            js_string(&user)?,
        );
        write_storage(js, "save");
        self.cache.save(session)
    }

    fn clear(&self) -> Result<(), AppError> {
        let js = format!(
            "localStorage.removeItem({}); localStorage.removeItem({});",
            js_string(TOKEN_KEY)?,
            js_string(USER_KEY)?,
        );
        write_storage(js, "clear");
        self.cache.clear()
    }
}

/// Wrap storage statements so a thrown error (quota, private mode) comes
/// back as `false` instead of vanishing.
#[cfg(not(feature = "desktop"))]
fn guarded(statements: &str) -> String {
    format!("try {{ {statements} return true; }} catch (e) {{ return false; }}")
}

/// Run a `localStorage` write without blocking the caller. The cache is
/// already updated, so a failure is only logged.
#[cfg(not(feature = "desktop"))]
fn write_storage(statements: String, op: &'static str) {
    let script = guarded(&statements);
    spawn_forever(async move {
        match document::eval(&script).await {
            Ok(serde_json::Value::Bool(true)) => {}
            Ok(other) => tracing::warn!(op, result = %other, "localStorage write rejected"),
            Err(e) => tracing::warn!(op, error = ?e, "localStorage write failed"),
        }
    });
}

/// Quote a value as a JavaScript string literal.
#[cfg(not(feature = "desktop"))]
fn js_string(value: &str) -> Result<String, AppError> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(not(feature = "desktop"))]
async fn read_item(key: &str) -> Option<String> {
    let js = format!("return localStorage.getItem({});", js_string(key).ok()?);
    match document::eval(&js).await {
        Ok(serde_json::Value::String(value)) => Some(value),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(key, error = ?e, "localStorage read failed");
            None
        }
    }
}
