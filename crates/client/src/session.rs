//! Where the `{token, user}` pair lives between launches.
//!
//! The app reads the session once at startup through [`restore`] and
//! hands it down as context. Nothing else touches storage.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use serde::Deserialize;
use shared_types::{AppError, Session, User};
use std::sync::Mutex;

/// Storage keys kept from the browser build.
pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session) -> Result<(), AppError>;
    fn clear(&self) -> Result<(), AppError>;
}

/// Load the stored session, discarding it if its token has expired.
pub fn restore(store: &dyn SessionStore) -> Option<Session> {
    let session = store.load()?;
    if token_expired(&session.token, Utc::now().timestamp()) {
        tracing::info!(user = %session.user.id, "stored session expired");
        if let Err(e) = store.clear() {
            tracing::warn!(error = %e, "could not clear expired session");
        }
        return None;
    }
    Some(session)
}

#[derive(Deserialize)]
struct ExpClaim {
    exp: Option<i64>,
}

/// True when `token` is a JWT whose `exp` is at or before `now` (unix
/// seconds). Opaque tokens and tokens without `exp` never expire here.
pub fn token_expired(token: &str, now: i64) -> bool {
    let mut parts = token.split('.');
    let (Some(_), Some(payload), Some(_), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    let Ok(bytes) = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')) else {
        return false;
    };
    match serde_json::from_slice::<ExpClaim>(&bytes) {
        Ok(ExpClaim { exp: Some(exp) }) => exp <= now,
        _ => false,
    }
}

/// Split a session into the two values stored under [`TOKEN_KEY`] and
/// [`USER_KEY`].
pub fn to_storage_pair(session: &Session) -> Result<(String, String), AppError> {
    let user = serde_json::to_string(&session.user)?;
    Ok((session.token.clone(), user))
}

/// Rebuild a session from the stored values. Missing or corrupt values
/// yield `None`.
pub fn from_storage_pair(token: Option<String>, user: Option<String>) -> Option<Session> {
    let token = token.filter(|t| !t.is_empty())?;
    let user: User = serde_json::from_str(&user?).ok()?;
    Some(Session { token, user })
}

/// Process-local store. Used by tests and as the web fallback.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.inner.lock().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, session: &Session) -> Result<(), AppError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| AppError::internal("session store poisoned"))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| AppError::internal("session store poisoned"))?;
        *guard = None;
        Ok(())
    }
}

/// JSON file store for desktop builds: `{"token": "...", "user": {...}}`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSessionStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/courtsys/session.json`, or the working directory when
    /// the platform has no config dir.
    pub fn default_location() -> Self {
        let dir = dirs::config_dir()
            .map(|d| d.join("courtsys"))
            .unwrap_or_else(|| std::path::PathBuf::from("."));
        Self::new(dir.join("session.json"))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Session> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring corrupt session file");
                None
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::internal(format!("cannot create session dir: {e}")))?;
        }
        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, json)
            .map_err(|e| AppError::internal(format!("cannot write session: {e}")))
    }

    fn clear(&self) -> Result<(), AppError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::internal(format!("cannot remove session: {e}"))),
        }
    }
}
