use shared_types::{AppError, AppErrorKind, LoginRequest, Session, GENERIC_ERROR_MESSAGE};
use validator::Validate;

use crate::session::SessionStore;
use crate::ApiClient;

pub const WRONG_CREDENTIALS: &str = "Wrong username or password";

/// Result of a successful sign-in: the stored session and where to go next.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub session: Session,
    pub redirect: &'static str,
}

impl ApiClient {
    /// `POST /api/users/login`.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let req = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        req.validate()?;

        self.post("/api/users/login", &req)
            .await
            .map_err(login_error)
    }
}

/// HTTP failures show the backend's `error` text when it sent one and the
/// wrong-credentials sentence otherwise. Transport failures keep the
/// generic message.
fn login_error(err: AppError) -> AppError {
    match err.kind {
        AppErrorKind::Network | AppErrorKind::Decode => err,
        _ if err.message == GENERIC_ERROR_MESSAGE => AppError {
            message: WRONG_CREDENTIALS.to_string(),
            ..err
        },
        _ => err,
    }
}

/// Log in, persist `{token, user}` and pick the role's dashboard.
///
/// Nothing is written to `store` unless the backend accepted the
/// credentials and the role has a dashboard.
pub async fn sign_in(
    api: &ApiClient,
    store: &dyn SessionStore,
    email: &str,
    password: &str,
) -> Result<LoginOutcome, AppError> {
    let session = api.login(email, password).await?;

    let redirect = session.role().dashboard_path().ok_or_else(|| {
        tracing::warn!(user = %session.user.id, "login for a user without a known role");
        AppError::forbidden("Your account does not have a dashboard role.")
    })?;

    store.save(&session)?;
    tracing::info!(user = %session.user.id, role = session.role().as_str(), "signed in");

    Ok(LoginOutcome { session, redirect })
}

/// Forget the stored session.
pub fn sign_out(store: &dyn SessionStore) -> Result<(), AppError> {
    store.clear()?;
    tracing::info!("signed out");
    Ok(())
}
