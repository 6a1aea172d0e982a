use chrono::Utc;
use client::{restore, sign_in, sign_out, MemorySessionStore, SessionStore, WRONG_CREDENTIALS};
use jsonwebtoken::{encode, EncodingKey, Header};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, Session, User, UserRole};

use crate::common::{court, test_backend, PASSWORD};

fn jwt(exp: i64) -> String {
    let claims = json!({ "id": "j1", "role": "judge", "exp": exp });
    encode(&Header::default(), &claims, &EncodingKey::from_secret(b"test-secret"))
        .expect("encode token")
}

fn judge_session(token: String) -> Session {
    Session {
        token,
        user: User {
            id: "j1".into(),
            name: "Judge Ellen Smith".into(),
            email: "judge.smith@court.test".into(),
            role: UserRole::Judge,
            created_at: None,
        },
    }
}

#[tokio::test]
async fn each_role_lands_on_its_dashboard() {
    let backend = test_backend(court()).await;

    for (email, role, path) in [
        ("admin@court.test", UserRole::Admin, "/admindashboard"),
        ("clerk@court.test", UserRole::Clerk, "/clerkdashboard"),
        ("registrar@court.test", UserRole::Registrar, "/registrardashboard"),
        ("judge.smith@court.test", UserRole::Judge, "/judgedashboard"),
    ] {
        let store = MemorySessionStore::new();
        let outcome = sign_in(&backend.api, &store, email, PASSWORD)
            .await
            .expect("login succeeds");

        assert_eq!(outcome.redirect, path);
        assert_eq!(outcome.session.role(), role);
        assert!(!outcome.session.token.is_empty());
        assert_eq!(store.load(), Some(outcome.session));
    }
}

#[tokio::test]
async fn capitalised_role_from_backend_still_routes() {
    let backend = test_backend(court()).await;
    let store = MemorySessionStore::new();

    // The seeded clerk is stored with role "Clerk".
    let outcome = sign_in(&backend.api, &store, "clerk@court.test", PASSWORD)
        .await
        .unwrap();
    assert_eq!(outcome.session.user.role, UserRole::Clerk);
    assert_eq!(outcome.redirect, "/clerkdashboard");
}

#[tokio::test]
async fn wrong_password_shows_wrong_credentials_and_stores_nothing() {
    let backend = test_backend(court()).await;
    let store = MemorySessionStore::new();

    let err = sign_in(&backend.api, &store, "admin@court.test", "not-it")
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.friendly_message(), WRONG_CREDENTIALS);
    assert_eq!(store.load(), None);
}

#[tokio::test]
async fn backend_error_text_is_shown_for_unknown_user() {
    let backend = test_backend(court()).await;
    let store = MemorySessionStore::new();

    let err = sign_in(&backend.api, &store, "nobody@court.test", PASSWORD)
        .await
        .unwrap_err();

    assert_eq!(err.friendly_message(), "User not found");
    assert_eq!(store.load(), None);
}

#[tokio::test]
async fn malformed_email_is_rejected_before_any_request() {
    let backend = test_backend(court()).await;
    let store = MemorySessionStore::new();

    let err = sign_in(&backend.api, &store, "not-an-email", PASSWORD)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field("email").is_some());
    assert!(backend.requests().await.is_empty());
}

#[tokio::test]
async fn session_token_is_sent_as_bearer() {
    let backend = test_backend(court()).await;
    let store = MemorySessionStore::new();
    let outcome = sign_in(&backend.api, &store, "registrar@court.test", PASSWORD)
        .await
        .unwrap();

    let authed = backend.api.clone().with_token(outcome.session.token.clone());
    authed.submitted_cases().await.unwrap();

    let calls = backend.requests_to("GET", "/api/cases/submitted").await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].bearer.as_deref(), Some(outcome.session.token.as_str()));

    // The login call itself carried no token.
    let login = backend.requests_to("POST", "/api/users/login").await;
    assert_eq!(login[0].bearer, None);
}

#[test]
fn restore_drops_an_expired_session() {
    let store = MemorySessionStore::new();
    store
        .save(&judge_session(jwt(Utc::now().timestamp() - 60)))
        .unwrap();

    assert_eq!(restore(&store), None);
    assert_eq!(store.load(), None);
}

#[test]
fn restore_keeps_a_live_session() {
    let store = MemorySessionStore::new();
    let session = judge_session(jwt(Utc::now().timestamp() + 3600));
    store.save(&session).unwrap();

    assert_eq!(restore(&store), Some(session.clone()));
    assert_eq!(store.load(), Some(session));
}

#[test]
fn sign_out_clears_the_store() {
    let store = MemorySessionStore::new();
    store.save(&judge_session("opaque".into())).unwrap();

    sign_out(&store).unwrap();
    assert_eq!(store.load(), None);
}
