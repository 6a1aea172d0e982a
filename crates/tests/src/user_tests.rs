use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{filter_by_query, AppErrorKind, CreateUserRequest, UpdateUserRequest, UserRole};

use crate::common::{court, test_backend};

#[tokio::test]
async fn admin_creates_a_user_with_a_lowercase_role() {
    let backend = test_backend(court()).await;
    let req = CreateUserRequest {
        name: "Cara Clerk".into(),
        email: "cara@court.test".into(),
        password: "hunter22".into(),
        role: UserRole::Clerk,
    };

    backend.api.create_user(&req).await.unwrap();

    let posts = backend.requests_to("POST", "/api/users").await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].body["role"], "clerk");

    let users = backend.api.list_users().await.unwrap();
    let cara = users
        .iter()
        .find(|u| u.email == "cara@court.test")
        .expect("listed");
    assert_eq!(cara.role, UserRole::Clerk);

    // "Clerk" from the seed and "clerk" from the new account add up.
    let roles = backend.api.role_counts().await.unwrap();
    assert_eq!(roles.count(UserRole::Clerk), 2);
    assert_eq!(roles.count(UserRole::Judge), 2);
}

#[tokio::test]
async fn short_password_fails_validation_locally() {
    let backend = test_backend(court()).await;
    let req = CreateUserRequest {
        name: "Cara Clerk".into(),
        email: "cara@court.test".into(),
        password: "123".into(),
        ..Default::default()
    };

    let err = backend.api.create_user(&req).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(
        err.field("password"),
        Some("Password must be at least 6 characters")
    );
    assert!(backend.requests().await.is_empty());
}

#[tokio::test]
async fn partial_update_only_sends_changed_fields() {
    let backend = test_backend(court()).await;
    let req = UpdateUserRequest {
        name: Some("Judge Ellen Smith-Hart".into()),
        ..Default::default()
    };

    backend.api.update_user("j1", &req).await.unwrap();

    let puts = backend.requests_to("PUT", "/api/users/j1").await;
    assert_eq!(puts[0].body, json!({ "name": "Judge Ellen Smith-Hart" }));

    let judge = backend.api.get_user("j1").await.unwrap();
    assert_eq!(judge.name, "Judge Ellen Smith-Hart");
    assert_eq!(judge.role, UserRole::Judge);
}

#[tokio::test]
async fn deleted_user_disappears() {
    let backend = test_backend(court()).await;

    backend.api.delete_user("j2").await.unwrap();

    assert_eq!(backend.api.user_count().await.unwrap(), 4);
    let judges = backend.api.list_judges().await.unwrap();
    assert_eq!(judges.len(), 1);
    assert_eq!(judges[0].id, "j1");

    let err = backend.api.get_user("j2").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[tokio::test]
async fn admin_summary_collects_all_counters() {
    let backend = test_backend(court()).await;

    let summary = backend.api.admin_summary().await.unwrap();

    assert_eq!(summary.users, 5);
    assert_eq!(summary.cases, 6);
    assert_eq!(summary.closed_cases, 0);
    assert_eq!(summary.roles.count(UserRole::Admin), 1);
    assert_eq!(summary.recent_users.len(), 5);
    assert_eq!(summary.recent_users[0].id, "j2");

    for path in [
        "/api/users/count",
        "/api/cases/count",
        "/api/cases/closed",
        "/api/users/roles/count",
        "/api/users/recent",
    ] {
        assert_eq!(backend.requests_to("GET", path).await.len(), 1, "{path}");
    }
}

#[tokio::test]
async fn user_search_covers_name_email_and_role() {
    let backend = test_backend(court()).await;
    let users = backend.api.list_users().await.unwrap();

    assert_eq!(filter_by_query(&users, "judge").len(), 2);
    assert_eq!(filter_by_query(&users, "REGISTRAR@").len(), 1);
    assert_eq!(filter_by_query(&users, "ada")[0].id, "u-admin");
}
