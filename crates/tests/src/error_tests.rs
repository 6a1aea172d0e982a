use client::ApiClient;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, HearingStatus, ScheduleRequest, GENERIC_ERROR_MESSAGE};

use crate::common::{court, test_backend, TestBackend};

async fn canned(status: u16, body: &str) -> TestBackend {
    let mut seed = court();
    seed.canned = Some((status, body.to_string()));
    test_backend(seed).await
}

#[tokio::test]
async fn missing_record_keeps_the_backend_message() {
    let backend = test_backend(court()).await;

    let err = backend.api.get_case("nope").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.friendly_message(), "Case not found");
}

#[tokio::test]
async fn server_error_without_json_shows_the_generic_message() {
    let backend = canned(500, "<html>upstream exploded</html>").await;

    let err = backend.api.list_cases().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(err.friendly_message(), GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn unprocessable_entity_surfaces_the_reason() {
    let backend = canned(422, r#"{"message":"Courtroom 4 is already booked"}"#).await;
    let req = ScheduleRequest {
        case_id: "c4".into(),
        start_date: "2024-09-02".into(),
        start_time: "09:30".into(),
        end_date: "2024-09-02".into(),
        end_time: "11:00".into(),
        room: "Courtroom 4".into(),
        assigned_judge: "j1".into(),
        status: HearingStatus::Scheduled,
    };

    let err = backend.api.create_schedule(&req).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.friendly_message(), "Courtroom 4 is already booked");
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let backend = canned(200, "definitely not json").await;

    let err = backend.api.list_users().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Decode);
    assert_eq!(err.friendly_message(), GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn one_failing_counter_fails_the_admin_batch() {
    let backend = canned(503, "").await;

    let err = backend.api.admin_summary().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::InternalError);
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let api = ApiClient::new(format!("http://{addr}"));

    let err = api.case_count().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Network);
    assert_eq!(err.friendly_message(), GENERIC_ERROR_MESSAGE);
}
