use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, HearingStatus, ScheduleRequest};
use std::collections::BTreeSet;

use crate::common::{court, test_backend};

fn hearing(case_id: &str, judge: &str) -> ScheduleRequest {
    ScheduleRequest {
        case_id: case_id.into(),
        start_date: "2024-09-02".into(),
        start_time: "09:30".into(),
        end_date: "2024-09-02".into(),
        end_time: "11:00".into(),
        room: "Courtroom 4".into(),
        assigned_judge: judge.into(),
        status: HearingStatus::Scheduled,
    }
}

#[tokio::test]
async fn every_slot_field_is_required() {
    let backend = test_backend(court()).await;

    let err = backend
        .api
        .create_schedule(&ScheduleRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    let fields: BTreeSet<&str> = err.field_errors.keys().map(String::as_str).collect();
    assert_eq!(
        fields,
        BTreeSet::from(["case_id", "start_date", "start_time", "end_date", "end_time", "room"])
    );
    assert_eq!(err.field("room"), Some("Room is required"));
    assert!(backend.requests().await.is_empty());
}

#[tokio::test]
async fn judge_sees_the_hearing_they_scheduled() {
    let backend = test_backend(court()).await;

    backend.api.create_schedule(&hearing("c4", "j1")).await.unwrap();

    let posted = backend.requests_to("POST", "/api/schedules").await;
    assert_eq!(posted[0].body["caseId"], "c4");
    assert_eq!(posted[0].body["status"], "Scheduled");

    let mine = backend.api.judge_schedules("j1").await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].case_title(), "Estate of Brown");
    assert_eq!(mine[0].case_number(), "CV-c4");
    assert_eq!(mine[0].case_key(), "c4");
    assert_eq!(mine[0].room, "Courtroom 4");

    assert!(backend.api.judge_schedules("j2").await.unwrap().is_empty());
}

#[tokio::test]
async fn rescheduling_and_cancelling() {
    let backend = test_backend(court()).await;
    let api = &backend.api;
    api.create_schedule(&hearing("c4", "j1")).await.unwrap();
    let slot = api.list_schedules().await.unwrap().remove(0);

    let mut moved = ScheduleRequest::from(&slot);
    assert_eq!(moved, hearing("c4", "j1"));
    moved.room = "Courtroom 1".into();
    moved.status = HearingStatus::Postponed;
    api.update_schedule(&slot.id, &moved).await.unwrap();

    let updated = api.list_schedules().await.unwrap().remove(0);
    assert_eq!(updated.room, "Courtroom 1");
    assert_eq!(updated.status, HearingStatus::Postponed);
    assert_eq!(updated.case_title(), "Estate of Brown");

    api.delete_schedule(&slot.id).await.unwrap();
    assert!(api.list_schedules().await.unwrap().is_empty());
}

#[tokio::test]
async fn progress_is_reported_per_hearing() {
    let backend = test_backend(court()).await;
    backend.api.create_schedule(&hearing("c4", "j1")).await.unwrap();
    {
        let mut db = backend.state.lock().await;
        db.schedules[0]["progress"] = json!(74.6);
        db.schedules[0]["status"] = json!("Completed");
    }

    let progress = backend.api.judge_progress("j1").await.unwrap();

    assert_eq!(progress.len(), 1);
    assert_eq!(progress[0].progress_percent(), 75);
    assert!(progress[0].status.awaits_judgment());
}
