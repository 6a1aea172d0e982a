use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, CaseStatus, JudgmentRequest};

use crate::common::{court, test_backend};

fn ruling(case_id: &str, verdict: &str) -> JudgmentRequest {
    JudgmentRequest {
        case_id: case_id.into(),
        judge_id: "j1".into(),
        verdict: verdict.into(),
        summary: "The estate passes to the named heirs.".into(),
        judgment_date: Some("2024-10-01".into()),
    }
}

#[tokio::test]
async fn recorded_judgment_shows_in_the_judges_history() {
    let backend = test_backend(court()).await;

    backend
        .api
        .record_judgment(&ruling("c4", "In favour of Plaintiff"))
        .await
        .unwrap();

    let posted = backend.requests_to("POST", "/api/judgments").await;
    assert_eq!(posted[0].body["verdict"], "In favour of Plaintiff");
    assert_eq!(posted[0].body["judgmentDate"], "2024-10-01");

    // The backend answers with `outcome`; the client reads it as the verdict.
    let history = backend.api.judge_judgments("j1").await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].verdict, "In favour of Plaintiff");
    assert_eq!(history[0].case_title(), "Estate of Brown");
    assert_eq!(history[0].case_number(), "CV-c4");
    assert_eq!(
        history[0].judgment_date.map(|d| d.date_naive()),
        NaiveDate::from_ymd_opt(2024, 10, 1)
    );

    assert_eq!(backend.case_status("c4").await, CaseStatus::JudgmentRecorded);
    assert!(backend.api.judge_judgments("j2").await.unwrap().is_empty());
}

#[tokio::test]
async fn verdict_and_summary_are_required() {
    let backend = test_backend(court()).await;
    let mut req = ruling("c4", "");
    req.summary.clear();

    let err = backend.api.record_judgment(&req).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field("verdict"), Some("Verdict is required"));
    assert_eq!(err.field("summary"), Some("Summary is required"));
    assert_eq!(err.field("case_id"), None);
    assert!(backend.requests().await.is_empty());
    assert_eq!(backend.case_status("c4").await, CaseStatus::Assigned);
}

#[tokio::test]
async fn blank_date_is_left_off_the_wire() {
    let backend = test_backend(court()).await;
    let mut req = ruling("c4", "Dismissed");
    req.judgment_date = None;

    backend.api.record_judgment(&req).await.unwrap();

    let posted = backend.requests_to("POST", "/api/judgments").await;
    assert!(posted[0].body.get("judgmentDate").is_none());
    assert_eq!(backend.api.list_judgments().await.unwrap().len(), 1);
}
