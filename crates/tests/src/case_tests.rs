use client::CaseQuery;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{
    available_actions, filter_by_query, AppErrorKind, Case, CaseAction, CaseRequest, CaseStatus,
    Paginated, Party, UserRole, PAGE_SIZE,
};

use crate::common::{case, court, test_backend, Backend};

fn ids(cases: &[Case]) -> Vec<&str> {
    let mut ids: Vec<&str> = cases.iter().map(|c| c.id.as_str()).collect();
    ids.sort();
    ids
}

#[tokio::test]
async fn search_matches_title_parties_and_judge_but_not_description() {
    let backend = test_backend(court()).await;
    let cases = backend.api.list_cases().await.unwrap();
    assert_eq!(cases.len(), 6);

    let hits = filter_by_query(&cases, "smith");
    assert_eq!(ids(&hits), vec!["c1", "c2", "c3", "c4"]);

    assert_eq!(filter_by_query(&cases, "  ").len(), 6);
    assert!(filter_by_query(&cases, "no such party").is_empty());
}

#[tokio::test]
async fn create_sends_one_post_and_the_case_appears_as_filed() {
    let backend = test_backend(court()).await;
    let req = CaseRequest {
        title: "Boundary wall".into(),
        description: "Encroachment".into(),
        plaintiff: Some(Party::named("Mary Major")),
        defendant: Some(Party::named("Ned Minor")),
        filed_by: Some("u-clerk".into()),
        ..Default::default()
    };

    backend.api.create_case(&req).await.unwrap();

    let posts = backend.requests_to("POST", "/api/cases").await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].body["title"], "Boundary wall");
    assert_eq!(posts[0].body["plaintiff"]["name"], "Mary Major");

    let mine = backend
        .api
        .query_cases(&CaseQuery::clerk("u-clerk"))
        .await
        .unwrap();
    let created = mine
        .iter()
        .find(|c| c.title == "Boundary wall")
        .expect("new case listed");
    assert_eq!(created.status, CaseStatus::Filed);
    assert_eq!(created.parties_line(), "Mary Major v. Ned Minor");
}

#[tokio::test]
async fn blank_title_is_rejected_without_a_request() {
    let backend = test_backend(court()).await;

    let err = backend
        .api
        .create_case(&CaseRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field("title"), Some("Title is required"));
    assert!(backend.requests().await.is_empty());
}

#[tokio::test]
async fn case_walks_from_filed_to_assigned() {
    let backend = test_backend(court()).await;
    let api = &backend.api;

    let step = |role: UserRole, status: CaseStatus, action: CaseAction| {
        assert!(
            available_actions(&status, role).contains(&action),
            "{role:?} should be offered {action:?} at {status}"
        );
        action.expected_status().expect("lifecycle action")
    };

    let next = step(UserRole::Clerk, CaseStatus::Filed, CaseAction::Register);
    api.register_case("c1", "u-clerk").await.unwrap();
    assert_eq!(backend.case_status("c1").await, next);

    let next = step(UserRole::Clerk, next, CaseAction::SubmitToRegistrar);
    api.submit_to_registrar("c1").await.unwrap();
    assert_eq!(backend.case_status("c1").await, next);

    let next = step(UserRole::Registrar, next, CaseAction::Approve);
    api.approve_case("c1", "Rita Registrar").await.unwrap();
    assert_eq!(backend.case_status("c1").await, next);

    let next = step(UserRole::Registrar, next, CaseAction::AssignJudge);
    api.assign_judge("c1", "j2", "Rita Registrar").await.unwrap();
    assert_eq!(backend.case_status("c1").await, next);

    let docket = api.assigned_cases("j2").await.unwrap();
    assert_eq!(ids(&docket), vec!["c1"]);
    assert_eq!(docket[0].judge_name(), "Judge Omar Brown");
    assert_eq!(
        available_actions(&docket[0].status, UserRole::Judge),
        vec![CaseAction::ScheduleHearing]
    );

    let register = backend.requests_to("PUT", "/api/cases/c1/register").await;
    assert_eq!(register[0].body, json!({ "clerkId": "u-clerk" }));
    let endorse = backend.requests_to("POST", "/api/cases/endorse/c1").await;
    assert_eq!(
        endorse[0].body,
        json!({ "judgeId": "j2", "registrarName": "Rita Registrar" })
    );
}

#[tokio::test]
async fn assigning_without_a_judge_sends_nothing() {
    let backend = test_backend(court()).await;

    let err = backend
        .api
        .assign_judge("c5", "  ", "Rita Registrar")
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.friendly_message(), "Please select a judge before assigning.");
    assert!(backend.requests().await.is_empty());
    assert_eq!(backend.case_status("c5").await, CaseStatus::Approved);
}

#[tokio::test]
async fn disapproved_case_moves_between_registrar_queues() {
    let backend = test_backend(court()).await;
    let api = &backend.api;

    assert_eq!(ids(&api.submitted_cases().await.unwrap()), vec!["c3"]);

    api.disapprove_case("c3", "Rita Registrar").await.unwrap();

    assert!(api.submitted_cases().await.unwrap().is_empty());
    assert_eq!(ids(&api.disapproved_cases().await.unwrap()), vec!["c3", "c6"]);
    let call = backend.requests_to("POST", "/api/cases/disapprove/c3").await;
    assert_eq!(call[0].body["registrarName"], "Rita Registrar");
}

#[tokio::test]
async fn status_and_clerk_filters_go_on_the_query_string() {
    let backend = test_backend(court()).await;
    let api = &backend.api;

    let submitted = api
        .query_cases(&CaseQuery::status(CaseStatus::Submitted))
        .await
        .unwrap();
    assert_eq!(ids(&submitted), vec!["c3"]);

    let mine = api.query_cases(&CaseQuery::clerk("u-clerk")).await.unwrap();
    assert_eq!(ids(&mine), vec!["c1", "c2", "c3", "c6"]);

    let calls = backend.requests_to("GET", "/api/cases").await;
    assert_eq!(calls[0].query.get("status").map(String::as_str), Some("Submitted"));
    assert_eq!(calls[1].query.get("clerkId").map(String::as_str), Some("u-clerk"));
    assert!(!calls[1].query.contains_key("status"));
}

#[tokio::test]
async fn registrar_overview_batches_stats_and_queues() {
    let backend = test_backend(court()).await;

    let overview = backend.api.registrar_overview().await.unwrap();

    assert_eq!(overview.stats.total(), 6);
    assert_eq!(overview.stats.count(&CaseStatus::Submitted), 1);
    assert_eq!(ids(&overview.submitted), vec!["c3"]);
    assert_eq!(ids(&overview.approved), vec!["c5"]);
}

#[tokio::test]
async fn judge_stats_only_count_their_cases() {
    let backend = test_backend(court()).await;

    let stats = backend.api.judge_status_stats("j1").await.unwrap();
    assert_eq!(stats.total(), 1);
    assert_eq!(stats.in_lifecycle_order(), vec![(CaseStatus::Assigned, 1)]);
}

#[tokio::test]
async fn clerk_summary_counts_by_outcome() {
    let backend = test_backend(court()).await;

    let summary = backend.api.clerk_summary("u-clerk").await.unwrap();

    assert_eq!(summary.total, 4);
    assert_eq!(summary.pending, 3);
    assert_eq!(summary.approved, 0);
    assert_eq!(summary.rejected, 1);
    let call = backend.requests_to("GET", "/api/cases/summary").await;
    assert_eq!(call[0].query.get("clerkId").map(String::as_str), Some("u-clerk"));
}

#[tokio::test]
async fn thirteen_matches_page_into_three() {
    let mut seed = Backend::default();
    for n in 0..13 {
        seed.cases
            .push(case(&format!("s{n:02}"), &format!("Smith matter {n}"), "Filed"));
    }
    seed.cases.push(case("x1", "Unrelated", "Filed"));
    let backend = test_backend(seed).await;

    let cases = backend.api.list_cases().await.unwrap();
    let filtered = filter_by_query(&cases, "Smith");
    assert_eq!(filtered.len(), 13);

    let first = Paginated::from_items(&filtered, 1, PAGE_SIZE);
    assert_eq!(first.meta.total_pages, 3);
    assert_eq!(first.data.len(), 6);
    assert!(first.meta.has_next);

    let last = Paginated::from_items(&filtered, 3, PAGE_SIZE);
    assert_eq!(last.data.len(), 1);
    assert!(!last.meta.has_next);

    // Past the end clamps to the last page.
    assert_eq!(Paginated::from_items(&filtered, 9, PAGE_SIZE).meta.page, 3);
}

#[tokio::test]
async fn edit_and_delete_round_trip() {
    let backend = test_backend(court()).await;
    let api = &backend.api;

    let mut req = CaseRequest::from(&api.get_case("c5").await.unwrap());
    req.title = "Traffic appeal (amended)".into();
    api.update_case("c5", &req).await.unwrap();
    assert_eq!(api.get_case("c5").await.unwrap().title, "Traffic appeal (amended)");

    api.delete_case("c5").await.unwrap();
    let err = api.get_case("c5").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(api.case_count().await.unwrap(), 5);
}
