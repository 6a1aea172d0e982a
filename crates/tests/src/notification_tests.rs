use client::{confirm_read, poll_loop, NotificationFeed, ReadOutcome};
use pretty_assertions::assert_eq;
use shared_types::{CaseStatus, NotificationStatus};
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::common::{court, notification, test_backend};

fn order(feed: &NotificationFeed) -> Vec<&str> {
    feed.items().iter().map(|n| n.id.as_str()).collect()
}

#[tokio::test]
async fn list_is_unread_first_then_newest() {
    let backend = test_backend(court()).await;

    let list = backend.api.notifications("j1").await.unwrap();

    let ids: Vec<&str> = list.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["n3", "n2", "n1"]);
}

#[tokio::test]
async fn populated_and_bare_case_refs_decode_together() {
    let backend = test_backend(court()).await;

    let list = backend.api.notifications("j1").await.unwrap();

    let n3 = list.iter().find(|n| n.id == "n3").expect("n3 listed");
    let case = n3.case_id.as_ref().expect("populated case");
    assert_eq!(case.id, "c4");
    assert_eq!(case.status, Some(CaseStatus::Assigned));
    assert_eq!(n3.case_line().as_deref(), Some("Case: CV-c4 - Estate of Brown"));

    let n1 = list.iter().find(|n| n.id == "n1").expect("n1 listed");
    assert_eq!(n1.case_id.as_ref().map(|c| c.id.as_str()), Some("c1"));
    assert_eq!(n1.case_line(), None);
}

#[tokio::test]
async fn mark_read_updates_locally_then_confirms() {
    let backend = test_backend(court()).await;
    let mut feed = NotificationFeed::new();
    feed.apply_fetch(backend.api.notifications("j1").await.unwrap());
    assert_eq!(feed.unread(), 2);

    assert!(feed.mark_read("n3"));
    assert_eq!(feed.unread(), 1);
    assert_eq!(order(&feed), vec!["n2", "n3", "n1"]);

    let outcome = confirm_read(&backend.api, "j1", "n3").await;
    assert!(matches!(outcome, ReadOutcome::Confirmed));
    assert_eq!(
        backend.requests_to("PATCH", "/api/notifications/n3/read").await.len(),
        1
    );

    let server = backend.api.notifications("j1").await.unwrap();
    let n3 = server.iter().find(|n| n.id == "n3").unwrap();
    assert_eq!(n3.status, NotificationStatus::Read);
}

#[tokio::test]
async fn failed_mark_read_is_rolled_back_from_the_server_list() {
    let mut seed = court();
    seed.fail_mark_read = true;
    let backend = test_backend(seed).await;
    let mut feed = NotificationFeed::new();
    feed.apply_fetch(backend.api.notifications("j1").await.unwrap());

    feed.mark_read("n2");
    assert_eq!(feed.unread(), 1);

    match confirm_read(&backend.api, "j1", "n2").await {
        ReadOutcome::Resynced(list) => {
            feed.apply_fetch(list);
        }
        other => panic!("expected a resync, got {other:?}"),
    }
    assert_eq!(feed.unread(), 2);
    assert_eq!(order(&feed), vec!["n3", "n2", "n1"]);
}

#[tokio::test]
async fn poller_syncs_first_then_reports_new_arrivals() {
    let backend = test_backend(court()).await;
    let sleeps = AtomicUsize::new(0);
    let mut feed = NotificationFeed::new();
    let mut arrivals = Vec::new();
    let mut fetches = 0;

    poll_loop(
        backend.api.clone(),
        "j1".to_string(),
        Duration::from_secs(10),
        |interval| {
            assert_eq!(interval, Duration::from_secs(10));
            sleeps.fetch_add(1, Ordering::SeqCst);
            std::future::ready(())
        },
        |result| {
            fetches += 1;
            let fresh = feed.apply_fetch(result.expect("poll succeeds"));
            arrivals.extend(fresh.into_iter().map(|n| n.id));
            if fetches == 1 {
                let mut db = backend.state.try_lock().expect("backend idle between polls");
                db.notifications
                    .push(notification("n9", "j1", "Unread", "2024-06-01T08:00:00.000Z"));
            }
            if fetches == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        },
    )
    .await;

    assert_eq!(arrivals, vec!["n9".to_string()]);
    assert_eq!(feed.unread(), 3);
    assert_eq!(sleeps.load(Ordering::SeqCst), 2);

    let calls: Vec<(String, String)> = backend
        .requests()
        .await
        .into_iter()
        .map(|r| (r.method, r.path))
        .collect();
    let sync = ("POST".to_string(), "/api/notifications/sync/j1".to_string());
    let poll = ("GET".to_string(), "/api/notifications/j1".to_string());
    assert_eq!(calls, vec![sync, poll.clone(), poll.clone(), poll]);
}

#[tokio::test]
async fn failed_sync_does_not_stop_polling() {
    let mut seed = court();
    seed.fail_sync = true;
    let backend = test_backend(seed).await;
    let mut results = Vec::new();

    poll_loop(
        backend.api.clone(),
        "j2".to_string(),
        Duration::from_millis(1),
        |_| std::future::ready(()),
        |result| {
            results.push(result.map(|list| list.len()));
            ControlFlow::Break(())
        },
    )
    .await;

    assert_eq!(results, vec![Ok(1)]);
}
