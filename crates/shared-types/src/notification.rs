use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::schedule::CaseRef;

/// Read state of a notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum NotificationStatus {
    #[default]
    Unread,
    Read,
}

/// A per-user message, optionally tied to a case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<CaseRef>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: NotificationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<DateTime<Utc>>,
}

impl Notification {
    pub fn is_unread(&self) -> bool {
        self.status == NotificationStatus::Unread
    }

    /// `Case: CV-1 - Smith v. Jones` when the backend populated the case.
    pub fn case_line(&self) -> Option<String> {
        let case = self.case_id.as_ref()?;
        match (case.case_number.as_str(), case.title.as_str()) {
            ("", "") => None,
            (number, "") => Some(format!("Case: {number}")),
            ("", title) => Some(format!("Case: {title}")),
            (number, title) => Some(format!("Case: {number} - {title}")),
        }
    }
}

/// Unread first, then newest `sentAt` first. Missing timestamps sort last.
pub fn compare_notifications(a: &Notification, b: &Notification) -> Ordering {
    match (a.is_unread(), b.is_unread()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => b.sent_at.cmp(&a.sent_at),
    }
}

pub fn sort_notifications(list: &mut [Notification]) {
    list.sort_by(compare_notifications);
}

pub fn unread_count(list: &[Notification]) -> usize {
    list.iter().filter(|n| n.is_unread()).count()
}

/// Flip one notification to Read in place. Returns false if `id` is absent
/// or already read.
pub fn mark_read_local(list: &mut [Notification], id: &str) -> bool {
    match list.iter_mut().find(|n| n.id == id) {
        Some(n) if n.is_unread() => {
            n.status = NotificationStatus::Read;
            true
        }
        _ => false,
    }
}

/// Unread notifications in `current` whose id was not present in `previous`.
pub fn newly_arrived<'a>(previous: &[Notification], current: &'a [Notification]) -> Vec<&'a Notification> {
    let seen: HashSet<&str> = previous.iter().map(|n| n.id.as_str()).collect();
    current
        .iter()
        .filter(|n| n.is_unread() && !seen.contains(n.id.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn note(id: &str, status: NotificationStatus, sent: &str) -> Notification {
        Notification {
            id: id.into(),
            user_id: "judge-1".into(),
            case_id: None,
            title: format!("Notice {id}"),
            message: String::new(),
            status,
            sent_at: Some(sent.parse().unwrap()),
        }
    }

    fn ids(list: &[Notification]) -> Vec<&str> {
        list.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn unread_first_then_newest() {
        let mut list = vec![
            note("old-read", NotificationStatus::Read, "2024-01-01T00:00:00Z"),
            note("old-unread", NotificationStatus::Unread, "2024-01-02T00:00:00Z"),
            note("new-read", NotificationStatus::Read, "2024-03-01T00:00:00Z"),
            note("new-unread", NotificationStatus::Unread, "2024-03-02T00:00:00Z"),
        ];
        sort_notifications(&mut list);
        assert_eq!(ids(&list), vec!["new-unread", "old-unread", "new-read", "old-read"]);
    }

    #[test]
    fn mark_read_touches_only_target() {
        let mut list = vec![
            note("a", NotificationStatus::Unread, "2024-01-01T00:00:00Z"),
            note("b", NotificationStatus::Unread, "2024-01-02T00:00:00Z"),
        ];
        assert!(mark_read_local(&mut list, "a"));
        assert_eq!(list[0].status, NotificationStatus::Read);
        assert_eq!(list[1].status, NotificationStatus::Unread);
        assert_eq!(unread_count(&list), 1);
        assert!(!mark_read_local(&mut list, "a"));
        assert!(!mark_read_local(&mut list, "missing"));
    }

    #[test]
    fn newly_arrived_ignores_known_and_read() {
        let previous = vec![note("a", NotificationStatus::Unread, "2024-01-01T00:00:00Z")];
        let current = vec![
            note("a", NotificationStatus::Unread, "2024-01-01T00:00:00Z"),
            note("b", NotificationStatus::Unread, "2024-01-02T00:00:00Z"),
            note("c", NotificationStatus::Read, "2024-01-03T00:00:00Z"),
        ];
        let fresh: Vec<&str> = newly_arrived(&previous, &current)
            .into_iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(fresh, vec!["b"]);
    }

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{"_id":"n1","userId":"u1","caseId":"c1","title":"Hearing set","message":"Room 4B","status":"Unread","sentAt":"2024-05-01T10:00:00.000Z"}"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert!(n.is_unread());
        assert_eq!(n.case_id.map(|c| c.id).as_deref(), Some("c1"));
    }

    #[test]
    fn populated_case_decodes_and_renders_a_case_line() {
        let json = r#"[{"_id":"n1","userId":"u1","caseId":{"_id":"c1","caseNumber":"CV-1","title":"Smith v. Jones","status":"Assigned"},"title":"Hearing set","message":"Room 4B","status":"Unread","sentAt":"2024-05-01T10:00:00.000Z"}]"#;
        let list: Vec<Notification> = serde_json::from_str(json).unwrap();
        let case = list[0].case_id.as_ref().unwrap();
        assert_eq!(case.status, Some(crate::CaseStatus::Assigned));
        assert_eq!(list[0].case_line().as_deref(), Some("Case: CV-1 - Smith v. Jones"));

        let mut bare = list[0].clone();
        bare.case_id = Some(CaseRef { id: "c1".into(), ..Default::default() });
        assert_eq!(bare.case_line(), None);
    }
}
