use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::common::Searchable;
use crate::models::UserRef;

// ── Status ──────────────────────────────────────────────────────────

/// Case lifecycle status.
///
/// `Filed → Registered → Submitted → Approved/Disapproved → Assigned →
/// In Progress → Closed → Judgment Recorded`. The backend enforces every
/// transition; the client only reads the status to pick a badge and the
/// buttons a row offers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum CaseStatus {
    #[default]
    Filed,
    Registered,
    Submitted,
    Approved,
    Disapproved,
    Assigned,
    InProgress,
    Closed,
    JudgmentRecorded,
    /// A status string this client does not know. Kept verbatim.
    Other(String),
}

/// Lowercase, single-spaced form with `_` and `-` treated as spaces.
pub(crate) fn normalize_status(s: &str) -> String {
    s.replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl CaseStatus {
    /// Every known status in lifecycle order.
    pub const LIFECYCLE: [CaseStatus; 9] = [
        CaseStatus::Filed,
        CaseStatus::Registered,
        CaseStatus::Submitted,
        CaseStatus::Approved,
        CaseStatus::Disapproved,
        CaseStatus::Assigned,
        CaseStatus::InProgress,
        CaseStatus::Closed,
        CaseStatus::JudgmentRecorded,
    ];

    pub fn parse(s: &str) -> Self {
        match normalize_status(s).as_str() {
            "filed" => CaseStatus::Filed,
            "registered" => CaseStatus::Registered,
            "submitted" => CaseStatus::Submitted,
            "approved" => CaseStatus::Approved,
            "disapproved" | "rejected" => CaseStatus::Disapproved,
            "assigned" => CaseStatus::Assigned,
            "in progress" => CaseStatus::InProgress,
            "closed" => CaseStatus::Closed,
            "judgment recorded" | "judgement recorded" => CaseStatus::JudgmentRecorded,
            _ => CaseStatus::Other(s.trim().to_string()),
        }
    }

    /// Display label, also the value sent back to the backend.
    pub fn label(&self) -> &str {
        match self {
            CaseStatus::Filed => "Filed",
            CaseStatus::Registered => "Registered",
            CaseStatus::Submitted => "Submitted",
            CaseStatus::Approved => "Approved",
            CaseStatus::Disapproved => "Disapproved",
            CaseStatus::Assigned => "Assigned",
            CaseStatus::InProgress => "In Progress",
            CaseStatus::Closed => "Closed",
            CaseStatus::JudgmentRecorded => "Judgment Recorded",
            CaseStatus::Other(s) => s,
        }
    }

    /// Nominal successor in the lifecycle. `Approved` leads to `Assigned`;
    /// `Disapproved` and `JudgmentRecorded` are terminal.
    pub fn next(&self) -> Option<CaseStatus> {
        match self {
            CaseStatus::Filed => Some(CaseStatus::Registered),
            CaseStatus::Registered => Some(CaseStatus::Submitted),
            CaseStatus::Submitted => Some(CaseStatus::Approved),
            CaseStatus::Approved => Some(CaseStatus::Assigned),
            CaseStatus::Assigned => Some(CaseStatus::InProgress),
            CaseStatus::InProgress => Some(CaseStatus::Closed),
            CaseStatus::Closed => Some(CaseStatus::JudgmentRecorded),
            CaseStatus::Disapproved | CaseStatus::JudgmentRecorded | CaseStatus::Other(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, CaseStatus::Disapproved | CaseStatus::JudgmentRecorded)
    }
}

impl From<String> for CaseStatus {
    fn from(s: String) -> Self {
        CaseStatus::parse(&s)
    }
}

impl From<CaseStatus> for String {
    fn from(status: CaseStatus) -> Self {
        status.label().to_string()
    }
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── Parties ─────────────────────────────────────────────────────────

/// A plaintiff or defendant. Older records carry only a name string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(from = "PartyRepr")]
pub struct Party {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PartyRepr {
    Name(String),
    Full {
        #[serde(default)]
        name: String,
        #[serde(default)]
        address: String,
        #[serde(default)]
        phone: String,
        #[serde(default)]
        email: String,
    },
}

impl From<PartyRepr> for Party {
    fn from(repr: PartyRepr) -> Self {
        match repr {
            PartyRepr::Name(name) => Party {
                name,
                ..Default::default()
            },
            PartyRepr::Full {
                name,
                address,
                phone,
                email,
            } => Party {
                name,
                address,
                phone,
                email,
            },
        }
    }
}

impl Party {
    pub fn named(name: impl Into<String>) -> Self {
        Party {
            name: name.into(),
            ..Default::default()
        }
    }
}

// ── Case record ─────────────────────────────────────────────────────

/// A filed legal matter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub case_number: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub plaintiff: Option<Party>,
    #[serde(default)]
    pub defendant: Option<Party>,
    /// Free-text parties line used by the clerk filing form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parties_involved: Option<String>,
    #[serde(default)]
    pub status: CaseStatus,
    #[serde(default)]
    pub filed_by: Option<UserRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filed_by_name: Option<String>,
    #[serde(default)]
    pub assigned_judge: Option<UserRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filing_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_notes: Option<String>,
}

impl Case {
    pub fn judge_name(&self) -> &str {
        self.assigned_judge
            .as_ref()
            .map(UserRef::display_name)
            .unwrap_or("")
    }

    pub fn plaintiff_name(&self) -> &str {
        self.plaintiff.as_ref().map(|p| p.name.as_str()).unwrap_or("")
    }

    pub fn defendant_name(&self) -> &str {
        self.defendant.as_ref().map(|p| p.name.as_str()).unwrap_or("")
    }

    /// "Plaintiff v. Defendant", falling back to the free-text parties line.
    pub fn parties_line(&self) -> String {
        match (self.plaintiff_name(), self.defendant_name()) {
            ("", "") => self.parties_involved.clone().unwrap_or_default(),
            (p, "") => p.to_string(),
            ("", d) => d.to_string(),
            (p, d) => format!("{p} v. {d}"),
        }
    }

    /// Fields the clerk registration list searches on.
    pub fn registry_fields(&self) -> Vec<&str> {
        vec![self.case_number.as_str(), self.title.as_str()]
    }
}

impl Searchable for Case {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.judge_name(),
            self.plaintiff_name(),
            self.defendant_name(),
        ]
    }
}

// ── Requests ────────────────────────────────────────────────────────

/// Body for `POST /api/cases` and `PUT /api/cases/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CaseRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub case_number: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Title is required"))
    )]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plaintiff: Option<Party>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defendant: Option<Party>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parties_involved: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CaseStatus>,
    /// Judge id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_judge: Option<String>,
    /// Filing clerk id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filed_by_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_notes: Option<String>,
}

impl From<&Case> for CaseRequest {
    fn from(case: &Case) -> Self {
        CaseRequest {
            case_number: case.case_number.clone(),
            title: case.title.clone(),
            description: case.description.clone(),
            plaintiff: case.plaintiff.clone(),
            defendant: case.defendant.clone(),
            parties_involved: case.parties_involved.clone(),
            status: Some(case.status.clone()),
            assigned_judge: case.assigned_judge.as_ref().map(|j| j.id.clone()),
            filed_by: case.filed_by.as_ref().map(|u| u.id.clone()),
            filed_by_name: case.filed_by_name.clone(),
            document: case.document.clone(),
            registration_notes: case.registration_notes.clone(),
        }
    }
}

/// Body for `PUT /api/cases/:id/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCaseRequest {
    pub clerk_id: String,
}

/// Body for the registrar approve / disapprove endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrarDecisionRequest {
    pub registrar_name: String,
}

/// Body for `POST /api/cases/endorse/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssignJudgeRequest {
    pub judge_id: String,
    pub registrar_name: String,
}

// ── Aggregates ──────────────────────────────────────────────────────

/// `{count}` responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct CountResponse {
    #[serde(default)]
    pub count: u64,
}

/// `GET /api/cases/closed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClosedCountResponse {
    #[serde(default)]
    pub closed_count: u64,
}

/// `GET /api/cases/summary?clerkId=`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ClerkSummary {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub approved: u64,
    #[serde(default)]
    pub rejected: u64,
}

/// Case counts keyed by status, as returned by the status-stats endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct StatusStats(pub HashMap<String, u64>);

impl StatusStats {
    /// Count for a status, matching keys loosely (`"In Progress"`,
    /// `"in_progress"` and `"inProgress"` all count).
    pub fn count(&self, status: &CaseStatus) -> u64 {
        self.0
            .iter()
            .filter(|(key, _)| &CaseStatus::parse(&split_camel(key)) == status)
            .map(|(_, n)| *n)
            .sum()
    }

    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Known statuses with a non-zero count, in lifecycle order.
    pub fn in_lifecycle_order(&self) -> Vec<(CaseStatus, u64)> {
        CaseStatus::LIFECYCLE
            .iter()
            .map(|s| (s.clone(), self.count(s)))
            .filter(|(_, n)| *n > 0)
            .collect()
    }
}

fn split_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
