use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::case::{normalize_status, CaseStatus};
use crate::common::Searchable;
use crate::models::UserRef;

/// Hearing slot status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum HearingStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Postponed,
    Cancelled,
    Closed,
    Other(String),
}

impl HearingStatus {
    pub const SELECTABLE: [HearingStatus; 5] = [
        HearingStatus::Scheduled,
        HearingStatus::InProgress,
        HearingStatus::Completed,
        HearingStatus::Postponed,
        HearingStatus::Cancelled,
    ];

    pub fn parse(s: &str) -> Self {
        match normalize_status(s).as_str() {
            "scheduled" => HearingStatus::Scheduled,
            "in progress" => HearingStatus::InProgress,
            "completed" => HearingStatus::Completed,
            "postponed" => HearingStatus::Postponed,
            "cancelled" | "canceled" => HearingStatus::Cancelled,
            "closed" => HearingStatus::Closed,
            _ => HearingStatus::Other(s.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            HearingStatus::Scheduled => "Scheduled",
            HearingStatus::InProgress => "In Progress",
            HearingStatus::Completed => "Completed",
            HearingStatus::Postponed => "Postponed",
            HearingStatus::Cancelled => "Cancelled",
            HearingStatus::Closed => "Closed",
            HearingStatus::Other(s) => s,
        }
    }

    /// Whether the case behind this slot is ready for a judgment.
    pub fn awaits_judgment(&self) -> bool {
        matches!(self, HearingStatus::Closed | HearingStatus::Completed)
    }
}

impl From<String> for HearingStatus {
    fn from(s: String) -> Self {
        HearingStatus::parse(&s)
    }
}

impl From<HearingStatus> for String {
    fn from(status: HearingStatus) -> Self {
        status.label().to_string()
    }
}

/// A case reference that may arrive as a bare id or a populated summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(from = "CaseRefRepr", rename_all = "camelCase")]
pub struct CaseRef {
    pub id: String,
    pub title: String,
    pub case_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CaseStatus>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CaseRefRepr {
    Id(String),
    Populated {
        #[serde(alias = "_id", default)]
        id: String,
        #[serde(default)]
        title: String,
        #[serde(default, rename = "caseNumber")]
        case_number: String,
        #[serde(default)]
        status: Option<CaseStatus>,
    },
}

impl From<CaseRefRepr> for CaseRef {
    fn from(repr: CaseRefRepr) -> Self {
        match repr {
            CaseRefRepr::Id(id) => CaseRef {
                id,
                ..Default::default()
            },
            CaseRefRepr::Populated {
                id,
                title,
                case_number,
                status,
            } => CaseRef {
                id,
                title,
                case_number,
                status,
            },
        }
    }
}

/// A hearing slot for a case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub case_id: Option<CaseRef>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub status: HearingStatus,
    #[serde(default)]
    pub assigned_judge: Option<UserRef>,
    /// Percentage reported by the progress endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

impl Schedule {
    pub fn case_title(&self) -> &str {
        self.case_id
            .as_ref()
            .map(|c| c.title.as_str())
            .filter(|t| !t.is_empty())
            .unwrap_or("Untitled Case")
    }

    pub fn case_number(&self) -> &str {
        self.case_id
            .as_ref()
            .map(|c| c.case_number.as_str())
            .unwrap_or("")
    }

    /// Id of the underlying case, used by the place-judgment link.
    pub fn case_key(&self) -> &str {
        self.case_id.as_ref().map(|c| c.id.as_str()).unwrap_or(self.id.as_str())
    }

    pub fn start_day(&self) -> Option<NaiveDate> {
        parse_day(&self.start_date)
    }

    pub fn end_day(&self) -> Option<NaiveDate> {
        parse_day(&self.end_date)
    }

    pub fn progress_percent(&self) -> u8 {
        self.progress.unwrap_or(0.0).clamp(0.0, 100.0).round() as u8
    }
}

/// Accepts `2024-05-01` as well as full ISO timestamps.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    let day = value.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

impl Searchable for Schedule {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.case_title(),
            self.case_number(),
            self.status.label(),
        ]
    }
}

/// Body for `POST /api/schedules` and `PUT /api/schedules/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct ScheduleRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Select a case"))
    )]
    pub case_id: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Start date is required"))
    )]
    pub start_date: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Start time is required"))
    )]
    pub start_time: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "End date is required"))
    )]
    pub end_date: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "End time is required"))
    )]
    pub end_time: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Room is required"))
    )]
    pub room: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub assigned_judge: String,
    pub status: HearingStatus,
}

impl From<&Schedule> for ScheduleRequest {
    fn from(s: &Schedule) -> Self {
        ScheduleRequest {
            case_id: s.case_id.as_ref().map(|c| c.id.clone()).unwrap_or_default(),
            start_date: s.start_date.get(..10).unwrap_or(s.start_date.as_str()).to_string(),
            start_time: s.start_time.clone(),
            end_date: s.end_date.get(..10).unwrap_or(s.end_date.as_str()).to_string(),
            end_time: s.end_time.clone(),
            room: s.room.clone(),
            assigned_judge: s
                .assigned_judge
                .as_ref()
                .map(|j| j.id.clone())
                .unwrap_or_default(),
            status: s.status.clone(),
        }
    }
}
