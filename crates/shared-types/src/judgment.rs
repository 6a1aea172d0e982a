use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schedule::CaseRef;

/// A recorded judgment on a case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Judgment {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub case_id: Option<CaseRef>,
    #[serde(default)]
    pub judge_id: String,
    #[serde(default, alias = "outcome")]
    pub verdict: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judgment_date: Option<DateTime<Utc>>,
}

impl Judgment {
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
}

/// Body for `POST /api/judgments`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct JudgmentRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Case is required"))
    )]
    pub case_id: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Judge is required"))
    )]
    pub judge_id: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Verdict is required"))
    )]
    pub verdict: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Summary is required"))
    )]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judgment_date: Option<String>,
}
