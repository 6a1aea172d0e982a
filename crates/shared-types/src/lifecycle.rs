//! Which case actions a role is offered at each lifecycle status.
//!
//! This only drives button visibility. The backend decides whether a
//! transition is allowed; the client calls the endpoint and re-fetches.

use serde::{Deserialize, Serialize};

use crate::case::CaseStatus;
use crate::models::UserRole;

/// A button a case row can show.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CaseAction {
    Register,
    SubmitToRegistrar,
    Approve,
    Disapprove,
    AssignJudge,
    ScheduleHearing,
    RecordJudgment,
    Edit,
    Delete,
}

impl CaseAction {
    pub fn label(&self) -> &'static str {
        match self {
            CaseAction::Register => "Register",
            CaseAction::SubmitToRegistrar => "Submit to Registrar",
            CaseAction::Approve => "Approve",
            CaseAction::Disapprove => "Disapprove",
            CaseAction::AssignJudge => "Assign Judge",
            CaseAction::ScheduleHearing => "Schedule Hearing",
            CaseAction::RecordJudgment => "Place Judgment",
            CaseAction::Edit => "Edit",
            CaseAction::Delete => "Delete",
        }
    }

    /// Destructive actions get a confirmation prompt and a red button.
    pub fn is_destructive(&self) -> bool {
        matches!(self, CaseAction::Delete | CaseAction::Disapprove)
    }

    /// Status the case is expected to show once the backend accepts the action.
    pub fn expected_status(&self) -> Option<CaseStatus> {
        match self {
            CaseAction::Register => Some(CaseStatus::Registered),
            CaseAction::SubmitToRegistrar => Some(CaseStatus::Submitted),
            CaseAction::Approve => Some(CaseStatus::Approved),
            CaseAction::Disapprove => Some(CaseStatus::Disapproved),
            CaseAction::AssignJudge => Some(CaseStatus::Assigned),
            CaseAction::RecordJudgment => Some(CaseStatus::JudgmentRecorded),
            CaseAction::ScheduleHearing | CaseAction::Edit | CaseAction::Delete => None,
        }
    }
}

/// Actions `role` may take on a case currently at `status`.
pub fn available_actions(status: &CaseStatus, role: UserRole) -> Vec<CaseAction> {
    use CaseAction::*;
    match (role, status) {
        (UserRole::Admin, _) => vec![Edit, Delete],

        (UserRole::Clerk, CaseStatus::Filed) => vec![Register, Edit, Delete],
        (UserRole::Clerk, CaseStatus::Registered) => vec![SubmitToRegistrar, Edit, Delete],

        (UserRole::Registrar, CaseStatus::Submitted) => vec![Approve, Disapprove],
        (UserRole::Registrar, CaseStatus::Approved) => vec![AssignJudge],

        (UserRole::Judge, CaseStatus::Assigned) => vec![ScheduleHearing],
        (UserRole::Judge, CaseStatus::InProgress) => vec![ScheduleHearing, RecordJudgment],
        (UserRole::Judge, CaseStatus::Closed) => vec![RecordJudgment],

        _ => Vec::new(),
    }
}

/// Shorthand for `available_actions(..).contains(&action)`.
pub fn can(role: UserRole, status: &CaseStatus, action: CaseAction) -> bool {
    available_actions(status, role).contains(&action)
}
