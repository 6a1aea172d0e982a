use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{
    available_actions, AppError, Case, CaseAction, CaseStatus, HearingStatus, Paginated,
    PaginationMeta, User, UserRole, PAGE_SIZE,
};
use shared_ui::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Button,
    ButtonVariant, Card, CardContent, DataTableCell,
};

use crate::format_helpers::format_date;

/// Map a case status to its badge tone.
pub fn case_status_variant(status: &CaseStatus) -> BadgeVariant {
    match status {
        CaseStatus::Filed => BadgeVariant::Secondary,
        CaseStatus::Registered | CaseStatus::InProgress => BadgeVariant::Info,
        CaseStatus::Submitted => BadgeVariant::Warning,
        CaseStatus::Approved | CaseStatus::JudgmentRecorded => BadgeVariant::Success,
        CaseStatus::Disapproved => BadgeVariant::Destructive,
        CaseStatus::Assigned => BadgeVariant::Primary,
        CaseStatus::Closed | CaseStatus::Other(_) => BadgeVariant::Outline,
    }
}

pub fn hearing_status_variant(status: &HearingStatus) -> BadgeVariant {
    match status {
        HearingStatus::Scheduled => BadgeVariant::Info,
        HearingStatus::InProgress => BadgeVariant::Primary,
        HearingStatus::Completed | HearingStatus::Closed => BadgeVariant::Success,
        HearingStatus::Postponed => BadgeVariant::Warning,
        HearingStatus::Cancelled => BadgeVariant::Destructive,
        HearingStatus::Other(_) => BadgeVariant::Outline,
    }
}

pub fn role_variant(role: UserRole) -> BadgeVariant {
    match role {
        UserRole::Admin => BadgeVariant::Destructive,
        UserRole::Clerk => BadgeVariant::Primary,
        UserRole::Registrar => BadgeVariant::Warning,
        UserRole::Judge => BadgeVariant::Success,
        UserRole::Unknown => BadgeVariant::Outline,
    }
}

#[component]
pub fn CaseStatusBadge(status: CaseStatus) -> Element {
    rsx! {
        Badge { variant: case_status_variant(&status), "{status.label()}" }
    }
}

#[component]
pub fn HearingStatusBadge(status: HearingStatus) -> Element {
    rsx! {
        Badge { variant: hearing_status_variant(&status), "{status.label()}" }
    }
}

#[component]
pub fn RoleBadge(role: UserRole) -> Element {
    rsx! {
        Badge { variant: role_variant(role), "{role.label()}" }
    }
}

/// Case, parties, filing date and status cells shared by the case tables.
#[component]
pub fn CaseCells(case: Case) -> Element {
    rsx! {
        DataTableCell {
            div { class: "cell-strong", "{case.title}" }
            div { class: "cell-sub", "{case.case_number}" }
        }
        DataTableCell { "{case.parties_line()}" }
        DataTableCell { "{format_date(case.filing_date.as_ref())}" }
        DataTableCell { CaseStatusBadge { status: case.status.clone() } }
    }
}

/// One page of an already-filtered list.
pub fn page_of<T: Clone>(rows: &[T], page: usize) -> Paginated<T> {
    Paginated::from_items(rows, page, PAGE_SIZE)
}

/// "Showing 7-12 of 13", shown next to the search box.
pub fn range_summary(meta: &PaginationMeta) -> String {
    if meta.total == 0 {
        return "No results".to_string();
    }
    let first = meta.offset() + 1;
    let last = (meta.offset() + meta.limit).min(meta.total);
    format!("Showing {first}-{last} of {}", meta.total)
}

/// Card shown in place of a table when its fetch failed.
#[component]
pub fn LoadError(error: AppError, on_retry: EventHandler<()>) -> Element {
    rsx! {
        Card { class: "load-error",
            CardContent {
                p { class: "load-error-message", "{error.friendly_message()}" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}

/// Row buttons for the lifecycle actions `role` is offered at the case's
/// current status. Screens list actions they render themselves in `skip`.
#[component]
pub fn CaseActionButtons(
    case: Case,
    role: UserRole,
    #[props(default)] skip: Vec<CaseAction>,
    #[props(default = false)] busy: bool,
    on_action: EventHandler<CaseAction>,
) -> Element {
    let actions: Vec<CaseAction> = available_actions(&case.status, role)
        .into_iter()
        .filter(|a| !skip.contains(a))
        .collect();

    rsx! {
        for action in actions {
            Button {
                variant: action_variant(action),
                disabled: busy,
                onclick: move |_| on_action.call(action),
                "{action.label()}"
            }
        }
    }
}

fn action_variant(action: CaseAction) -> ButtonVariant {
    match action {
        CaseAction::Approve => ButtonVariant::Success,
        CaseAction::Edit => ButtonVariant::Outline,
        a if a.is_destructive() => ButtonVariant::Destructive,
        _ => ButtonVariant::Primary,
    }
}

/// Send a lifecycle action that needs nothing beyond the case and the
/// acting user. Judge assignment, hearings and judgments have their own
/// forms.
pub async fn apply_transition(
    api: &ApiClient,
    action: CaseAction,
    case_id: &str,
    actor: &User,
) -> Result<(), AppError> {
    tracing::info!(case = case_id, action = action.label(), "case action");
    match action {
        CaseAction::Register => api.register_case(case_id, &actor.id).await,
        CaseAction::SubmitToRegistrar => api.submit_to_registrar(case_id).await,
        CaseAction::Approve => api.approve_case(case_id, &actor.name).await,
        CaseAction::Disapprove => api.disapprove_case(case_id, &actor.name).await,
        CaseAction::Delete => api.delete_case(case_id).await,
        other => Err(AppError::bad_request(format!(
            "{} needs more details",
            other.label()
        ))),
    }
}

/// Toast text after an action succeeded.
pub fn action_done_message(action: CaseAction) -> &'static str {
    match action {
        CaseAction::Register => "Case registered",
        CaseAction::SubmitToRegistrar => "Case submitted to the registrar",
        CaseAction::Approve => "Case approved",
        CaseAction::Disapprove => "Case disapproved",
        CaseAction::AssignJudge => "Judge assigned",
        CaseAction::ScheduleHearing => "Hearing scheduled",
        CaseAction::RecordJudgment => "Judgment recorded",
        CaseAction::Edit => "Case updated",
        CaseAction::Delete => "Case deleted",
    }
}

/// Yes/no prompt in front of a destructive action.
#[component]
pub fn ConfirmDialog(
    open: bool,
    title: String,
    description: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        AlertDialogRoot {
            open,
            on_open_change: move |open: bool| {
                if !open {
                    on_cancel.call(());
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "{title}" }
                AlertDialogDescription { "{description}" }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction {
                        on_click: move |_: MouseEvent| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
