use client::CaseQuery;
use dioxus::prelude::*;
use shared_types::{filter_by, Case, CaseAction, CaseStatus, UserRole};
use shared_ui::{
    use_toast, Button, DataTable, DataTableActions, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, Input, PageActions,
    PageHeader, PageTitle, Pagination, SearchBar, SkeletonRows, ToastOptions,
};

use crate::auth::{use_api, use_auth};
use crate::format_helpers::{format_date, MISSING};
use crate::routes::shared::{
    action_done_message, apply_transition, page_of, range_summary, CaseActionButtons,
    CaseStatusBadge, ConfirmDialog, LoadError,
};
use crate::routes::Route;

/// The clerk's registered cases, ready to be submitted, corrected or
/// withdrawn.
#[component]
pub fn CaseRegistration() -> Element {
    let api = use_api();
    let auth = use_auth();
    let toast = use_toast();

    let mut cases = use_resource(move || async move {
        api().query_cases(&CaseQuery::clerk(auth.user_id())).await
    });
    let mut query = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut busy = use_signal(|| Option::<String>::None);
    let mut pending_delete = use_signal(|| Option::<Case>::None);

    let mut run = move |case: Case, action: CaseAction| {
        let actor = auth.user();
        busy.set(Some(case.id.clone()));
        spawn(async move {
            match apply_transition(&api(), action, &case.id, &actor).await {
                Ok(()) => {
                    toast.success(action_done_message(action).to_string(), ToastOptions::new());
                    cases.restart();
                }
                Err(e) => {
                    tracing::warn!(case = %case.id, error = %e, "registration action failed");
                    toast.error(e.friendly_message(), ToastOptions::new());
                }
            }
            busy.set(None);
        });
    };

    let on_action = move |(case, action): (Case, CaseAction)| match action {
        CaseAction::Edit => {
            navigator().push(Route::EditCase { id: case.id });
        }
        CaseAction::Delete => pending_delete.set(Some(case)),
        _ => run(case, action),
    };

    let delete_prompt = pending_delete()
        .map(|c| format!("Delete \"{}\"? This cannot be undone.", c.title))
        .unwrap_or_default();

    rsx! {
        PageHeader {
            PageTitle { "Case Registration" }
            PageActions {
                Button {
                    onclick: move |_: MouseEvent| {
                        navigator().push(Route::CaseFormPage {});
                    },
                    "File a Case"
                }
            }
        }

        match &*cases.read() {
            Some(Ok(all)) => {
                let registered: Vec<Case> = all
                    .iter()
                    .filter(|c| c.status == CaseStatus::Registered)
                    .cloned()
                    .collect();
                let filtered = filter_by(&registered, &query(), Case::registry_fields);
                let current = page_of(&filtered, page());
                let working = busy();
                rsx! {
                    SearchBar { summary: range_summary(&current.meta),
                        Input {
                            value: query(),
                            placeholder: "Search by case number or title...",
                            on_input: move |e: FormEvent| {
                                query.set(e.value());
                                page.set(1);
                            },
                        }
                    }

                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Case Number" }
                            DataTableColumn { "Title" }
                            DataTableColumn { "Filed" }
                            DataTableColumn { "Status" }
                            DataTableColumn { "Actions" }
                        }
                        DataTableBody {
                            if current.data.is_empty() {
                                DataTableEmpty { columns: 5, message: "No registered cases." }
                            }
                            for case in current.data.iter().cloned() {
                                RegisteredRow {
                                    key: "{case.id}",
                                    busy: working.as_deref() == Some(case.id.as_str()),
                                    case,
                                    on_action,
                                }
                            }
                        }
                    }

                    Pagination { page, total_pages: current.meta.total_pages }
                }
            }
            Some(Err(e)) => rsx! {
                LoadError { error: e.clone(), on_retry: move |_| cases.restart() }
            },
            None => rsx! {
                SkeletonRows { rows: 6 }
            },
        }

        ConfirmDialog {
            open: pending_delete.read().is_some(),
            title: "Delete case?",
            description: delete_prompt,
            on_confirm: move |_| {
                if let Some(case) = pending_delete() {
                    pending_delete.set(None);
                    run(case, CaseAction::Delete);
                }
            },
            on_cancel: move |_| pending_delete.set(None),
        }
    }
}

#[component]
fn RegisteredRow(case: Case, busy: bool, on_action: EventHandler<(Case, CaseAction)>) -> Element {
    let number = if case.case_number.is_empty() {
        MISSING.to_string()
    } else {
        case.case_number.clone()
    };
    let for_action = case.clone();

    rsx! {
        DataTableRow {
            DataTableCell { span { class: "cell-strong", "{number}" } }
            DataTableCell { "{case.title}" }
            DataTableCell { "{format_date(case.filing_date.as_ref())}" }
            DataTableCell { CaseStatusBadge { status: case.status.clone() } }
            DataTableActions {
                CaseActionButtons {
                    case: case.clone(),
                    role: UserRole::Clerk,
                    busy,
                    on_action: move |action: CaseAction| on_action.call((for_action.clone(), action)),
                }
            }
        }
    }
}
