use dioxus::prelude::*;
use shared_types::{filter_by_query, Case, CaseAction, UserRole};
use shared_ui::{
    use_toast, Button, DataTable, DataTableActions, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, Input, PageActions,
    PageHeader, PageTitle, Pagination, SearchBar, SkeletonRows, ToastOptions,
};

use crate::auth::use_api;
use crate::format_helpers::{format_date, MISSING};
use crate::routes::case_form::CaseFormSheet;
use crate::routes::shared::{
    page_of, range_summary, CaseActionButtons, CaseStatusBadge, ConfirmDialog, LoadError,
};

#[component]
pub fn ManageCases() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut cases = use_resource(move || async move { api().list_cases().await });
    let mut query = use_signal(String::new);
    let mut page = use_signal(|| 1usize);

    let mut show_sheet = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Case>::None);
    let mut pending_delete = use_signal(|| Option::<Case>::None);

    let open_create = move |_: MouseEvent| {
        editing.set(None);
        show_sheet.set(true);
    };

    let on_action = move |(case, action): (Case, CaseAction)| match action {
        CaseAction::Edit => {
            editing.set(Some(case));
            show_sheet.set(true);
        }
        CaseAction::Delete => pending_delete.set(Some(case)),
        other => tracing::debug!(?other, "action not offered on this screen"),
    };

    let confirm_delete = move |_: ()| {
        let Some(case) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        spawn(async move {
            match api().delete_case(&case.id).await {
                Ok(()) => {
                    toast.success("Case deleted".to_string(), ToastOptions::new());
                    cases.restart();
                }
                Err(e) => {
                    tracing::warn!(case = %case.id, error = %e, "delete case failed");
                    toast.error(e.friendly_message(), ToastOptions::new());
                }
            }
        });
    };

    let delete_prompt = pending_delete()
        .map(|c| format!("\"{}\" and its record will be removed permanently.", c.title))
        .unwrap_or_default();

    rsx! {
        PageHeader {
            PageTitle { "Manage Cases" }
            PageActions {
                Button { onclick: open_create, "Add Case" }
            }
        }

        match &*cases.read() {
            Some(Ok(all)) => {
                let filtered = filter_by_query(all, &query());
                let current = page_of(&filtered, page());
                rsx! {
                    SearchBar { summary: range_summary(&current.meta),
                        Input {
                            value: query(),
                            placeholder: "Search by title or judge...",
                            on_input: move |e: FormEvent| {
                                query.set(e.value());
                                page.set(1);
                            },
                        }
                    }

                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Case" }
                            DataTableColumn { "Parties" }
                            DataTableColumn { "Judge" }
                            DataTableColumn { "Status" }
                            DataTableColumn { "Filed" }
                            DataTableColumn { "Actions" }
                        }
                        DataTableBody {
                            if current.data.is_empty() {
                                DataTableEmpty { columns: 6, message: "No cases found." }
                            }
                            for case in current.data.iter().cloned() {
                                CaseRow { key: "{case.id}", case, on_action }
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

        CaseFormSheet {
            open: show_sheet(),
            editing: editing(),
            admin: true,
            on_saved: move |_| cases.restart(),
            on_close: move |_| show_sheet.set(false),
        }

        ConfirmDialog {
            open: pending_delete.read().is_some(),
            title: "Delete case?",
            description: delete_prompt,
            on_confirm: confirm_delete,
            on_cancel: move |_| pending_delete.set(None),
        }
    }
}

#[component]
fn CaseRow(case: Case, on_action: EventHandler<(Case, CaseAction)>) -> Element {
    let judge = match case.judge_name() {
        "" => MISSING,
        name => name,
    }
    .to_string();
    let for_action = case.clone();

    rsx! {
        DataTableRow {
            DataTableCell {
                div { class: "cell-strong", "{case.title}" }
                div { class: "cell-sub", "{case.case_number}" }
            }
            DataTableCell { "{case.parties_line()}" }
            DataTableCell { "{judge}" }
            DataTableCell { CaseStatusBadge { status: case.status.clone() } }
            DataTableCell { "{format_date(case.filing_date.as_ref())}" }
            DataTableActions {
                CaseActionButtons {
                    case: case.clone(),
                    role: UserRole::Admin,
                    on_action: move |action: CaseAction| on_action.call((for_action.clone(), action)),
                }
            }
        }
    }
}
