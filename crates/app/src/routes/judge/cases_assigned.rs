use dioxus::prelude::*;
use shared_types::{filter_by_query, Case, CaseAction, UserRole};
use shared_ui::{
    DataTable, DataTableActions, DataTableBody, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow, Input, PageHeader, PageSubtitle, PageTitle, Pagination, SearchBar, SkeletonRows,
};

use crate::auth::{use_api, use_auth};
use crate::routes::shared::{page_of, range_summary, CaseActionButtons, CaseCells, LoadError};
use crate::routes::Route;

/// Page a judge's case action opens. Both actions need a form of their own.
fn action_route(case: &Case, action: CaseAction) -> Option<Route> {
    match action {
        CaseAction::ScheduleHearing => Some(Route::ScheduleNewHearing {}),
        CaseAction::RecordJudgment => Some(Route::PlaceJudgment {
            case_id: case.id.clone(),
        }),
        _ => None,
    }
}

#[component]
pub fn CasesAssigned() -> Element {
    let api = use_api();
    let auth = use_auth();

    let mut cases = use_resource(move || async move { api().assigned_cases(&auth.user_id()).await });
    let mut query = use_signal(String::new);
    let mut page = use_signal(|| 1usize);

    let on_action = move |(case, action): (Case, CaseAction)| {
        if let Some(route) = action_route(&case, action) {
            navigator().push(route);
        }
    };

    rsx! {
        PageHeader {
            div {
                PageTitle { "Cases Assigned" }
                PageSubtitle { "Cases endorsed to you by the registrar." }
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
                            placeholder: "Search by title or party...",
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
                            DataTableColumn { "Filed" }
                            DataTableColumn { "Status" }
                            DataTableColumn { "Actions" }
                        }
                        DataTableBody {
                            if current.data.is_empty() {
                                DataTableEmpty { columns: 5, message: "No cases assigned to you." }
                            }
                            for case in current.data.iter().cloned() {
                                AssignedRow { key: "{case.id}", case, on_action }
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
    }
}

#[component]
fn AssignedRow(case: Case, on_action: EventHandler<(Case, CaseAction)>) -> Element {
    let for_action = case.clone();

    rsx! {
        DataTableRow {
            CaseCells { case: case.clone() }
            DataTableActions {
                CaseActionButtons {
                    case: case.clone(),
                    role: UserRole::Judge,
                    on_action: move |action: CaseAction| on_action.call((for_action.clone(), action)),
                }
            }
        }
    }
}
