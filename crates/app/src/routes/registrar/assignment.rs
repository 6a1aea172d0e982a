use dioxus::prelude::*;
use shared_types::{filter_by_query, Case, User};
use shared_ui::{
    use_toast, Button, DataTable, DataTableActions, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, FormSelect, Input, PageHeader,
    PageSubtitle, PageTitle, Pagination, SearchBar, SkeletonRows, ToastOptions,
};
use std::collections::HashMap;

use crate::auth::{use_api, use_auth};
use crate::routes::shared::{page_of, range_summary, CaseCells, LoadError};

/// Judge chosen for `case` in the row picker, falling back to whoever the
/// case already names.
fn picked_judge(picks: &HashMap<String, String>, case: &Case) -> String {
    picks
        .get(&case.id)
        .cloned()
        .or_else(|| case.assigned_judge.as_ref().map(|j| j.id.clone()))
        .unwrap_or_default()
}

/// Approved cases waiting for a judge. Each row carries its own picker.
#[component]
pub fn ApprovedCases() -> Element {
    let api = use_api();
    let auth = use_auth();
    let toast = use_toast();

    let mut data = use_resource(move || async move {
        let client = api();
        futures::try_join!(client.approved_cases(), client.list_judges())
    });
    let mut query = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut picks = use_signal(HashMap::<String, String>::new);
    let mut busy = use_signal(|| Option::<String>::None);

    let on_assign = move |case: Case| {
        let judge_id = picked_judge(&picks.read(), &case);
        let registrar = auth.user();
        busy.set(Some(case.id.clone()));
        spawn(async move {
            match api().assign_judge(&case.id, &judge_id, &registrar.name).await {
                Ok(()) => {
                    tracing::info!(case = %case.id, judge = %judge_id, "judge assigned");
                    toast.success("Judge assigned".to_string(), ToastOptions::new());
                    picks.with_mut(|p| p.remove(&case.id));
                    data.restart();
                }
                Err(e) => toast.error(e.friendly_message(), ToastOptions::new()),
            }
            busy.set(None);
        });
    };

    rsx! {
        PageHeader {
            div {
                PageTitle { "Approved Cases" }
                PageSubtitle { "Pick a judge for each approved case and endorse it." }
            }
        }

        match &*data.read() {
            Some(Ok((cases, judges))) => {
                let filtered = filter_by_query(cases, &query());
                let current = page_of(&filtered, page());
                let working = busy();
                let picked = picks.read().clone();
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
                            DataTableColumn { "Judge" }
                            DataTableColumn { "Actions" }
                        }
                        DataTableBody {
                            if current.data.is_empty() {
                                DataTableEmpty { columns: 6, message: "No approved cases waiting for a judge." }
                            }
                            for case in current.data.iter().cloned() {
                                AssignmentRow {
                                    key: "{case.id}",
                                    selected: picked_judge(&picked, &case),
                                    judges: judges.clone(),
                                    busy: working.as_deref() == Some(case.id.as_str()),
                                    case,
                                    on_pick: move |(case_id, judge_id): (String, String)| {
                                        picks.with_mut(|p| p.insert(case_id, judge_id));
                                    },
                                    on_assign,
                                }
                            }
                        }
                    }

                    Pagination { page, total_pages: current.meta.total_pages }
                }
            }
            Some(Err(e)) => rsx! {
                LoadError { error: e.clone(), on_retry: move |_| data.restart() }
            },
            None => rsx! {
                SkeletonRows { rows: 6 }
            },
        }
    }
}

#[component]
fn AssignmentRow(
    case: Case,
    judges: Vec<User>,
    selected: String,
    busy: bool,
    on_pick: EventHandler<(String, String)>,
    on_assign: EventHandler<Case>,
) -> Element {
    let case_id = case.id.clone();
    let for_assign = case.clone();
    let unpicked = selected.is_empty();

    rsx! {
        DataTableRow {
            CaseCells { case: case.clone() }
            DataTableCell {
                FormSelect {
                    value: selected.clone(),
                    disabled: busy,
                    onchange: move |e: Event<FormData>| on_pick.call((case_id.clone(), e.value())),
                    option { value: "", "Select a judge" }
                    for judge in judges {
                        option { value: "{judge.id}", "{judge.name}" }
                    }
                }
            }
            DataTableActions {
                Button {
                    disabled: busy || unpicked,
                    onclick: move |_: MouseEvent| on_assign.call(for_assign.clone()),
                    "Assign Judge"
                }
            }
        }
    }
}
