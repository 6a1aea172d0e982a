use client::{ApiClient, CaseQuery};
use dioxus::prelude::*;
use shared_types::{filter_by_query, AppError, Case, CaseAction, CaseStatus, UserRole};
use shared_ui::{
    use_toast, DataTable, DataTableActions, DataTableBody, DataTableCell, DataTableColumn,
    DataTableEmpty, DataTableHeader, DataTableRow, Input, PageHeader, PageSubtitle, PageTitle,
    Pagination, SearchBar, SkeletonRows, ToastOptions,
};

use crate::auth::{use_api, use_auth};
use crate::format_helpers::MISSING;
use crate::routes::shared::{
    action_done_message, apply_transition, page_of, range_summary, CaseActionButtons, CaseCells,
    ConfirmDialog, LoadError,
};

/// The registrar's case lists that share one table layout.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Queue {
    Submitted,
    Disapproved,
    Assigned,
}

impl Queue {
    fn title(self) -> &'static str {
        match self {
            Queue::Submitted => "Submitted Cases",
            Queue::Disapproved => "Disapproved Cases",
            Queue::Assigned => "Assigned Cases",
        }
    }

    fn subtitle(self) -> &'static str {
        match self {
            Queue::Submitted => "Review each filing and approve or disapprove it.",
            Queue::Disapproved => "Filings sent back to the clerk.",
            Queue::Assigned => "Cases endorsed to a judge.",
        }
    }

    fn empty(self) -> &'static str {
        match self {
            Queue::Submitted => "No cases are waiting for review.",
            Queue::Disapproved => "No disapproved cases.",
            Queue::Assigned => "No cases have been assigned yet.",
        }
    }

    fn shows_judge(self) -> bool {
        self == Queue::Assigned
    }

    async fn fetch(self, api: ApiClient) -> Result<Vec<Case>, AppError> {
        match self {
            Queue::Submitted => api.submitted_cases().await,
            Queue::Disapproved => api.disapproved_cases().await,
            Queue::Assigned => api.query_cases(&CaseQuery::status(CaseStatus::Assigned)).await,
        }
    }
}

#[component]
pub fn SubmittedCases() -> Element {
    rsx! { CaseQueue { queue: Queue::Submitted } }
}

#[component]
pub fn DisapprovedCases() -> Element {
    rsx! { CaseQueue { queue: Queue::Disapproved } }
}

#[component]
pub fn AssignedCases() -> Element {
    rsx! { CaseQueue { queue: Queue::Assigned } }
}

#[component]
fn CaseQueue(queue: Queue) -> Element {
    let api = use_api();
    let auth = use_auth();
    let toast = use_toast();

    let mut cases = use_resource(move || async move { queue.fetch(api()).await });
    let mut query = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut busy = use_signal(|| Option::<String>::None);
    let mut pending_disapprove = use_signal(|| Option::<Case>::None);

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
                    tracing::warn!(case = %case.id, error = %e, "registrar action failed");
                    toast.error(e.friendly_message(), ToastOptions::new());
                }
            }
            busy.set(None);
        });
    };

    let on_action = move |(case, action): (Case, CaseAction)| {
        if action.is_destructive() {
            pending_disapprove.set(Some(case));
        } else {
            run(case, action);
        }
    };

    let prompt = pending_disapprove()
        .map(|c| format!("\"{}\" will be returned to the clerk as disapproved.", c.title))
        .unwrap_or_default();
    let shows_judge = queue.shows_judge();
    let columns = if shows_judge { 6 } else { 5 };

    rsx! {
        PageHeader {
            div {
                PageTitle { "{queue.title()}" }
                PageSubtitle { "{queue.subtitle()}" }
            }
        }

        match &*cases.read() {
            Some(Ok(all)) => {
                let filtered = filter_by_query(all, &query());
                let current = page_of(&filtered, page());
                let working = busy();
                rsx! {
                    SearchBar { summary: range_summary(&current.meta),
                        Input {
                            value: query(),
                            placeholder: "Search by title, judge or party...",
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
                            if shows_judge {
                                DataTableColumn { "Judge" }
                            }
                            DataTableColumn { "Actions" }
                        }
                        DataTableBody {
                            if current.data.is_empty() {
                                DataTableEmpty { columns, message: "{queue.empty()}" }
                            }
                            for case in current.data.iter().cloned() {
                                QueueRow {
                                    key: "{case.id}",
                                    busy: working.as_deref() == Some(case.id.as_str()),
                                    shows_judge,
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
            open: pending_disapprove.read().is_some(),
            title: "Disapprove case?",
            description: prompt,
            confirm_label: "Disapprove",
            on_confirm: move |_| {
                if let Some(case) = pending_disapprove() {
                    pending_disapprove.set(None);
                    run(case, CaseAction::Disapprove);
                }
            },
            on_cancel: move |_| pending_disapprove.set(None),
        }
    }
}

#[component]
fn QueueRow(
    case: Case,
    busy: bool,
    shows_judge: bool,
    on_action: EventHandler<(Case, CaseAction)>,
) -> Element {
    let judge = match case.judge_name() {
        "" => MISSING.to_string(),
        name => name.to_string(),
    };
    let for_action = case.clone();

    rsx! {
        DataTableRow {
            CaseCells { case: case.clone() }
            if shows_judge {
                DataTableCell { "{judge}" }
            }
            DataTableActions {
                CaseActionButtons {
                    case: case.clone(),
                    role: UserRole::Registrar,
                    busy,
                    on_action: move |action: CaseAction| on_action.call((for_action.clone(), action)),
                }
            }
        }
    }
}
