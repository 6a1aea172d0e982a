use client::CaseQuery;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCircleCheck, LdCircleX, LdFileText, LdHourglass};
use dioxus_free_icons::Icon;
use shared_types::{filter_by, Case, CaseAction, CaseStatus, ClerkSummary, UserRole};
use shared_ui::{
    use_toast, BadgeVariant, Button, DataTable, DataTableActions, DataTableBody, DataTableColumn,
    DataTableEmpty, DataTableHeader, DataTableRow, Input, PageActions, PageHeader, PageSubtitle,
    PageTitle, Pagination, SearchBar, SkeletonRows, StatCard, StatGrid, ToastOptions,
};

use crate::auth::{use_api, use_auth};
use crate::routes::shared::{
    action_done_message, apply_transition, page_of, range_summary, CaseActionButtons, CaseCells,
    LoadError,
};
use crate::routes::Route;

/// Cases still waiting on the clerk: filed but unregistered, or registered
/// but not yet sent on.
fn awaiting_clerk(cases: &[Case]) -> Vec<Case> {
    cases
        .iter()
        .filter(|c| matches!(c.status, CaseStatus::Filed | CaseStatus::Registered))
        .cloned()
        .collect()
}

fn title_or_description(case: &Case) -> Vec<&str> {
    vec![case.title.as_str(), case.description.as_str()]
}

#[component]
pub fn ClerkDashboard() -> Element {
    let api = use_api();
    let auth = use_auth();
    let toast = use_toast();

    let mut summary =
        use_resource(move || async move { api().clerk_summary(&auth.user_id()).await });
    let mut cases = use_resource(move || async move {
        api().query_cases(&CaseQuery::clerk(auth.user_id())).await
    });
    let mut query = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut busy = use_signal(|| Option::<String>::None);

    let on_action = move |(case, action): (Case, CaseAction)| {
        let actor = auth.user();
        busy.set(Some(case.id.clone()));
        spawn(async move {
            match apply_transition(&api(), action, &case.id, &actor).await {
                Ok(()) => {
                    toast.success(action_done_message(action).to_string(), ToastOptions::new());
                    cases.restart();
                    summary.restart();
                }
                Err(e) => {
                    tracing::warn!(case = %case.id, error = %e, "clerk action failed");
                    toast.error(e.friendly_message(), ToastOptions::new());
                }
            }
            busy.set(None);
        });
    };

    let user = auth.user();

    rsx! {
        PageHeader {
            div {
                PageTitle { "Clerk Dashboard" }
                PageSubtitle { "Welcome back, {user.name}" }
            }
            PageActions {
                Button {
                    onclick: move |_: MouseEvent| {
                        navigator().push(Route::CaseFormPage {});
                    },
                    "File a Case"
                }
            }
        }

        match &*summary.read() {
            Some(Ok(s)) => rsx! {
                SummaryCards { summary: s.clone() }
            },
            Some(Err(e)) => rsx! {
                LoadError { error: e.clone(), on_retry: move |_| summary.restart() }
            },
            None => rsx! {
                SkeletonRows { rows: 1 }
            },
        }

        section { class: "page-section",
            h2 { class: "page-section-title", "Cases awaiting action" }

            match &*cases.read() {
                Some(Ok(all)) => {
                    let open = awaiting_clerk(all);
                    let filtered = filter_by(&open, &query(), title_or_description);
                    let current = page_of(&filtered, page());
                    let working = busy();
                    rsx! {
                        SearchBar { summary: range_summary(&current.meta),
                            Input {
                                value: query(),
                                placeholder: "Search by title or description...",
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
                                    DataTableEmpty { columns: 5, message: "Nothing waiting on you." }
                                }
                                for case in current.data.iter().cloned() {
                                    PendingRow {
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
        }
    }
}

#[component]
fn SummaryCards(summary: ClerkSummary) -> Element {
    rsx! {
        StatGrid {
            StatCard {
                title: "Total Filed",
                value: "{summary.total}",
                icon: rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
            }
            StatCard {
                title: "Pending",
                value: "{summary.pending}",
                tone: BadgeVariant::Warning,
                icon: rsx! { Icon::<LdHourglass> { icon: LdHourglass, width: 18, height: 18 } },
            }
            StatCard {
                title: "Approved",
                value: "{summary.approved}",
                tone: BadgeVariant::Success,
                icon: rsx! { Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 18, height: 18 } },
            }
            StatCard {
                title: "Rejected",
                value: "{summary.rejected}",
                tone: BadgeVariant::Destructive,
                icon: rsx! { Icon::<LdCircleX> { icon: LdCircleX, width: 18, height: 18 } },
            }
        }
    }
}

#[component]
fn PendingRow(case: Case, busy: bool, on_action: EventHandler<(Case, CaseAction)>) -> Element {
    let for_action = case.clone();

    rsx! {
        DataTableRow {
            CaseCells { case: case.clone() }
            DataTableActions {
                CaseActionButtons {
                    case: case.clone(),
                    role: UserRole::Clerk,
                    skip: vec![CaseAction::Edit, CaseAction::Delete],
                    busy,
                    on_action: move |action: CaseAction| on_action.call((for_action.clone(), action)),
                }
            }
        }
    }
}
