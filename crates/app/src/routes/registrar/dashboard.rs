use client::RegistrarOverview;
use dioxus::prelude::*;
use shared_types::{Case, CaseStatus};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, PageHeader, PageSubtitle,
    PageTitle, SkeletonRows, StatCard, StatGrid,
};

use crate::auth::{use_api, use_auth};
use crate::routes::shared::{case_status_variant, CaseCells, LoadError};
use crate::routes::Route;

/// Rows shown per list on the dashboard; the full lists have their own pages.
const PREVIEW_ROWS: usize = 5;

/// Statuses the registrar cares about, in the order the cards are shown.
const TRACKED: [CaseStatus; 4] = [
    CaseStatus::Submitted,
    CaseStatus::Approved,
    CaseStatus::Disapproved,
    CaseStatus::Assigned,
];

#[component]
pub fn RegistrarDashboard() -> Element {
    let api = use_api();
    let auth = use_auth();

    let mut overview = use_resource(move || async move { api().registrar_overview().await });
    let user = auth.user();

    rsx! {
        PageHeader {
            div {
                PageTitle { "Registrar Dashboard" }
                PageSubtitle { "Welcome back, {user.name}" }
            }
        }

        match &*overview.read() {
            Some(Ok(data)) => rsx! {
                OverviewView { overview: data.clone() }
            },
            Some(Err(e)) => rsx! {
                LoadError { error: e.clone(), on_retry: move |_| overview.restart() }
            },
            None => rsx! {
                SkeletonRows { rows: 5 }
            },
        }
    }
}

#[component]
fn OverviewView(overview: RegistrarOverview) -> Element {
    let cards: Vec<_> = TRACKED
        .into_iter()
        .map(|status| {
            let count = overview.stats.count(&status);
            (status.label().to_string(), count, case_status_variant(&status), queue_route(&status))
        })
        .collect();

    rsx! {
        StatGrid {
            for (label, count, tone, route) in cards {
                StatCard {
                    title: "{label}",
                    value: "{count}",
                    tone,
                    onclick: move |_: MouseEvent| {
                        if let Some(route) = route.clone() {
                            navigator().push(route);
                        }
                    },
                }
            }
            StatCard {
                title: "All Cases",
                value: "{overview.stats.total()}",
            }
        }

        div { class: "two-column",
            PreviewCard {
                title: "Awaiting review",
                cases: overview.submitted.clone(),
                empty: "No cases waiting for review.",
                more: Route::SubmittedCases {},
            }
            PreviewCard {
                title: "Approved, awaiting a judge",
                cases: overview.approved.clone(),
                empty: "No approved cases waiting.",
                more: Route::ApprovedCases {},
            }
        }
    }
}

fn queue_route(status: &CaseStatus) -> Option<Route> {
    match status {
        CaseStatus::Submitted => Some(Route::SubmittedCases {}),
        CaseStatus::Approved => Some(Route::ApprovedCases {}),
        CaseStatus::Disapproved => Some(Route::DisapprovedCases {}),
        CaseStatus::Assigned => Some(Route::AssignedCases {}),
        _ => None,
    }
}

#[component]
fn PreviewCard(title: String, cases: Vec<Case>, empty: String, more: Route) -> Element {
    let total = cases.len();

    rsx! {
        Card {
            CardHeader { CardTitle { "{title}" } }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Case" }
                        DataTableColumn { "Parties" }
                        DataTableColumn { "Filed" }
                        DataTableColumn { "Status" }
                    }
                    DataTableBody {
                        if cases.is_empty() {
                            DataTableEmpty { columns: 4, message: "{empty}" }
                        }
                        for case in cases.iter().take(PREVIEW_ROWS).cloned() {
                            DataTableRow { key: "{case.id}",
                                CaseCells { case }
                            }
                        }
                    }
                }
                if total > PREVIEW_ROWS {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_: MouseEvent| {
                            navigator().push(more.clone());
                        },
                        "View all {total}"
                    }
                }
            }
        }
    }
}
