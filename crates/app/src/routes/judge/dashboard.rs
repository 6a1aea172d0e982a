use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdGavel, LdScale};
use dioxus_free_icons::Icon;
use shared_types::{Case, CaseStatus, Schedule, StatusStats};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, PageActions,
    PageHeader, PageSubtitle, PageTitle, SkeletonRows, StatCard, StatGrid,
};

use crate::auth::{use_api, use_auth};
use crate::format_helpers::format_slot;
use crate::routes::shared::{case_status_variant, CaseCells, HearingStatusBadge, LoadError};
use crate::routes::Route;

const UPCOMING_ROWS: usize = 5;

/// Hearings starting on or after `today`, soonest first. Slots with an
/// unreadable start date are left out.
fn upcoming(schedules: &[Schedule], today: NaiveDate) -> Vec<Schedule> {
    let mut ahead: Vec<Schedule> = schedules
        .iter()
        .filter(|s| s.start_day().is_some_and(|day| day >= today))
        .cloned()
        .collect();
    ahead.sort_by(|a, b| {
        (a.start_day(), a.start_time.as_str()).cmp(&(b.start_day(), b.start_time.as_str()))
    });
    ahead.truncate(UPCOMING_ROWS);
    ahead
}

#[derive(Clone, PartialEq)]
struct JudgeOverview {
    cases: Vec<Case>,
    stats: StatusStats,
    hearings: Vec<Schedule>,
}

#[component]
pub fn JudgeDashboard() -> Element {
    let api = use_api();
    let auth = use_auth();

    let mut overview = use_resource(move || async move {
        let client = api();
        let judge = auth.user_id();
        let (cases, stats, hearings) = futures::try_join!(
            client.assigned_cases(&judge),
            client.judge_status_stats(&judge),
            client.judge_schedules(&judge),
        )?;
        Ok::<_, shared_types::AppError>(JudgeOverview {
            cases,
            stats,
            hearings: upcoming(&hearings, Local::now().date_naive()),
        })
    });
    let user = auth.user();

    rsx! {
        PageHeader {
            div {
                PageTitle { "Judge Dashboard" }
                PageSubtitle { "Welcome back, {user.name}" }
            }
            PageActions {
                Button {
                    onclick: move |_: MouseEvent| {
                        navigator().push(Route::ScheduleNewHearing {});
                    },
                    "Schedule Hearing"
                }
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
fn OverviewView(overview: JudgeOverview) -> Element {
    let by_status = overview.stats.in_lifecycle_order();
    let awaiting = overview.stats.count(&CaseStatus::Assigned);

    rsx! {
        StatGrid {
            StatCard {
                title: "Cases Assigned",
                value: "{overview.cases.len()}",
                icon: rsx! { Icon::<LdScale> { icon: LdScale, width: 18, height: 18 } },
                onclick: move |_: MouseEvent| {
                    navigator().push(Route::CasesAssigned {});
                },
            }
            StatCard {
                title: "Awaiting a Hearing",
                value: "{awaiting}",
                tone: case_status_variant(&CaseStatus::Assigned),
                icon: rsx! { Icon::<LdGavel> { icon: LdGavel, width: 18, height: 18 } },
            }
            StatCard {
                title: "Upcoming Hearings",
                value: "{overview.hearings.len()}",
                icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
                onclick: move |_: MouseEvent| {
                    navigator().push(Route::ScheduleHearing {});
                },
            }
        }

        if !by_status.is_empty() {
            StatGrid {
                for (status, count) in by_status {
                    StatCard {
                        key: "{status.label()}",
                        title: "{status.label()}",
                        value: "{count}",
                        tone: case_status_variant(&status),
                    }
                }
            }
        }

        div { class: "two-column",
            Card {
                CardHeader { CardTitle { "Assigned cases" } }
                CardContent {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Case" }
                            DataTableColumn { "Parties" }
                            DataTableColumn { "Filed" }
                            DataTableColumn { "Status" }
                        }
                        DataTableBody {
                            if overview.cases.is_empty() {
                                DataTableEmpty { columns: 4, message: "No cases assigned to you." }
                            }
                            for case in overview.cases.iter().take(UPCOMING_ROWS).cloned() {
                                DataTableRow { key: "{case.id}",
                                    CaseCells { case }
                                }
                            }
                        }
                    }
                    if overview.cases.len() > UPCOMING_ROWS {
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_: MouseEvent| {
                                navigator().push(Route::CasesAssigned {});
                            },
                            "View all {overview.cases.len()}"
                        }
                    }
                }
            }
            Card {
                CardHeader { CardTitle { "Upcoming hearings" } }
                CardContent {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Case" }
                            DataTableColumn { "When" }
                            DataTableColumn { "Room" }
                            DataTableColumn { "Status" }
                        }
                        DataTableBody {
                            if overview.hearings.is_empty() {
                                DataTableEmpty { columns: 4, message: "Nothing on the calendar." }
                            }
                            for hearing in overview.hearings.iter().cloned() {
                                DataTableRow { key: "{hearing.id}",
                                    DataTableCell {
                                        div { class: "cell-strong", "{hearing.case_title()}" }
                                        div { class: "cell-sub", "{hearing.case_number()}" }
                                    }
                                    DataTableCell {
                                        "{format_slot(&hearing.start_date, &hearing.start_time, &hearing.end_date, &hearing.end_time)}"
                                    }
                                    DataTableCell { "{hearing.room}" }
                                    DataTableCell { HearingStatusBadge { status: hearing.status.clone() } }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
