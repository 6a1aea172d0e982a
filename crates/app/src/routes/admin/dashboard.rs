use chrono::Local;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCircleCheck, LdFileText, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::AdminSummary;
use shared_ui::{
    BadgeVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, PageHeader,
    PageSubtitle, PageTitle, SkeletonRows, StatCard, StatGrid,
};
use std::time::Duration;

use crate::auth::{use_api, use_auth, use_config};
use crate::format_helpers::{format_clock, format_date};
use crate::platform;
use crate::routes::shared::{LoadError, RoleBadge};
use crate::routes::Route;

#[component]
pub fn AdminDashboard() -> Element {
    let api = use_api();
    let auth = use_auth();
    let config = use_config();

    let mut summary = use_resource(move || async move { api().admin_summary().await });

    let user = auth.user();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        PageHeader {
            div {
                PageTitle { "Admin Dashboard" }
                PageSubtitle { "Welcome back, {user.name}" }
            }
            if config.features.live_clock {
                LiveClock {}
            }
        }

        match &*summary.read() {
            Some(Ok(data)) => rsx! {
                SummaryView { summary: data.clone() }
            },
            Some(Err(e)) => rsx! {
                LoadError { error: e.clone(), on_retry: move |_| summary.restart() }
            },
            None => rsx! {
                SkeletonRows { rows: 4 }
            },
        }
    }
}

#[component]
fn SummaryView(summary: AdminSummary) -> Element {
    let open_cases = summary.cases.saturating_sub(summary.closed_cases);

    rsx! {
        StatGrid {
            StatCard {
                title: "Total Users",
                value: "{summary.users}",
                caption: "across all roles",
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
                onclick: move |_: MouseEvent| {
                    navigator().push(Route::ManageUsers {});
                },
            }
            StatCard {
                title: "Total Cases",
                value: "{summary.cases}",
                caption: "{open_cases} still open",
                tone: BadgeVariant::Info,
                icon: rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
                onclick: move |_: MouseEvent| {
                    navigator().push(Route::ManageCases {});
                },
            }
            StatCard {
                title: "Closed Cases",
                value: "{summary.closed_cases}",
                tone: BadgeVariant::Success,
                icon: rsx! { Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 18, height: 18 } },
            }
        }

        div { class: "two-column",
            Card {
                CardHeader { CardTitle { "Users by Role" } }
                CardContent {
                    ul { class: "role-breakdown",
                        for (role, count) in summary.roles.entries() {
                            li { class: "role-breakdown-row",
                                RoleBadge { role }
                                span { class: "role-breakdown-count", "{count}" }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Recently Registered" } }
                CardContent {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Name" }
                            DataTableColumn { "Role" }
                            DataTableColumn { "Registered" }
                        }
                        DataTableBody {
                            if summary.recent_users.is_empty() {
                                DataTableEmpty { columns: 3, message: "No users yet." }
                            }
                            for user in summary.recent_users.iter() {
                                DataTableRow { key: "{user.id}",
                                    DataTableCell {
                                        div { class: "cell-strong", "{user.name}" }
                                        div { class: "cell-sub", "{user.email}" }
                                    }
                                    DataTableCell { RoleBadge { role: user.role } }
                                    DataTableCell { "{format_date(user.created_at.as_ref())}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Ticking wall clock shown in the dashboard header.
#[component]
fn LiveClock() -> Element {
    let mut now = use_signal(Local::now);

    use_future(move || async move {
        loop {
            platform::sleep(Duration::from_secs(1)).await;
            now.set(Local::now());
        }
    });

    rsx! {
        span { class: "live-clock", "{format_clock(&now())}" }
    }
}
