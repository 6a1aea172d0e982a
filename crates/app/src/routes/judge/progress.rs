use dioxus::prelude::*;
use shared_types::Schedule;
use shared_ui::{
    Card, CardContent, CardDescription, CardGrid, CardHeader, CardTitle, DetailItem, DetailList,
    PageHeader, PageSubtitle, PageTitle, ProgressBar, SkeletonRows,
};

use crate::auth::{use_api, use_auth};
use crate::format_helpers::format_slot;
use crate::routes::shared::{HearingStatusBadge, LoadError};

/// Bar colour for a completion percentage.
fn progress_tone(percent: u8) -> &'static str {
    match percent {
        100 => "success",
        50..=99 => "info",
        _ => "warning",
    }
}

#[component]
pub fn Progress() -> Element {
    let api = use_api();
    let auth = use_auth();

    let mut progress =
        use_resource(move || async move { api().judge_progress(&auth.user_id()).await });

    rsx! {
        PageHeader {
            div {
                PageTitle { "Case Progress" }
                PageSubtitle { "How far each of your hearings has come." }
            }
        }

        match &*progress.read() {
            Some(Ok(items)) if items.is_empty() => rsx! {
                p { class: "empty-state", "No hearings in progress." }
            },
            Some(Ok(items)) => rsx! {
                CardGrid {
                    for schedule in items.iter().cloned() {
                        ProgressCard { key: "{schedule.id}", schedule }
                    }
                }
            },
            Some(Err(e)) => rsx! {
                LoadError { error: e.clone(), on_retry: move |_| progress.restart() }
            },
            None => rsx! {
                SkeletonRows { rows: 4 }
            },
        }
    }
}

#[component]
fn ProgressCard(schedule: Schedule) -> Element {
    let percent = schedule.progress_percent();
    let when = format_slot(
        &schedule.start_date,
        &schedule.start_time,
        &schedule.end_date,
        &schedule.end_time,
    );

    rsx! {
        Card {
            CardHeader {
                CardTitle { "{schedule.case_title()}" }
                CardDescription { "{schedule.case_number()}" }
            }
            CardContent {
                ProgressBar { percent, tone: "{progress_tone(percent)}" }
                DetailList {
                    DetailItem { label: "Hearing", value: when }
                    DetailItem { label: "Room", value: schedule.room.clone() }
                    DetailItem { label: "Status",
                        HearingStatusBadge { status: schedule.status.clone() }
                    }
                }
            }
        }
    }
}
