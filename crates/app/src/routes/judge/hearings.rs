use dioxus::prelude::*;
use shared_types::{filter_by_query, Schedule};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, DataTable,
    DataTableActions, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty,
    DataTableHeader, DataTableRow, Input, PageActions, PageHeader, PageSubtitle, PageTitle,
    Pagination, SearchBar, SkeletonRows,
};

use crate::auth::{use_api, use_auth};
use crate::format_helpers::format_slot;
use crate::routes::schedule_form::ScheduleEditor;
use crate::routes::shared::{page_of, range_summary, HearingStatusBadge, LoadError};
use crate::routes::Route;

/// The judge's hearing calendar.
#[component]
pub fn ScheduleHearing() -> Element {
    let api = use_api();
    let auth = use_auth();

    let mut schedules =
        use_resource(move || async move { api().judge_schedules(&auth.user_id()).await });
    let mut query = use_signal(String::new);
    let mut page = use_signal(|| 1usize);

    rsx! {
        PageHeader {
            div {
                PageTitle { "Hearings" }
                PageSubtitle { "Place a judgment once a hearing is completed or closed." }
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

        match &*schedules.read() {
            Some(Ok(all)) => {
                let filtered = filter_by_query(all, &query());
                let current = page_of(&filtered, page());
                rsx! {
                    SearchBar { summary: range_summary(&current.meta),
                        Input {
                            value: query(),
                            placeholder: "Search by case, number or status...",
                            on_input: move |e: FormEvent| {
                                query.set(e.value());
                                page.set(1);
                            },
                        }
                    }

                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Case" }
                            DataTableColumn { "When" }
                            DataTableColumn { "Room" }
                            DataTableColumn { "Status" }
                            DataTableColumn { "Actions" }
                        }
                        DataTableBody {
                            if current.data.is_empty() {
                                DataTableEmpty { columns: 5, message: "No hearings scheduled." }
                            }
                            for schedule in current.data.iter().cloned() {
                                HearingRow { key: "{schedule.id}", schedule }
                            }
                        }
                    }

                    Pagination { page, total_pages: current.meta.total_pages }
                }
            }
            Some(Err(e)) => rsx! {
                LoadError { error: e.clone(), on_retry: move |_| schedules.restart() }
            },
            None => rsx! {
                SkeletonRows { rows: 6 }
            },
        }
    }
}

#[component]
fn HearingRow(schedule: Schedule) -> Element {
    let when = format_slot(
        &schedule.start_date,
        &schedule.start_time,
        &schedule.end_date,
        &schedule.end_time,
    );
    let ready = schedule.status.awaits_judgment();
    let case_id = schedule.case_key().to_string();

    rsx! {
        DataTableRow {
            DataTableCell {
                div { class: "cell-strong", "{schedule.case_title()}" }
                div { class: "cell-sub", "{schedule.case_number()}" }
            }
            DataTableCell { "{when}" }
            DataTableCell { "{schedule.room}" }
            DataTableCell { HearingStatusBadge { status: schedule.status.clone() } }
            DataTableActions {
                if ready {
                    Button {
                        onclick: move |_: MouseEvent| {
                            navigator().push(Route::PlaceJudgment { case_id: case_id.clone() });
                        },
                        "Place Judgment"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ScheduleNewHearing() -> Element {
    let auth = use_auth();
    let judge_id = auth.user_id();

    rsx! {
        PageHeader {
            div {
                PageTitle { "Schedule New Hearing" }
                PageSubtitle { "Book a courtroom slot for one of your cases." }
            }
        }

        Card { class: "form-page",
            CardHeader {
                CardTitle { "Hearing details" }
                CardDescription { "Every field is required." }
            }
            CardContent {
                ScheduleEditor {
                    editing: None,
                    judge_id: Some(judge_id),
                    on_saved: move |_| {
                        navigator().push(Route::ScheduleHearing {});
                    },
                    on_cancel: move |_| {
                        navigator().go_back();
                    },
                }
            }
        }
    }
}
