use dioxus::prelude::*;
use shared_types::{filter_by_query, Schedule};
use shared_ui::{
    use_toast, Button, ButtonVariant, DataTable, DataTableActions, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, Input, PageActions,
    PageHeader, PageTitle, Pagination, SearchBar, Sheet, SheetClose, SheetContent,
    SheetDescription, SheetHeader, SheetSide, SheetTitle, SkeletonRows, ToastOptions,
};

use crate::auth::use_api;
use crate::format_helpers::{format_slot, MISSING};
use crate::routes::schedule_form::ScheduleEditor;
use crate::routes::shared::{page_of, range_summary, ConfirmDialog, HearingStatusBadge, LoadError};

#[component]
pub fn ManageSchedules() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut schedules = use_resource(move || async move { api().list_schedules().await });
    let mut query = use_signal(String::new);
    let mut page = use_signal(|| 1usize);

    let mut show_sheet = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Schedule>::None);
    let mut pending_delete = use_signal(|| Option::<Schedule>::None);

    let open_create = move |_: MouseEvent| {
        editing.set(None);
        show_sheet.set(true);
    };

    let confirm_delete = move |_: ()| {
        let Some(schedule) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        spawn(async move {
            match api().delete_schedule(&schedule.id).await {
                Ok(()) => {
                    toast.success("Hearing removed".to_string(), ToastOptions::new());
                    schedules.restart();
                }
                Err(e) => {
                    tracing::warn!(schedule = %schedule.id, error = %e, "delete schedule failed");
                    toast.error(e.friendly_message(), ToastOptions::new());
                }
            }
        });
    };

    let delete_prompt = pending_delete()
        .map(|s| {
            format!(
                "The hearing for \"{}\" on {} will be removed.",
                s.case_title(),
                format_slot(&s.start_date, &s.start_time, &s.end_date, &s.end_time)
            )
        })
        .unwrap_or_default();

    rsx! {
        PageHeader {
            PageTitle { "Manage Schedules" }
            PageActions {
                Button { onclick: open_create, "Add Hearing" }
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
                            placeholder: "Search by case, room or status...",
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
                            DataTableColumn { "Judge" }
                            DataTableColumn { "Status" }
                            DataTableColumn { "Actions" }
                        }
                        DataTableBody {
                            if current.data.is_empty() {
                                DataTableEmpty { columns: 6, message: "No hearings found." }
                            }
                            for schedule in current.data.iter().cloned() {
                                ScheduleRow {
                                    key: "{schedule.id}",
                                    schedule,
                                    on_edit: move |s: Schedule| {
                                        editing.set(Some(s));
                                        show_sheet.set(true);
                                    },
                                    on_delete: move |s: Schedule| pending_delete.set(Some(s)),
                                }
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

        Sheet {
            open: show_sheet(),
            on_close: move |_| show_sheet.set(false),
            side: SheetSide::Right,
            SheetContent {
                SheetHeader {
                    SheetTitle {
                        if editing.read().is_some() { "Edit Hearing" } else { "Add Hearing" }
                    }
                    SheetDescription { "Every field is required." }
                    SheetClose { on_close: move |_| show_sheet.set(false) }
                }
                ScheduleEditor {
                    editing: editing(),
                    on_saved: move |_| {
                        show_sheet.set(false);
                        schedules.restart();
                    },
                    on_cancel: move |_| show_sheet.set(false),
                }
            }
        }

        ConfirmDialog {
            open: pending_delete.read().is_some(),
            title: "Delete hearing?",
            description: delete_prompt,
            on_confirm: confirm_delete,
            on_cancel: move |_| pending_delete.set(None),
        }
    }
}

#[component]
fn ScheduleRow(
    schedule: Schedule,
    on_edit: EventHandler<Schedule>,
    on_delete: EventHandler<Schedule>,
) -> Element {
    let when = format_slot(
        &schedule.start_date,
        &schedule.start_time,
        &schedule.end_date,
        &schedule.end_time,
    );
    let judge = schedule
        .assigned_judge
        .as_ref()
        .map(|j| j.display_name().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| MISSING.to_string());
    let for_edit = schedule.clone();
    let for_delete = schedule.clone();

    rsx! {
        DataTableRow {
            DataTableCell {
                div { class: "cell-strong", "{schedule.case_title()}" }
                div { class: "cell-sub", "{schedule.case_number()}" }
            }
            DataTableCell { "{when}" }
            DataTableCell { "{schedule.room}" }
            DataTableCell { "{judge}" }
            DataTableCell { HearingStatusBadge { status: schedule.status.clone() } }
            DataTableActions {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_edit.call(for_edit.clone()),
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| on_delete.call(for_delete.clone()),
                    "Delete"
                }
            }
        }
    }
}
