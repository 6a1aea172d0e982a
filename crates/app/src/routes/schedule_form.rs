use dioxus::prelude::*;
use shared_types::{Case, HearingStatus, Schedule, ScheduleRequest};
use shared_ui::{
    use_toast, Button, ButtonVariant, Form, FormMessage, FormRow, FormSelect, Input, ToastOptions,
};
use std::collections::HashMap;

use crate::auth::use_api;

/// Hearing create/edit form.
///
/// With `judge_id` set the hearing belongs to that judge and only their
/// assigned cases are offered; without it (admin) every case is offered
/// and a judge is picked from the list.
#[component]
pub fn ScheduleEditor(
    editing: Option<Schedule>,
    #[props(default)] judge_id: Option<String>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut draft = use_signal(|| {
        let mut request = editing.as_ref().map(ScheduleRequest::from).unwrap_or_default();
        if let Some(judge) = &judge_id {
            request.assigned_judge = judge.clone();
        }
        request
    });
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut in_flight = use_signal(|| false);

    let owner = judge_id.clone();
    let choices = use_resource(move || {
        let owner = owner.clone();
        async move {
            let client = api();
            let cases = match owner.as_deref() {
                Some(judge) => client.assigned_cases(judge).await,
                None => client.list_cases().await,
            };
            let judges = if owner.is_none() {
                client.list_judges().await.unwrap_or_default()
            } else {
                Vec::new()
            };
            (cases.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "failed to load cases for hearing form");
                Vec::new()
            }), judges)
        }
    });

    let target = editing.as_ref().map(|s| s.id.clone());
    let handle_save = move |_: FormEvent| {
        if *in_flight.read() {
            return;
        }
        errors.set(HashMap::new());
        error_msg.set(None);

        let request = draft.read().clone();
        let target = target.clone();
        in_flight.set(true);
        spawn(async move {
            let client = api();
            let result = match target.as_deref() {
                Some(id) => client.update_schedule(id, &request).await,
                None => client.create_schedule(&request).await,
            };
            in_flight.set(false);
            match result {
                Ok(()) => {
                    let msg = if target.is_some() { "Hearing updated" } else { "Hearing scheduled" };
                    toast.success(msg.to_string(), ToastOptions::new());
                    on_saved.call(());
                }
                Err(e) if !e.field_errors.is_empty() => errors.set(e.field_errors),
                Err(e) => {
                    tracing::warn!(error = %e, "saving hearing failed");
                    error_msg.set(Some(e.friendly_message()));
                }
            }
        });
    };

    let (cases, judges): (Vec<Case>, _) = choices.read().clone().unwrap_or_default();
    let d = draft.read().clone();
    let err = |field: &str| errors.read().get(field).cloned().unwrap_or_default();
    let case_error = err("case_id");
    let pick_judge = judge_id.is_none();
    let submit_label = if editing.is_some() { "Save Changes" } else { "Schedule Hearing" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./case_form.css") }

        Form { onsubmit: handle_save, class: "case-form",
            if let Some(message) = error_msg() {
                FormMessage { success: false, message }
            }

            FormSelect {
                label: "Case",
                required: true,
                value: d.case_id.clone(),
                onchange: move |e: Event<FormData>| draft.with_mut(|f| f.case_id = e.value()),
                option { value: "", "Select a case" }
                for case in cases {
                    option { value: "{case.id}", "{case.case_number} {case.title}" }
                }
            }
            if !case_error.is_empty() {
                span { class: "input-error", "{case_error}" }
            }

            FormRow {
                Input {
                    label: "Start Date",
                    input_type: "date",
                    required: true,
                    value: d.start_date.clone(),
                    error: err("start_date"),
                    on_input: move |e: FormEvent| draft.with_mut(|f| f.start_date = e.value()),
                }
                Input {
                    label: "Start Time",
                    input_type: "time",
                    required: true,
                    value: d.start_time.clone(),
                    error: err("start_time"),
                    on_input: move |e: FormEvent| draft.with_mut(|f| f.start_time = e.value()),
                }
            }
            FormRow {
                Input {
                    label: "End Date",
                    input_type: "date",
                    required: true,
                    value: d.end_date.clone(),
                    error: err("end_date"),
                    on_input: move |e: FormEvent| draft.with_mut(|f| f.end_date = e.value()),
                }
                Input {
                    label: "End Time",
                    input_type: "time",
                    required: true,
                    value: d.end_time.clone(),
                    error: err("end_time"),
                    on_input: move |e: FormEvent| draft.with_mut(|f| f.end_time = e.value()),
                }
            }
            FormRow {
                Input {
                    label: "Room",
                    required: true,
                    value: d.room.clone(),
                    placeholder: "e.g., Courtroom 4B",
                    error: err("room"),
                    on_input: move |e: FormEvent| draft.with_mut(|f| f.room = e.value()),
                }
                FormSelect {
                    label: "Status",
                    value: "{d.status.label()}",
                    onchange: move |e: Event<FormData>| {
                        draft.with_mut(|f| f.status = HearingStatus::parse(&e.value()))
                    },
                    for status in HearingStatus::SELECTABLE {
                        option { value: "{status.label()}", "{status.label()}" }
                    }
                }
            }
            if pick_judge {
                FormSelect {
                    label: "Judge",
                    value: d.assigned_judge.clone(),
                    onchange: move |e: Event<FormData>| draft.with_mut(|f| f.assigned_judge = e.value()),
                    option { value: "", "Unassigned" }
                    for judge in judges {
                        option { value: "{judge.id}", "{judge.name}" }
                    }
                }
            }

            div { class: "case-form-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    button_type: "submit",
                    loading: in_flight(),
                    loading_label: "Saving...",
                    "{submit_label}"
                }
            }
        }
    }
}
