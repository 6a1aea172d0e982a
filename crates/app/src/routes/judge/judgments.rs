use dioxus::prelude::*;
use shared_types::{Judgment, JudgmentRequest};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardGrid, CardHeader,
    CardTitle, DetailItem, DetailList, Form, FormMessage, FormSelect, Input, PageHeader,
    PageSubtitle, PageTitle, SkeletonRows, Textarea, ToastOptions,
};
use std::collections::HashMap;

use crate::auth::{use_api, use_auth};
use crate::format_helpers::{format_date, today_input_value};
use crate::routes::shared::LoadError;
use crate::routes::Route;

const VERDICTS: [&str; 6] = [
    "In favour of Plaintiff",
    "In favour of Defendant",
    "Guilty",
    "Not Guilty",
    "Dismissed",
    "Settled",
];

/// Build the request body from the form fields. A blank date is left for
/// the backend to stamp.
fn judgment_request(
    case_id: &str,
    judge_id: &str,
    verdict: &str,
    summary: &str,
    date: &str,
) -> JudgmentRequest {
    let date = date.trim();
    JudgmentRequest {
        case_id: case_id.to_string(),
        judge_id: judge_id.to_string(),
        verdict: verdict.trim().to_string(),
        summary: summary.trim().to_string(),
        judgment_date: (!date.is_empty()).then(|| date.to_string()),
    }
}

#[component]
pub fn JudgmentHistory() -> Element {
    let api = use_api();
    let auth = use_auth();

    let mut judgments =
        use_resource(move || async move { api().judge_judgments(&auth.user_id()).await });

    rsx! {
        PageHeader {
            div {
                PageTitle { "Judgment History" }
                PageSubtitle { "Every judgment you have placed." }
            }
        }

        match &*judgments.read() {
            Some(Ok(list)) if list.is_empty() => rsx! {
                p { class: "empty-state", "No judgments found." }
            },
            Some(Ok(list)) => rsx! {
                CardGrid {
                    for judgment in list.iter().cloned() {
                        JudgmentCard { key: "{judgment.id}", judgment }
                    }
                }
            },
            Some(Err(e)) => rsx! {
                LoadError { error: e.clone(), on_retry: move |_| judgments.restart() }
            },
            None => rsx! {
                SkeletonRows { rows: 4 }
            },
        }
    }
}

#[component]
fn JudgmentCard(judgment: Judgment) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "{judgment.case_title()}" }
                CardDescription { "{judgment.case_number()}" }
            }
            CardContent {
                DetailList {
                    DetailItem { label: "Date", value: format_date(judgment.judgment_date.as_ref()) }
                    DetailItem { label: "Verdict", value: judgment.verdict.clone() }
                    DetailItem { label: "Summary", value: judgment.summary.clone() }
                }
            }
        }
    }
}

#[component]
pub fn PlaceJudgment(case_id: String) -> Element {
    let api = use_api();
    let auth = use_auth();
    let toast = use_toast();

    let lookup_id = case_id.clone();
    let case = use_resource(move || {
        let cid = lookup_id.clone();
        async move { api().get_case(&cid).await }
    });

    let mut verdict = use_signal(String::new);
    let mut summary = use_signal(String::new);
    let mut date = use_signal(today_input_value);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut in_flight = use_signal(|| false);

    let target = case_id.clone();
    let handle_submit = move |_: FormEvent| {
        if *in_flight.read() {
            return;
        }
        errors.set(HashMap::new());
        error_msg.set(None);

        let request = judgment_request(
            &target,
            &auth.user_id(),
            &verdict.read(),
            &summary.read(),
            &date.read(),
        );
        in_flight.set(true);
        spawn(async move {
            let result = api().record_judgment(&request).await;
            in_flight.set(false);
            match result {
                Ok(()) => {
                    tracing::info!(case = %request.case_id, "judgment recorded");
                    toast.success("Judgment recorded".to_string(), ToastOptions::new());
                    navigator().push(Route::JudgmentHistory {});
                }
                Err(e) if !e.field_errors.is_empty() => errors.set(e.field_errors),
                Err(e) => {
                    tracing::warn!(case = %request.case_id, error = %e, "recording judgment failed");
                    error_msg.set(Some(e.friendly_message()));
                }
            }
        });
    };

    let heading = match &*case.read() {
        Some(Ok(found)) if !found.case_number.is_empty() => {
            format!("{} ({})", found.title, found.case_number)
        }
        Some(Ok(found)) => found.title.clone(),
        _ => format!("Case {case_id}"),
    };
    let err = |field: &str| errors.read().get(field).cloned().unwrap_or_default();
    let verdict_error = err("verdict");
    let summary_error = err("summary");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("../case_form.css") }

        PageHeader {
            div {
                PageTitle { "Place Judgment" }
                PageSubtitle { "{heading}" }
            }
        }

        Card { class: "form-page",
            CardHeader {
                CardTitle { "Judgment" }
                CardDescription { "The verdict and summary are recorded against the case." }
            }
            CardContent {
                Form { onsubmit: handle_submit, class: "case-form",
                    if let Some(message) = error_msg() {
                        FormMessage { success: false, message }
                    }

                    FormSelect {
                        label: "Verdict",
                        required: true,
                        value: verdict(),
                        onchange: move |e: Event<FormData>| verdict.set(e.value()),
                        option { value: "", "Select a verdict" }
                        for choice in VERDICTS {
                            option { value: "{choice}", "{choice}" }
                        }
                    }
                    if !verdict_error.is_empty() {
                        span { class: "input-error", "{verdict_error}" }
                    }

                    Textarea {
                        label: "Summary",
                        required: true,
                        rows: 6,
                        value: summary(),
                        placeholder: "Reasons for the judgment...",
                        on_input: move |e: FormEvent| summary.set(e.value()),
                    }
                    if !summary_error.is_empty() {
                        span { class: "input-error", "{summary_error}" }
                    }

                    Input {
                        label: "Judgment Date",
                        input_type: "date",
                        value: date(),
                        on_input: move |e: FormEvent| date.set(e.value()),
                    }

                    div { class: "case-form-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                navigator().go_back();
                            },
                            "Cancel"
                        }
                        Button {
                            button_type: "submit",
                            loading: in_flight(),
                            loading_label: "Saving...",
                            "Record Judgment"
                        }
                    }
                }
            }
        }
    }
}
