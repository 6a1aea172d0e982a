use dioxus::prelude::*;
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader, PageSubtitle,
    PageTitle, SkeletonRows,
};

use crate::auth::use_api;
use crate::routes::case_form::CaseEditor;
use crate::routes::shared::LoadError;
use crate::routes::Route;

/// New filing. The case starts out as `Filed` under the signed-in clerk.
#[component]
pub fn CaseFormPage() -> Element {
    rsx! {
        PageHeader {
            div {
                PageTitle { "File a Case" }
                PageSubtitle { "Capture the claim as received at the registry counter." }
            }
        }

        Card { class: "form-page",
            CardHeader {
                CardTitle { "Case details" }
                CardDescription { "Only the title is required; the rest can be added later." }
            }
            CardContent {
                CaseEditor {
                    editing: None,
                    on_saved: move |_| {
                        navigator().push(Route::ClerkDashboard {});
                    },
                    on_cancel: move |_| {
                        navigator().go_back();
                    },
                }
            }
        }
    }
}

#[component]
pub fn EditCase(id: String) -> Element {
    let api = use_api();

    let case_id = id.clone();
    let mut case = use_resource(move || {
        let cid = case_id.clone();
        async move { api().get_case(&cid).await }
    });

    rsx! {
        PageHeader {
            PageTitle { "Edit Case" }
        }

        match &*case.read() {
            Some(Ok(found)) => rsx! {
                Card { class: "form-page",
                    CardHeader {
                        CardTitle { "{found.title}" }
                        if !found.case_number.is_empty() {
                            CardDescription { "{found.case_number}" }
                        }
                    }
                    CardContent {
                        CaseEditor {
                            key: "{found.id}",
                            editing: Some(found.clone()),
                            on_saved: move |_| {
                                navigator().push(Route::CaseRegistration {});
                            },
                            on_cancel: move |_| {
                                navigator().go_back();
                            },
                        }
                    }
                }
            },
            Some(Err(e)) => rsx! {
                LoadError { error: e.clone(), on_retry: move |_| case.restart() }
            },
            None => rsx! {
                SkeletonRows { rows: 8 }
            },
        }
    }
}
