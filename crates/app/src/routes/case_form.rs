use dioxus::prelude::*;
use shared_types::{Case, CaseRequest, CaseStatus, Party};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Button, ButtonVariant, Form,
    FormMessage, FormRow, FormSelect, Input, Separator, Sheet, SheetClose, SheetContent,
    SheetDescription, SheetHeader, SheetSide, SheetTitle, Textarea, ToastOptions,
};

use crate::auth::{use_api, use_auth};

/// Editable copy of the fields a case form shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseDraft {
    pub case_number: String,
    pub title: String,
    pub description: String,
    pub plaintiff: String,
    pub defendant: String,
    pub parties_involved: String,
    pub status: String,
    pub judge_id: String,
    pub document: String,
    pub registration_notes: String,
}

impl Default for CaseDraft {
    fn default() -> Self {
        Self {
            case_number: String::new(),
            title: String::new(),
            description: String::new(),
            plaintiff: String::new(),
            defendant: String::new(),
            parties_involved: String::new(),
            status: CaseStatus::Filed.label().to_string(),
            judge_id: String::new(),
            document: String::new(),
            registration_notes: String::new(),
        }
    }
}

impl CaseDraft {
    pub fn from_case(case: &Case) -> Self {
        Self {
            case_number: case.case_number.clone(),
            title: case.title.clone(),
            description: case.description.clone(),
            plaintiff: case.plaintiff_name().to_string(),
            defendant: case.defendant_name().to_string(),
            parties_involved: case.parties_involved.clone().unwrap_or_default(),
            status: case.status.label().to_string(),
            judge_id: case
                .assigned_judge
                .as_ref()
                .map(|j| j.id.clone())
                .unwrap_or_default(),
            document: case.document.clone().unwrap_or_default(),
            registration_notes: case.registration_notes.clone().unwrap_or_default(),
        }
    }

    /// Build the request body. When editing, fields the form does not show
    /// (party contact details, filing clerk) are carried over from `original`.
    pub fn to_request(&self, original: Option<&Case>) -> CaseRequest {
        let base = original.map(CaseRequest::from).unwrap_or_default();
        CaseRequest {
            case_number: self.case_number.trim().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            plaintiff: merge_party(base.plaintiff, &self.plaintiff),
            defendant: merge_party(base.defendant, &self.defendant),
            parties_involved: non_blank(&self.parties_involved),
            status: non_blank(&self.status).map(|s| CaseStatus::parse(&s)),
            assigned_judge: non_blank(&self.judge_id),
            filed_by: base.filed_by,
            filed_by_name: base.filed_by_name,
            document: non_blank(&self.document),
            registration_notes: non_blank(&self.registration_notes),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn merge_party(existing: Option<Party>, name: &str) -> Option<Party> {
    let name = non_blank(name)?;
    Some(match existing {
        Some(party) => Party { name, ..party },
        None => Party::named(name),
    })
}

/// Case create/edit form. Admins also pick the status and judge; a clerk's
/// new filing is stamped with the clerk's id and name.
///
/// The draft is seeded once on mount, so callers remount the editor (or
/// wait for the case to load) rather than swapping `editing` in place.
#[component]
pub fn CaseEditor(
    editing: Option<Case>,
    #[props(default = false)] admin: bool,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let api = use_api();
    let toast = use_toast();

    let initial = editing
        .as_ref()
        .map(CaseDraft::from_case)
        .unwrap_or_default();
    let mut draft = use_signal(|| initial.clone());
    let mut title_error = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut in_flight = use_signal(|| false);

    let judges = use_resource(move || async move {
        if !admin {
            return Vec::new();
        }
        match api().list_judges().await {
            Ok(judges) => judges,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load judges");
                Vec::new()
            }
        }
    });

    let original = editing.clone();
    let handle_save = move |_: FormEvent| {
        if *in_flight.read() {
            return;
        }
        title_error.set(String::new());
        error_msg.set(None);

        let mut request = draft.read().to_request(original.as_ref());
        if original.is_none() && !admin {
            let user = auth.user();
            request.filed_by = Some(user.id);
            request.filed_by_name = Some(user.name);
        }
        let target = original.as_ref().map(|c| c.id.clone());

        in_flight.set(true);
        spawn(async move {
            let client = api();
            let result = match target.as_deref() {
                Some(id) => client.update_case(id, &request).await,
                None => client.create_case(&request).await,
            };
            in_flight.set(false);
            match result {
                Ok(()) => {
                    let msg = if target.is_some() {
                        "Case updated successfully"
                    } else {
                        "Case created successfully"
                    };
                    toast.success(msg.to_string(), ToastOptions::new());
                    on_saved.call(());
                }
                Err(e) => match e.field("title") {
                    Some(msg) => title_error.set(msg.to_string()),
                    None => error_msg.set(Some(e.friendly_message())),
                },
            }
        });
    };

    let dirty = *draft.read() != initial;
    let mut show_discard = use_signal(|| false);
    let try_cancel = move |_: MouseEvent| {
        if dirty {
            show_discard.set(true);
        } else {
            on_cancel.call(());
        }
    };

    let judge_options = judges.read().clone().unwrap_or_default();
    let submit_label = if editing.is_some() { "Save Changes" } else { "Create Case" };
    let d = draft.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./case_form.css") }

        Form { onsubmit: handle_save, class: "case-form",
            if let Some(err) = error_msg() {
                FormMessage { success: false, message: err }
            }

            FormRow {
                Input {
                    label: "Case Number",
                    value: d.case_number.clone(),
                    placeholder: "e.g., CV-2024-0113",
                    on_input: move |e: FormEvent| draft.with_mut(|f| f.case_number = e.value()),
                }
                Input {
                    label: "Title",
                    required: true,
                    value: d.title.clone(),
                    error: title_error(),
                    placeholder: "e.g., Smith v. Jones",
                    on_input: move |e: FormEvent| draft.with_mut(|f| f.title = e.value()),
                }
            }

            Textarea {
                label: "Description",
                value: d.description.clone(),
                placeholder: "Brief summary of the claim...",
                on_input: move |e: FormEvent| draft.with_mut(|f| f.description = e.value()),
            }

            FormRow {
                Input {
                    label: "Plaintiff",
                    value: d.plaintiff.clone(),
                    on_input: move |e: FormEvent| draft.with_mut(|f| f.plaintiff = e.value()),
                }
                Input {
                    label: "Defendant",
                    value: d.defendant.clone(),
                    on_input: move |e: FormEvent| draft.with_mut(|f| f.defendant = e.value()),
                }
            }

            Input {
                label: "Parties Involved",
                value: d.parties_involved.clone(),
                placeholder: "Anyone else named in the filing",
                on_input: move |e: FormEvent| draft.with_mut(|f| f.parties_involved = e.value()),
            }

            if admin {
                Separator { caption: "Registry" }
                FormRow {
                    FormSelect {
                        label: "Status",
                        value: d.status.clone(),
                        onchange: move |e: Event<FormData>| draft.with_mut(|f| f.status = e.value()),
                        for status in CaseStatus::LIFECYCLE {
                            option { value: "{status.label()}", "{status.label()}" }
                        }
                    }
                    FormSelect {
                        label: "Assigned Judge",
                        value: d.judge_id.clone(),
                        onchange: move |e: Event<FormData>| draft.with_mut(|f| f.judge_id = e.value()),
                        option { value: "", "Unassigned" }
                        for judge in judge_options {
                            option { value: "{judge.id}", "{judge.name}" }
                        }
                    }
                }
            }

            Separator { caption: "Attachments" }

            Input {
                label: "Document URL",
                input_type: "url",
                value: d.document.clone(),
                placeholder: "https://",
                on_input: move |e: FormEvent| draft.with_mut(|f| f.document = e.value()),
            }
            Textarea {
                label: "Registration Notes",
                rows: 3,
                value: d.registration_notes.clone(),
                on_input: move |e: FormEvent| draft.with_mut(|f| f.registration_notes = e.value()),
            }

            div { class: "case-form-actions",
                Button { variant: ButtonVariant::Outline, onclick: try_cancel, "Cancel" }
                Button {
                    button_type: "submit",
                    loading: in_flight(),
                    loading_label: "Saving...",
                    "{submit_label}"
                }
            }
        }

        AlertDialogRoot {
            open: show_discard(),
            on_open_change: move |open: bool| show_discard.set(open),
            AlertDialogContent {
                AlertDialogTitle { "Discard changes?" }
                AlertDialogDescription {
                    "You have unsaved changes. Close the form without saving?"
                }
                AlertDialogActions {
                    AlertDialogCancel { "Keep Editing" }
                    AlertDialogAction {
                        on_click: move |_: MouseEvent| {
                            show_discard.set(false);
                            on_cancel.call(());
                        },
                        "Discard"
                    }
                }
            }
        }
    }
}

/// `CaseEditor` in a right-hand sheet, used by the admin case table.
#[component]
pub fn CaseFormSheet(
    open: bool,
    editing: Option<Case>,
    #[props(default = false)] admin: bool,
    on_saved: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let (title, description) = if editing.is_some() {
        ("Edit Case", "Update the case record.")
    } else {
        ("New Case", "File a new case with the court.")
    };

    rsx! {
        Sheet { open, on_close, side: SheetSide::Right,
            SheetContent {
                SheetHeader {
                    SheetTitle { "{title}" }
                    SheetDescription { "{description}" }
                    SheetClose { on_close }
                }
                CaseEditor {
                    editing,
                    admin,
                    on_saved: move |_| {
                        on_saved.call(());
                        on_close.call(());
                    },
                    on_cancel: move |_| on_close.call(()),
                }
            }
        }
    }
}
