use dioxus::prelude::*;
use shared_types::{filter_by_query, CreateUserRequest, UpdateUserRequest, User, UserRole};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    DataTable, DataTableActions, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty,
    DataTableHeader, DataTableRow, Form, FormMessage, FormSelect, Input, PageActions, PageHeader,
    PageTitle, Pagination, SearchBar, Sheet, SheetClose, SheetContent, SheetDescription,
    SheetHeader, SheetSide, SheetTitle, SkeletonRows, ToastOptions,
};

use crate::auth::{use_api, use_auth};
use crate::format_helpers::format_date;
use crate::routes::shared::{page_of, range_summary, ConfirmDialog, LoadError, RoleBadge};
use crate::routes::Route;

/// Only the fields that differ from `original`. A blank password keeps the
/// current one.
fn changed_fields(original: &User, draft: &CreateUserRequest) -> UpdateUserRequest {
    let name = draft.name.trim();
    let email = draft.email.trim();
    UpdateUserRequest {
        name: (name != original.name).then(|| name.to_string()),
        email: (email != original.email).then(|| email.to_string()),
        password: (!draft.password.is_empty()).then(|| draft.password.clone()),
        role: (draft.role != original.role).then_some(draft.role),
    }
}

fn draft_from(user: &User) -> CreateUserRequest {
    CreateUserRequest {
        name: user.name.clone(),
        email: user.email.clone(),
        password: String::new(),
        role: user.role,
    }
}

#[component]
pub fn ManageUsers() -> Element {
    let api = use_api();
    let auth = use_auth();
    let toast = use_toast();

    let mut users = use_resource(move || async move { api().list_users().await });
    let mut query = use_signal(String::new);
    let mut page = use_signal(|| 1usize);

    let mut show_sheet = use_signal(|| false);
    let mut editing = use_signal(|| Option::<User>::None);
    let mut pending_delete = use_signal(|| Option::<User>::None);

    let open_create = move |_: MouseEvent| {
        editing.set(None);
        show_sheet.set(true);
    };

    let confirm_delete = move |_: ()| {
        let Some(user) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        spawn(async move {
            match api().delete_user(&user.id).await {
                Ok(()) => {
                    toast.success(format!("{} deleted", user.name), ToastOptions::new());
                    users.restart();
                }
                Err(e) => {
                    tracing::warn!(user = %user.id, error = %e, "delete user failed");
                    toast.error(e.friendly_message(), ToastOptions::new());
                }
            }
        });
    };

    let me = auth.user_id();
    let delete_prompt = pending_delete()
        .map(|u| format!("{} ({}) will lose access to CourtSys.", u.name, u.email))
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        PageHeader {
            PageTitle { "Manage Users" }
            PageActions {
                Button { onclick: open_create, "Add User" }
            }
        }

        match &*users.read() {
            Some(Ok(all)) => {
                let filtered = filter_by_query(all, &query());
                let current = page_of(&filtered, page());
                rsx! {
                    SearchBar { summary: range_summary(&current.meta),
                        Input {
                            value: query(),
                            placeholder: "Search by name, email or role...",
                            on_input: move |e: FormEvent| {
                                query.set(e.value());
                                page.set(1);
                            },
                        }
                    }

                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Full Name" }
                            DataTableColumn { "Email" }
                            DataTableColumn { "Role" }
                            DataTableColumn { "Registered" }
                            DataTableColumn { "Actions" }
                        }
                        DataTableBody {
                            if current.data.is_empty() {
                                DataTableEmpty { columns: 5, message: "No users found." }
                            }
                            for user in current.data.iter().cloned() {
                                UserRow {
                                    key: "{user.id}",
                                    is_self: user.id == me,
                                    user,
                                    on_edit: move |u: User| {
                                        editing.set(Some(u));
                                        show_sheet.set(true);
                                    },
                                    on_delete: move |u: User| pending_delete.set(Some(u)),
                                }
                            }
                        }
                    }

                    Pagination { page, total_pages: current.meta.total_pages }
                }
            }
            Some(Err(e)) => rsx! {
                LoadError { error: e.clone(), on_retry: move |_| users.restart() }
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
                        if editing.read().is_some() { "Edit User" } else { "Add User" }
                    }
                    SheetDescription { "Staff accounts sign in with their email and password." }
                    SheetClose { on_close: move |_| show_sheet.set(false) }
                }
                UserForm {
                    editing: editing(),
                    on_saved: move |_| {
                        show_sheet.set(false);
                        users.restart();
                    },
                    on_cancel: move |_| show_sheet.set(false),
                }
            }
        }

        ConfirmDialog {
            open: pending_delete.read().is_some(),
            title: "Delete user?",
            description: delete_prompt,
            on_confirm: confirm_delete,
            on_cancel: move |_| pending_delete.set(None),
        }
    }
}

#[component]
fn UserRow(
    user: User,
    is_self: bool,
    on_edit: EventHandler<User>,
    on_delete: EventHandler<User>,
) -> Element {
    let for_edit = user.clone();
    let for_delete = user.clone();

    rsx! {
        DataTableRow {
            DataTableCell { span { class: "cell-strong", "{user.name}" } }
            DataTableCell { "{user.email}" }
            DataTableCell { RoleBadge { role: user.role } }
            DataTableCell { "{format_date(user.created_at.as_ref())}" }
            DataTableActions {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_edit.call(for_edit.clone()),
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: is_self,
                    title: if is_self { "You cannot delete your own account" } else { "" },
                    onclick: move |_| on_delete.call(for_delete.clone()),
                    "Delete"
                }
            }
        }
    }
}

/// Create or edit a staff account. Editing sends only the changed fields.
#[component]
fn UserForm(editing: Option<User>, on_saved: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut draft = use_signal(|| editing.as_ref().map(draft_from).unwrap_or_default());
    let mut field_errors = use_signal(|| (String::new(), String::new(), String::new()));
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut in_flight = use_signal(|| false);

    let original = editing.clone();
    let handle_save = move |_: FormEvent| {
        if *in_flight.read() {
            return;
        }
        error_msg.set(None);
        field_errors.set(Default::default());

        let request = draft.read().clone();
        let original = original.clone();
        in_flight.set(true);
        spawn(async move {
            let client = api();
            let result = match &original {
                Some(user) => client.update_user(&user.id, &changed_fields(user, &request)).await,
                None => client.create_user(&request).await,
            };
            in_flight.set(false);
            match result {
                Ok(()) => {
                    let msg = if original.is_some() { "User updated" } else { "User created" };
                    toast.success(msg.to_string(), ToastOptions::new());
                    on_saved.call(());
                }
                Err(e) if !e.field_errors.is_empty() => field_errors.set((
                    e.field("name").unwrap_or_default().to_string(),
                    e.field("email").unwrap_or_default().to_string(),
                    e.field("password").unwrap_or_default().to_string(),
                )),
                Err(e) => {
                    tracing::warn!(error = %e, "saving user failed");
                    error_msg.set(Some(e.friendly_message()));
                }
            }
        });
    };

    let (name_error, email_error, password_error) = field_errors();
    let d = draft.read().clone();
    let editing_existing = editing.is_some();
    let (password_label, password_hint) = if editing_existing {
        ("New Password", "Leave blank to keep the current password")
    } else {
        ("Password", "")
    };

    rsx! {
        Form { onsubmit: handle_save, class: "user-form",
            if let Some(err) = error_msg() {
                FormMessage { success: false, message: err }
            }
            Input {
                label: "Full Name",
                required: true,
                value: d.name.clone(),
                error: name_error,
                on_input: move |e: FormEvent| draft.with_mut(|f| f.name = e.value()),
            }
            Input {
                label: "Email",
                input_type: "email",
                required: true,
                value: d.email.clone(),
                error: email_error,
                on_input: move |e: FormEvent| draft.with_mut(|f| f.email = e.value()),
            }
            Input {
                label: "{password_label}",
                input_type: "password",
                required: !editing_existing,
                placeholder: "{password_hint}",
                value: d.password.clone(),
                error: password_error,
                on_input: move |e: FormEvent| draft.with_mut(|f| f.password = e.value()),
            }
            FormSelect {
                label: "Role",
                value: "{d.role.as_str()}",
                onchange: move |e: Event<FormData>| {
                    draft.with_mut(|f| f.role = UserRole::from_str_or_default(&e.value()))
                },
                for role in UserRole::ASSIGNABLE {
                    option { value: role.as_str(), "{role.label()}" }
                }
            }
            div { class: "user-form-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    button_type: "submit",
                    loading: in_flight(),
                    loading_label: "Saving...",
                    if editing_existing { "Save Changes" } else { "Create User" }
                }
            }
        }
    }
}

/// Stand-alone page for adding a staff account.
#[component]
pub fn CreateUser() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        PageHeader {
            PageTitle { "Create User" }
        }

        Card { class: "form-page",
            CardHeader {
                CardTitle { "New staff account" }
                CardDescription { "The user can sign in as soon as the account exists." }
            }
            CardContent {
                UserForm {
                    editing: None,
                    on_saved: move |_| {
                        navigator().push(Route::ManageUsers {});
                    },
                    on_cancel: move |_| {
                        navigator().go_back();
                    },
                }
            }
        }
    }
}
