use crate::auth::{use_api, use_auth};
use crate::routes::Route;
use client::sign_in;
use dioxus::prelude::*;
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Form, Input};

/// `/` sends signed-in users to their dashboard and everyone else to the
/// login form.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let target = auth
        .role()
        .and_then(Route::dashboard_for)
        .unwrap_or(Route::Login {});
    navigator().replace(target);

    rsx! {
        div { class: "auth-guard-loading",
            p { "Loading..." }
        }
    }
}

/// Email/password sign-in. On success the session is persisted by
/// `client::sign_in` and the user lands on their role's dashboard.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut email_error = use_signal(String::new);
    let mut password_error = use_signal(String::new);
    let mut loading = use_signal(|| false);

    // Already signed in: skip the form.
    if let Some(route) = auth.role().and_then(Route::dashboard_for) {
        navigator().replace(route);
    }

    let handle_login = move |_: FormEvent| async move {
        loading.set(true);
        error_msg.set(None);
        email_error.set(String::new());
        password_error.set(String::new());

        let client = api();
        let store = auth.store();
        match sign_in(&client, store.store(), &email(), &password()).await {
            Ok(outcome) => {
                let role = outcome.session.role();
                auth.establish(outcome.session);
                match Route::dashboard_for(role) {
                    Some(route) => {
                        navigator().replace(route);
                    }
                    None => {
                        navigator().replace(Route::Unauthorized {});
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "sign-in failed");
                if e.field_errors.is_empty() {
                    error_msg.set(Some(e.friendly_message()));
                } else {
                    email_error.set(e.field("email").unwrap_or_default().to_string());
                    password_error.set(e.field("password").unwrap_or_default().to_string());
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "CourtSys Sign In" }
                    CardDescription { "Enter your court staff credentials" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    Form { onsubmit: handle_login,
                        Input {
                            label: "Email",
                            input_type: "email",
                            id: "email",
                            placeholder: "you@court.gov",
                            required: true,
                            value: email(),
                            error: email_error(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            id: "password",
                            required: true,
                            value: password(),
                            error: password_error(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            loading: loading(),
                            loading_label: "Signing in...",
                            "Sign In"
                        }
                    }
                }
            }
        }
    }
}
