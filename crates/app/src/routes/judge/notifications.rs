use client::{confirm_read, NotificationFeed, ReadOutcome};
use dioxus::prelude::*;
use shared_types::Notification;
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, PageActions,
    PageHeader, PageSubtitle, PageTitle, SkeletonRows, ToastOptions,
};

use crate::auth::{use_api, use_auth};
use crate::format_helpers::format_datetime;
use crate::routes::shared::CaseStatusBadge;

fn unread_line(unread: usize) -> String {
    match unread {
        0 => "You're all caught up.".to_string(),
        1 => "1 unread notification".to_string(),
        n => format!("{n} unread notifications"),
    }
}

/// The signed-in user's notifications, kept fresh by the layout's poller.
#[component]
pub fn Notifications() -> Element {
    let api = use_api();
    let auth = use_auth();
    let toast = use_toast();
    let mut feed = use_context::<Signal<NotificationFeed>>();
    let mut refreshing = use_signal(|| false);

    let mark_read = move |id: String| {
        if !feed.with_mut(|f| f.mark_read(&id)) {
            return;
        }
        let user_id = auth.user_id();
        spawn(async move {
            match confirm_read(&api(), &user_id, &id).await {
                ReadOutcome::Confirmed => {}
                ReadOutcome::Resynced(list) => {
                    feed.with_mut(|f| f.apply_fetch(list));
                    toast.error(
                        "Couldn't mark that notification as read.".to_string(),
                        ToastOptions::new(),
                    );
                }
                ReadOutcome::Failed(e) => {
                    tracing::warn!(notification = %id, error = %e, "mark-read and re-fetch both failed");
                    toast.error(e.friendly_message(), ToastOptions::new());
                }
            }
        });
    };

    let refresh = move |_: MouseEvent| {
        if refreshing() {
            return;
        }
        refreshing.set(true);
        let user_id = auth.user_id();
        spawn(async move {
            match api().notifications(&user_id).await {
                Ok(list) => {
                    feed.with_mut(|f| f.apply_fetch(list));
                }
                Err(e) => toast.error(e.friendly_message(), ToastOptions::new()),
            }
            refreshing.set(false);
        });
    };

    let current = feed.read();
    let summary = unread_line(current.unread());

    rsx! {
        PageHeader {
            div {
                PageTitle { "Notifications" }
                PageSubtitle { "{summary}" }
            }
            PageActions {
                Button {
                    variant: ButtonVariant::Outline,
                    loading: refreshing(),
                    loading_label: "Refreshing...",
                    onclick: refresh,
                    "Refresh"
                }
            }
        }

        if !current.is_loaded() {
            SkeletonRows { rows: 4 }
        } else if current.items().is_empty() {
            p { class: "empty-state", "No notifications yet." }
        } else {
            div { class: "notification-list",
                for note in current.items().iter().cloned() {
                    NotificationItem { key: "{note.id}", note, on_read: mark_read }
                }
            }
        }
    }
}

#[component]
fn NotificationItem(note: Notification, on_read: EventHandler<String>) -> Element {
    let unread = note.is_unread();
    let id = note.id.clone();
    let case_line = note.case_line();
    let case_status = note.case_id.as_ref().and_then(|c| c.status.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./notifications.css") }

        div { class: "notification-item", "data-unread": "{unread}",
            Card {
                CardContent {
                    div { class: "notification-item-head",
                        span { class: "notification-item-title", "{note.title}" }
                        if unread {
                            Badge { variant: BadgeVariant::Info, "Unread" }
                        } else {
                            Badge { variant: BadgeVariant::Outline, "Read" }
                        }
                    }
                    p { class: "notification-item-message", "{note.message}" }
                    if let Some(line) = case_line {
                        div { class: "notification-item-case",
                            span { "{line}" }
                            if let Some(status) = case_status {
                                CaseStatusBadge { status }
                            }
                        }
                    }
                    div { class: "notification-item-foot",
                        span { class: "muted", "{format_datetime(note.sent_at.as_ref())}" }
                        if unread {
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_: MouseEvent| on_read.call(id.clone()),
                                "Mark as read"
                            }
                        }
                    }
                }
            }
        }
    }
}
