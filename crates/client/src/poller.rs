//! Notification polling.
//!
//! [`NotificationFeed`] is plain state the UI keeps in a signal; the async
//! helpers here do the network half and never hold the feed across an
//! await point.

use shared_types::{
    mark_read_local, newly_arrived, sort_notifications, unread_count, AppError, Notification,
};
use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

use crate::ApiClient;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationFeed {
    items: Vec<Notification>,
    loaded: bool,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread(&self) -> usize {
        unread_count(&self.items)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Replace the list with a fresh fetch. Returns the unread items that
    /// were not in the previous list. The first fetch returns nothing so a
    /// cold start does not flash every old notification.
    pub fn apply_fetch(&mut self, mut fetched: Vec<Notification>) -> Vec<Notification> {
        sort_notifications(&mut fetched);
        let fresh = if self.loaded {
            newly_arrived(&self.items, &fetched)
                .into_iter()
                .cloned()
                .collect()
        } else {
            Vec::new()
        };
        self.items = fetched;
        self.loaded = true;
        fresh
    }

    /// Optimistically flip `id` to read and re-sort.
    pub fn mark_read(&mut self, id: &str) -> bool {
        let changed = mark_read_local(&mut self.items, id);
        if changed {
            sort_notifications(&mut self.items);
        }
        changed
    }
}

/// What happened after the optimistic local update was sent upstream.
#[derive(Debug)]
pub enum ReadOutcome {
    Confirmed,
    /// The PATCH failed; this is the server's list to replace local state.
    Resynced(Vec<Notification>),
    /// The PATCH and the re-fetch both failed.
    Failed(AppError),
}

/// Send the mark-read call. On failure, fetch the authoritative list so the
/// caller can undo its optimistic update.
pub async fn confirm_read(api: &ApiClient, user_id: &str, id: &str) -> ReadOutcome {
    match api.mark_notification_read(id).await {
        Ok(()) => ReadOutcome::Confirmed,
        Err(e) => {
            tracing::warn!(notification = id, error = %e, "mark-read failed, re-fetching");
            match api.notifications(user_id).await {
                Ok(list) => ReadOutcome::Resynced(list),
                Err(e) => ReadOutcome::Failed(e),
            }
        }
    }
}

/// Sync once, then fetch every `interval` until `on_fetch` breaks.
///
/// `sleep` is injected so the same loop runs on tokio (desktop, tests) and
/// on the browser timer. A failed sync is logged and the loop continues.
pub async fn poll_loop<S, SFut, F>(
    api: ApiClient,
    user_id: String,
    interval: Duration,
    sleep: S,
    mut on_fetch: F,
) where
    S: Fn(Duration) -> SFut,
    SFut: Future<Output = ()>,
    F: FnMut(Result<Vec<Notification>, AppError>) -> ControlFlow<()>,
{
    if let Err(e) = api.sync_notifications(&user_id).await {
        tracing::warn!(user = %user_id, error = %e, "notification sync failed");
    }

    loop {
        let result = api.notifications(&user_id).await;
        if let Err(e) = &result {
            tracing::debug!(user = %user_id, error = %e, "notification poll failed");
        }
        if on_fetch(result).is_break() {
            tracing::debug!(user = %user_id, "notification polling stopped");
            return;
        }
        sleep(interval).await;
    }
}
