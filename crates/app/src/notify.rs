use shared_types::{FeatureFlags, Notification};

#[cfg(feature = "desktop")]
const APP_NAME: &str = "CourtSys";

/// Send a desktop notification (no-op on non-desktop platforms).
#[allow(unused_variables)]
pub fn send(title: &str, body: &str) {
    #[cfg(feature = "desktop")]
    {
        if let Err(e) = dioxus_sdk_notification::Notification::new()
            .app_name(APP_NAME.to_string())
            .summary(title.to_string())
            .body(body.to_string())
            .show()
        {
            tracing::warn!(error = %e, "failed to show desktop notification");
        }
    }
}

/// Pick what to pop up for a batch of newly arrived notifications. More
/// than three collapse into a single summary.
fn popups(fresh: &[Notification]) -> Vec<(String, String)> {
    match fresh.len() {
        0 => Vec::new(),
        1..=3 => fresh
            .iter()
            .map(|n| (n.title.clone(), n.message.clone()))
            .collect(),
        n => vec![(
            "New notifications".to_string(),
            format!("You have {n} new notifications."),
        )],
    }
}

/// Announce newly arrived notifications when the feature flag allows it.
pub fn announce(flags: &FeatureFlags, fresh: &[Notification]) {
    if !flags.desktop_notifications {
        return;
    }
    for (title, body) in popups(fresh) {
        send(&title, &body);
    }
}
