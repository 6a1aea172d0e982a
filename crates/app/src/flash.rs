use dioxus::prelude::*;
use shared_ui::FormMessage;
use std::time::Duration;

use crate::auth::use_config;
use crate::platform;

/// Inline success/error banner that clears itself after
/// `notifications.flash_millis`.
///
/// Each message bumps a generation counter so an older timer never clears
/// a newer message.
#[derive(Clone, Copy, PartialEq)]
pub struct Flash {
    message: Signal<Option<(bool, String)>>,
    generation: Signal<u64>,
    millis: u64,
}

pub fn use_flash() -> Flash {
    let millis = use_config().notifications.flash_millis;
    let message = use_signal(|| None);
    let generation = use_signal(|| 0);
    Flash {
        message,
        generation,
        millis,
    }
}

impl Flash {
    pub fn success(&mut self, text: impl Into<String>) {
        self.show(true, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.show(false, text.into());
    }

    pub fn clear(&mut self) {
        self.message.set(None);
    }

    pub fn current(&self) -> Option<(bool, String)> {
        self.message.read().clone()
    }

    fn show(&mut self, success: bool, text: String) {
        let generation = *self.generation.peek() + 1;
        self.generation.set(generation);
        self.message.set(Some((success, text)));

        let mut message = self.message;
        let current = self.generation;
        let wait = Duration::from_millis(self.millis);
        spawn(async move {
            platform::sleep(wait).await;
            if *current.peek() == generation {
                message.set(None);
            }
        });
    }
}

#[component]
pub fn FlashBanner(flash: Flash) -> Element {
    match flash.current() {
        Some((success, message)) => rsx! {
            FormMessage { success, message }
        },
        None => rsx! {},
    }
}
