//! Transient acknowledgment shown as a toast

use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct NoticeState {
    pub message: Signal<Option<String>>,
    /// Bumped on every `show` so a stale dismiss timer can't close a newer notice
    pub generation: Signal<u64>,
}

impl NoticeState {
    pub fn new() -> Self {
        Self {
            message: Signal::new(None),
            generation: Signal::new(0),
        }
    }

    /// Show a notice, replacing any current one. Returns its generation.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        let next = *self.generation.peek() + 1;
        self.generation.set(next);
        self.message.set(Some(message.into()));
        next
    }

    pub fn dismiss(&mut self) {
        self.message.set(None);
    }

    /// Dismiss only if no newer notice replaced the one from `generation`
    pub fn dismiss_if_current(&mut self, generation: u64) {
        if *self.generation.peek() == generation {
            self.dismiss();
        }
    }
}

impl Default for NoticeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the NoticeState from context
pub fn use_notice_state() -> NoticeState {
    use_context::<NoticeState>()
}
