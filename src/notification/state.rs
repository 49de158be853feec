use std::time::{Duration, Instant};

/// How long a message stays on the status line
const DISPLAY_DURATION: Duration = Duration::from_secs(4);

/// A transient status-line message
pub struct NotificationState {
    message: Option<(String, Instant)>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self { message: None }
    }

    /// Show a message; replaces any currently displayed one
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some((message.into(), now));
    }

    /// The message to display, if it hasn't expired yet
    pub fn active(&mut self, now: Instant) -> Option<&str> {
        if let Some((_, shown_at)) = &self.message {
            if now.duration_since(*shown_at) >= DISPLAY_DURATION {
                self.message = None;
            }
        }
        self.message.as_ref().map(|(message, _)| message.as_str())
    }

    pub fn clear(&mut self) {
        self.message = None;
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
