use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;

use tui_textarea::{CursorMove, TextArea};

use crate::config::Config;
use crate::export::export_note;
use crate::notification::NotificationState;
use crate::store::NoteStore;
use crate::suggestion::{SuggestionState, spawn_worker};

/// Application state
pub struct App {
    pub textarea: TextArea<'static>,
    pub store: NoteStore,
    pub suggestion: SuggestionState,
    pub notification: NotificationState,
    pub export_dir: PathBuf,
    pub should_quit: bool,
}

impl App {
    /// Create the App and spawn the completion worker thread
    pub fn new(config: &Config, store: NoteStore, export_dir: PathBuf) -> Self {
        let mut app = Self::without_worker(config, store, export_dir);

        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(&config.completion, request_rx, response_tx);
        app.suggestion.set_channels(request_tx, response_rx);

        app
    }

    /// App with no worker thread; tests wire the channels themselves
    pub fn without_worker(config: &Config, store: NoteStore, export_dir: PathBuf) -> Self {
        let mut textarea = if store.content().is_empty() {
            TextArea::default()
        } else {
            TextArea::new(store.content().split('\n').map(str::to_string).collect())
        };

        // Resume where the note left off
        textarea.move_cursor(CursorMove::Bottom);
        textarea.move_cursor(CursorMove::End);

        Self {
            textarea,
            store,
            suggestion: SuggestionState::new(config.completion.debounce_ms),
            notification: NotificationState::new(),
            export_dir,
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The whole buffer as one string
    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// True when the buffer holds no printable text
    pub fn content_is_blank(&self) -> bool {
        self.textarea.lines().iter().all(|l| l.trim().is_empty())
    }

    /// Periodic housekeeping: ingest streamed chunks and fire the idle trigger
    pub fn on_tick(&mut self, now: Instant) {
        self.suggestion.poll_responses();

        if self.suggestion.should_auto_request(now, self.content_is_blank()) {
            let context = self.content();
            self.suggestion.begin_request(&context);
        }
    }

    /// Mirror the textarea into the store after an edit
    ///
    /// A real change persists the note, re-arms the idle timer, and drops any
    /// pending suggestion (its context no longer exists).
    pub fn sync_content(&mut self, now: Instant) {
        let content = self.content();
        if self.store.set_content(content) {
            self.suggestion.record_edit(now);
        }
    }

    /// Commit the visible suggestion into the buffer
    ///
    /// Returns false when nothing was visible to accept.
    pub fn accept_suggestion(&mut self, now: Instant) -> bool {
        let Some(insertion) = self.suggestion.accept() else {
            return false;
        };

        // Suggestions always append at the end of the buffer
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.insert_str(&insertion);

        self.sync_content(now);
        true
    }

    /// Export the buffer as a dated document next to where the user ran us
    pub fn export(&mut self, now: Instant) {
        let content = self.content();
        let date = chrono::Local::now().date_naive();

        match export_note(&content, &self.export_dir, date) {
            Ok(Some(path)) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.notification.show(format!("Exported {}", name), now);
            }
            Ok(None) => {
                self.notification.show("Nothing to export", now);
            }
            Err(e) => {
                // Best-effort: report on the status line and keep editing
                log::warn!("Export failed: {}", e);
                self.notification.show(format!("Export failed: {}", e), now);
            }
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
