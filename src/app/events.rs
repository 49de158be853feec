use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::App;

impl App {
    /// Handle a key press event
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let now = Instant::now();
        if self.handle_global_keys(key, now) {
            return;
        }
        self.handle_editor_key(key, now);
    }

    /// Handle the suggestion / app-level key surface
    /// Returns true if the key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Ctrl+C / Ctrl+Q: Exit application
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return true;
        }

        // Ctrl+E: Export the note as a document
        if key.code == KeyCode::Char('e') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.export(now);
            return true;
        }

        // Tab: accept the visible suggestion, else request one
        if key.code == KeyCode::Tab && !key.modifiers.contains(KeyModifiers::CONTROL) {
            if !self.accept_suggestion(now) && !self.content_is_blank() {
                let context = self.content();
                self.suggestion.begin_request(&context);
            }
            return true;
        }

        // Shift+Tab: force a fresh suggestion
        if key.code == KeyCode::BackTab {
            if !self.content_is_blank() {
                let context = self.content();
                self.suggestion.begin_request(&context);
            }
            return true;
        }

        // Escape: dismiss the suggestion, buffer untouched
        if key.code == KeyCode::Esc {
            self.suggestion.dismiss();
            return true;
        }

        false // Key not handled
    }

    /// Forward a key to the editing surface
    fn handle_editor_key(&mut self, key: KeyEvent, now: Instant) {
        // A printable keystroke while ghost text shows implicitly dismisses it
        if self.suggestion.visible_text().is_some() && is_printable(key) {
            self.suggestion.dismiss();
        }

        self.textarea.input(key);
        self.sync_content(now);
    }
}

/// Whether a key would insert a visible character
fn is_printable(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(_))
        && !key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT)
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
