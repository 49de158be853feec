use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "ghostpad";
const NOTE_FILE: &str = "note.txt";

/// Default on-disk location of the persisted note
pub fn note_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(NOTE_FILE))
}

/// The single document buffer, mirrored to disk on every mutation
pub struct NoteStore {
    content: String,
    path: Option<PathBuf>,
}

impl NoteStore {
    /// Load the note from the given path, starting empty if it doesn't exist
    ///
    /// `path` of None disables persistence entirely (used in tests).
    pub fn load(path: Option<PathBuf>) -> Self {
        let content = match &path {
            Some(p) => fs::read_to_string(p).unwrap_or_default(),
            None => String::new(),
        };

        Self { content, path }
    }

    /// Create an in-memory store that never touches disk
    pub fn in_memory() -> Self {
        Self::load(None)
    }

    /// The current buffer text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the whole buffer (the editor mutates wholesale on edit)
    ///
    /// Returns true when the buffer actually changed; unchanged sets skip the
    /// disk write.
    pub fn set_content(&mut self, content: String) -> bool {
        if self.content == content {
            return false;
        }
        self.content = content;
        self.persist();
        true
    }

    /// Append text to the end of the buffer (suggestion acceptance)
    pub fn append(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.content.push_str(text);
        self.persist();
    }

    /// Write the buffer to disk, creating parent directories as needed
    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };

        if let Err(e) = write_note(path, &self.content) {
            log::warn!("Failed to persist note to {}: {}", path.display(), e);
        }
    }
}

fn write_note(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

#[cfg(test)]
#[path = "note_store_tests.rs"]
mod note_store_tests;
