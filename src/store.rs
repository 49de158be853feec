//! Persisted note store
//!
//! Owns the single document buffer and its mutation API. Every mutation writes
//! the buffer back to disk so the note survives restarts. Persistence is
//! best-effort: failures are logged and never interrupt editing.

mod note_store;

pub use note_store::{NoteStore, note_path};
