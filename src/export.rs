//! Document export
//!
//! Serializes the buffer to an RTF document, one paragraph per source line
//! (blank lines become empty paragraphs), named `note-<ISO-date>.rtf`. RTF
//! opens in every major word processor and needs no structured container,
//! which keeps the writer dependency-free.

mod document;

pub use document::{export_filename, export_note, render_rtf};
