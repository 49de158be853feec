use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::PadError;

/// Filename for an export performed on the given date
pub fn export_filename(date: NaiveDate) -> String {
    format!("note-{}.rtf", date.format("%Y-%m-%d"))
}

/// Render the buffer as an RTF document, one paragraph per line
pub fn render_rtf(content: &str) -> String {
    let mut doc = String::from("{\\rtf1\\ansi\\deff0{\\fonttbl{\\f0 Times New Roman;}}\n");

    for line in content.split('\n') {
        doc.push_str("\\f0\\fs24 ");
        doc.push_str(&escape_rtf(line));
        doc.push_str("\\par\n");
    }

    doc.push('}');
    doc
}

/// Escape RTF control characters and encode non-ASCII as unicode escapes
fn escape_rtf(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            c if c.is_ascii() => out.push(c),
            c => {
                // RTF \u takes a signed 16-bit decimal; anything beyond the
                // BMP goes out as a surrogate pair
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{}?", *unit as i16));
                }
            }
        }
    }
    out
}

/// Write the buffer to `<dir>/note-<date>.rtf`
///
/// Returns the written path, or None for an empty/whitespace-only buffer
/// (nothing to export).
pub fn export_note(
    content: &str,
    dir: &Path,
    date: NaiveDate,
) -> Result<Option<PathBuf>, PadError> {
    if content.trim().is_empty() {
        return Ok(None);
    }

    let path = dir.join(export_filename(date));
    fs::write(&path, render_rtf(content))?;
    Ok(Some(path))
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod document_tests;
