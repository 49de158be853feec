//! Ghost-text rendering
//!
//! Builds the combined display text for the editor surface: the buffer in the
//! normal style with the pending suggestion appended in a dimmed style. Both
//! layers come out of one layout computation (same lines, same scroll, same
//! width math), so the ghost text is aligned with the editable text cell for
//! cell by construction. The overlay is display-only; key events never route
//! here.

mod overlay;

pub use overlay::{cursor_screen_position, display_col, overlay_text, viewport_scroll};
