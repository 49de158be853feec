use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier};

use super::*;

fn lines(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

fn line_to_string(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

// =========================================================================
// Overlay text
// =========================================================================

#[test]
fn test_buffer_only_when_no_suggestion() {
    let buffer = lines(&["The sky was", "getting dark"]);
    let text = overlay_text(&buffer, None);

    assert_eq!(text.lines.len(), 2);
    assert_eq!(line_to_string(&text.lines[0]), "The sky was");
    assert_eq!(line_to_string(&text.lines[1]), "getting dark");
}

#[test]
fn test_suggestion_continues_last_line() {
    let buffer = lines(&["The sky was"]);
    let text = overlay_text(&buffer, Some("turning orange slowly"));

    assert_eq!(text.lines.len(), 1);
    assert_eq!(
        line_to_string(&text.lines[0]),
        "The sky wasturning orange slowly"
    );
}

#[test]
fn test_suggestion_spans_are_dimmed_and_buffer_is_not() {
    let buffer = lines(&["The sky was"]);
    let text = overlay_text(&buffer, Some("turning"));

    let spans = &text.lines[0].spans;
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].style.fg, None);
    assert_eq!(spans[1].style.fg, Some(Color::DarkGray));
    assert!(spans[1].style.add_modifier.contains(Modifier::ITALIC));
}

#[test]
fn test_multiline_suggestion_adds_ghost_lines() {
    let buffer = lines(&["The sky was"]);
    let text = overlay_text(&buffer, Some("turning orange\nand the wind"));

    assert_eq!(text.lines.len(), 2);
    assert_eq!(line_to_string(&text.lines[0]), "The sky wasturning orange");
    assert_eq!(line_to_string(&text.lines[1]), "and the wind");
    assert_eq!(text.lines[1].spans[0].style.fg, Some(Color::DarkGray));
}

#[test]
fn test_empty_buffer_still_renders_one_line() {
    let text = overlay_text(&[], None);
    assert_eq!(text.lines.len(), 1);
    assert_eq!(line_to_string(&text.lines[0]), "");
}

// =========================================================================
// Width math
// =========================================================================

#[test]
fn test_display_col_ascii() {
    assert_eq!(display_col("hello", 0), 0);
    assert_eq!(display_col("hello", 3), 3);
    assert_eq!(display_col("hello", 5), 5);
}

#[test]
fn test_display_col_wide_chars() {
    // Each CJK character occupies two cells
    assert_eq!(display_col("你好a", 1), 2);
    assert_eq!(display_col("你好a", 2), 4);
    assert_eq!(display_col("你好a", 3), 5);
}

// =========================================================================
// Viewport
// =========================================================================

#[test]
fn test_no_scroll_when_cursor_fits() {
    let buffer = lines(&["short", "lines"]);
    let area = Rect::new(0, 0, 40, 10);
    assert_eq!(viewport_scroll((1, 3), &buffer, area), (0, 0));
}

#[test]
fn test_vertical_scroll_follows_cursor() {
    let buffer: Vec<String> = (0..30).map(|i| format!("line {}", i)).collect();
    let area = Rect::new(0, 0, 40, 10);
    // Cursor on row 25 in a 10-row viewport scrolls 16 rows down
    assert_eq!(viewport_scroll((25, 0), &buffer, area).0, 16);
}

#[test]
fn test_horizontal_scroll_follows_cursor() {
    let buffer = lines(&[&"x".repeat(100)]);
    let area = Rect::new(0, 0, 40, 10);
    assert_eq!(viewport_scroll((0, 100), &buffer, area).1, 61);
}

#[test]
fn test_cursor_screen_position_accounts_for_scroll() {
    let buffer: Vec<String> = (0..30).map(|i| format!("line {}", i)).collect();
    let area = Rect::new(2, 1, 40, 10);
    let scroll = viewport_scroll((25, 4), &buffer, area);
    let (x, y) = cursor_screen_position((25, 4), &buffer, area, scroll);

    assert_eq!(x, 2 + 4);
    assert_eq!(y, 1 + 9); // bottom row of the viewport
}
