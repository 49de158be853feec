use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use unicode_width::UnicodeWidthChar;

/// Style for the dimmed, non-interactive suggestion overlay
fn ghost_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

/// Build the editor display text: buffer lines plus the ghost suggestion
///
/// The suggestion's first segment continues the last buffer line; any embedded
/// newlines become additional ghost-only lines. With no suggestion this is
/// just the buffer.
pub fn overlay_text<'a>(lines: &'a [String], suggestion: Option<&'a str>) -> Text<'a> {
    let mut out: Vec<Line<'a>> = Vec::with_capacity(lines.len() + 1);

    for line in lines {
        out.push(Line::from(Span::raw(line.as_str())));
    }
    if out.is_empty() {
        out.push(Line::from(Span::raw("")));
    }

    if let Some(suggestion) = suggestion {
        let mut segments = suggestion.split('\n');

        if let Some(first) = segments.next()
            && !first.is_empty()
            && let Some(last) = out.last_mut()
        {
            last.spans.push(Span::styled(first, ghost_style()));
        }

        for segment in segments {
            out.push(Line::from(Span::styled(segment, ghost_style())));
        }
    }

    Text::from(out)
}

/// Display-cell column of character index `col` within `line`
///
/// Sums terminal cell widths so CJK and other wide characters keep the cursor
/// and overlay aligned.
pub fn display_col(line: &str, col: usize) -> usize {
    line.chars()
        .take(col)
        .map(|c| c.width().unwrap_or(0))
        .sum()
}

/// Scroll offsets that keep the cursor inside the viewport
///
/// The same offsets are applied to the combined paragraph, which is what keeps
/// the ghost overlay and the editable text moving together.
pub fn viewport_scroll(cursor: (usize, usize), lines: &[String], area: Rect) -> (u16, u16) {
    let (row, col) = cursor;

    let height = area.height.max(1) as usize;
    let row_scroll = row.saturating_sub(height - 1);

    let line = lines.get(row).map(String::as_str).unwrap_or("");
    let dcol = display_col(line, col);
    let width = area.width.max(1) as usize;
    let col_scroll = dcol.saturating_sub(width - 1);

    (row_scroll.min(u16::MAX as usize) as u16, col_scroll.min(u16::MAX as usize) as u16)
}

/// Screen coordinates of the cursor inside `area` given the active scroll
pub fn cursor_screen_position(
    cursor: (usize, usize),
    lines: &[String],
    area: Rect,
    scroll: (u16, u16),
) -> (u16, u16) {
    let (row, col) = cursor;
    let line = lines.get(row).map(String::as_str).unwrap_or("");
    let dcol = display_col(line, col);

    let x = area.x + (dcol.saturating_sub(scroll.1 as usize)) as u16;
    let y = area.y + (row.saturating_sub(scroll.0 as usize)) as u16;

    (
        x.min(area.x + area.width.saturating_sub(1)),
        y.min(area.y + area.height.saturating_sub(1)),
    )
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod overlay_tests;
