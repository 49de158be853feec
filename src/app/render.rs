use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::App;
use crate::ghost;
use crate::suggestion::Phase;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Editor fills the screen; one status line at the bottom
        let layout =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());

        self.render_editor(frame, layout[0]);
        self.render_status_line(frame, layout[1]);
    }

    /// Render the writing surface with the ghost-text overlay
    fn render_editor(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" ghostpad ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = self.textarea.lines();

        if self.content_is_blank() && self.suggestion.visible_text().is_none() {
            let placeholder = Paragraph::new("Start writing...")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(placeholder, inner);
            frame.set_cursor_position((inner.x, inner.y));
            return;
        }

        // One layout computation drives the text, the overlay, and the
        // cursor, so ghost text stays aligned with the buffer cell for cell
        let cursor = self.textarea.cursor();
        let scroll = ghost::viewport_scroll(cursor, lines, inner);
        let text = ghost::overlay_text(lines, self.suggestion.visible_text());
        frame.render_widget(Paragraph::new(text).scroll(scroll), inner);

        let position = ghost::cursor_screen_position(cursor, lines, inner, scroll);
        frame.set_cursor_position(position);
    }

    /// Render the key hints and transient status on the bottom line
    fn render_status_line(&mut self, frame: &mut Frame, area: Rect) {
        let hint_style = Style::default().fg(Color::DarkGray);
        let hints = Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Gray)),
            Span::styled(" accept  ", hint_style),
            Span::styled("Shift+Tab", Style::default().fg(Color::Gray)),
            Span::styled(" retry  ", hint_style),
            Span::styled("Esc", Style::default().fg(Color::Gray)),
            Span::styled(" dismiss  ", hint_style),
            Span::styled("Ctrl+E", Style::default().fg(Color::Gray)),
            Span::styled(" export", hint_style),
        ]);
        frame.render_widget(Paragraph::new(hints), area);

        let status = self.status_text(Instant::now());
        if let Some(status) = status {
            let right = Paragraph::new(Line::from(Span::styled(status, hint_style)))
                .right_aligned();
            frame.render_widget(right, area);
        }
    }

    /// Right-hand status: a notification wins over the streaming indicator
    fn status_text(&mut self, now: Instant) -> Option<String> {
        if let Some(message) = self.notification.active(now) {
            return Some(message.to_string());
        }
        match self.suggestion.phase() {
            Phase::Requesting | Phase::Streaming => Some("Generating...".to_string()),
            _ => None,
        }
    }
}
