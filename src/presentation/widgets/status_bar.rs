//! Status Bar Widget
//!
//! Bottom bar showing key hints and, when the last remote operation
//! failed, the error message.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Status bar widget
pub struct StatusBar<'a> {
    /// Key binding hints
    hints: Vec<(&'a str, &'a str)>,
    /// Informational message
    message: Option<&'a str>,
    /// Error from the last remote operation, rendered over the hints
    error: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            hints: vec![
                ("a", "Add"),
                ("e", "Edit"),
                ("d", "Delete"),
                ("Space", "Toggle"),
                ("q", "Quit"),
            ],
            message: None,
            error: None,
        }
    }

    /// Set custom key hints
    #[must_use]
    pub fn hints(mut self, hints: Vec<(&'a str, &'a str)>) -> Self {
        self.hints = hints;
        self
    }

    /// Set a status message
    #[must_use]
    pub fn message(mut self, message: &'a str) -> Self {
        self.message = Some(message);
        self
    }

    /// Set the error message (takes precedence over the hints)
    #[must_use]
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }
}

impl Default for StatusBar<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg = Style::default().bg(Color::DarkGray);
        for x in area.x..area.x + area.width {
            for y in area.y..area.y + area.height {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(bg);
                }
            }
        }

        if let Some(error) = self.error {
            let line = Line::from(Span::styled(
                format!(" ✗ {error}"),
                Style::default()
                    .fg(Color::Red)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ));
            buf.set_line(area.x, area.y, &line, area.width);
            return;
        }

        let key_style = Style::default()
            .fg(Color::Black)
            .bg(Color::Gray)
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(Color::White).bg(Color::DarkGray);

        let mut spans = Vec::new();
        for (key, desc) in &self.hints {
            spans.push(Span::styled(format!("[{key}]"), key_style));
            spans.push(Span::styled(format!(" {desc}  "), desc_style));
        }
        if let Some(message) = self.message {
            spans.push(Span::styled(format!("│ {message}"), desc_style));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
