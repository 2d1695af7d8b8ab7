/// StatusBar widget - one line of transient status text and key hints.
///
/// The status message (last dismiss, refused gesture, reset) is shown
/// first in the theme's selection color; the hints follow.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::config::ThemeConfig;

use super::RenderableWidget;

/// A keyboard hint displayed in the status bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: String,
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

#[derive(Debug)]
pub struct StatusBar {
    pub message: Option<String>,
    pub hints: Vec<KeyHint>,
}

impl StatusBar {
    /// Status bar with the default gesture hints.
    pub fn new() -> Self {
        Self {
            message: None,
            hints: vec![
                KeyHint::new("↑↓", "Move"),
                KeyHint::new("Space", "Grab"),
                KeyHint::new("x", "Dismiss"),
                KeyHint::new("r", "Reset"),
                KeyHint::new("q", "Quit"),
            ],
        }
    }

    pub fn with_message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        let mut spans = Vec::new();
        if let Some(message) = &self.message {
            spans.push(Span::styled(
                format!(" {} ", message),
                Style::default()
                    .fg(theme.selection_fg)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw("│"));
        }
        for hint in &self.hints {
            spans.push(Span::styled(
                format!(" {} ", hint.key),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!("{} ", hint.action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::row_text;

    fn render(bar: &StatusBar) -> Buffer {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf, &ThemeConfig::default());
        buf
    }

    #[test]
    fn test_default_hints_are_listed() {
        let text = row_text(&render(&StatusBar::new()), 0);
        for hint in ["Move", "Grab", "Dismiss", "Reset", "Quit"] {
            assert!(text.contains(hint), "missing hint {:?} in {:?}", hint, text);
        }
    }

    #[test]
    fn test_message_leads_the_line() {
        let bar = StatusBar::new().with_message(Some("Dismissed Golf".to_string()));
        let text = row_text(&render(&bar), 0);
        assert!(text.starts_with(" Dismissed Golf "));
    }
}
