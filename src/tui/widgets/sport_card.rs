/// SportCard widget - one catalog entry as a bordered card.
///
/// The read-only projection of a `Sport` onto the screen: icon and title in
/// the border line, the blurb inside. A label missing from the glyph table
/// renders without an icon.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::config::ThemeConfig;
use crate::glyphs;
use crate::sport::Sport;

use super::RenderableWidget;

#[derive(Debug)]
pub struct SportCard<'a> {
    sport: &'a Sport,
    selected: bool,
    grabbed: bool,
}

impl<'a> SportCard<'a> {
    pub fn new(sport: &'a Sport) -> Self {
        Self {
            sport,
            selected: false,
            grabbed: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn grabbed(mut self, grabbed: bool) -> Self {
        self.grabbed = grabbed;
        self
    }

    fn border_style(&self, theme: &ThemeConfig) -> Style {
        if self.grabbed {
            Style::default().fg(theme.grabbed_fg)
        } else if self.selected {
            Style::default().fg(theme.selection_fg)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl RenderableWidget for SportCard<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        let mut title = Vec::new();
        if let Some(glyph) = glyphs::lookup(&self.sport.image) {
            title.push(Span::styled(
                format!("{} ", glyph.icon),
                Style::default().fg(glyph.color),
            ));
        }
        title.push(Span::styled(
            self.sport.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style(theme))
            .title(Line::from(title));

        Paragraph::new(self.sport.info.as_str())
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
