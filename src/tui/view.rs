//! Draws the board screen: header, card grid, status bar.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::layout::{card_slots, scroll_row, CARD_HEIGHT};
use super::state::AppState;
use super::widgets::{RenderableWidget, SportCard, StatusBar};

pub fn draw(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], state);
    draw_grid(frame, chunks[1], state);

    StatusBar::new()
        .with_message(state.status.clone())
        .render(chunks[2], frame.buffer_mut(), &state.config.theme);
}

fn draw_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let header = Line::from(vec![
        Span::styled(" Sports ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!(
                "{} cards · {} · {} col",
                state.sports.len(),
                state.orientation.label(),
                state.span_count()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn draw_grid(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.sports.is_empty() {
        let empty = Paragraph::new("No cards left. Press r to reload the catalog.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let span = state.span_count();
    let visible_rows = (area.height / CARD_HEIGHT).max(1);
    let selected_row = (state.selected / span as usize) as u16;
    let first_row = scroll_row(selected_row, visible_rows);

    for (index, slot) in card_slots(area, span, state.sports.len(), first_row) {
        SportCard::new(&state.sports[index])
            .selected(index == state.selected)
            .grabbed(state.grabbed && index == state.selected)
            .render(slot, frame.buffer_mut(), &state.config.theme);
    }
}
