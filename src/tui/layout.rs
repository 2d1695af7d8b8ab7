//! Layout and gesture policy for the board screen.
//!
//! Orientation is derived from the terminal size and decides both the grid
//! span (one or two cards per row) and which gestures are live.

use ratatui::layout::Rect;

/// Height of one sport card in terminal rows, border included.
pub const CARD_HEIGHT: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Classify a terminal size.
    ///
    /// Terminal cells are roughly twice as tall as they are wide, so the
    /// width is halved before comparing against the height.
    pub fn of(width: u16, height: u16) -> Self {
        if width / 2 > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Cards per grid row: 1 in portrait, 2 in landscape.
    pub fn span_count(self) -> u16 {
        match self {
            Orientation::Portrait => 1,
            Orientation::Landscape => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

/// Which gestures are live for a given orientation.
///
/// Computed fresh from the current orientation on every gesture; no state
/// is carried across events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GesturePolicy {
    pub reorder_enabled: bool,
    /// Dismissal is portrait-only; in landscape the card is returned.
    pub dismiss_enabled: bool,
}

impl GesturePolicy {
    pub fn for_orientation(orientation: Orientation) -> Self {
        GesturePolicy {
            reorder_enabled: true,
            dismiss_enabled: orientation == Orientation::Portrait,
        }
    }
}

/// First visible grid row that keeps `selected_row` on screen.
pub fn scroll_row(selected_row: u16, visible_rows: u16) -> u16 {
    if visible_rows == 0 {
        return selected_row;
    }
    selected_row.saturating_sub(visible_rows - 1)
}

/// Row-major card rectangles for the visible part of the grid.
///
/// Returns (card index, area) pairs for every card that fits in `area`,
/// starting at grid row `first_row` with `span` cards per row.
pub fn card_slots(area: Rect, span: u16, count: usize, first_row: u16) -> Vec<(usize, Rect)> {
    let span = span.max(1);
    let col_width = area.width / span;
    if col_width == 0 {
        return Vec::new();
    }
    let visible_rows = area.height / CARD_HEIGHT;
    let mut slots = Vec::new();
    for row in 0..visible_rows {
        for col in 0..span {
            let index = (first_row + row) as usize * span as usize + col as usize;
            if index >= count {
                return slots;
            }
            slots.push((
                index,
                Rect::new(
                    area.x + col * col_width,
                    area.y + row * CARD_HEIGHT,
                    col_width,
                    CARD_HEIGHT,
                ),
            ));
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_of_wide_terminal_is_landscape() {
        assert_eq!(Orientation::of(120, 30), Orientation::Landscape);
        assert_eq!(Orientation::of(80, 24), Orientation::Landscape);
    }

    #[test]
    fn test_orientation_of_tall_terminal_is_portrait() {
        assert_eq!(Orientation::of(80, 50), Orientation::Portrait);
        assert_eq!(Orientation::of(40, 60), Orientation::Portrait);
    }

    #[test]
    fn test_span_count_per_orientation() {
        assert_eq!(Orientation::Portrait.span_count(), 1);
        assert_eq!(Orientation::Landscape.span_count(), 2);
    }

    #[test]
    fn test_orientation_of_is_pure() {
        // Same size always classifies the same way, no hysteresis.
        assert_eq!(Orientation::of(80, 24), Orientation::of(80, 24));
        assert_eq!(Orientation::of(80, 50), Orientation::of(80, 50));
    }

    #[test]
    fn test_dismiss_policy_portrait_only() {
        let portrait = GesturePolicy::for_orientation(Orientation::Portrait);
        assert!(portrait.dismiss_enabled);
        assert!(portrait.reorder_enabled);

        let landscape = GesturePolicy::for_orientation(Orientation::Landscape);
        assert!(!landscape.dismiss_enabled);
        assert!(landscape.reorder_enabled);
    }

    #[test]
    fn test_scroll_row_keeps_selection_visible() {
        assert_eq!(scroll_row(0, 4), 0);
        assert_eq!(scroll_row(3, 4), 0);
        assert_eq!(scroll_row(4, 4), 1);
        assert_eq!(scroll_row(10, 4), 7);
    }

    #[test]
    fn test_card_slots_single_column() {
        let area = Rect::new(0, 0, 40, 15);
        let slots = card_slots(area, 1, 11, 0);
        // 15 rows fit 3 cards of height 5
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0], (0, Rect::new(0, 0, 40, 5)));
        assert_eq!(slots[1], (1, Rect::new(0, 5, 40, 5)));
        assert_eq!(slots[2], (2, Rect::new(0, 10, 40, 5)));
    }

    #[test]
    fn test_card_slots_two_columns_row_major() {
        let area = Rect::new(0, 0, 80, 10);
        let slots = card_slots(area, 2, 11, 0);
        assert_eq!(slots.len(), 4);
        assert_eq!(slots[0], (0, Rect::new(0, 0, 40, 5)));
        assert_eq!(slots[1], (1, Rect::new(40, 0, 40, 5)));
        assert_eq!(slots[2], (2, Rect::new(0, 5, 40, 5)));
        assert_eq!(slots[3], (3, Rect::new(40, 5, 40, 5)));
    }

    #[test]
    fn test_card_slots_respects_first_row_and_count() {
        let area = Rect::new(0, 0, 80, 10);
        let slots = card_slots(area, 2, 5, 2);
        // Rows 2 and 3 hold cards 4..5; only card 4 exists.
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].0, 4);
    }

    #[test]
    fn test_card_slots_empty_when_too_narrow() {
        assert!(card_slots(Rect::new(0, 0, 1, 20), 2, 5, 0).is_empty());
        assert!(card_slots(Rect::new(0, 0, 0, 20), 1, 5, 0).is_empty());
    }
}
