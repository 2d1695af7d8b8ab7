/// Widget-based rendering for the board screen.
///
/// Widgets render directly into the ratatui buffer, so they can be
/// exercised in tests without a terminal.

pub mod sport_card;
pub use sport_card::SportCard;

pub mod status_bar;
pub use status_bar::{KeyHint, StatusBar};

use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::ThemeConfig;

/// Core trait for renderable widgets
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig);
}
