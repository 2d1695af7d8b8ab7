//! Fixed glyph table for sport cards.
//!
//! Maps the image labels shipped with the catalog to a terminal glyph, the
//! way a mobile build would map them to bundled drawables. The table is
//! closed: labels outside it get no glyph and the card renders without an
//! icon.

use phf::phf_map;
use ratatui::style::Color;

/// Icon and accent color for one known sport label.
#[derive(Debug, PartialEq, Eq)]
pub struct SportGlyph {
    /// Emoji icon, double-width in most terminals.
    pub icon: &'static str,
    pub color: Color,
}

static GLYPHS: phf::Map<&'static str, SportGlyph> = phf_map! {
    "Baseball" => SportGlyph { icon: "⚾", color: Color::White },
    "Badminton" => SportGlyph { icon: "🏸", color: Color::LightGreen },
    "Basketball" => SportGlyph { icon: "🏀", color: Color::Rgb(230, 126, 34) },
    "Bowling" => SportGlyph { icon: "🎳", color: Color::LightRed },
    "Cycling" => SportGlyph { icon: "🚴", color: Color::LightCyan },
    "Golf" => SportGlyph { icon: "⛳", color: Color::Green },
    "Running" => SportGlyph { icon: "🏃", color: Color::Yellow },
    "Soccer" => SportGlyph { icon: "⚽", color: Color::White },
    "Swimming" => SportGlyph { icon: "🏊", color: Color::Blue },
    "Table Tennis" => SportGlyph { icon: "🏓", color: Color::LightMagenta },
    "Tennis" => SportGlyph { icon: "🎾", color: Color::LightYellow },
};

/// Look up the glyph for an image label by exact match.
pub fn lookup(label: &str) -> Option<&'static SportGlyph> {
    GLYPHS.get(label)
}
