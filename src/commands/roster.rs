use anyhow::Result;
use unicode_width::UnicodeWidthChar;

use crate::catalog;
use crate::glyphs;
use crate::sport::Sport;

/// Interior width of one card box, in display columns.
const BOX_WIDTH: usize = 62;

pub fn format_roster(sports: &[Sport]) -> String {
    let mut output = String::new();

    output.push_str(&format!("\nSports catalog - {} entries\n", sports.len()));
    output.push_str(&format!("{}\n\n", "═".repeat(BOX_WIDTH + 2)));

    if sports.is_empty() {
        output.push_str("The catalog is empty.\n");
        return output;
    }

    for (i, sport) in sports.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let title_line = match glyphs::lookup(&sport.image) {
            Some(glyph) => format!("{} {}", glyph.icon, sport.title),
            None => sport.title.clone(),
        };
        output.push_str(&format!("┌{:─<width$}┐\n", "", width = BOX_WIDTH));
        output.push_str(&boxed_line(&title_line));
        output.push_str(&format!("├{:─<width$}┤\n", "", width = BOX_WIDTH));
        output.push_str(&boxed_line(&sport.info));
        output.push_str(&format!("└{:─<width$}┘\n", "", width = BOX_WIDTH));
    }
    output
}

/// Pad or truncate to the box interior by display width, so double-width
/// icons keep the edges aligned.
fn boxed_line(text: &str) -> String {
    let max = BOX_WIDTH - 2;
    let mut body = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max {
            break;
        }
        body.push(ch);
        width += w;
    }
    format!("│ {}{} │\n", body, " ".repeat(max - width))
}

pub fn run() -> Result<()> {
    let sports = catalog::load()?;
    print!("{}", format_roster(&sports));
    Ok(())
}
