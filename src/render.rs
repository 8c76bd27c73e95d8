//! Terminal rendering for timetable types.
//!
//! Cells are painted in their subject's color using owo_colors truecolor.

use owo_colors::OwoColorize;
use timetable_core::{Cell, Subject};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self, width: usize) -> String;
}

impl Render for Cell {
    fn render(&self, width: usize) -> String {
        let text = format!("{:<width$}", truncate(self.name(), width));
        match (self, parse_hex(self.color())) {
            (Cell::Break(_), _) => text.dimmed().to_string(),
            (_, Some((r, g, b))) => text.truecolor(r, g, b).bold().to_string(),
            (_, None) => text,
        }
    }
}

impl Render for Subject {
    fn render(&self, width: usize) -> String {
        let swatch = match parse_hex(&self.color) {
            Some((r, g, b)) => "●".truecolor(r, g, b).to_string(),
            None => "●".to_string(),
        };
        let name = format!("{:<width$}", truncate(&self.name, width));
        format!("{} {} {}", swatch, name, self.color.dimmed())
    }
}

/// Parse "#RRGGBB" into its components
fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Cut `text` to at most `width` characters
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#3B82F6"), Some((0x3B, 0x82, 0xF6)));
        assert_eq!(parse_hex("3B82F6"), None);
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#GGGGGG"), None);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("ICT", 12), "ICT");
        assert_eq!(truncate("Mathematics", 5), "Math…");
    }
}
