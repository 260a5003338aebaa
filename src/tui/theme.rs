use ratatui::style::Color;

use crate::model::UiConfig;
use crate::model::task::{Priority, Status};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub muted: Color,
    pub faint: Color,
    pub highlight: Color,
    pub selection_bg: Color,
    pub deadline: Color,
    pub urgent: Color,
    pub high: Color,
    pub medium: Color,
    pub longterm: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0D, 0x0D, 0x14),
            surface: Color::Rgb(0x13, 0x13, 0x1F),
            border: Color::Rgb(0x1E, 0x1E, 0x2E),
            text: Color::Rgb(0xE2, 0xE8, 0xF0),
            dim: Color::Rgb(0x4A, 0x55, 0x68),
            muted: Color::Rgb(0x71, 0x80, 0x96),
            faint: Color::Rgb(0x2D, 0x2D, 0x44),
            highlight: Color::Rgb(0xE2, 0xE8, 0xF0),
            selection_bg: Color::Rgb(0x22, 0x22, 0x33),
            deadline: Color::Rgb(0xFF, 0x6B, 0x6B),
            urgent: Color::Rgb(0xFF, 0x4D, 0x4D),
            high: Color::Rgb(0xFF, 0x8C, 0x42),
            medium: Color::Rgb(0xF5, 0xC8, 0x42),
            longterm: Color::Rgb(0x4C, 0xAF, 0x7D),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "surface" => theme.surface = color,
                "border" => theme.border = color,
                "text" => theme.text = color,
                "dim" => theme.dim = color,
                "muted" => theme.muted = color,
                "faint" => theme.faint = color,
                "highlight" => theme.highlight = color,
                "selection_bg" => theme.selection_bg = color,
                "deadline" => theme.deadline = color,
                "urgent" => theme.urgent = color,
                "high" => theme.high = color,
                "medium" => theme.medium = color,
                "longterm" => theme.longterm = color,
                _ => {}
            }
        }
        theme
    }

    pub fn tier(&self, priority: Priority) -> Color {
        match priority {
            Priority::Urgent => self.urgent,
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Longterm => self.longterm,
        }
    }

    /// Badge text color for a status
    pub fn status(&self, status: Status) -> Color {
        match status {
            Status::DecisionNeeded => Color::Rgb(0xFF, 0x6B, 0x6B),
            Status::Blocked => Color::Rgb(0xC7, 0x7D, 0xFF),
            Status::Waiting => Color::Rgb(0x63, 0xB3, 0xED),
            Status::Todo => Color::Rgb(0x68, 0xD3, 0x91),
            Status::InProgress => Color::Rgb(0xF6, 0xE0, 0x5E),
            Status::Backlog => Color::Rgb(0xA0, 0xAE, 0xC0),
            Status::Done => Color::Rgb(0x4C, 0xAF, 0x7D),
        }
    }

    /// Dot/border color for a status (summary footer)
    pub fn status_dot(&self, status: Status) -> Color {
        match status {
            Status::DecisionNeeded => Color::Rgb(0xFF, 0x4D, 0x4D),
            Status::Blocked => Color::Rgb(0x9B, 0x5D, 0xE5),
            Status::Waiting => Color::Rgb(0x31, 0x82, 0xCE),
            Status::Todo => Color::Rgb(0x38, 0xA1, 0x69),
            Status::InProgress => Color::Rgb(0xD6, 0x9E, 0x2E),
            Status::Backlog => Color::Rgb(0x4A, 0x55, 0x68),
            Status::Done => Color::Rgb(0x2D, 0x7A, 0x57),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn hex_parsing() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn config_overrides_apply() {
        let mut colors = IndexMap::new();
        colors.insert("urgent".to_string(), "#112233".to_string());
        colors.insert("unknown_slot".to_string(), "#445566".to_string());
        colors.insert("medium".to_string(), "bad".to_string());
        let theme = Theme::from_config(&UiConfig { colors });
        assert_eq!(theme.urgent, Color::Rgb(0x11, 0x22, 0x33));
        // Bad values and unknown slots fall back to defaults
        assert_eq!(theme.medium, Theme::default().medium);
    }
}
