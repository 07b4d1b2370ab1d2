// TOML theme format parser
//
// Each theme defines its colors explicitly per role. Optional keys fall back
// to related required colors when the theme is resolved.
//
// Format version: 1

use ratatui::style::Color;
use serde::Deserialize;

/// Root structure for TOML theme files
#[derive(Debug, Clone, Deserialize)]
pub struct TomlTheme {
    pub meta: ThemeMeta,
    pub ui: UiColors,
    pub panels: PanelColors,
    /// Optional log level colors (fall back to UI colors)
    pub logs: Option<LogColors>,
}

/// Theme metadata
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
    #[allow(dead_code)] // For future schema evolution
    pub version: u32,
    #[serde(default)]
    #[allow(dead_code)] // Attribution only
    pub author: Option<String>,
}

/// Base UI chrome colors
#[derive(Debug, Clone, Deserialize)]
pub struct UiColors {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub border_focused: String,
    pub title: String,
    pub status_bar: String,
    pub selection_bg: String,
    pub selection_fg: String,
    /// Secondary text, dimmed carousel slots (falls back to border)
    pub muted: Option<String>,
    /// Seat selection links (falls back to title)
    pub link: Option<String>,
    /// Border style: "plain", "rounded", "double", "thick" (default: plain)
    pub border_type: Option<String>,
}

/// Panel identity colors (focused border)
#[derive(Debug, Clone, Deserialize)]
pub struct PanelColors {
    pub carousel: String,
    pub performers: String,
    pub schedule: String,
    pub logs: String,
}

/// Log level colors for the logs panel
#[derive(Debug, Clone, Deserialize)]
pub struct LogColors {
    pub error: String,
    pub warn: String,
    pub info: String,
    pub debug: String,
    pub trace: String,
}

impl TomlTheme {
    /// Parse a TOML theme from string
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parse a color string to ratatui Color
    /// Supports:
    /// - Hex format: #RRGGBB
    /// - ANSI format: ansi:0-15, ansi:fg, ansi:bg (for terminal-native colors)
    pub fn parse_color(value: &str) -> Color {
        if let Some(ansi) = value.strip_prefix("ansi:") {
            return match ansi {
                "0" => Color::Black,
                "1" => Color::Red,
                "2" => Color::Green,
                "3" => Color::Yellow,
                "4" => Color::Blue,
                "5" => Color::Magenta,
                "6" => Color::Cyan,
                "7" => Color::White,
                "8" => Color::DarkGray,
                "9" => Color::LightRed,
                "10" => Color::LightGreen,
                "11" => Color::LightYellow,
                "12" => Color::LightBlue,
                "13" => Color::LightMagenta,
                "14" => Color::LightCyan,
                "15" => Color::Gray,
                "fg" | "bg" => Color::Reset,
                _ => Color::White,
            };
        }

        let hex = value.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Color::White;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);
        Color::Rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(TomlTheme::parse_color("#ff0000"), Color::Rgb(255, 0, 0));
        assert_eq!(TomlTheme::parse_color("00ff00"), Color::Rgb(0, 255, 0));
        assert_eq!(TomlTheme::parse_color("ansi:3"), Color::Yellow);
        assert_eq!(TomlTheme::parse_color("ansi:bg"), Color::Reset);
        assert_eq!(TomlTheme::parse_color("#abc"), Color::White);
        assert_eq!(TomlTheme::parse_color("#周杰倫"), Color::White);
    }

    #[test]
    fn test_parse_theme() {
        let toml = r##"
[meta]
name = "Test Theme"
version = 1

[ui]
background = "#1e1e2e"
foreground = "#cdd6f4"
border = "#45475a"
border_focused = "#f5c2e7"
title = "#cdd6f4"
status_bar = "#cdd6f4"
selection_bg = "#45475a"
selection_fg = "#cdd6f4"

[panels]
carousel = "#f9e2af"
performers = "#f5c2e7"
schedule = "#89b4fa"
logs = "#a6e3a1"
"##;

        let theme = TomlTheme::parse(toml).unwrap();
        assert_eq!(theme.meta.name, "Test Theme");
        assert_eq!(theme.meta.version, 1);
        assert!(theme.meta.author.is_none());
        assert!(theme.ui.muted.is_none());
        assert!(theme.logs.is_none());
    }

    #[test]
    fn test_missing_panels_rejected() {
        let toml = r##"
[meta]
name = "Broken"
version = 1
"##;
        assert!(TomlTheme::parse(toml).is_err());
    }
}
