// Theme system for the TUI
//
// - TomlTheme: on-disk format with explicit role colors
// - Theme: final resolved theme with all colors ready for use
//
// Theme loading priority:
// 1. External TOML themes from ~/.config/ticketbooth/themes/*.toml
// 2. Bundled themes (compiled in, extracted on first run)
// 3. The default bundled theme
//
// A Theme is an ordinary value handed to each render call; nothing reads
// colors from global state.

mod bundled;
mod toml_format;

pub use toml_format::TomlTheme;

use crate::config::DEFAULT_THEME;
use crate::logging::LogLevel;
use crate::tui::traits::ComponentId;
use ratatui::style::Color;
use ratatui::widgets::BorderType;
use std::path::PathBuf;

/// Theme configuration options
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_theme_background: true,
        }
    }
}

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,

    // ─── UI Element Colors ───────────────────────────────────
    pub border: Color,
    pub highlight: Color, // Maps to border_focused
    pub title: Color,
    pub status_bar: Color,
    pub selection: Color,
    pub selection_fg: Color,
    pub muted: Color,
    pub link: Color,

    // ─── Panel Identity Colors ───────────────────────────────
    pub panel_carousel: Color,
    pub panel_performers: Color,
    pub panel_schedule: Color,
    pub panel_logs: Color,

    // ─── Log Level Colors ────────────────────────────────────
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,

    // ─── Border Style ────────────────────────────────────────
    pub border_type: BorderType,
}

impl Theme {
    /// Load theme by name with default configuration
    pub fn by_name(name: &str) -> Self {
        Self::by_name_with_config(name, &ThemeConfig::default())
    }

    /// Load theme by name, falling back to the default bundled theme
    pub fn by_name_with_config(name: &str, config: &ThemeConfig) -> Self {
        if let Some(theme) = Self::load_toml(name, config) {
            return theme;
        }

        tracing::warn!("Theme '{}' not found, using '{}'", name, DEFAULT_THEME);
        Self::load_toml(DEFAULT_THEME, config).unwrap_or_else(|| Self::hardcoded_default(config))
    }

    /// Load from an external TOML file or a bundled theme
    fn load_toml(name: &str, config: &ThemeConfig) -> Option<Self> {
        let normalized = name.replace(' ', "_");

        if let Some(dir) = Self::themes_dir() {
            for stem in [name, normalized.as_str()] {
                let path = dir.join(format!("{}.toml", stem));
                let Ok(contents) = std::fs::read_to_string(&path) else {
                    continue;
                };
                match TomlTheme::parse(&contents) {
                    Ok(toml_theme) => return Some(Self::from_toml(toml_theme, config)),
                    Err(e) => tracing::warn!("Ignoring theme file {}: {}", path.display(), e),
                }
            }
        }

        let filename = format!("{}.toml", normalized);
        bundled::BUNDLED_THEMES
            .iter()
            .find(|theme| theme.filename.eq_ignore_ascii_case(&filename))
            .and_then(|theme| TomlTheme::parse(theme.content).ok())
            .map(|toml_theme| Self::from_toml(toml_theme, config))
    }

    /// Get themes directory path
    fn themes_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config").join("ticketbooth").join("themes"))
    }

    /// Parse border type string to BorderType enum
    fn parse_border_type(value: Option<&str>) -> BorderType {
        match value {
            Some("rounded") => BorderType::Rounded,
            Some("double") => BorderType::Double,
            Some("thick") => BorderType::Thick,
            _ => BorderType::Plain,
        }
    }

    /// Create theme from native TOML format
    fn from_toml(toml: TomlTheme, config: &ThemeConfig) -> Self {
        let parse = TomlTheme::parse_color;

        let background = if config.use_theme_background {
            parse(&toml.ui.background)
        } else {
            Color::Reset
        };
        let foreground = parse(&toml.ui.foreground);
        let title = parse(&toml.ui.title);
        let border = parse(&toml.ui.border);
        let muted = toml.ui.muted.as_deref().map(parse).unwrap_or(border);

        let (log_error, log_warn, log_info, log_debug, log_trace) = match &toml.logs {
            Some(logs) => (
                parse(&logs.error),
                parse(&logs.warn),
                parse(&logs.info),
                parse(&logs.debug),
                parse(&logs.trace),
            ),
            None => (Color::Red, Color::Yellow, foreground, muted, muted),
        };

        Self {
            name: toml.meta.name.clone(),

            background,
            foreground,

            border,
            highlight: parse(&toml.ui.border_focused),
            title,
            status_bar: parse(&toml.ui.status_bar),
            selection: parse(&toml.ui.selection_bg),
            selection_fg: parse(&toml.ui.selection_fg),
            muted,
            link: toml.ui.link.as_deref().map(parse).unwrap_or(title),

            panel_carousel: parse(&toml.panels.carousel),
            panel_performers: parse(&toml.panels.performers),
            panel_schedule: parse(&toml.panels.schedule),
            panel_logs: parse(&toml.panels.logs),

            log_error,
            log_warn,
            log_info,
            log_debug,
            log_trace,

            border_type: Self::parse_border_type(toml.ui.border_type.as_deref()),
        }
    }

    /// Fallback when even the bundled default cannot be parsed
    fn hardcoded_default(config: &ThemeConfig) -> Self {
        let background = if config.use_theme_background {
            Color::Rgb(28, 27, 34)
        } else {
            Color::Reset
        };

        Self {
            name: "Box Office (Fallback)".to_string(),
            background,
            foreground: Color::Rgb(230, 225, 207),
            border: Color::Rgb(92, 88, 102),
            highlight: Color::Rgb(242, 184, 75),
            title: Color::Rgb(242, 184, 75),
            status_bar: Color::Rgb(201, 194, 173),
            selection: Color::Rgb(58, 53, 67),
            selection_fg: Color::Rgb(255, 244, 214),
            muted: Color::Rgb(138, 132, 148),
            link: Color::Rgb(111, 195, 223),
            panel_carousel: Color::Rgb(242, 184, 75),
            panel_performers: Color::Rgb(232, 119, 109),
            panel_schedule: Color::Rgb(111, 195, 223),
            panel_logs: Color::Rgb(155, 207, 126),
            log_error: Color::Rgb(232, 89, 109),
            log_warn: Color::Rgb(242, 184, 75),
            log_info: Color::Rgb(155, 207, 126),
            log_debug: Color::Rgb(111, 195, 223),
            log_trace: Color::Rgb(138, 132, 148),
            border_type: BorderType::Plain,
        }
    }

    /// Get border color for a panel based on focus state
    pub fn panel_border(&self, panel: ComponentId, focused: bool) -> Color {
        if !focused {
            return self.border;
        }
        match panel {
            ComponentId::Carousel => self.panel_carousel,
            ComponentId::Performers => self.panel_performers,
            ComponentId::Schedule => self.panel_schedule,
            ComponentId::Logs => self.panel_logs,
        }
    }

    /// Color for a log level in the logs panel
    pub fn log_level(&self, level: LogLevel) -> Color {
        match level {
            LogLevel::Error => self.log_error,
            LogLevel::Warn => self.log_warn,
            LogLevel::Info => self.log_info,
            LogLevel::Debug => self.log_debug,
            LogLevel::Trace => self.log_trace,
        }
    }

    /// List all available themes (bundled + external)
    pub fn list_available() -> Vec<String> {
        let mut themes = bundled::list_bundled_themes();

        if let Some(themes_dir) = Self::themes_dir() {
            if let Ok(entries) = std::fs::read_dir(themes_dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "toml") {
                        if let Some(stem) = path.file_stem() {
                            let display_name = stem.to_string_lossy().replace('_', " ");
                            if !themes.iter().any(|t| t.eq_ignore_ascii_case(&display_name)) {
                                themes.push(display_name);
                            }
                        }
                    }
                }
            }
        }

        themes
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::by_name(DEFAULT_THEME)
    }
}

/// Ensure themes directory exists and extract bundled themes on first run
pub fn ensure_themes_extracted() {
    let Some(themes_dir) = Theme::themes_dir() else {
        return;
    };

    if std::fs::create_dir_all(&themes_dir).is_err() {
        return;
    }

    let marker = themes_dir.join(".extracted_v1");
    if marker.exists() {
        return;
    }

    for theme in bundled::BUNDLED_THEMES {
        let path = themes_dir.join(theme.filename);
        // Don't overwrite user modifications
        if !path.exists() {
            let _ = std::fs::write(&path, theme.content);
        }
    }

    let _ = std::fs::write(&marker, "1");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_bundled_theme_parses() {
        for theme in bundled::BUNDLED_THEMES {
            let parsed = TomlTheme::parse(theme.content);
            assert!(parsed.is_ok(), "{} failed: {:?}", theme.filename, parsed.err());
        }
    }

    #[test]
    fn test_bundled_names_match_filenames() {
        for (theme, display) in bundled::BUNDLED_THEMES
            .iter()
            .zip(bundled::list_bundled_themes())
        {
            let parsed = TomlTheme::parse(theme.content).unwrap();
            assert_eq!(parsed.meta.name, display);
        }
    }

    #[test]
    fn test_default_is_box_office() {
        let toml_theme = TomlTheme::parse(bundled::BUNDLED_THEMES[0].content).unwrap();
        let theme = Theme::from_toml(toml_theme, &ThemeConfig::default());
        assert_eq!(theme.name, DEFAULT_THEME);
        assert_eq!(theme.border_type, BorderType::Rounded);
        assert_eq!(theme.background, Color::Rgb(0x1c, 0x1b, 0x22));
    }

    #[test]
    fn test_terminal_background_when_disabled() {
        let toml_theme = TomlTheme::parse(bundled::BUNDLED_THEMES[1].content).unwrap();
        let config = ThemeConfig {
            use_theme_background: false,
        };
        let theme = Theme::from_toml(toml_theme, &config);
        assert_eq!(theme.background, Color::Reset);
    }

    #[test]
    fn test_optional_colors_fall_back() {
        let toml_theme = TomlTheme::parse(
            r##"
[meta]
name = "Sparse"
version = 1

[ui]
background = "#000000"
foreground = "#ffffff"
border = "#444444"
border_focused = "#ffff00"
title = "#00ffff"
status_bar = "#ffffff"
selection_bg = "#333333"
selection_fg = "#ffffff"

[panels]
carousel = "#ffff00"
performers = "#ff00ff"
schedule = "#00ffff"
logs = "#00ff00"
"##,
        )
        .unwrap();
        let theme = Theme::from_toml(toml_theme, &ThemeConfig::default());

        assert_eq!(theme.muted, Color::Rgb(0x44, 0x44, 0x44));
        assert_eq!(theme.link, Color::Rgb(0, 255, 255));
        assert_eq!(theme.log_level(LogLevel::Info), Color::Rgb(255, 255, 255));
        assert_eq!(theme.border_type, BorderType::Plain);
    }

    #[test]
    fn test_panel_border_by_focus() {
        let theme = Theme::hardcoded_default(&ThemeConfig::default());
        assert_eq!(
            theme.panel_border(ComponentId::Schedule, true),
            theme.panel_schedule
        );
        assert_eq!(theme.panel_border(ComponentId::Schedule, false), theme.border);
    }
}
