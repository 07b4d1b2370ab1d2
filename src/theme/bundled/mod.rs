//! Bundled TOML themes (compiled into binary, extracted on first run)
//!
//! These themes are written to ~/.config/ticketbooth/themes/ on first run.
//! Users can then modify them freely.

mod box_office;
mod nord;
mod solarized_light;
mod terminal_ansi;

/// Bundled theme: name and TOML content
pub struct BundledTheme {
    pub filename: &'static str,
    pub content: &'static str,
}

/// All bundled themes
pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        filename: "Box_Office.toml",
        content: box_office::THEME,
    },
    BundledTheme {
        filename: "Nord.toml",
        content: nord::THEME,
    },
    BundledTheme {
        filename: "Solarized_Light.toml",
        content: solarized_light::THEME,
    },
    BundledTheme {
        filename: "Terminal_ANSI.toml",
        content: terminal_ansi::THEME,
    },
];

/// Display names of all bundled themes (underscores become spaces)
pub fn list_bundled_themes() -> Vec<String> {
    BUNDLED_THEMES
        .iter()
        .map(|t| t.filename.trim_end_matches(".toml").replace('_', " "))
        .collect()
}
