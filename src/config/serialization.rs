//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize performers to `[[performers]]` tables
    pub(super) fn performers_to_toml(&self) -> String {
        let mut output = String::new();
        for performer in &self.performers {
            output.push_str("\n[[performers]]\n");
            output.push_str(&format!("name = {}\n", toml_string(&performer.name)));
            output.push_str(&format!("image = {}\n", toml_string(&performer.image)));
        }
        output
    }

    /// Generate a complete config file (comments included)
    pub fn to_toml(&self) -> String {
        let api_url = match &self.api_url {
            Some(url) => format!("api_url = {}", toml_string(url)),
            None => "# api_url = \"http://localhost:3000\"".to_string(),
        };

        let images = self
            .carousel
            .images
            .iter()
            .map(|image| format!("    {},", toml_string(image)))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"# ticketbooth configuration

# Base URL of the activities API (GET {{api_url}}/activities)
# TICKETBOOTH_API_URL overrides this value
{api_url}

# Theme: Box Office, Nord, Solarized Light, Terminal ANSI
# Custom themes: ~/.config/ticketbooth/themes/<name>.toml
theme = {theme}

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Image carousel
[carousel]
# Auto-advance period (TICKETBOOTH_INTERVAL_MS overrides)
interval_ms = {interval_ms}
images = [
{images}
]

# Activities request
[fetch]
timeout_secs = {timeout_secs}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to TUI buffer or stdout)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}

# Featured performers (horizontal strip)
{performers}"#,
            api_url = api_url,
            theme = toml_string(&self.theme),
            use_bg = self.use_theme_background,
            interval_ms = self.carousel.interval_ms,
            images = images,
            timeout_secs = self.fetch.timeout_secs,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = toml_string(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = toml_string(&self.logging.file_prefix),
            performers = self.performers_to_toml(),
        )
    }
}

/// Quote a string as a TOML basic string
fn toml_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
