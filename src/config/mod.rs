//! Configuration for the home page client
//!
//! Configuration is loaded in order of precedence:
//! 1. Command-line flags (applied by `cli`, highest priority)
//! 2. Environment variables
//! 3. Config file (~/.config/ticketbooth/config.toml)
//! 4. Built-in defaults (lowest priority)

use crate::model::Performer;
use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod page;
mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use observability::{FileLogging, LogRotation, LoggingConfig};
pub use page::{default_performers, CarouselConfig, FetchConfig, FileCarousel, FileFetch};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default theme name (bundled)
pub const DEFAULT_THEME: &str = "Box Office";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the activities API (e.g. "http://localhost:3000").
    /// Not validated: a missing value surfaces as a logged fetch error.
    pub api_url: Option<String>,

    /// Whether to enable the TUI (can be disabled for headless mode)
    pub enable_tui: bool,

    /// Demo mode: serve fixture activities from a local backend
    pub demo_mode: bool,

    /// Theme name: "Box Office", "Nord", "Solarized Light", "Terminal ANSI"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Carousel images and auto-advance period
    pub carousel: CarouselConfig,

    /// Featured performers shown in the strip
    pub performers: Vec<Performer>,

    /// Activities request settings
    pub fetch: FetchConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            enable_tui: true,
            demo_mode: false,
            theme: DEFAULT_THEME.to_string(),
            use_theme_background: true,
            carousel: CarouselConfig::default(),
            performers: default_performers(),
            fetch: FetchConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,

    /// Optional [carousel] section
    pub carousel: Option<FileCarousel>,

    /// Optional [[performers]] entries (replace the built-in list)
    pub performers: Option<Vec<Performer>>,

    /// Optional [fetch] section
    pub fetch: Option<FileFetch>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Interpret an env flag value ("1"/"true" are on)
fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl Config {
    /// Get the config file path: ~/.config/ticketbooth/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("ticketbooth").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        // Ignore errors - config is optional
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// # Panics
    /// Exits the process if the config file exists but cannot be read or
    /// parsed. A broken config should fail fast with a clear error, not
    /// silently fall back to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - [[performers]] entries missing name or image");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run: ticketbooth config --reset\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed config file with an environment lookup
    pub(crate) fn resolve<F>(file: FileConfig, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // API URL: env > file > unset
        let api_url = env("TICKETBOOTH_API_URL")
            .or(file.api_url)
            .filter(|url| !url.trim().is_empty());

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("TICKETBOOTH_NO_TUI")
            .map(|v| !is_truthy(&v))
            .unwrap_or(true);

        // Demo mode: env only (runtime flag)
        let demo_mode = env("TICKETBOOTH_DEMO")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        // Theme: env > file > default
        let theme = env("TICKETBOOTH_THEME")
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        let use_theme_background = file.use_theme_background.unwrap_or(true);

        // Carousel interval: env > file > default
        let interval_override = env("TICKETBOOTH_INTERVAL_MS").and_then(|v| v.parse().ok());
        let carousel = CarouselConfig::from_file(file.carousel, interval_override);

        let performers = file.performers.unwrap_or_else(default_performers);
        let fetch = FetchConfig::from_file(file.fetch);
        let logging = LoggingConfig::from_file(file.logging);

        Self {
            api_url,
            enable_tui,
            demo_mode,
            theme,
            use_theme_background,
            carousel,
            performers,
            fetch,
            logging,
        }
    }
}
