//! Page content configuration: carousel, featured performers, activities fetch
//!
//! Defaults reproduce the site's built-in home page: seven carousel banners
//! rotating every 3 seconds and five featured performers.

use crate::model::Performer;
use serde::Deserialize;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Built-in content
// ─────────────────────────────────────────────────────────────────────────────

/// Default carousel banners, in display order
pub const DEFAULT_CAROUSEL_IMAGES: [&str; 7] = [
    "YOASOBI.jpg",
    "MAYDAY 五月天.jpg",
    "2026 WBC 世界棒球經典賽資格賽.jpg",
    "2024 aespa LIVE TOUR.jpg",
    "周杰倫.jpg",
    "怕胖團.jpg",
    "蘇打綠.jpg",
];

/// Default featured performers (name, portrait image)
pub const DEFAULT_PERFORMERS: [(&str, &str); 5] = [
    ("周杰倫", "周杰倫-直.jpg"),
    ("張惠妹", "張惠妹-直.jpg"),
    (
        "2026 WBC 世界棒球經典賽資格賽",
        "2026 WBC 世界棒球經典賽資格賽-直.jpg",
    ),
    ("2024 aespa LIVE TOUR", "2024 aespa LIVE TOUR-直.jpg"),
    ("怕胖團", "怕胖團-直.jpg"),
];

pub fn default_performers() -> Vec<Performer> {
    DEFAULT_PERFORMERS
        .iter()
        .map(|(name, image)| Performer::new(*name, *image))
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Carousel
// ─────────────────────────────────────────────────────────────────────────────

/// Carousel configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Image identifiers in display order (must not be empty)
    pub images: Vec<String>,
    /// Auto-advance period in milliseconds
    pub interval_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            images: DEFAULT_CAROUSEL_IMAGES.iter().map(|s| s.to_string()).collect(),
            interval_ms: 3000,
        }
    }
}

/// Carousel settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileCarousel {
    pub images: Option<Vec<String>>,
    pub interval_ms: Option<u64>,
}

impl CarouselConfig {
    /// Create from file config with defaults
    ///
    /// `interval_override` comes from the environment and wins over the file.
    /// A zero interval would spin the timer, so it falls back to the default.
    pub fn from_file(file: Option<FileCarousel>, interval_override: Option<u64>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let interval_ms = interval_override
            .or(file.interval_ms)
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.interval_ms);

        Self {
            images: file.images.unwrap_or(defaults.images),
            interval_ms,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Activities fetch
// ─────────────────────────────────────────────────────────────────────────────

/// Activities request settings
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout_secs: 10 }
    }
}

/// Fetch settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileFetch {
    pub timeout_secs: Option<u64>,
}

impl FetchConfig {
    pub fn from_file(file: Option<FileFetch>) -> Self {
        let file = file.unwrap_or_default();
        Self {
            timeout_secs: file
                .timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(Self::default().timeout_secs),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
