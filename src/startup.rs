// Startup module - banner and page summary
//
// Printed before the TUI takes over the screen (or in headless mode), and
// mirrored into the log panel so the boot sequence is visible in the TUI.

use crate::config::{Config, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// A line of the startup summary
pub struct PageStatus {
    pub name: &'static str,
    pub ready: bool,
    pub detail: String,
}

/// Print the startup banner and page summary
pub fn print_startup(config: &Config) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}ticketbooth{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}Ticket-site home page{RESET}");
    println!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    println!();

    for status in page_status(config) {
        let (icon, style) = if status.ready {
            (format!("{GREEN}✓{RESET}"), "")
        } else {
            (format!("{DIM}○{RESET}"), DIM)
        };
        println!(
            "    {icon} {style}{:<12}{RESET} {DIM}{}{RESET}",
            status.name, status.detail
        );
    }
    println!();

    match (&config.api_url, config.demo_mode) {
        (_, true) => println!(
            "  {YELLOW}▸{RESET} {YELLOW}Demo mode active{RESET} {DIM}(fixture activities){RESET}"
        ),
        (Some(url), false) => println!("  {MAGENTA}▸{RESET} Activities from {BOLD}{url}{RESET}"),
        (None, false) => println!(
            "  {YELLOW}▸{RESET} No api_url configured {DIM}(schedule will stay empty){RESET}"
        ),
    }
    println!();
}

/// Summary lines for the banner and the log panel
pub fn page_status(config: &Config) -> Vec<PageStatus> {
    vec![
        PageStatus {
            name: "carousel",
            ready: true,
            detail: format!(
                "{} images, every {} ms",
                config.carousel.images.len(),
                config.carousel.interval_ms
            ),
        },
        PageStatus {
            name: "performers",
            ready: !config.performers.is_empty(),
            detail: format!("{} featured", config.performers.len()),
        },
        PageStatus {
            name: "schedule",
            ready: config.api_url.is_some() || config.demo_mode,
            detail: "GET /activities".to_string(),
        },
        PageStatus {
            name: "tui",
            ready: config.enable_tui,
            detail: format!("theme {}", config.theme),
        },
    ]
}

/// Startup messages for the TUI log panel
pub fn log_startup(config: &Config) {
    tracing::info!("═══════════════════════════════════");
    tracing::info!("  🎫  TICKETBOOTH v{}", VERSION);
    tracing::info!("═══════════════════════════════════");

    for status in page_status(config) {
        let icon = if status.ready { "✓" } else { "○" };
        tracing::info!("  {} {} - {}", icon, status.name, status.detail);
    }

    if config.demo_mode {
        tracing::info!("▸ Demo mode active (fixture activities)");
    }
    tracing::info!("Ready.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_status_needs_source() {
        let config = Config::default();
        let schedule = page_status(&config)
            .into_iter()
            .find(|s| s.name == "schedule")
            .unwrap();
        assert!(!schedule.ready);

        let demo = Config {
            demo_mode: true,
            ..Config::default()
        };
        assert!(page_status(&demo).iter().any(|s| s.name == "schedule" && s.ready));
    }
}
