// ticketbooth - ticket-site home page in the terminal
//
// The page shows a cyclic image carousel that advances on a timer, a strip
// of featured performers, and a schedule fetched once from the activities
// API with links to seat selection.
//
// Architecture:
// - Page (page.rs): state plus mount/unmount of its timer and fetch
// - Activities client (reqwest): GET {base}/activities, schema-checked
// - TUI (ratatui): renders the page and routes input
// - Demo backend (axum): fixture activities for --demo and demo-api
// - Event system: one mpsc channel carries ticks and fetch completion to
//   the single consumer loop

mod activities;
mod carousel;
mod cli;
mod config;
mod demo_api;
mod logging;
mod model;
mod page;
mod startup;
mod theme;
mod ticker;
mod tui;
mod util;

use activities::ActivitiesClient;
use anyhow::{Context, Result};
use carousel::ImageSet;
use clap::Parser;
use config::Config;
use demo_api::DemoServer;
use logging::{LogBuffer, LogSink};
use page::{HomePage, PageEvent};
use theme::{Theme, ThemeConfig};
use tokio::sync::mpsc;

/// Page events buffered between the background resources and the loop
const PAGE_EVENT_BUFFER: usize = 64;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Subcommands (config, schedule, demo-api) exit early
    if cli::run_command(&cli).await? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    theme::ensure_themes_extracted();

    let mut config = Config::from_env();
    cli.apply_overrides(&mut config);

    // TUI mode captures logs for the logs panel; headless prints them
    let log_buffer = LogBuffer::new();
    let sink = if config.enable_tui {
        LogSink::Tui(log_buffer.clone())
    } else {
        LogSink::Stdout
    };
    let _log_guard = logging::init(&config.logging, sink);

    let demo = if config.demo_mode {
        let server = DemoServer::spawn().await?;
        config.api_url = Some(server.base_url());
        Some(server)
    } else {
        None
    };

    startup::print_startup(&config);
    startup::log_startup(&config);

    let client = ActivitiesClient::new(config.api_url.clone(), config.fetch.timeout())
        .context("Failed to build activities client")?;
    let images = ImageSet::new(config.carousel.images.iter().cloned())
        .context("Carousel needs at least one image (check [carousel].images)")?;
    let page = HomePage::new(images, config.performers.clone());

    let (page_tx, mut page_rx) = mpsc::channel(PAGE_EVENT_BUFFER);
    let mount = page::mount(config.carousel.interval(), client, page_tx);

    let result = if config.enable_tui {
        tracing::info!("Starting TUI");
        let theme = Theme::by_name_with_config(
            &config.theme,
            &ThemeConfig {
                use_theme_background: config.use_theme_background,
            },
        );
        tui::run_tui(page, &mut page_rx, log_buffer, theme).await
    } else {
        tracing::info!("TUI disabled, running in headless mode");
        run_headless(page, &mut page_rx).await
    };

    tracing::info!("Shutting down...");
    if !mount.is_mounted() {
        tracing::warn!("Auto-advance timer stopped before unmount");
    }
    if !mount.fetch_finished() {
        tracing::debug!("Activities fetch still in flight; its result will be dropped");
    }
    mount.unmount();
    // A fetch still in flight finds the channel closed
    drop(page_rx);

    if let Some(server) = demo {
        server.shutdown().await;
    }

    result
}

/// Consume page events until Ctrl+C, logging what the page would show
async fn run_headless(mut page: HomePage, page_rx: &mut mpsc::Receiver<PageEvent>) -> Result<()> {
    log_slide(&page);

    loop {
        tokio::select! {
            Some(event) = page_rx.recv() => {
                let is_tick = event == PageEvent::Tick;
                page.handle(event);
                if is_tick {
                    log_slide(&page);
                } else {
                    log_schedule(&page);
                }
            }

            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl+C")?;
                tracing::info!("Received Ctrl+C");
                break;
            }
        }
    }

    Ok(())
}

fn log_slide(page: &HomePage) {
    let carousel = page.carousel();
    let slots = carousel.slots();
    tracing::info!(
        position = carousel.position(),
        "Now showing {} ({}/{}) [prev: {}, next: {}]",
        slots.center.image,
        carousel.position() + 1,
        carousel.len(),
        slots.left.image,
        slots.right.image
    );
}

fn log_schedule(page: &HomePage) {
    let schedule = page.schedule();
    if schedule.is_empty() {
        tracing::info!("Schedule is empty");
        return;
    }
    tracing::info!("Schedule loaded ({} activities)", schedule.len());
    for entry in schedule {
        tracing::info!(
            "  {} | 時間: {} | 地點: {} | {}",
            entry.name,
            entry.time,
            entry.location,
            entry.route()
        );
    }
}
