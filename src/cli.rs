// CLI module - command-line argument parsing and handlers
//
// Global flags override config for the page itself. Subcommands:
// - config --show|--path|--reset|--edit: configuration management
// - schedule [--json]: fetch the schedule once and print it
// - demo-api [--bind]: serve fixture activities until Ctrl+C

use crate::activities::ActivitiesClient;
use crate::config::{Config, VERSION};
use crate::demo_api::{self, DemoServer};
use crate::logging::{self, LogSink};
use crate::model::ScheduleEntry;
use crate::theme::Theme;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::net::SocketAddr;
use std::process::Command;
use tokio::sync::oneshot;

/// ticketbooth - ticket-site home page in the terminal
#[derive(Parser, Debug)]
#[command(name = "ticketbooth")]
#[command(version = VERSION)]
#[command(about = "Ticket-site home page: carousel, performers and schedule", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the activities API (overrides config and env)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Run without the terminal UI
    #[arg(long, global = true)]
    pub no_tui: bool,

    /// Serve fixture activities locally and use them
    #[arg(long, global = true)]
    pub demo: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Fetch the schedule once and print it
    Schedule {
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve fixture activities at GET /activities
    DemoApi {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3001")]
        bind: SocketAddr,
    },
}

impl Cli {
    /// Apply command-line flags on top of env/file configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = self.api_url.as_ref().filter(|u| !u.trim().is_empty()) {
            config.api_url = Some(url.clone());
        }
        if self.no_tui {
            config.enable_tui = false;
        }
        if self.demo {
            config.demo_mode = true;
        }
    }
}

/// Run a subcommand if one was given. Returns true if one ran (exit after).
pub async fn run_command(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Some(Commands::Config {
            show,
            reset,
            edit,
            path,
        }) => {
            if *path {
                handle_config_path();
            } else if *show {
                handle_config_show(cli);
            } else if *reset {
                handle_config_reset()?;
            } else if *edit {
                handle_config_edit();
            } else {
                println!("Usage: ticketbooth config [--show|--reset|--edit|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --path    Show config file path");
            }
            Ok(true)
        }
        Some(Commands::Schedule { json }) => {
            handle_schedule(cli, *json).await?;
            Ok(true)
        }
        Some(Commands::DemoApi { bind }) => {
            handle_demo_api(*bind).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show(cli: &Cli) {
    let mut config = Config::from_env();
    cli.apply_overrides(&mut config);

    println!("# Effective configuration (flags > env > file > defaults)");
    println!("# Runtime: tui = {}, demo = {}", config.enable_tui, config.demo_mode);
    println!("# Available themes: {}", Theme::list_available().join(", "));
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().context("Failed to flush prompt")?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read answer")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    match Command::new(&editor).arg(&path).status() {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}

/// One-shot fetch; unlike the page, a failure here is the command's error
async fn handle_schedule(cli: &Cli, json: bool) -> Result<()> {
    let mut config = Config::from_env();
    cli.apply_overrides(&mut config);
    let _log_guard = logging::init(&config.logging, LogSink::Stderr);

    let demo = if config.demo_mode {
        Some(DemoServer::spawn().await?)
    } else {
        None
    };
    if let Some(server) = &demo {
        config.api_url = Some(server.base_url());
    }

    let client = ActivitiesClient::new(config.api_url.clone(), config.fetch.timeout())
        .context("Failed to build activities client")?;
    let result = client.fetch_schedule().await;

    if let Some(server) = demo {
        server.shutdown().await;
    }
    let entries = result.context("Failed to load schedule")?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).context("Failed to encode schedule")?
        );
    } else {
        print!("{}", format_schedule(&entries));
    }
    Ok(())
}

/// Plain-text schedule listing
pub fn format_schedule(entries: &[ScheduleEntry]) -> String {
    if entries.is_empty() {
        return "No upcoming activities\n".to_string();
    }

    entries
        .iter()
        .map(|entry| {
            format!(
                "{}\n  時間: {}  地點: {}\n  → {}\n",
                entry.name,
                entry.time,
                entry.location,
                entry.route()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

async fn handle_demo_api(bind: SocketAddr) -> Result<()> {
    let config = Config::from_env();
    let _log_guard = logging::init(&config.logging, LogSink::Stderr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received Ctrl+C, shutting down demo backend...");
        }
        let _ = shutdown_tx.send(());
    });

    eprintln!("Serving fixture activities at http://{}/activities", bind);
    demo_api::serve(bind, shutdown_rx).await
}
