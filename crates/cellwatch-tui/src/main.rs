//! `cellwatch-tui` — Real-time terminal dashboard for telecom network
//! monitoring.
//!
//! Built on [ratatui](https://ratatui.rs) with reactive data from
//! `cellwatch-core`'s [`EntityStream`](cellwatch_core::EntityStream).
//! Screens are navigable via number keys (1-5): Overview, Congestion,
//! Alerts, Heatmap, and Flows.
//!
//! Logs are written to a file (default `/tmp/cellwatch-tui.log`) to avoid
//! corrupting the terminal UI. A background data bridge task continuously
//! streams entity updates from the monitor into the TUI action loop.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app
//! launch.

mod action;
mod app;
mod component;
mod data_bridge;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use secrecy::SecretString;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cellwatch_core::{Monitor, MonitorConfig, Thresholds};

use crate::app::App;

/// Terminal dashboard for telecom network-operations monitoring.
#[derive(Parser, Debug)]
#[command(name = "cellwatch-tui", version, about)]
struct Cli {
    /// Backend API base URL (e.g., http://localhost:8080/api)
    #[arg(short = 'u', long, env = "CELLWATCH_API_URL")]
    api_url: Option<String>,

    /// Bearer token for the backend
    #[arg(long, env = "CELLWATCH_API_TOKEN", hide_env = true)]
    api_token: Option<String>,

    /// Backend profile from the config file
    #[arg(short = 'p', long, env = "CELLWATCH_PROFILE")]
    profile: Option<String>,

    /// Log file path (defaults to /tmp/cellwatch-tui.log)
    #[arg(long, default_value = "/tmp/cellwatch-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that
/// would corrupt the TUI output. Returns a guard that must be held for
/// the lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cellwatch_tui={log_level}")));

    let log_dir = cli.log_file.parent().unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("cellwatch-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

/// Build a [`Monitor`] from CLI args, if a URL was provided.
fn build_monitor(cli: &Cli) -> Option<Monitor> {
    let url_str = cli.api_url.as_deref()?;
    let api_url = url_str.parse().ok()?;

    let thresholds = Thresholds::new(70.0, 90.0).expect("70/90 are valid thresholds");

    let config = MonitorConfig {
        api_url,
        api_token: cli
            .api_token
            .as_ref()
            .map(|t| SecretString::from(t.clone())),
        timeout: std::time::Duration::from_secs(30),
        refresh_interval_secs: 30,
        thresholds,
        congestion_limit: 100,
    };

    Some(Monitor::new(config))
}

/// Try loading a monitor from the shared config file.
fn build_monitor_from_config(cli: &Cli) -> Option<Monitor> {
    let cfg = cellwatch_config::load_config().ok()?;
    let profile_name = cli
        .profile
        .as_deref()
        .or(cfg.default_profile.as_deref())
        .unwrap_or("default");
    let profile = cfg.profiles.get(profile_name)?;
    let config =
        cellwatch_config::profile_to_monitor_config(profile, profile_name, &cfg.defaults).ok()?;
    Some(Monitor::new(config))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    info!(
        api_url = cli.api_url.as_deref().unwrap_or("(not set)"),
        "starting cellwatch-tui"
    );

    // Priority: CLI flags > config file
    let monitor = build_monitor(&cli).or_else(|| build_monitor_from_config(&cli));
    let mut app = App::new(monitor);
    app.run().await?;

    Ok(())
}
