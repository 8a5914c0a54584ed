//! Command dispatch: bridges CLI args -> Monitor calls -> output formatting.

pub mod alerts;
pub mod cells;
pub mod config_cmd;
pub mod congestion;
pub mod heatmap;
pub mod ingest;
pub mod mobility;
pub mod stats;
pub mod util;

use cellwatch_config::Config;
use cellwatch_core::Monitor;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    monitor: &Monitor,
    global: &GlobalOpts,
    config: &Config,
) -> Result<(), CliError> {
    match cmd {
        Command::Cells(args) => cells::handle(monitor, args, global, config).await,
        Command::Alerts(args) => alerts::handle(monitor, args, global, config).await,
        Command::Congestion(args) => congestion::handle(monitor, args, global, config).await,
        Command::Mobility(args) => mobility::handle(monitor, args, global).await,
        Command::Heatmap(args) => heatmap::handle(monitor, args, global).await,
        Command::Stats => stats::handle(monitor, global).await,
        Command::Ingest(args) => ingest::handle(monitor, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
