//! Clap derive structures for the `cellwatch` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! This file is also compiled by `build.rs` for man-page generation, so
//! it may only depend on `clap` and `clap_complete`.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// cellwatch -- network-operations monitoring from the command line
#[derive(Debug, Parser)]
#[command(
    name = "cellwatch",
    version,
    about = "Inspect telecom network telemetry from the command line",
    long_about = "A CLI for the cellwatch network-operations dashboard.\n\n\
        Reads cell activity, congestion scores, alerts, and mobility flows\n\
        from the telemetry backend and renders them as tables, charts, and\n\
        machine-readable output.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "CELLWATCH_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend API base URL (overrides profile)
    #[arg(long, short = 'u', env = "CELLWATCH_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Bearer token for the backend
    #[arg(long, env = "CELLWATCH_API_TOKEN", global = true, hide_env = true)]
    pub api_token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "CELLWATCH_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, env = "CELLWATCH_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

/// Aggregation step for timeseries queries.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StepArg {
    Minute,
    Hour,
    Day,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inspect cell activity and load distribution
    #[command(alias = "c")]
    Cells(CellsArgs),

    /// List, resolve, and generate alerts
    #[command(alias = "a")]
    Alerts(AlertsArgs),

    /// Congestion scores, summaries, and correlation
    #[command(alias = "cg")]
    Congestion(CongestionArgs),

    /// Mobility flows between cells and provinces
    #[command(alias = "m")]
    Mobility(MobilityArgs),

    /// Render a cell's weekly day/hour activity heatmap
    Heatmap(HeatmapArgs),

    /// Network-wide counters
    Stats,

    /// Trigger ingestion of one hour slot of source data
    Ingest(IngestArgs),

    /// Manage configuration profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Cells ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CellsArgs {
    #[command(subcommand)]
    pub command: CellsCommand,
}

#[derive(Debug, Subcommand)]
pub enum CellsCommand {
    /// Most active cells for an hour slot
    Top {
        /// Hour slot (RFC 3339); defaults to the backend's latest slot
        #[arg(long)]
        hour: Option<String>,

        /// Number of cells to show
        #[arg(long, default_value = "10")]
        limit: u32,
    },

    /// Detail view for one cell
    Show {
        /// Cell identifier
        cell_id: u32,
    },

    /// Activity timeseries for one cell
    Timeseries {
        /// Cell identifier
        cell_id: u32,

        /// Window start (RFC 3339)
        #[arg(long)]
        from: String,

        /// Window end (RFC 3339)
        #[arg(long)]
        to: String,

        /// Aggregation step
        #[arg(long, value_enum, default_value = "hour")]
        step: StepArg,

        /// Append summary statistics, trend, and a sparkline
        #[arg(long)]
        summary: bool,
    },

    /// Load-distribution histogram across all cells
    Histogram {
        /// Hour slot (RFC 3339); defaults to the backend's latest slot
        #[arg(long)]
        hour: Option<String>,

        /// Histogram bucket width
        #[arg(long, default_value = "10")]
        bucket_size: f64,

        /// Warn threshold for bar coloring (defaults from config)
        #[arg(long)]
        warn: Option<f64>,

        /// Crit threshold for bar coloring (defaults from config)
        #[arg(long)]
        crit: Option<f64>,
    },
}

// ── Alerts ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AlertsArgs {
    #[command(subcommand)]
    pub command: AlertsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AlertsCommand {
    /// List alerts in triage order (critical first)
    List {
        /// Only alerts raised since this timestamp (RFC 3339)
        #[arg(long)]
        since: Option<String>,

        /// Only unresolved alerts
        #[arg(long)]
        unresolved: bool,

        /// Cap the number of rows
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Mark one alert resolved
    Resolve {
        /// Alert identifier
        id: String,
    },

    /// Generate congestion alerts for an hour slot
    Generate {
        /// Hour slot (RFC 3339); defaults to the backend's latest slot
        #[arg(long)]
        hour: Option<String>,

        /// Warn threshold (defaults from config)
        #[arg(long)]
        warn: Option<f64>,

        /// Crit threshold (defaults from config)
        #[arg(long)]
        crit: Option<f64>,

        /// Row cap for the backend scan
        #[arg(long, default_value = "100")]
        limit: u32,
    },
}

// ── Congestion ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CongestionArgs {
    #[command(subcommand)]
    pub command: CongestionCommand,
}

#[derive(Debug, Subcommand)]
pub enum CongestionCommand {
    /// Congestion scores per cell, classified locally
    List {
        /// Hour slot (RFC 3339); defaults to the backend's latest slot
        #[arg(long)]
        hour: Option<String>,

        /// Warn threshold (defaults from config)
        #[arg(long)]
        warn: Option<f64>,

        /// Crit threshold (defaults from config)
        #[arg(long)]
        crit: Option<f64>,

        /// Row cap
        #[arg(long, default_value = "100")]
        limit: u32,
    },

    /// Network-wide traffic summary for an hour slot
    Summary {
        /// Hour slot (RFC 3339); defaults to the backend's latest slot
        #[arg(long)]
        hour: Option<String>,
    },

    /// Correlate congestion score against total activity
    Correlate {
        /// Hour slot (RFC 3339); defaults to the backend's latest slot
        #[arg(long)]
        hour: Option<String>,

        /// Row cap
        #[arg(long, default_value = "100")]
        limit: u32,
    },
}

// ── Mobility ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct MobilityArgs {
    #[command(subcommand)]
    pub command: MobilityCommand,
}

#[derive(Debug, Subcommand)]
pub enum MobilityCommand {
    /// Cell-to-cell movement flows for an hour slot
    Flows {
        /// Hour slot (RFC 3339); defaults to the backend's latest slot
        #[arg(long)]
        hour: Option<String>,

        /// Only flows touching this cell
        #[arg(long)]
        cell: Option<u32>,

        /// Only flows within this province
        #[arg(long)]
        provincia: Option<String>,

        /// Cap the number of rows (sorted by volume)
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Per-province in/out flow summaries
    Provinces,
}

// ── Heatmap ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct HeatmapArgs {
    /// Cell identifier
    pub cell_id: u32,

    /// Window start (RFC 3339); defaults to seven days before `--to`
    #[arg(long)]
    pub from: Option<String>,

    /// Window end (RFC 3339); defaults to the backend's latest slot
    #[arg(long)]
    pub to: Option<String>,
}

// ── Ingest ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct IngestArgs {
    /// Hour slot to ingest (RFC 3339); omit to advance to the next slot
    #[arg(long)]
    pub datetime: Option<String>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create a starter config file
    Init,

    /// Print the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Store a bearer token in the system keyring
    SetToken {
        /// Profile to store the token for
        #[arg(long)]
        profile: Option<String>,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
