//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use cellwatch_core::{AnalyticsError, CoreError};

/// Exit codes for process termination.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the telemetry backend at {url}")]
    #[diagnostic(
        code(cellwatch::connection_failed),
        help(
            "Check that the backend is running and accessible.\n\
             URL: {url}\n\
             Try: cellwatch stats -u http://localhost:8080/api"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Backend rejected the access token")]
    #[diagnostic(
        code(cellwatch::auth_failed),
        help(
            "Verify your bearer token.\n\
             Store one with: cellwatch config set-token --profile {profile}\n\
             Or set the CELLWATCH_API_TOKEN environment variable."
        )
    )]
    AuthFailed { profile: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(cellwatch::not_found),
        help("Run: cellwatch {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error: {message}")]
    #[diagnostic(code(cellwatch::api_error))]
    ApiError {
        message: String,
        status: Option<u16>,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(cellwatch::validation))]
    Validation { field: String, reason: String },

    /// An analytics computation refused its input (empty or degenerate
    /// series, invalid bucket width or thresholds).
    #[error(transparent)]
    #[diagnostic(
        code(cellwatch::analytics),
        help("The requested computation needs more (or more varied) data points.")
    )]
    Analytics(#[from] AnalyticsError),

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(cellwatch::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: cellwatch config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(cellwatch::config))]
    ConfigInvalid { message: String },

    #[error(transparent)]
    #[diagnostic(code(cellwatch::config))]
    Config(Box<figment::Error>),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(cellwatch::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Timeout ──────────────────────────────────────────────────────
    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(cellwatch::timeout),
        help("Increase timeout with --timeout or check backend responsiveness.")
    )]
    Timeout { seconds: u64 },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(cellwatch::json))]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl From<cellwatch_config::ConfigError> for CliError {
    fn from(err: cellwatch_config::ConfigError) -> Self {
        match err {
            cellwatch_config::ConfigError::Validation { field, reason } => {
                Self::Validation { field, reason }
            }
            cellwatch_config::ConfigError::Figment(e) => Self::Config(e),
            cellwatch_config::ConfigError::Io(e) => Self::Io(e),
            other => Self::ConfigInvalid {
                message: other.to_string(),
            },
        }
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. }
            | Self::Analytics(_)
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },

            CoreError::Unauthorized { message: _ } => CliError::AuthFailed {
                profile: "current".into(),
            },

            CoreError::MonitorDisconnected => CliError::ConnectionFailed {
                url: "(disconnected)".into(),
                source: "Backend connection was lost".into(),
            },

            CoreError::Timeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },

            CoreError::CellNotFound { cell_id } => CliError::NotFound {
                resource_type: "cell".into(),
                identifier: cell_id.to_string(),
                list_command: "cells top".into(),
            },

            CoreError::AlertNotFound { id } => CliError::NotFound {
                resource_type: "alert".into(),
                identifier: id,
                list_command: "alerts list".into(),
            },

            CoreError::ProvinceNotFound { name } => CliError::NotFound {
                resource_type: "province".into(),
                identifier: name,
                list_command: "mobility provinces".into(),
            },

            CoreError::ValidationFailed { message } => CliError::Validation {
                field: "input".into(),
                reason: message,
            },

            CoreError::Rejected { message } => CliError::ApiError {
                message,
                status: None,
            },

            CoreError::Api { message, status } => CliError::ApiError { message, status },

            CoreError::Config { message } => CliError::ConfigInvalid { message },

            CoreError::Internal(message) => CliError::ApiError {
                message,
                status: None,
            },
        }
    }
}
