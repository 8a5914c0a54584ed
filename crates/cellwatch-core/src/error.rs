// ── Core error types ──
//
// User-facing errors from cellwatch-core. These are NOT API-specific --
// consumers never see HTTP status codes or JSON parse failures directly.
// The `From<cellwatch_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach telemetry backend at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Backend rejected the access token: {message}")]
    Unauthorized { message: String },

    #[error("Monitor is not connected")]
    MonitorDisconnected,

    #[error("Backend request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Cell not found: {cell_id}")]
    CellNotFound { cell_id: u32 },

    #[error("Alert not found: {id}")]
    AlertNotFound { id: String },

    #[error("Province not found: {name}")]
    ProvinceNotFound { name: String },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Operation rejected by backend: {message}")]
    Rejected { message: String },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<cellwatch_api::Error> for CoreError {
    fn from(err: cellwatch_api::Error) -> Self {
        match err {
            cellwatch_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(|u| u.to_string())
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            cellwatch_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            cellwatch_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            cellwatch_api::Error::Unauthorized { message } => CoreError::Unauthorized { message },
            cellwatch_api::Error::Api { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            cellwatch_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
