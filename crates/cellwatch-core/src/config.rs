// ── Runtime connection configuration ──
//
// These types describe *how* to reach the telemetry backend. They carry
// credential data and connection tuning, but never touch disk. The
// CLI/TUI constructs a `MonitorConfig` and hands it in -- core never
// reads config files or environment variables itself.

use secrecy::SecretString;
use url::Url;

use crate::analytics::Thresholds;

/// Configuration for connecting to a single telemetry backend.
///
/// Built by CLI/TUI, passed to `Monitor`. All dependencies are explicit
/// parameters; nothing here is reached through ambient global state.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Backend base URL including the API prefix
    /// (e.g., `http://localhost:8080/api`).
    pub api_url: Url,
    /// Bearer token for the backend, if it requires one.
    pub api_token: Option<SecretString>,
    /// Request timeout.
    pub timeout: std::time::Duration,
    /// How often to perform a full refresh (seconds). 0 = never.
    pub refresh_interval_secs: u64,
    /// Default congestion thresholds used by background refresh.
    ///
    /// The classifier itself has no defaults; these are the per-deployment
    /// defaults that views fall back to when the user has not adjusted
    /// the warn/crit sliders.
    pub thresholds: Thresholds,
    /// Row cap for congestion queries issued by background refresh.
    pub congestion_limit: u32,
}
