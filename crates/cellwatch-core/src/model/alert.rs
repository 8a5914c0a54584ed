// ── Alert domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of anomaly the backend detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum AlertKind {
    Anomaly,
    Overload,
    Outage,
    Congestion,
    Unknown,
}

/// Severity tier of an alert, highest priority first.
///
/// The triage rank (`critical=0 .. low=3`) is the contract consumed by
/// [`analytics::severity`](crate::analytics::severity); the enum order
/// here deliberately matches it so derived comparisons agree with rank.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AlertSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl AlertSeverity {
    /// Ordinal triage rank: critical=0, high=1, medium=2, low=3.
    pub fn rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }
}

/// One detected anomaly.
///
/// `resolved` is owned by the backend; the only local mutation is the
/// optimistic flip applied by the store after a successful resolve call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub cell_id: u32,
    pub square_id: Option<u32>,
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub resolved: bool,
}
