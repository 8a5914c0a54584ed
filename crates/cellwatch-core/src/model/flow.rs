// ── Mobility flow and network statistics domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Directional movement volume between two cells over an hour bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MobilityFlow {
    pub from_cell_id: u32,
    pub to_cell_id: u32,
    pub volume: f64,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Aggregated in/out movement volume for one province.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvinceFlow {
    pub provincia: String,
    pub outbound: f64,
    pub inbound: f64,
    pub total: f64,
}

/// Network-wide counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkStats {
    pub total_alerts: u64,
    pub total_cells: u64,
    pub total_traffic_records: u64,
    /// Timestamp of the most recent ingested hour slot, if any.
    pub latest: Option<DateTime<Utc>>,
}
