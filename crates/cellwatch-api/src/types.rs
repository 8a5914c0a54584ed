// Wire types for the telemetry backend's JSON API.
//
// Field names are camelCase and must match the backend schema exactly.
// Optional fields use `#[serde(default)]` liberally because the backend is
// inconsistent about field presence across endpoints (e.g. the heatmap
// rows carry geo coordinates under either `latitude`/`longitude` or
// `lat`/`lon` depending on the aggregation path that produced them).
// Normalization of those overlaps happens in `cellwatch-core::convert`,
// never here.

use serde::{Deserialize, Serialize};

// ── Traffic ──────────────────────────────────────────────────────────

/// One cell's aggregated traffic for an hour slot, from `/traffic/heatmap`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCellDto {
    pub cell_id: u32,
    pub total_activity: f64,
    #[serde(default)]
    pub square_id: Option<u32>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub sms_in: Option<f64>,
    #[serde(default)]
    pub sms_out: Option<f64>,
    #[serde(default)]
    pub call_in: Option<f64>,
    #[serde(default)]
    pub call_out: Option<f64>,
    #[serde(default)]
    pub internet_traffic: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Entry from `/traffic/top-cells`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCellDto {
    pub cell_id: u32,
    pub total_activity: f64,
    #[serde(default)]
    pub hour: Option<String>,
}

/// One observation from `/traffic/cells/{id}/timeseries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesDto {
    pub timestamp: String,
    pub value: f64,
    #[serde(default)]
    pub metric: Option<String>,
}

/// Cell detail record from `/cells/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellDetailsDto {
    pub cell_id: u32,
    #[serde(default)]
    pub square_id: Option<u32>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub current_load: Option<f64>,
    #[serde(default)]
    pub average_load: Option<f64>,
    #[serde(default)]
    pub alerts: Vec<AlertDto>,
    #[serde(default)]
    pub timeseries: Vec<TimeSeriesDto>,
}

// ── Congestion ───────────────────────────────────────────────────────

/// Congestion-scored cell from `/traffic/congestion`.
///
/// `severity` is the backend's own classification of `score` against the
/// `warn`/`crit` query parameters it was called with. Consumers that let
/// the user adjust thresholds recompute the tier locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CongestionCellDto {
    pub cell_id: u32,
    pub total_activity: f64,
    pub score: f64,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

/// Network-wide traffic summary for one hour, from `/traffic/hourly-summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyTrafficSummaryDto {
    #[serde(default)]
    pub hour: Option<String>,
    pub total_activity: f64,
    pub active_cells: u32,
    #[serde(default)]
    pub avg_activity: Option<f64>,
}

// ── Alerts ───────────────────────────────────────────────────────────

/// Detected anomaly from `/alerts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDto {
    pub id: String,
    pub cell_id: u32,
    #[serde(default)]
    pub square_id: Option<u32>,
    /// `"anomaly"`, `"overload"`, `"outage"`, or `"congestion"`.
    #[serde(rename = "type", default)]
    pub alert_type: Option<String>,
    /// `"low"`, `"medium"`, `"high"`, or `"critical"`.
    pub severity: String,
    #[serde(default)]
    pub message: String,
    pub timestamp: String,
    #[serde(default)]
    pub resolved: bool,
}

// ── Mobility ─────────────────────────────────────────────────────────

/// Directional movement volume between two cells, from `/mobility`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobilityFlowDto {
    pub from_cell_id: u32,
    pub to_cell_id: u32,
    pub flow: f64,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Per-province flow summary from `/provinces`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceFlowDto {
    pub provincia: String,
    #[serde(default)]
    pub outbound_volume: f64,
    #[serde(default)]
    pub inbound_volume: f64,
    #[serde(default)]
    pub total_flow: f64,
}

// ── Stats / ingest ───────────────────────────────────────────────────

/// Network-wide counters from `/stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStatsDto {
    pub total_alerts: u64,
    pub total_cells: u64,
    pub total_traffic_records: u64,
    #[serde(default)]
    pub latest_datetime: Option<String>,
}

/// Response from `POST /stream/slot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotIngestDto {
    pub slot_datetime: String,
    pub sent_events: u64,
}

// ── Query parameters ─────────────────────────────────────────────────

/// Aggregation step for timeseries queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeStep {
    Minute,
    #[default]
    Hour,
    Day,
}

impl TimeStep {
    /// Wire value for the `step` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
        }
    }
}
