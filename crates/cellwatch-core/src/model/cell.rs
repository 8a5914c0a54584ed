// ── Cell activity domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::alert::Alert;
use super::sample::MetricSample;

/// Geographic position of a cell.
///
/// The single normalized form of the wire-level `latitude`/`lat`,
/// `longitude`/`lon` field pairs. Populated only by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Per-service traffic components of one cell-hour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentTraffic {
    pub sms_in: f64,
    pub sms_out: f64,
    pub call_in: f64,
    pub call_out: f64,
    pub internet: f64,
}

impl ComponentTraffic {
    /// Sum of all components.
    pub fn total(&self) -> f64 {
        self.sms_in + self.sms_out + self.call_in + self.call_out + self.internet
    }
}

/// Aggregated traffic for one network cell over an hour bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellActivity {
    pub cell_id: u32,
    pub total_activity: f64,
    pub traffic: ComponentTraffic,
    pub square_id: Option<u32>,
    pub location: Option<GeoPoint>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// One row of the top-cells ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopCell {
    pub cell_id: u32,
    pub total_activity: f64,
    pub hour: Option<DateTime<Utc>>,
}

/// Full detail record for one cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellDetails {
    pub cell_id: u32,
    pub square_id: Option<u32>,
    pub location: Option<GeoPoint>,
    pub current_load: f64,
    pub average_load: f64,
    pub alerts: Vec<Alert>,
    pub timeseries: Vec<MetricSample>,
}
