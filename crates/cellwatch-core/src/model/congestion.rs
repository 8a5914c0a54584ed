// ── Congestion domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::StatusTier;

use super::cell::GeoPoint;

/// Congestion score for one cell over an hour bucket.
///
/// `reported_tier` is the backend's classification of `score` against the
/// thresholds the *query* was made with. It can disagree with a local
/// reclassification under different warn/crit cut points; whenever the
/// caller supplies its own thresholds, the local
/// [`Thresholds::classify`](crate::analytics::Thresholds::classify) result
/// is authoritative and `reported_tier` is display-only fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellCongestion {
    pub cell_id: u32,
    pub total_activity: f64,
    /// Load relative to capacity, 0..=100.
    pub score: f64,
    pub reported_tier: Option<StatusTier>,
    pub location: Option<GeoPoint>,
}

/// Network-wide traffic summary for one hour bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlySummary {
    pub hour: Option<DateTime<Utc>>,
    pub total_activity: f64,
    pub active_cells: u32,
    pub avg_activity: f64,
}
