// ── Metric sample ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observation of one named quantity at one point in time.
///
/// Samples have no identity beyond `(timestamp, metric)`; duplicates are
/// preserved as-is. No consumer may assume a sequence of samples arrives
/// sorted -- aggregation routines sort or bucket explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    pub metric: String,
}
