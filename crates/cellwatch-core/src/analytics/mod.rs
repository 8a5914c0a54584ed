// ── Visualization-transform analytics ──
//
// Pure, synchronous, stateless computations that turn raw metric series
// into the statistics, bucketings, and derived sequences the dashboards
// render: summary statistics, least-squares regression, histogram
// binning, day/hour matrix aggregation, severity triage ordering,
// threshold classification, and sparkline normalization.
//
// None of these functions perform I/O, hold state, or assume their input
// is sorted. They are safe to call concurrently from any number of
// presentation components. Errors are deterministic functions of bad
// input -- there is no transient failure mode and nothing to retry.

pub mod histogram;
pub mod regression;
pub mod series;
pub mod severity;
pub mod sparkline;
pub mod temporal;
pub mod threshold;

pub use histogram::Histogram;
pub use regression::Regression;
pub use series::SeriesSummary;
pub use sparkline::Point;
pub use temporal::{SlotSample, TemporalMatrix};
pub use threshold::{StatusTier, Thresholds};

use thiserror::Error;

/// Invalid-input errors shared by the analytics components.
///
/// These surface directly to the invoking presentation component, which
/// decides the user-visible fallback (typically an empty-state panel).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// A statistics operation received zero elements (or fewer than its
    /// minimum) and no sensible result exists.
    #[error("input series is empty or too short")]
    EmptyInput,

    /// A regression denominator would be zero: every x (or every y) is
    /// identical, so slope and correlation are undefined.
    #[error("degenerate input: {reason}")]
    DegenerateInput { reason: &'static str },

    /// Histogram bucket width must be positive and finite.
    #[error("invalid bucket width: {width}")]
    InvalidBucketWidth { width: f64 },

    /// Threshold cut points must satisfy `0 <= warn < crit <= 100`.
    #[error("invalid thresholds: warn={warn}, crit={crit}")]
    InvalidThresholds { warn: f64, crit: f64 },
}
