// ── Score-to-tier threshold classification ──

use serde::{Deserialize, Serialize};

use super::AnalyticsError;

/// Discrete status tier for a continuous 0..=100 score.
///
/// Used uniformly for congestion coloring, SLA gauges, and histogram
/// bar tinting, so every view agrees on what "warning" looks like.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StatusTier {
    Normal,
    Warning,
    Critical,
}

/// Validated warn/crit cut points.
///
/// This type has no built-in defaults: every deployment view supplies its
/// own (the shipped configuration defaults to 70/90). Construction is the
/// one place invalid cut points can be rejected, so classification can
/// never be silently wrong -- which is also why there is no `Deserialize`
/// impl to sneak unvalidated values in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    warn: f64,
    crit: f64,
}

impl Thresholds {
    /// Create validated thresholds. Requires `0 <= warn < crit <= 100`.
    pub fn new(warn: f64, crit: f64) -> Result<Self, AnalyticsError> {
        let in_range = (0.0..=100.0).contains(&warn) && (0.0..=100.0).contains(&crit);
        if !in_range || warn >= crit {
            return Err(AnalyticsError::InvalidThresholds { warn, crit });
        }
        Ok(Self { warn, crit })
    }

    pub fn warn(&self) -> f64 {
        self.warn
    }

    pub fn crit(&self) -> f64 {
        self.crit
    }

    /// Map a score to its tier.
    ///
    /// Intervals are closed-open moving upward: a score exactly at a cut
    /// point belongs to the higher tier (`score == warn` is already
    /// `Warning`, `score == crit` is `Critical`).
    pub fn classify(&self, score: f64) -> StatusTier {
        if score >= self.crit {
            StatusTier::Critical
        } else if score >= self.warn {
            StatusTier::Warning
        } else {
            StatusTier::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> Thresholds {
        Thresholds::new(70.0, 90.0).expect("70/90 are valid")
    }

    #[test]
    fn boundaries_belong_to_the_higher_tier() {
        let t = thresholds();
        assert_eq!(t.classify(70.0), StatusTier::Warning);
        assert_eq!(t.classify(90.0), StatusTier::Critical);
    }

    #[test]
    fn values_below_warn_are_normal() {
        let t = thresholds();
        assert_eq!(t.classify(69.9), StatusTier::Normal);
        assert_eq!(t.classify(0.0), StatusTier::Normal);
    }

    #[test]
    fn values_between_cuts_are_warning() {
        let t = thresholds();
        assert_eq!(t.classify(75.0), StatusTier::Warning);
        assert_eq!(t.classify(89.999), StatusTier::Warning);
    }

    #[test]
    fn classification_is_deterministic() {
        let t = thresholds();
        assert_eq!(t.classify(84.2), t.classify(84.2));
    }

    #[test]
    fn inverted_or_equal_cuts_are_rejected() {
        assert!(matches!(
            Thresholds::new(90.0, 70.0),
            Err(AnalyticsError::InvalidThresholds { .. })
        ));
        assert!(matches!(
            Thresholds::new(80.0, 80.0),
            Err(AnalyticsError::InvalidThresholds { .. })
        ));
    }

    #[test]
    fn out_of_range_cuts_are_rejected() {
        assert!(Thresholds::new(-1.0, 50.0).is_err());
        assert!(Thresholds::new(50.0, 101.0).is_err());
    }
}
