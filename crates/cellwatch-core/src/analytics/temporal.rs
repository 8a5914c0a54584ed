// ── Day/hour matrix aggregation ──

use chrono::{Datelike, Timelike};
use serde::Serialize;

use crate::model::MetricSample;

pub const DAYS_PER_WEEK: usize = 7;
pub const HOURS_PER_DAY: usize = 24;

/// One `(day, hour, value)` triple destined for the weekly matrix.
///
/// `day` is 0..=6 with Monday = 0, matching the calendar heatmap's
/// row order. Out-of-range coordinates are dropped during aggregation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotSample {
    pub day: u8,
    pub hour: u8,
    pub value: f64,
}

impl SlotSample {
    /// Derive the slot coordinates from a timestamped metric sample.
    pub fn from_metric(sample: &MetricSample) -> Self {
        Self {
            day: sample.timestamp.weekday().num_days_from_monday() as u8,
            hour: sample.timestamp.hour() as u8,
            value: sample.value,
        }
    }
}

/// 7×24 matrix of values keyed by `(weekday, hour)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalMatrix {
    cells: [[f64; HOURS_PER_DAY]; DAYS_PER_WEEK],
}

impl TemporalMatrix {
    /// Fold slot samples into a zero-initialized matrix.
    ///
    /// Each triple **overwrites** its cell -- the last sample for a given
    /// `(day, hour)` wins. Inputs are snapshot-style: a repeated slot is a
    /// correction, not an additive reading, so summing here would double
    /// count. Triples with `day > 6` or `hour > 23` are operator input
    /// noise and are silently dropped.
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = SlotSample>,
    {
        let mut cells = [[0.0; HOURS_PER_DAY]; DAYS_PER_WEEK];
        for sample in samples {
            let (day, hour) = (sample.day as usize, sample.hour as usize);
            if day < DAYS_PER_WEEK && hour < HOURS_PER_DAY {
                cells[day][hour] = sample.value;
            }
        }
        Self { cells }
    }

    /// Value at `(day, hour)`. Out-of-range coordinates read as zero,
    /// mirroring the write-side drop policy.
    pub fn value(&self, day: usize, hour: usize) -> f64 {
        if day < DAYS_PER_WEEK && hour < HOURS_PER_DAY {
            self.cells[day][hour]
        } else {
            0.0
        }
    }

    /// All rows, Monday first.
    pub fn rows(&self) -> &[[f64; HOURS_PER_DAY]; DAYS_PER_WEEK] {
        &self.cells
    }

    /// Largest cell value (zero for an all-empty matrix). Used for
    /// intensity scaling when shading cells.
    pub fn max_value(&self) -> f64 {
        self.cells
            .iter()
            .flatten()
            .copied()
            .fold(0.0_f64, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn last_write_wins_for_repeated_slot() {
        let m = TemporalMatrix::from_samples([
            SlotSample { day: 0, hour: 5, value: 10.0 },
            SlotSample { day: 0, hour: 5, value: 20.0 },
        ]);
        // Overwrite, not sum: 20, never 30.
        assert_eq!(m.value(0, 5), 20.0);
    }

    #[test]
    fn unset_slots_are_zero() {
        let m = TemporalMatrix::from_samples([SlotSample { day: 3, hour: 12, value: 7.5 }]);
        assert_eq!(m.value(3, 12), 7.5);
        assert_eq!(m.value(0, 0), 0.0);
        assert_eq!(m.value(6, 23), 0.0);
    }

    #[test]
    fn out_of_range_triples_are_dropped() {
        let m = TemporalMatrix::from_samples([
            SlotSample { day: 7, hour: 0, value: 99.0 },
            SlotSample { day: 0, hour: 24, value: 99.0 },
            SlotSample { day: 1, hour: 1, value: 1.0 },
        ]);
        assert_eq!(m.value(1, 1), 1.0);
        assert_eq!(m.max_value(), 1.0);
    }

    #[test]
    fn max_value_scans_all_cells() {
        let m = TemporalMatrix::from_samples([
            SlotSample { day: 0, hour: 0, value: 3.0 },
            SlotSample { day: 6, hour: 23, value: 11.0 },
        ]);
        assert_eq!(m.max_value(), 11.0);
    }

    #[test]
    fn slot_from_metric_uses_monday_first_weekday() {
        // 2013-11-04 was a Monday.
        let sample = MetricSample {
            timestamp: Utc
                .with_ymd_and_hms(2013, 11, 4, 18, 0, 0)
                .single()
                .expect("valid timestamp"),
            value: 5.0,
            metric: "total".into(),
        };
        let slot = SlotSample::from_metric(&sample);
        assert_eq!(slot.day, 0);
        assert_eq!(slot.hour, 18);
    }
}
