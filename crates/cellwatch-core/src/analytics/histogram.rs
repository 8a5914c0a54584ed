// ── Fixed-width histogram binning ──

use serde::Serialize;

use super::AnalyticsError;

/// Bucket counts over the range `[0, max(series)]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    bucket_width: f64,
    counts: Vec<usize>,
    total: usize,
}

impl Histogram {
    /// The fixed width of every bucket.
    pub fn bucket_width(&self) -> f64 {
        self.bucket_width
    }

    /// Per-bucket membership counts, in range order.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of buckets. Zero for an empty input series.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `true` when the input series was empty.
    ///
    /// This is a valid terminal state, not an error; callers render an
    /// empty-state panel instead of a zero-bar chart.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Half-open value range `[start, end)` covered by bucket `index`.
    pub fn bucket_range(&self, index: usize) -> (f64, f64) {
        let start = index as f64 * self.bucket_width;
        (start, start + self.bucket_width)
    }

    /// Percentage of all samples that landed in bucket `index`.
    pub fn share(&self, index: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.counts[index] as f64 / self.total as f64) * 100.0
    }
}

/// Partition `values` into buckets of width `bucket_width` and count
/// membership.
///
/// `num_buckets = ceil(max / width)`; the index for a value is
/// `min(floor(v / width), num_buckets - 1)`, so the maximum value clamps
/// into the last bucket instead of overflowing past it. Values below zero
/// clamp into bucket 0. An empty series yields zero buckets; a non-empty
/// series whose maximum is zero yields a single bucket holding every
/// sample.
pub fn bin(values: &[f64], bucket_width: f64) -> Result<Histogram, AnalyticsError> {
    if !bucket_width.is_finite() || bucket_width <= 0.0 {
        return Err(AnalyticsError::InvalidBucketWidth {
            width: bucket_width,
        });
    }

    if values.is_empty() {
        return Ok(Histogram {
            bucket_width,
            counts: Vec::new(),
            total: 0,
        });
    }

    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let num_buckets = ((max / bucket_width).ceil() as usize).max(1);

    let mut counts = vec![0usize; num_buckets];
    for &value in values {
        let index = ((value / bucket_width).floor().max(0.0) as usize).min(num_buckets - 1);
        counts[index] += 1;
    }

    Ok(Histogram {
        bucket_width,
        counts,
        total: values.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_cover_range_and_clamp_max() {
        let h = bin(&[5.0, 15.0, 25.0, 95.0], 10.0).expect("valid width");
        assert_eq!(h.len(), 10);
        assert_eq!(h.counts()[0], 1); // 5
        assert_eq!(h.counts()[1], 1); // 15
        assert_eq!(h.counts()[2], 1); // 25
        // 95 sits in the 90..100 bucket; a value exactly at max clamps
        // into the last bucket rather than indexing one past the end.
        assert_eq!(h.counts()[9], 1);
        assert_eq!(h.counts().iter().sum::<usize>(), 4);
    }

    #[test]
    fn exact_max_lands_in_last_bucket() {
        let h = bin(&[10.0, 100.0], 10.0).expect("valid width");
        assert_eq!(h.len(), 10);
        assert_eq!(h.counts()[9], 1);
    }

    #[test]
    fn empty_series_yields_zero_buckets() {
        let h = bin(&[], 10.0).expect("valid width");
        assert!(h.is_empty());
        assert_eq!(h.len(), 0);
    }

    #[test]
    fn all_zero_series_yields_single_bucket() {
        let h = bin(&[0.0, 0.0, 0.0], 10.0).expect("valid width");
        assert_eq!(h.len(), 1);
        assert_eq!(h.counts()[0], 3);
    }

    #[test]
    fn invalid_widths_are_rejected() {
        assert!(matches!(
            bin(&[1.0], 0.0),
            Err(AnalyticsError::InvalidBucketWidth { .. })
        ));
        assert!(matches!(
            bin(&[1.0], -5.0),
            Err(AnalyticsError::InvalidBucketWidth { .. })
        ));
        assert!(matches!(
            bin(&[1.0], f64::NAN),
            Err(AnalyticsError::InvalidBucketWidth { .. })
        ));
    }

    #[test]
    fn bucket_range_and_share() {
        let h = bin(&[5.0, 15.0, 18.0, 25.0], 10.0).expect("valid width");
        assert_eq!(h.bucket_range(1), (10.0, 20.0));
        assert_eq!(h.share(1), 50.0);
    }
}
