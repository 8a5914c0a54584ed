// ── Series summary statistics ──

use serde::Serialize;

use super::AnalyticsError;

/// Summary statistics for a numeric series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

/// Compute `{min, max, mean, median}` for a non-empty series.
///
/// Median sorts a copy of the input and selects index `n / 2` -- the
/// upper-middle element for even-length inputs, so `[10, 20, 30, 40]`
/// yields `30`. Input order is irrelevant.
pub fn summarize(values: &[f64]) -> Result<SeriesSummary, AnalyticsError> {
    if values.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;
    let median = sorted[sorted.len() / 2];

    Ok(SeriesSummary {
        min,
        max,
        mean,
        median,
    })
}

/// Percentage share of `part` relative to the sum of `values`.
///
/// A zero (or negative-summing) series yields `0.0` rather than a
/// division by zero -- KPI cards render "0%" for an idle network.
pub fn share_of_total(part: f64, values: &[f64]) -> f64 {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }
    (part / total) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_even_length_series() {
        let s = summarize(&[10.0, 20.0, 30.0, 40.0]).expect("non-empty");
        assert_eq!(s.min, 10.0);
        assert_eq!(s.max, 40.0);
        assert_eq!(s.mean, 25.0);
        // Upper-middle convention: index n/2 of the sorted copy.
        assert_eq!(s.median, 30.0);
    }

    #[test]
    fn summary_of_odd_length_series() {
        let s = summarize(&[7.0, 1.0, 3.0]).expect("non-empty");
        assert_eq!(s.median, 3.0);
    }

    #[test]
    fn summary_is_order_independent() {
        let a = summarize(&[40.0, 10.0, 30.0, 20.0]).expect("non-empty");
        let b = summarize(&[10.0, 20.0, 30.0, 40.0]).expect("non-empty");
        assert_eq!(a, b);
    }

    #[test]
    fn summary_bounds_hold() {
        let s = summarize(&[2.5, 9.5, 4.0, 4.0, 8.0]).expect("non-empty");
        assert!(s.min <= s.median && s.median <= s.max);
        assert!(s.min <= s.mean && s.mean <= s.max);
    }

    #[test]
    fn empty_series_is_an_error() {
        assert_eq!(summarize(&[]), Err(AnalyticsError::EmptyInput));
    }

    #[test]
    fn single_element_series() {
        let s = summarize(&[42.0]).expect("non-empty");
        assert_eq!((s.min, s.max, s.mean, s.median), (42.0, 42.0, 42.0, 42.0));
    }

    #[test]
    fn share_of_total_percentage() {
        assert_eq!(share_of_total(25.0, &[25.0, 75.0]), 25.0);
        assert_eq!(share_of_total(5.0, &[]), 0.0);
        assert_eq!(share_of_total(5.0, &[0.0, 0.0]), 0.0);
    }
}
