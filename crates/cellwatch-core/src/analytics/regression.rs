// ── Ordinary least-squares regression ──

use serde::Serialize;

use super::AnalyticsError;

/// Fitted line and correlation strength for paired samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation coefficient, in `[-1, 1]`.
    pub correlation: f64,
}

impl Regression {
    /// Coefficient of determination (`r²`).
    pub fn r_squared(&self) -> f64 {
        self.correlation * self.correlation
    }

    /// Predicted y for a given x.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a least-squares line through `(x, y)` pairs and compute Pearson r.
///
/// Requires at least two points. A series with zero variance in x (all
/// x equal) or in y leaves slope/correlation undefined; that surfaces as
/// [`AnalyticsError::DegenerateInput`] rather than a silent `NaN`, so a
/// degenerate scatter can never leak into a rendered percentage. O(n).
pub fn fit(points: &[(f64, f64)]) -> Result<Regression, AnalyticsError> {
    if points.len() < 2 {
        return Err(AnalyticsError::EmptyInput);
    }

    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|(x, _)| x).sum();
    let sum_y: f64 = points.iter().map(|(_, y)| y).sum();
    let mean_x = sum_x / n;
    let mean_y = sum_y / n;

    let mut ss_x = 0.0;
    let mut ss_y = 0.0;
    let mut ss_xy = 0.0;
    for &(x, y) in points {
        let dx = x - mean_x;
        let dy = y - mean_y;
        ss_x += dx * dx;
        ss_y += dy * dy;
        ss_xy += dx * dy;
    }

    if ss_x == 0.0 {
        return Err(AnalyticsError::DegenerateInput {
            reason: "zero variance in x",
        });
    }
    if ss_y == 0.0 {
        return Err(AnalyticsError::DegenerateInput {
            reason: "zero variance in y",
        });
    }

    let slope = ss_xy / ss_x;
    let intercept = (sum_y - slope * sum_x) / n;
    let correlation = ss_xy / (ss_x * ss_y).sqrt();

    Ok(Regression {
        slope,
        intercept,
        correlation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfectly_correlated_input() {
        let r = fit(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]).expect("valid input");
        assert!((r.slope - 2.0).abs() < 1e-12);
        assert!(r.intercept.abs() < 1e-12);
        assert!((r.correlation - 1.0).abs() < 1e-12);
        assert!((r.r_squared() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn inverse_correlated_input() {
        let r = fit(&[(1.0, 6.0), (2.0, 4.0), (3.0, 2.0)]).expect("valid input");
        assert!((r.correlation - (-1.0)).abs() < 1e-12);
        assert!((r.slope - (-2.0)).abs() < 1e-12);
    }

    #[test]
    fn predict_follows_fitted_line() {
        let r = fit(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]).expect("valid input");
        assert!((r.predict(10.0) - 21.0).abs() < 1e-9);
    }

    #[test]
    fn zero_variance_in_x_is_degenerate() {
        let err = fit(&[(5.0, 1.0), (5.0, 2.0), (5.0, 3.0)]).expect_err("degenerate");
        assert!(matches!(err, AnalyticsError::DegenerateInput { .. }));
    }

    #[test]
    fn zero_variance_in_y_is_degenerate() {
        let err = fit(&[(1.0, 9.0), (2.0, 9.0), (3.0, 9.0)]).expect_err("degenerate");
        assert!(matches!(err, AnalyticsError::DegenerateInput { .. }));
    }

    #[test]
    fn fewer_than_two_points_is_empty() {
        assert_eq!(fit(&[]), Err(AnalyticsError::EmptyInput));
        assert_eq!(fit(&[(1.0, 1.0)]), Err(AnalyticsError::EmptyInput));
    }

    #[test]
    fn result_never_contains_nan() {
        // Noisy but valid input: every field must be finite.
        let r = fit(&[(1.0, 2.0), (2.0, 1.5), (3.0, 3.5), (4.0, 3.0)]).expect("valid input");
        assert!(r.slope.is_finite());
        assert!(r.intercept.is_finite());
        assert!(r.correlation.is_finite());
    }
}
