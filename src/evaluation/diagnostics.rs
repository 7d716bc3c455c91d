//! Diagnostic metrics for smoothing quality assessment.
//!
//! ## Purpose
//!
//! This module provides diagnostic tools for evaluating a kernel-regression
//! fit. It computes goodness-of-fit metrics against the raw series over the
//! valid output region, plus a variance-reduction ratio quantifying how much
//! smoothing the configured parameters actually applied.
//!
//! ## Design notes
//!
//! * **Residual-based**: Metrics are computed from residuals (y - ŷ) over
//!   the bars that received an output value.
//! * **Smoothing amount**: The variance-reduction ratio compares the
//!   first-difference variance of the smoothed series to the raw series',
//!   so a larger `lookback` or window shows up as a smaller ratio.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * Error metrics (RMSE, MAE) are non-negative.
//! * R^2 <= 1 (R^2 = 1 is a perfect fit).
//! * The variance-reduction ratio is 1 for a constant or single-point series.
//!
//! ## Non-goals
//!
//! * This module does not perform the smoothing itself.
//! * This module does not provide p-values or formal hypothesis tests.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Diagnostic metrics for assessing kernel-regression fit quality.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics<T> {
    /// Root Mean Squared Error (RMSE) of smoothed vs. raw values.
    pub rmse: T,

    /// Mean Absolute Error (MAE) of smoothed vs. raw values.
    pub mae: T,

    /// Coefficient of determination (R^2) against the raw series.
    pub r_squared: T,

    /// Standard deviation of the residuals.
    pub residual_sd: T,

    /// First-difference variance of the smoothed series over the raw series'.
    ///
    /// Values below 1 indicate smoothing; smaller is smoother.
    pub variance_reduction: T,
}

impl<T: Float> Diagnostics<T> {
    /// Relative epsilon for detecting a zero total sum of squares.
    const ZERO_SS_EPS: f64 = 1e-12;

    /// Compute diagnostics from the raw series tail and its smoothed estimate.
    ///
    /// `raw` holds the input values at the bars that received an output
    /// (input indices `start_at_bar..`), aligned with `smoothed` and
    /// `residuals`.
    pub fn compute(raw: &[T], smoothed: &[T], residuals: &[T]) -> Self {
        let n = raw.len();
        let n_t = T::from(n).unwrap_or_else(T::one);
        if n == 0 {
            return Self {
                rmse: T::zero(),
                mae: T::zero(),
                r_squared: T::zero(),
                residual_sd: T::zero(),
                variance_reduction: T::one(),
            };
        }

        let mut sum_r = T::zero();
        let mut sum_r_sq = T::zero();
        let mut sum_abs_r = T::zero();
        for &r in residuals {
            sum_r = sum_r + r;
            sum_r_sq = sum_r_sq + r * r;
            sum_abs_r = sum_abs_r + r.abs();
        }

        let rmse = (sum_r_sq / n_t).sqrt();
        let mae = sum_abs_r / n_t;

        // R-squared: 1 - SS_res / SS_tot
        let mean_y = raw.iter().fold(T::zero(), |acc, &y| acc + y) / n_t;
        let ss_tot = raw
            .iter()
            .fold(T::zero(), |acc, &y| acc + (y - mean_y) * (y - mean_y));
        let eps = T::from(Self::ZERO_SS_EPS).unwrap_or_else(T::zero);
        let r_squared = if ss_tot > eps * (mean_y * mean_y * n_t).abs() + eps {
            T::one() - sum_r_sq / ss_tot
        } else if sum_r_sq == T::zero() {
            T::one()
        } else {
            T::zero()
        };

        // Residual SD: Var(r) = (sum_r_sq - (sum_r)^2 / n) / (n - 1)
        let residual_sd = if n > 1 {
            let var_r = (sum_r_sq - (sum_r * sum_r) / n_t) / (n_t - T::one());
            var_r.max(T::zero()).sqrt()
        } else {
            rmse
        };

        let variance_reduction = match diff_variance(raw) {
            Some(raw_var) if raw_var > T::zero() => {
                diff_variance(smoothed).unwrap_or_else(T::zero) / raw_var
            }
            _ => T::one(),
        };

        Self {
            rmse,
            mae,
            r_squared,
            residual_sd,
            variance_reduction,
        }
    }
}

/// Variance of the first differences of a series.
///
/// Returns `None` when the series has fewer than 3 points (fewer than 2
/// differences).
pub fn diff_variance<T: Float>(series: &[T]) -> Option<T> {
    if series.len() < 3 {
        return None;
    }
    let m = T::from(series.len() - 1).unwrap_or_else(T::one);

    let mut sum = T::zero();
    for w in series.windows(2) {
        sum = sum + (w[1] - w[0]);
    }
    let mean = sum / m;

    let mut var = T::zero();
    for w in series.windows(2) {
        let d = (w[1] - w[0]) - mean;
        var = var + d * d;
    }
    Some(var / (m - T::one()))
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Smoothing Diagnostics:")?;
        writeln!(f, "  RMSE:          {:.6}", self.rmse)?;
        writeln!(f, "  MAE:           {:.6}", self.mae)?;
        writeln!(f, "  R^2:           {:.6}", self.r_squared)?;
        writeln!(f, "  Residual SD:   {:.6}", self.residual_sd)?;
        writeln!(f, "  Var reduction: {:.6}", self.variance_reduction)?;
        Ok(())
    }
}
