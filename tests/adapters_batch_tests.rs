//! Tests for the batch adapter.
//!
//! These tests verify whole-series smoothing through the public API:
//! - Builder defaults and validation failures
//! - Output shape and index mapping
//! - Residuals and diagnostics
//!
//! ## Test Organization
//!
//! 1. **Validation** - Parameter and series rejection
//! 2. **Smoothing** - Shape, defaults, kernels
//! 3. **Optional Outputs** - Residuals and diagnostics

use approx::assert_relative_eq;

use kernreg::prelude::*;

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that a non-positive look-back fails at build time.
#[test]
fn test_invalid_lookback_rejected() {
    let err = KernelRegression::<f64>::new()
        .lookback(-1.0)
        .adapter(Batch)
        .build()
        .unwrap_err();
    assert!(matches!(err, KernelRegressionError::InvalidLookback(_)));
}

/// Test that a non-positive relative weight fails for the rational quadratic.
#[test]
fn test_invalid_relative_weight_rejected() {
    let err = KernelRegression::<f64>::new()
        .relative_weight(0.0)
        .adapter(Batch)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        KernelRegressionError::InvalidRelativeWeight(_)
    ));
}

/// Test that the Gaussian kernel ignores the relative weight entirely.
#[test]
fn test_gaussian_ignores_relative_weight() {
    // Would fail under the rational quadratic; Gaussian does not use it
    let model = KernelRegression::<f64>::new()
        .kernel(Gaussian)
        .relative_weight(-5.0)
        .start_at_bar(2)
        .adapter(Batch)
        .build();
    assert!(model.is_ok());
}

/// Test that a too-short series is rejected at smoothing time.
#[test]
fn test_short_series_rejected() {
    let model = KernelRegression::<f64>::new()
        .start_at_bar(10)
        .adapter(Batch)
        .build()
        .unwrap();

    let err = model.smooth(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap_err();
    assert_eq!(
        err,
        KernelRegressionError::InvalidWindow {
            start_at_bar: 10,
            len: 5
        }
    );
}

/// Test that empty and non-finite series are rejected.
#[test]
fn test_bad_series_rejected() {
    let model = KernelRegression::<f64>::new()
        .start_at_bar(1)
        .adapter(Batch)
        .build()
        .unwrap();

    assert_eq!(
        model.smooth(&[]).unwrap_err(),
        KernelRegressionError::EmptyInput
    );
    assert!(matches!(
        model.smooth(&[1.0, f64::NAN, 3.0]).unwrap_err(),
        KernelRegressionError::InvalidNumericValue(_)
    ));
}

// ============================================================================
// Smoothing Tests
// ============================================================================

/// Test default parameters: window of 26 bars, rational-quadratic kernel.
#[test]
fn test_defaults() {
    let model = KernelRegression::<f64>::new().adapter(Batch).build().unwrap();
    let series: Vec<f64> = (0..100).map(|i| i as f64).collect();

    let result = model.smooth(&series).unwrap();
    assert_eq!(result.start_at_bar, 25);
    assert_eq!(result.kernel, RationalQuadratic);
    assert_eq!(result.len(), 75);
    assert_eq!(result.input_index(0), 25);
}

/// Test the exact estimate for a known Gaussian configuration.
#[test]
fn test_gaussian_known_value() {
    let model = KernelRegression::<f64>::new()
        .kernel(Gaussian)
        .lookback(2.0)
        .start_at_bar(2)
        .adapter(Batch)
        .build()
        .unwrap();

    let result = model.smooth(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

    let w1 = (-1.0_f64 / 8.0).exp();
    let w2 = (-4.0_f64 / 8.0).exp();
    let expected = (3.0 + 2.0 * w1 + w2) / (1.0 + w1 + w2);
    assert_relative_eq!(result.smoothed[0], expected, epsilon = 1e-9);
}

/// Test that smoothing lags behind a trending series.
///
/// On a rising series the trailing window averages in older, lower bars, so
/// the estimate sits below the current price.
#[test]
fn test_trailing_lag_on_uptrend() {
    let model = KernelRegression::<f64>::new()
        .lookback(8.0)
        .start_at_bar(25)
        .adapter(Batch)
        .build()
        .unwrap();

    let series: Vec<f64> = (0..100).map(|i| 100.0 + i as f64).collect();
    let result = model.smooth(&series).unwrap();

    for k in 0..result.len() {
        let i = result.input_index(k);
        assert!(result.smoothed[k] < series[i]);
    }
}

/// Test the aligned view has NaNs exactly over the warm-up region.
#[test]
fn test_aligned_view() {
    let model = KernelRegression::<f64>::new()
        .start_at_bar(3)
        .adapter(Batch)
        .build()
        .unwrap();

    let series = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let result = model.smooth(&series).unwrap();
    let aligned = result.aligned();

    assert_eq!(aligned.len(), series.len());
    assert!(aligned[..3].iter().all(|v| v.is_nan()));
    assert!(aligned[3..].iter().all(|v| v.is_finite()));
}

/// Test f32 smoothing produces finite output.
#[test]
fn test_f32_precision() {
    let model = KernelRegression::<f32>::new()
        .lookback(4.0)
        .start_at_bar(5)
        .adapter(Batch)
        .build()
        .unwrap();

    let series: Vec<f32> = (0..30).map(|i| (i as f32 * 0.2).sin()).collect();
    let result = model.smooth(&series).unwrap();
    assert_eq!(result.len(), 25);
    assert!(result.smoothed.iter().all(|v| v.is_finite()));
}

// ============================================================================
// Optional Output Tests
// ============================================================================

/// Test residuals: present when requested and equal to raw - smoothed.
#[test]
fn test_residuals() {
    let series: Vec<f64> = (0..40).map(|i| (i as f64 * 0.3).sin() * 2.0).collect();

    let without = KernelRegression::<f64>::new()
        .start_at_bar(5)
        .adapter(Batch)
        .build()
        .unwrap()
        .smooth(&series)
        .unwrap();
    assert!(without.residuals.is_none());

    let with = KernelRegression::<f64>::new()
        .start_at_bar(5)
        .return_residuals()
        .adapter(Batch)
        .build()
        .unwrap()
        .smooth(&series)
        .unwrap();

    let residuals = with.residuals.as_ref().unwrap();
    assert_eq!(residuals.len(), with.len());
    for k in 0..with.len() {
        let raw = series[with.input_index(k)];
        assert_relative_eq!(residuals[k], raw - with.smoothed[k], epsilon = 1e-12);
    }
}

/// Test diagnostics on a noisy series: smoothing must reduce variation.
#[test]
fn test_diagnostics() {
    let series: Vec<f64> = (0..200)
        .map(|i| (i as f64 * 0.05).sin() * 10.0 + (i as f64 * 1.7).sin())
        .collect();

    let result = KernelRegression::<f64>::new()
        .lookback(4.0)
        .start_at_bar(10)
        .return_diagnostics()
        .adapter(Batch)
        .build()
        .unwrap()
        .smooth(&series)
        .unwrap();

    let diag = result.diagnostics.as_ref().unwrap();
    assert!(diag.rmse > 0.0);
    assert!(diag.mae > 0.0);
    assert!(diag.r_squared <= 1.0);
    assert!(diag.variance_reduction < 1.0);
}
