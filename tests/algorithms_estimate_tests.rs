#![cfg(feature = "dev")]
//! Tests for the causal weighted-average estimator.
//!
//! These tests verify the single-bar estimation routine shared by the batch
//! executor and the online adapter:
//! - Convex-combination behavior (constant in, constant out)
//! - Causality of the trailing window
//! - Weight-sum normalization
//!
//! ## Test Organization
//!
//! 1. **Weight Sum** - Positivity and exact values
//! 2. **Estimation** - Hand-computed weighted averages
//! 3. **Causality** - Insensitivity to future bars

use approx::assert_relative_eq;

use kernreg::internals::algorithms::estimate::{estimate_at, weight_sum};
use kernreg::internals::math::kernel::Kernel;

// ============================================================================
// Weight Sum Tests
// ============================================================================

/// Test weight sums over simple tables.
#[test]
fn test_weight_sum_values() {
    assert_eq!(weight_sum(&[1.0_f64]), 1.0);
    assert_relative_eq!(weight_sum(&[1.0_f64, 0.5, 0.25]), 1.75, epsilon = 1e-15);
}

/// Test that kernel weight tables always sum to at least 1.
///
/// The current bar contributes weight exactly 1, so any table's sum is
/// strictly positive and at least that.
#[test]
fn test_kernel_table_sum_positive() {
    for kernel in [Kernel::RationalQuadratic, Kernel::Gaussian] {
        for start_at_bar in [0, 1, 5, 50] {
            let table = kernel.weight_table::<f64>(8.0, 8.0, start_at_bar);
            assert!(weight_sum(&table) >= 1.0);
        }
    }
}

// ============================================================================
// Estimation Tests
// ============================================================================

/// Test a hand-computed weighted average.
#[test]
fn test_estimate_hand_computed() {
    let series = [10.0_f64, 20.0, 30.0];
    let weights = [1.0_f64, 0.5];
    let sum = weight_sum(&weights);

    // At i = 2: (30 * 1 + 20 * 0.5) / 1.5
    let got = estimate_at(&series, 2, &weights, sum);
    assert_relative_eq!(got, 40.0 / 1.5, epsilon = 1e-12);

    // At i = 1: (20 * 1 + 10 * 0.5) / 1.5
    let got = estimate_at(&series, 1, &weights, sum);
    assert_relative_eq!(got, 25.0 / 1.5, epsilon = 1e-12);
}

/// Test that a constant series estimates to the constant.
#[test]
fn test_estimate_constant_series() {
    let series = [7.5_f64; 40];
    for kernel in [Kernel::RationalQuadratic, Kernel::Gaussian] {
        let weights = kernel.weight_table::<f64>(4.0, 2.0, 10);
        let sum = weight_sum(&weights);
        for i in 10..40 {
            assert_relative_eq!(estimate_at(&series, i, &weights, sum), 7.5, epsilon = 1e-12);
        }
    }
}

/// Test a single-entry window reproduces the current bar.
#[test]
fn test_estimate_single_point_window() {
    let series = [3.0_f64, 1.0, 4.0, 1.0, 5.0];
    let weights = [1.0_f64];
    for (i, &v) in series.iter().enumerate() {
        assert_eq!(estimate_at(&series, i, &weights, 1.0), v);
    }
}

// ============================================================================
// Causality Tests
// ============================================================================

/// Test that bars after the estimated index never affect the estimate.
#[test]
fn test_estimate_ignores_future_bars() {
    let mut series = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
    let weights = Kernel::Gaussian.weight_table::<f64>(2.0, 1.0, 2);
    let sum = weight_sum(&weights);

    let before = estimate_at(&series, 3, &weights, sum);

    // Mutate every bar strictly after index 3
    series[4] = 1e9;
    series[5] = -1e9;
    let after = estimate_at(&series, 3, &weights, sum);

    assert_eq!(before, after);
}
