#![cfg(feature = "dev")]
//! Tests for input validation.
//!
//! These tests verify the fail-fast validation logic used for kernel
//! regression:
//! - Series validation (empty, non-finite)
//! - Parameter bounds (look-back, relative weight)
//! - Window feasibility against the series length
//! - Adapter and builder constraints
//!
//! ## Test Organization
//!
//! 1. **Series Validation** - Empty input, NaN/infinity detection
//! 2. **Parameter Validation** - Positivity and finiteness bounds
//! 3. **Window Validation** - Feasibility against series length
//! 4. **Builder Validation** - Duplicate parameter detection

use kernreg::internals::engine::validator::Validator;
use kernreg::internals::primitives::errors::KernelRegressionError;

// ============================================================================
// Series Validation Tests
// ============================================================================

/// Test that an empty series is rejected.
#[test]
fn test_empty_series_rejected() {
    let series: [f64; 0] = [];
    assert_eq!(
        Validator::validate_series(&series),
        Err(KernelRegressionError::EmptyInput)
    );
}

/// Test that a NaN value is rejected with its index in the message.
#[test]
fn test_nan_series_rejected() {
    let series = [1.0, 2.0, f64::NAN, 4.0];
    match Validator::validate_series(&series) {
        Err(KernelRegressionError::InvalidNumericValue(msg)) => {
            assert!(msg.contains("series[2]"), "message was: {msg}");
        }
        other => panic!("expected InvalidNumericValue, got {:?}", other),
    }
}

/// Test that infinite values are rejected.
#[test]
fn test_infinite_series_rejected() {
    for bad in [f64::INFINITY, f64::NEG_INFINITY] {
        let series = [1.0, bad];
        assert!(matches!(
            Validator::validate_series(&series),
            Err(KernelRegressionError::InvalidNumericValue(_))
        ));
    }
}

/// Test that a finite series passes.
#[test]
fn test_finite_series_accepted() {
    let series = [1.0, -2.5, 0.0, 1e300];
    assert!(Validator::validate_series(&series).is_ok());
}

/// Test single-bar validation.
#[test]
fn test_validate_bar() {
    assert!(Validator::validate_bar(1.5_f64).is_ok());
    assert!(matches!(
        Validator::validate_bar(f64::NAN),
        Err(KernelRegressionError::InvalidNumericValue(_))
    ));
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test look-back bounds: must be positive and finite.
#[test]
fn test_lookback_bounds() {
    assert!(Validator::validate_lookback(8.0_f64).is_ok());
    assert!(Validator::validate_lookback(0.1_f64).is_ok());

    for bad in [-1.0, 0.0, f64::NAN, f64::INFINITY] {
        assert!(
            matches!(
                Validator::validate_lookback(bad),
                Err(KernelRegressionError::InvalidLookback(_))
            ),
            "lookback={bad} should be rejected"
        );
    }
}

/// Test relative-weight bounds: must be positive and finite.
#[test]
fn test_relative_weight_bounds() {
    assert!(Validator::validate_relative_weight(8.0_f64).is_ok());

    for bad in [-3.0, 0.0, f64::NAN, f64::NEG_INFINITY] {
        assert!(
            matches!(
                Validator::validate_relative_weight(bad),
                Err(KernelRegressionError::InvalidRelativeWeight(_))
            ),
            "relative_weight={bad} should be rejected"
        );
    }
}

// ============================================================================
// Window Validation Tests
// ============================================================================

/// Test window feasibility against the series length.
#[test]
fn test_window_feasibility() {
    // len > start_at_bar: ok
    assert!(Validator::validate_window(2, 3).is_ok());
    assert!(Validator::validate_window(0, 1).is_ok());

    // len == start_at_bar or shorter: no full window exists
    assert_eq!(
        Validator::validate_window(10, 5),
        Err(KernelRegressionError::InvalidWindow {
            start_at_bar: 10,
            len: 5
        })
    );
    assert_eq!(
        Validator::validate_window(3, 3),
        Err(KernelRegressionError::InvalidWindow {
            start_at_bar: 3,
            len: 3
        })
    );
}

// ============================================================================
// Adapter / Builder Validation Tests
// ============================================================================

/// Test chunk size validation.
#[test]
fn test_chunk_size_bounds() {
    assert!(Validator::validate_chunk_size(26, 26).is_ok());
    assert_eq!(
        Validator::validate_chunk_size(10, 26),
        Err(KernelRegressionError::InvalidChunkSize { got: 10, min: 26 })
    );
}

/// Test duplicate parameter detection.
#[test]
fn test_duplicate_parameter_detection() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("lookback")),
        Err(KernelRegressionError::DuplicateParameter {
            parameter: "lookback"
        })
    );
}

// ============================================================================
// Error Display Tests
// ============================================================================

/// Test that error messages carry their context values.
#[test]
fn test_error_display_contains_context() {
    let msg = KernelRegressionError::InvalidWindow {
        start_at_bar: 10,
        len: 5,
    }
    .to_string();
    assert!(msg.contains("10") && msg.contains("5"), "message was: {msg}");

    let msg = KernelRegressionError::InvalidLookback(-1.0).to_string();
    assert!(msg.contains("-1"), "message was: {msg}");

    let msg = KernelRegressionError::DuplicateParameter {
        parameter: "kernel",
    }
    .to_string();
    assert!(msg.contains("kernel"), "message was: {msg}");
}
