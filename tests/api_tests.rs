//! Tests for the fluent builder API.
//!
//! These tests verify the generic builder and its adapter transitions:
//! - Parameter propagation into each execution builder
//! - Duplicate-parameter detection deferred to build time
//! - Prelude surface
//!
//! ## Test Organization
//!
//! 1. **Adapter Transitions** - Parameter propagation
//! 2. **Duplicate Detection** - Errors surfaced at build
//! 3. **Prelude** - Public-surface smoke test

use kernreg::prelude::*;

// ============================================================================
// Adapter Transition Tests
// ============================================================================

/// Test that configured parameters reach the batch builder.
#[test]
fn test_batch_parameter_propagation() {
    let builder = KernelRegression::<f64>::new()
        .kernel(Gaussian)
        .lookback(4.0)
        .start_at_bar(12)
        .adapter(Batch);

    assert_eq!(builder.kernel, Gaussian);
    assert_eq!(builder.lookback, 4.0);
    assert_eq!(builder.start_at_bar, 12);
}

/// Test that unset parameters fall back to the adapter defaults.
#[test]
fn test_adapter_defaults() {
    let builder = KernelRegression::<f64>::new().adapter(Batch);
    assert_eq!(builder.kernel, RationalQuadratic);
    assert_eq!(builder.lookback, 8.0);
    assert_eq!(builder.relative_weight, 8.0);
    assert_eq!(builder.start_at_bar, 25);
    assert!(!builder.compute_residuals);
    assert!(!builder.return_diagnostics);
}

/// Test that the streaming transition carries the chunk size.
#[test]
fn test_streaming_parameter_propagation() {
    let builder = KernelRegression::<f64>::new()
        .start_at_bar(5)
        .chunk_size(256)
        .adapter(Streaming);

    assert_eq!(builder.chunk_size, 256);
    assert_eq!(builder.start_at_bar, 5);
}

/// Test that the online transition carries the residual flag.
#[test]
fn test_online_parameter_propagation() {
    let builder = KernelRegression::<f64>::new()
        .return_residuals()
        .adapter(Online);
    assert!(builder.compute_residuals);
}

// ============================================================================
// Duplicate Detection Tests
// ============================================================================

/// Test that setting the same parameter twice fails at build time.
#[test]
fn test_duplicate_lookback_rejected() {
    let err = KernelRegression::<f64>::new()
        .lookback(4.0)
        .lookback(8.0)
        .adapter(Batch)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        KernelRegressionError::DuplicateParameter {
            parameter: "lookback"
        }
    );
}

/// Test duplicate detection across all duplicable parameters and adapters.
#[test]
fn test_duplicate_detection_coverage() {
    let err = KernelRegression::<f64>::new()
        .kernel(Gaussian)
        .kernel(RationalQuadratic)
        .adapter(Online)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        KernelRegressionError::DuplicateParameter { parameter: "kernel" }
    );

    let err = KernelRegression::<f64>::new()
        .start_at_bar(5)
        .chunk_size(100)
        .chunk_size(200)
        .adapter(Streaming)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        KernelRegressionError::DuplicateParameter {
            parameter: "chunk_size"
        }
    );
}

// ============================================================================
// Prelude Tests
// ============================================================================

/// Test the full fluent round trip available from the prelude alone.
#[test]
fn test_prelude_surface() {
    let series: Vec<f64> = (0..50).map(|i| (i as f64 * 0.2).sin()).collect();

    let result: KernelRegressionResult<f64> = KernelRegression::new()
        .kernel(RationalQuadratic)
        .lookback(8.0)
        .relative_weight(8.0)
        .start_at_bar(10)
        .adapter(Batch)
        .build()
        .unwrap()
        .smooth(&series)
        .unwrap();
    assert_eq!(result.len(), 40);

    let mut online = KernelRegression::<f64>::new()
        .start_at_bar(1)
        .adapter(Online)
        .build()
        .unwrap();
    online.update(1.0).unwrap();
    let out: OnlineOutput<f64> = online.update(2.0).unwrap().unwrap();
    assert!(out.smoothed.is_finite());
}
