//! Batch adapter for whole-series kernel regression.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter. It smooths a complete
//! series in memory in a single pass, which is the natural mode for
//! backtests where the full price history is available up front.
//!
//! ## Design notes
//!
//! * **Processing**: Validates, precomputes the weight table, and delegates
//!   the double loop to the execution engine.
//! * **Builder Pattern**: Fluent API for configuration with sensible defaults.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * All series values must be finite.
//! * The series must be longer than `start_at_bar`.
//! * Output entry `k` corresponds to input index `k + start_at_bar`.
//!
//! ## Non-goals
//!
//! * This adapter does not handle chunked data (use the streaming adapter).
//! * This adapter does not handle incremental updates (use the online adapter).
//! * This adapter does not source or reorder the series.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{KernelExecutor, RegressionConfig};
use crate::engine::output::KernelRegressionResult;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::kernel::Kernel;
use crate::primitives::errors::KernelRegressionError;

// ============================================================================
// Batch Builder
// ============================================================================

/// Builder for the batch kernel regression processor.
#[derive(Debug, Clone)]
pub struct BatchKernelRegressionBuilder<T: Float> {
    /// Kernel width (decay rate)
    pub lookback: T,

    /// Tail-shape parameter (rational-quadratic only)
    pub relative_weight: T,

    /// Trailing bars per window beyond the current bar
    pub start_at_bar: usize,

    /// Weighting kernel
    pub kernel: Kernel,

    /// Whether to return residuals
    pub compute_residuals: bool,

    /// Whether to compute diagnostic statistics
    pub return_diagnostics: bool,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<KernelRegressionError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchKernelRegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchKernelRegressionBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            lookback: T::from(8.0).unwrap(),
            relative_weight: T::from(8.0).unwrap(),
            start_at_bar: 25,
            kernel: Kernel::default(),
            compute_residuals: false,
            return_diagnostics: false,
            deferred_error: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the look-back (kernel width).
    pub fn lookback(mut self, lookback: T) -> Self {
        self.lookback = lookback;
        self
    }

    /// Set the relative weight (rational-quadratic tail shape).
    pub fn relative_weight(mut self, relative_weight: T) -> Self {
        self.relative_weight = relative_weight;
        self
    }

    /// Set the number of trailing bars per window beyond the current bar.
    pub fn start_at_bar(mut self, start_at_bar: usize) -> Self {
        self.start_at_bar = start_at_bar;
        self
    }

    /// Set the weighting kernel.
    pub fn kernel(mut self, kernel: Kernel) -> Self {
        self.kernel = kernel;
        self
    }

    /// Enable returning residuals in the output.
    pub fn compute_residuals(mut self, enabled: bool) -> Self {
        self.compute_residuals = enabled;
        self
    }

    /// Enable returning diagnostics in the result.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.return_diagnostics = enabled;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchKernelRegression<T>, KernelRegressionError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate kernel parameters
        Validator::validate_lookback(self.lookback)?;
        if self.kernel.uses_relative_weight() {
            Validator::validate_relative_weight(self.relative_weight)?;
        }

        Ok(BatchKernelRegression { config: self })
    }
}

// ============================================================================
// Batch Processor
// ============================================================================

/// Batch kernel regression processor.
#[derive(Debug)]
pub struct BatchKernelRegression<T: Float> {
    config: BatchKernelRegressionBuilder<T>,
}

impl<T: Float> BatchKernelRegression<T> {
    /// Smooth the provided series.
    ///
    /// Returns one value per input index with a full trailing window;
    /// output index 0 corresponds to input index `start_at_bar`.
    pub fn smooth(&self, series: &[T]) -> Result<KernelRegressionResult<T>, KernelRegressionError> {
        Validator::validate_series(series)?;
        Validator::validate_window(self.config.start_at_bar, series.len())?;

        let config = RegressionConfig {
            kernel: self.config.kernel,
            lookback: self.config.lookback,
            relative_weight: self.config.relative_weight,
            start_at_bar: self.config.start_at_bar,
        };

        let smoothed = KernelExecutor::run_with_config(series, &config);

        // Residuals against the raw values over the valid region
        let raw_tail = &series[self.config.start_at_bar..];
        let residuals: Vec<T> = raw_tail
            .iter()
            .zip(smoothed.iter())
            .map(|(&raw, &fit)| raw - fit)
            .collect();

        let diagnostics = if self.config.return_diagnostics {
            Some(Diagnostics::compute(raw_tail, &smoothed, &residuals))
        } else {
            None
        };

        let residuals_out = if self.config.compute_residuals {
            Some(residuals)
        } else {
            None
        };

        Ok(KernelRegressionResult {
            smoothed,
            start_at_bar: self.config.start_at_bar,
            kernel: self.config.kernel,
            residuals: residuals_out,
            diagnostics,
        })
    }
}
