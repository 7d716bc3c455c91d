//! Online adapter for incremental kernel regression.
//!
//! ## Purpose
//!
//! This module provides the online (incremental) execution adapter. It
//! maintains a sliding window of the most recent bars and produces the
//! smoothed estimate for each new bar as it arrives, matching how a live
//! classifier consumes the estimate once per bar.
//!
//! ## Design notes
//!
//! * **Storage**: Uses a fixed-size sliding window of exactly
//!   `start_at_bar + 1` bars; the oldest bar is evicted on arrival of a new
//!   one at capacity.
//! * **Warm-up**: Returns `None` until a full window is available, so no
//!   partial-window estimate is ever produced.
//! * **Cost**: Each update is O(start_at_bar + 1) using the weight table
//!   precomputed at build time.
//!
//! ## Invariants
//!
//! * Window size never exceeds `start_at_bar + 1`.
//! * All values in the window are finite; a rejected bar leaves the window
//!   untouched.
//! * The estimate for a bar equals the batch estimate at the same input
//!   index over the same history.
//!
//! ## Non-goals
//!
//! * This adapter does not compute diagnostics.
//! * This adapter does not revise past estimates when new bars arrive.
//! * This adapter does not handle out-of-order bars.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::kernel::Kernel;
use crate::primitives::buffer::SlidingWindow;
use crate::primitives::errors::KernelRegressionError;

// ============================================================================
// Online Builder
// ============================================================================

/// Builder for the online kernel regression processor.
#[derive(Debug, Clone)]
pub struct OnlineKernelRegressionBuilder<T: Float> {
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

    /// Deferred error from adapter conversion
    pub deferred_error: Option<KernelRegressionError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for OnlineKernelRegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> OnlineKernelRegressionBuilder<T> {
    /// Create a new online builder with default parameters.
    fn new() -> Self {
        Self {
            lookback: T::from(8.0).unwrap(),
            relative_weight: T::from(8.0).unwrap(),
            start_at_bar: 25,
            kernel: Kernel::default(),
            compute_residuals: false,
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

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the online processor.
    pub fn build(self) -> Result<OnlineKernelRegression<T>, KernelRegressionError> {
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

        let weights =
            self.kernel
                .weight_table(self.lookback, self.relative_weight, self.start_at_bar);
        let cumulative_weight = weights
            .iter()
            .fold(T::zero(), |acc, &w| acc + w);
        let window = SlidingWindow::new(self.start_at_bar + 1);

        Ok(OnlineKernelRegression {
            config: self,
            weights,
            cumulative_weight,
            window,
        })
    }
}

// ============================================================================
// Online Output
// ============================================================================

/// Result of a single online update.
#[derive(Debug, Clone, PartialEq)]
pub struct OnlineOutput<T> {
    /// Smoothed value for the latest bar
    pub smoothed: T,

    /// Residual (bar - smoothed), if requested
    pub residual: Option<T>,
}

// ============================================================================
// Online Processor
// ============================================================================

/// Online kernel regression processor for live bar-by-bar data.
#[derive(Debug)]
pub struct OnlineKernelRegression<T: Float> {
    config: OnlineKernelRegressionBuilder<T>,
    /// Precomputed kernel weight table, indexed by bars back.
    weights: Vec<T>,
    /// Sum of the weight table (strictly positive).
    cumulative_weight: T,
    /// Sliding window of the most recent `start_at_bar + 1` bars.
    window: SlidingWindow<T>,
}

impl<T: Float> OnlineKernelRegression<T> {
    /// Push a new bar and get its smoothed estimate.
    ///
    /// Returns `Ok(None)` while the window is still warming up (fewer than
    /// `start_at_bar + 1` bars seen); afterwards every update yields an
    /// estimate for the bar just pushed.
    pub fn update(&mut self, bar: T) -> Result<Option<OnlineOutput<T>>, KernelRegressionError> {
        // Validate new bar before touching the window
        Validator::validate_bar(bar)?;

        self.window.push(bar);

        if !self.window.is_full() {
            return Ok(None);
        }

        let mut current_weight = T::zero();
        for (bars_back, &w) in self.weights.iter().enumerate() {
            // Full window: every bars_back offset is present
            let value = self.window.from_newest(bars_back).unwrap_or_else(T::zero);
            current_weight = current_weight + value * w;
        }
        let smoothed = current_weight / self.cumulative_weight;

        let residual = if self.config.compute_residuals {
            Some(bar - smoothed)
        } else {
            None
        };

        Ok(Some(OnlineOutput { smoothed, residual }))
    }

    /// Number of bars currently in the window.
    pub fn window_size(&self) -> usize {
        self.window.len()
    }

    /// Whether a full window is available.
    pub fn is_warmed_up(&self) -> bool {
        self.window.is_full()
    }

    /// Clear the window.
    pub fn reset(&mut self) {
        self.window.clear();
    }
}
