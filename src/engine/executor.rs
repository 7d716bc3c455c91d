//! Execution engine for causal kernel regression.
//!
//! ## Purpose
//!
//! This module provides the core execution engine that runs the regression
//! over a whole series. It precomputes the kernel weight table once per call
//! and evaluates the causal windowed weighted average at every index with a
//! full trailing window, producing the dense truncated-length output.
//!
//! ## Design notes
//!
//! * **Precomputed weights**: Weights depend only on `bars_back`, not the
//!   bar index, so the table and its sum are built once and shared by every
//!   output index.
//! * **Bounded work**: The double loop is O(n * (start_at_bar + 1)) with no
//!   suspension points; a call either runs to completion or fails fast in
//!   the caller's validation before any work is done.
//! * **Pure**: No shared mutable state, no I/O; safe to invoke concurrently
//!   with independent inputs.
//! * **Generics**: Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Inputs are assumed validated: finite series, positive finite
//!   parameters, `series.len() > start_at_bar`.
//! * The output has exactly `series.len() - start_at_bar` entries; entry 0
//!   corresponds to input index `start_at_bar`.
//! * The estimate at input index `i` reads only `series[..=i]`.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not provide public-facing result formatting.
//! * This module does not maintain state across calls (handled by adapters).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::estimate::{estimate_at, weight_sum};
use crate::math::kernel::Kernel;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a kernel regression run.
#[derive(Debug, Clone, Copy)]
pub struct RegressionConfig<T> {
    /// Weighting kernel.
    pub kernel: Kernel,

    /// Kernel width (decay rate of weights with distance into the past).
    pub lookback: T,

    /// Tail-shape parameter (rational-quadratic kernel only).
    pub relative_weight: T,

    /// Trailing bars per window beyond the current bar (window size minus one).
    pub start_at_bar: usize,
}

// ============================================================================
// Executor
// ============================================================================

/// Execution engine for causal kernel regression.
pub struct KernelExecutor;

impl KernelExecutor {
    /// Run the regression over `series` with the given configuration.
    ///
    /// Returns the dense smoothed series of length
    /// `series.len() - config.start_at_bar`; output index 0 corresponds to
    /// input index `config.start_at_bar`.
    pub fn run_with_config<T: Float>(series: &[T], config: &RegressionConfig<T>) -> Vec<T> {
        let weights =
            config
                .kernel
                .weight_table(config.lookback, config.relative_weight, config.start_at_bar);
        Self::run_with_weights(series, &weights)
    }

    /// Run the regression over `series` with a precomputed weight table.
    ///
    /// The table length is the window size; the caller guarantees
    /// `series.len() >= weights.len()`.
    pub fn run_with_weights<T: Float>(series: &[T], weights: &[T]) -> Vec<T> {
        let n = series.len();
        let start_at_bar = weights.len() - 1;
        let cumulative_weight = weight_sum(weights);

        let mut smoothed = Vec::with_capacity(n - start_at_bar);
        for i in start_at_bar..n {
            smoothed.push(estimate_at(series, i, weights, cumulative_weight));
        }
        smoothed
    }
}
