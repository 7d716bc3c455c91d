//! Causal weighted-average estimation over a trailing window.
//!
//! ## Purpose
//!
//! This module computes the kernel-regression estimate at a single bar: the
//! weighted average of the bar itself and the `start_at_bar` bars before it,
//! with weights taken from a precomputed kernel table.
//!
//! ## Design notes
//!
//! * **Causal**: The estimate at index `i` reads only `series[i - bars_back]`
//!   for `bars_back` in `0..weights.len()`; no future bar is touched.
//! * **Shared**: Both the batch executor and the online adapter route their
//!   inner loop through this module, so the numeric contract lives in one
//!   place.
//! * **Normalized**: The caller passes the weight sum so the convex
//!   combination is formed without re-summing the table per bar.
//!
//! ## Invariants
//!
//! * `weights` is non-empty and strictly positive, so the division is safe.
//! * `i + 1 >= weights.len()`: a full trailing window exists at `i`.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (responsibility of the validator).
//! * This module does not iterate over the series (responsibility of the engine).

// External dependencies
use num_traits::Float;

/// Sum of a precomputed weight table.
///
/// Strictly positive for any table produced by a kernel with finite positive
/// parameters, which guarantees the normalizing division in [`estimate_at`]
/// is well-defined.
#[inline]
pub fn weight_sum<T: Float>(weights: &[T]) -> T {
    weights
        .iter()
        .fold(T::zero(), |acc, &w| acc + w)
}

/// Kernel-regression estimate at input index `i`.
///
/// Forms the convex combination of `series[i], series[i-1], ...,
/// series[i - (weights.len() - 1)]` using the precomputed `weights` (indexed
/// by `bars_back`) and their sum `cumulative_weight`.
#[inline]
pub fn estimate_at<T: Float>(series: &[T], i: usize, weights: &[T], cumulative_weight: T) -> T {
    debug_assert!(!weights.is_empty());
    debug_assert!(i < series.len());
    debug_assert!(i + 1 >= weights.len(), "window at i must be fully available");

    let mut current_weight = T::zero();
    for (bars_back, &w) in weights.iter().enumerate() {
        current_weight = current_weight + series[i - bars_back] * w;
    }
    current_weight / cumulative_weight
}
