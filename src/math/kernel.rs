//! Kernel (weight) functions for causal kernel regression.
//!
//! ## Purpose
//!
//! This module provides the kernel functions that assign decaying weights to
//! past bars. A kernel maps the distance into the past (`bars_back`) to a
//! weight in (0, 1], controlling how strongly each historical bar influences
//! the current estimate.
//!
//! ## Design notes
//!
//! * **Closed set**: Kernels form a closed enumeration rather than a
//!   string-keyed registry, so kernel selection is checked at compile time.
//! * **Stationary weights**: Weights depend only on `bars_back`, never on the
//!   bar index, so a weight table for a fixed parameter set can be computed
//!   once and reused across the whole series.
//! * **Strict positivity**: Both kernels are strictly positive for finite
//!   inputs; the Gaussian evaluation clamps underflow to `f64::MIN_POSITIVE`
//!   so cumulative weights never collapse to zero.
//!
//! ## Key concepts
//!
//! * **RationalQuadratic**: The default kernel. Heavier tail than Gaussian
//!   for small `relative_weight`; converges to the Gaussian as
//!   `relative_weight` grows.
//! * **Gaussian**: Standard squared-exponential decay.
//!
//! ## Invariants
//!
//! * `weight(0) = 1` exactly for both kernels.
//! * Weights are strictly decreasing in `bars_back` for finite positive
//!   `lookback`.
//!
//! ## Non-goals
//!
//! * This module does not normalize weights (responsibility of the estimator).
//! * This module does not validate parameters (responsibility of the validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Mathematical Constants
// ============================================================================

/// Cutoff for Gaussian kernel evaluation, in units of `bars_back / lookback`.
///
/// Beyond this normalized distance, the Gaussian weight is effectively zero
/// (exp(-6^2/2) approx 6.9e-9). Clamping to `f64::MIN_POSITIVE` past the
/// cutoff prevents numerical underflow from zeroing the cumulative weight.
const GAUSSIAN_CUTOFF: f64 = 6.0;

// ============================================================================
// Kernel Enum
// ============================================================================

/// # Mathematical Properties
///
/// | Kernel            | Formula                                       | Tail      |
/// |-------------------|-----------------------------------------------|-----------|
/// | RationalQuadratic | (1 + b^2 / (2 h^2 r))^(-r)                    | heavy     |
/// | Gaussian          | exp(-b^2 / (2 h^2))                           | light     |
///
/// where `b` is `bars_back`, `h` is `lookback`, and `r` is `relative_weight`.
/// As `r → ∞` the rational-quadratic weight converges to the Gaussian weight
/// for the same `b` and `h`.
///
/// Weighting kernel for causal kernel regression.
///
/// Each kernel defines a function w: ℕ → (0, 1] that maps the number of bars
/// into the past to a weight. Both kernels have unbounded support: every bar
/// in the trailing window contributes a strictly positive weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kernel {
    /// Rational-quadratic kernel: w(b) = (1 + b^2 / (2 h^2 r))^(-r).
    ///
    /// This is the default and recommended kernel choice.
    #[default]
    RationalQuadratic,

    /// Gaussian kernel: w(b) = exp(-b^2 / (2 h^2)).
    Gaussian,
}

impl Kernel {
    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Get the name of the kernel.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Kernel::RationalQuadratic => "RationalQuadratic",
            Kernel::Gaussian => "Gaussian",
        }
    }

    /// Whether the kernel uses the `relative_weight` shape parameter.
    #[inline]
    pub const fn uses_relative_weight(&self) -> bool {
        matches!(self, Kernel::RationalQuadratic)
    }

    // ========================================================================
    // Weight Computation
    // ========================================================================

    /// Compute the unnormalized weight for a bar `bars_back` bars in the past.
    ///
    /// `lookback` controls the decay rate for both kernels; `relative_weight`
    /// shapes the rational-quadratic tail and is ignored by the Gaussian.
    #[inline]
    pub fn weight<T: Float>(&self, bars_back: usize, lookback: T, relative_weight: T) -> T {
        let two = T::one() + T::one();
        let b = T::from(bars_back).unwrap_or_else(T::zero);
        let b_sq = b * b;

        match self {
            Kernel::RationalQuadratic => {
                let denom = two * lookback * lookback * relative_weight;
                (T::one() + b_sq / denom).powf(-relative_weight)
            }

            Kernel::Gaussian => {
                // Convert to f64 for the exponential evaluation
                let ratio = (b / lookback).to_f64().unwrap_or(f64::INFINITY);

                // Use cutoff to avoid underflow to zero
                if ratio > GAUSSIAN_CUTOFF {
                    T::from(f64::MIN_POSITIVE).unwrap_or_else(T::zero)
                } else {
                    let val = (-0.5 * ratio * ratio).exp().max(f64::MIN_POSITIVE);
                    T::from(val).unwrap_or_else(T::zero)
                }
            }
        }
    }

    /// Precompute the weight table for a trailing window.
    ///
    /// Returns `start_at_bar + 1` weights, indexed by `bars_back`; entry 0 is
    /// the current bar's weight and equals 1 exactly. Since weights are
    /// independent of the bar index, the table is computed once per
    /// parameter set and reused across every output index.
    pub fn weight_table<T: Float>(
        &self,
        lookback: T,
        relative_weight: T,
        start_at_bar: usize,
    ) -> Vec<T> {
        let mut table = Vec::with_capacity(start_at_bar + 1);
        for bars_back in 0..=start_at_bar {
            table.push(self.weight(bars_back, lookback, relative_weight));
        }
        table
    }
}
