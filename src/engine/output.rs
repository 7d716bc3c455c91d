//! Output types and result structures for kernel regression operations.
//!
//! ## Purpose
//!
//! This module defines the `KernelRegressionResult` struct which encapsulates
//! the outputs of a smoothing operation: the dense smoothed series, the
//! output-to-input index mapping, and optional residuals and diagnostics.
//!
//! ## Design notes
//!
//! * **Truncated convention**: `smoothed` holds one value per input index
//!   with a full trailing window, so `smoothed[0]` corresponds to input
//!   index `start_at_bar`. The `aligned()` helper converts to the
//!   input-length convention with a NaN prefix for callers indexing in
//!   input coordinates.
//! * **Memory Efficiency**: Optional outputs use `Option<Vec<T>>`.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `smoothed.len()` equals the input length minus `start_at_bar`.
//! * `residuals`, when present, is aligned with `smoothed`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not validate result consistency (responsibility of the engine).
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::kernel::Kernel;

// ============================================================================
// Result Structure
// ============================================================================

/// Output of a kernel regression run.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelRegressionResult<T> {
    /// Smoothed values, one per input index with a full trailing window.
    ///
    /// `smoothed[k]` is the estimate at input index `k + start_at_bar`.
    pub smoothed: Vec<T>,

    /// Trailing bars per window beyond the current bar.
    pub start_at_bar: usize,

    /// Kernel used for the run.
    pub kernel: Kernel,

    /// Residuals (raw - smoothed), aligned with `smoothed`.
    pub residuals: Option<Vec<T>>,

    /// Fit-quality metrics over the valid output region.
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float> KernelRegressionResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of smoothed values.
    pub fn len(&self) -> usize {
        self.smoothed.len()
    }

    /// Whether the result holds no smoothed values.
    pub fn is_empty(&self) -> bool {
        self.smoothed.is_empty()
    }

    /// Input index corresponding to output index `k`.
    pub fn input_index(&self, k: usize) -> usize {
        k + self.start_at_bar
    }

    /// Smoothed value at input index `i`, if `i` received an output.
    pub fn value_at(&self, i: usize) -> Option<T> {
        i.checked_sub(self.start_at_bar)
            .and_then(|k| self.smoothed.get(k))
            .copied()
    }

    /// Smoothed series in input-length coordinates.
    ///
    /// The first `start_at_bar` entries, which have no full trailing window,
    /// are NaN; entry `i` for `i >= start_at_bar` equals
    /// `smoothed[i - start_at_bar]`.
    pub fn aligned(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.start_at_bar + self.smoothed.len());
        out.resize(self.start_at_bar, T::nan());
        out.extend_from_slice(&self.smoothed);
        out
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for KernelRegressionResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Kernel:       {}", self.kernel.name())?;
        writeln!(f, "  Output bars:  {}", self.smoothed.len())?;
        writeln!(f, "  Start at bar: {}", self.start_at_bar)?;
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
        }

        writeln!(f, "Smoothed Data:")?;

        let has_resid = self.residuals.is_some();

        // Build header
        write!(f, "{:>8} {:>12}", "Bar", "Y_smooth")?;
        if has_resid {
            write!(f, " {:>12}", "Residual")?;
        }
        writeln!(f)?;

        // Separator line
        let line_width = 21 + if has_resid { 13 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.smoothed.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (row, &idx) in rows_to_show.iter().enumerate() {
            // Add ellipsis if we skipped rows
            if row > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(
                f,
                "{:>8} {:>12.6}",
                self.input_index(idx),
                self.smoothed[idx]
            )?;

            if has_resid {
                if let Some(resid) = &self.residuals {
                    write!(f, " {:>12.6}", resid[idx])?;
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
