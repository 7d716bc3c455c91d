//! Input validation for kernel regression configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for kernel-regression
//! parameters and input series. It checks requirements such as parameter
//! positivity, finite values, and window feasibility.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered; no
//!   partial output is ever produced after a failure.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces `lookback > 0` and `relative_weight > 0`.
//! * **Finite Checks**: Ensures all series values are finite (no NaN/Inf).
//! * **Window Feasibility**: Ensures the series is long enough for at least
//!   one full trailing window.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the smoothing itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::KernelRegressionError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for kernel regression configuration and input data.
///
/// Provides static methods for validating parameters and input series. All
/// methods return `Result<(), KernelRegressionError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate an input series for kernel regression.
    pub fn validate_series<T: Float>(series: &[T]) -> Result<(), KernelRegressionError> {
        // Check 1: Non-empty series
        if series.is_empty() {
            return Err(KernelRegressionError::EmptyInput);
        }

        // Check 2: All values finite
        for (i, &v) in series.iter().enumerate() {
            if !v.is_finite() {
                return Err(KernelRegressionError::InvalidNumericValue(format!(
                    "series[{}]={}",
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a single bar value for finiteness.
    pub fn validate_bar<T: Float>(bar: T) -> Result<(), KernelRegressionError> {
        if !bar.is_finite() {
            return Err(KernelRegressionError::InvalidNumericValue(format!(
                "bar={}",
                bar.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the look-back (kernel width) parameter.
    pub fn validate_lookback<T: Float>(lookback: T) -> Result<(), KernelRegressionError> {
        if !lookback.is_finite() || lookback <= T::zero() {
            return Err(KernelRegressionError::InvalidLookback(
                lookback.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the relative weight (rational-quadratic tail shape) parameter.
    pub fn validate_relative_weight<T: Float>(
        relative_weight: T,
    ) -> Result<(), KernelRegressionError> {
        if !relative_weight.is_finite() || relative_weight <= T::zero() {
            return Err(KernelRegressionError::InvalidRelativeWeight(
                relative_weight.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that the series is long enough for at least one full window.
    ///
    /// The window at input index `i` spans `start_at_bar + 1` bars, so the
    /// first output exists only when `len > start_at_bar`.
    pub fn validate_window(start_at_bar: usize, len: usize) -> Result<(), KernelRegressionError> {
        if len <= start_at_bar {
            return Err(KernelRegressionError::InvalidWindow { start_at_bar, len });
        }
        Ok(())
    }

    // ========================================================================
    // Adapter-Specific Validation
    // ========================================================================

    /// Validate the chunk size for streaming mode.
    pub fn validate_chunk_size(chunk_size: usize, min: usize) -> Result<(), KernelRegressionError> {
        if chunk_size < min {
            return Err(KernelRegressionError::InvalidChunkSize {
                got: chunk_size,
                min,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Check whether any builder parameter was configured more than once.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), KernelRegressionError> {
        if let Some(parameter) = duplicate_param {
            return Err(KernelRegressionError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
