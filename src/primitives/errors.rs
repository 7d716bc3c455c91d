//! Error types for kernel regression operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur during causal kernel
//! regression, including input validation, parameter constraints, and adapter
//! limitations.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. required lengths).
//! * **Deferred**: Errors are often caught and stored during builder configuration.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Series validation**: Empty series, non-finite values.
//! 2. **Parameter validation**: Invalid look-back, relative weight, or window.
//! 3. **Adapter constraints**: Invalid chunk size for streaming.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for kernel regression operations.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelRegressionError {
    /// Input series is empty; at least one full window of bars is required.
    EmptyInput,

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Look-back must be positive and finite.
    InvalidLookback(f64),

    /// Relative weight must be positive and finite (rational-quadratic kernel only).
    InvalidRelativeWeight(f64),

    /// No valid output index exists: the series is too short for the window.
    InvalidWindow {
        /// The configured number of trailing bars per window (window size minus one).
        start_at_bar: usize,
        /// Number of bars in the series.
        len: usize,
    },

    /// Chunk size must exceed the trailing window so each chunk can emit output.
    InvalidChunkSize {
        /// The chunk size provided.
        got: usize,
        /// Minimum required chunk size.
        min: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for KernelRegressionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input series is empty"),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidLookback(h) => {
                write!(f, "Invalid lookback: {h} (must be > 0 and finite)")
            }
            Self::InvalidRelativeWeight(r) => {
                write!(f, "Invalid relative_weight: {r} (must be > 0 and finite)")
            }
            Self::InvalidWindow { start_at_bar, len } => {
                write!(
                    f,
                    "Invalid window: start_at_bar {start_at_bar} leaves no output for a series of {len} bars (need at least {} bars)",
                    start_at_bar + 1
                )
            }
            Self::InvalidChunkSize { got, min } => {
                write!(f, "Invalid chunk_size: {got} (must be at least {min})")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for KernelRegressionError {}
