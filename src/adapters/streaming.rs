//! Streaming adapter for chunked kernel regression.
//!
//! ## Purpose
//!
//! This module provides the streaming execution adapter. It smooths a long
//! series fed in chunks, carrying the trailing `start_at_bar` bars across
//! chunk boundaries so every new bar is estimated with its full causal
//! window.
//!
//! ## Design notes
//!
//! * **Exactness**: Because windows are causal and of fixed width, the
//!   carried context makes the concatenated streaming output identical to a
//!   single batch run over the whole series; no overlap merging is needed.
//! * **Warm-up**: Until `start_at_bar + 1` bars have been seen in total, a
//!   chunk may yield no output; bars are buffered and output begins exactly
//!   at global input index `start_at_bar`.
//! * **Recycling**: Scratch buffers are cleared, not deallocated, between
//!   chunks.
//!
//! ## Invariants
//!
//! * The context never holds more than `start_at_bar` bars.
//! * Concatenating all chunk outputs equals the batch output for the
//!   concatenated input.
//!
//! ## Non-goals
//!
//! * This adapter does not compute residuals or diagnostics per chunk.
//! * This adapter does not handle out-of-order chunks.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::KernelExecutor;
use crate::engine::validator::Validator;
use crate::math::kernel::Kernel;
use crate::primitives::buffer::StreamingBuffer;
use crate::primitives::errors::KernelRegressionError;

// ============================================================================
// Streaming Builder
// ============================================================================

/// Builder for the streaming kernel regression processor.
#[derive(Debug, Clone)]
pub struct StreamingKernelRegressionBuilder<T: Float> {
    /// Expected chunk granularity (scratch buffer sizing)
    pub chunk_size: usize,

    /// Kernel width (decay rate)
    pub lookback: T,

    /// Tail-shape parameter (rational-quadratic only)
    pub relative_weight: T,

    /// Trailing bars per window beyond the current bar
    pub start_at_bar: usize,

    /// Weighting kernel
    pub kernel: Kernel,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<KernelRegressionError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for StreamingKernelRegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> StreamingKernelRegressionBuilder<T> {
    /// Create a new streaming builder with default parameters.
    fn new() -> Self {
        Self {
            chunk_size: 1000,
            lookback: T::from(8.0).unwrap(),
            relative_weight: T::from(8.0).unwrap(),
            start_at_bar: 25,
            kernel: Kernel::default(),
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

    /// Set the expected chunk granularity.
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the streaming processor.
    pub fn build(self) -> Result<StreamingKernelRegression<T>, KernelRegressionError> {
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

        // A chunk at the configured granularity must be able to emit output
        Validator::validate_chunk_size(self.chunk_size, self.start_at_bar + 1)?;

        let weights =
            self.kernel
                .weight_table(self.lookback, self.relative_weight, self.start_at_bar);

        let mut buffer = StreamingBuffer::new();
        buffer.context.reserve(self.start_at_bar);
        buffer.extended.reserve(self.start_at_bar + self.chunk_size);

        Ok(StreamingKernelRegression {
            config: self,
            weights,
            buffer,
            bars_seen: 0,
        })
    }
}

// ============================================================================
// Streaming Processor
// ============================================================================

/// Streaming kernel regression processor for chunked series.
#[derive(Debug)]
pub struct StreamingKernelRegression<T: Float> {
    config: StreamingKernelRegressionBuilder<T>,
    /// Precomputed kernel weight table, indexed by bars back.
    weights: Vec<T>,
    /// Carry-over context and per-chunk scratch.
    buffer: StreamingBuffer<T>,
    /// Total bars processed so far.
    bars_seen: usize,
}

impl<T: Float> StreamingKernelRegression<T> {
    /// Smooth one chunk of the series.
    ///
    /// Returns the smoothed values for the chunk's bars whose global input
    /// index is at least `start_at_bar`. During warm-up this is shorter than
    /// the chunk (possibly empty); afterwards it has exactly one value per
    /// chunk bar.
    pub fn process_chunk(&mut self, chunk: &[T]) -> Result<Vec<T>, KernelRegressionError> {
        Validator::validate_series(chunk)?;

        let start_at_bar = self.config.start_at_bar;

        // Prepend carried context so every new bar sees its full window
        self.buffer.extended.clear();
        self.buffer.extended.extend_from_slice(&self.buffer.context);
        self.buffer.extended.extend_from_slice(chunk);

        let smoothed = if self.buffer.extended.len() > start_at_bar {
            KernelExecutor::run_with_weights(&self.buffer.extended, &self.weights)
        } else {
            // Still warming up: no full window exists yet
            Vec::new()
        };

        self.bars_seen += chunk.len();
        self.buffer.retain_context(start_at_bar);

        // Every output from the extended slice belongs to a new bar: context
        // bars ended before this chunk and their estimates were already
        // emitted (or they predate the first full window).
        Ok(smoothed)
    }

    /// Total number of bars processed so far.
    pub fn bars_seen(&self) -> usize {
        self.bars_seen
    }

    /// Discard all carried context and start over.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.bars_seen = 0;
    }
}
