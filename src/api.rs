//! High-level API for causal kernel regression.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for kernel
//! regression. It implements a fluent builder pattern for configuring the
//! kernel parameters and choosing an execution adapter (Batch, Streaming,
//! or Online).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Core parameters are validated during adapter construction.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Batch, Streaming, and Online modes.
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Adapter::Type)`.
//! * **Validation**: Parameters are validated when `.build()` is called on the adapter.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`KernelRegressionBuilder`] via `KernelRegression::new()`.
//! 2. Chain configuration methods (`.lookback()`, `.start_at_bar()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchKernelRegressionBuilder;
use crate::adapters::online::OnlineKernelRegressionBuilder;
use crate::adapters::streaming::StreamingKernelRegressionBuilder;

// Publicly re-exported types
pub use crate::adapters::batch::BatchKernelRegression;
pub use crate::adapters::online::{OnlineKernelRegression, OnlineOutput};
pub use crate::adapters::streaming::StreamingKernelRegression;
pub use crate::engine::output::KernelRegressionResult;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::math::kernel::Kernel;
pub use crate::primitives::errors::KernelRegressionError;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Online, Streaming};
}

/// Fluent builder for configuring kernel regression parameters and execution modes.
#[derive(Debug, Clone)]
pub struct KernelRegressionBuilder<T: Float> {
    /// Kernel width (decay rate of weights with distance into the past).
    pub lookback: Option<T>,

    /// Tail-shape parameter (rational-quadratic kernel only).
    pub relative_weight: Option<T>,

    /// Trailing bars per window beyond the current bar.
    pub start_at_bar: Option<usize>,

    /// Weighting kernel.
    pub kernel: Option<Kernel>,

    /// Return residuals (raw - smoothed) in the output.
    pub compute_residuals: Option<bool>,

    /// Compute fit diagnostics (Batch only).
    pub return_diagnostics: Option<bool>,

    /// Expected chunk granularity (Streaming only).
    pub chunk_size: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for KernelRegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> KernelRegressionBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: KernelAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            lookback: None,
            relative_weight: None,
            start_at_bar: None,
            kernel: None,
            compute_residuals: None,
            return_diagnostics: None,
            chunk_size: None,
            duplicate_param: None,
        }
    }

    /// Set the look-back (kernel width).
    pub fn lookback(mut self, lookback: T) -> Self {
        if self.lookback.is_some() {
            self.duplicate_param = Some("lookback");
        }
        self.lookback = Some(lookback);
        self
    }

    /// Set the relative weight (rational-quadratic tail shape).
    pub fn relative_weight(mut self, relative_weight: T) -> Self {
        if self.relative_weight.is_some() {
            self.duplicate_param = Some("relative_weight");
        }
        self.relative_weight = Some(relative_weight);
        self
    }

    /// Set the number of trailing bars per window beyond the current bar.
    pub fn start_at_bar(mut self, start_at_bar: usize) -> Self {
        if self.start_at_bar.is_some() {
            self.duplicate_param = Some("start_at_bar");
        }
        self.start_at_bar = Some(start_at_bar);
        self
    }

    /// Set the weighting kernel.
    pub fn kernel(mut self, kernel: Kernel) -> Self {
        if self.kernel.is_some() {
            self.duplicate_param = Some("kernel");
        }
        self.kernel = Some(kernel);
        self
    }

    /// Set the expected chunk granularity (Streaming only).
    pub fn chunk_size(mut self, size: usize) -> Self {
        if self.chunk_size.is_some() {
            self.duplicate_param = Some("chunk_size");
        }
        self.chunk_size = Some(size);
        self
    }

    /// Include residuals in output.
    pub fn return_residuals(mut self) -> Self {
        self.compute_residuals = Some(true);
        self
    }

    /// Include fit diagnostics (RMSE, R^2, variance reduction) in output.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait KernelAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`KernelRegressionBuilder`] into a specialized execution builder.
    fn convert(builder: KernelRegressionBuilder<T>) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> KernelAdapter<T> for Batch {
    type Output = BatchKernelRegressionBuilder<T>;

    fn convert(builder: KernelRegressionBuilder<T>) -> Self::Output {
        let mut result = BatchKernelRegressionBuilder::default();

        if let Some(lookback) = builder.lookback {
            result.lookback = lookback;
        }
        if let Some(relative_weight) = builder.relative_weight {
            result.relative_weight = relative_weight;
        }
        if let Some(start_at_bar) = builder.start_at_bar {
            result.start_at_bar = start_at_bar;
        }
        if let Some(kernel) = builder.kernel {
            result.kernel = kernel;
        }
        if let Some(cr) = builder.compute_residuals {
            result.compute_residuals = cr;
        }
        if let Some(rd) = builder.return_diagnostics {
            result.return_diagnostics = rd;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for chunked streaming processing.
#[derive(Debug, Clone, Copy)]
pub struct Streaming;

impl<T: Float> KernelAdapter<T> for Streaming {
    type Output = StreamingKernelRegressionBuilder<T>;

    fn convert(builder: KernelRegressionBuilder<T>) -> Self::Output {
        let mut result = StreamingKernelRegressionBuilder::default();

        if let Some(chunk_size) = builder.chunk_size {
            result.chunk_size = chunk_size;
        }
        if let Some(lookback) = builder.lookback {
            result.lookback = lookback;
        }
        if let Some(relative_weight) = builder.relative_weight {
            result.relative_weight = relative_weight;
        }
        if let Some(start_at_bar) = builder.start_at_bar {
            result.start_at_bar = start_at_bar;
        }
        if let Some(kernel) = builder.kernel {
            result.kernel = kernel;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for incremental online processing.
#[derive(Debug, Clone, Copy)]
pub struct Online;

impl<T: Float> KernelAdapter<T> for Online {
    type Output = OnlineKernelRegressionBuilder<T>;

    fn convert(builder: KernelRegressionBuilder<T>) -> Self::Output {
        let mut result = OnlineKernelRegressionBuilder::default();

        if let Some(lookback) = builder.lookback {
            result.lookback = lookback;
        }
        if let Some(relative_weight) = builder.relative_weight {
            result.relative_weight = relative_weight;
        }
        if let Some(start_at_bar) = builder.start_at_bar {
            result.start_at_bar = start_at_bar;
        }
        if let Some(kernel) = builder.kernel {
            result.kernel = kernel;
        }
        if let Some(cr) = builder.compute_residuals {
            result.compute_residuals = cr;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
