//! # kernreg — Causal Kernel Regression for Rust
//!
//! A fast, dependency-light implementation of causal kernel-weighted
//! regression (a trailing Nadaraya-Watson estimator) for smoothing scalar
//! time series such as price series.
//!
//! ## What is causal kernel regression?
//!
//! Kernel regression estimates a smoothed value at each point as a weighted
//! average of nearby observations, with weights determined by a decay
//! function of distance. The causal variant used here looks only backward:
//! the estimate at bar `i` is a convex combination of bar `i` and the
//! `start_at_bar` bars before it, so no future information ever leaks into
//! an estimate. This makes it suitable as a feature source for market
//! classifiers evaluated bar by bar over a backtest.
//!
//! Two weighting kernels are provided:
//!
//! - **Rational quadratic** (default): heavier tail, shape controlled by
//!   `relative_weight`; converges to the Gaussian as `relative_weight` grows.
//! - **Gaussian**: standard squared-exponential decay.
//!
//! Both are controlled by `lookback` (larger = slower decay = smoother,
//! more lagged output), while `start_at_bar` fixes how much history each
//! estimate uses. The two knobs are independent: window size and decay rate
//! can be tuned separately.
//!
//! ## Quick Start
//!
//! ```rust
//! use kernreg::prelude::*;
//!
//! let close = vec![101.0, 102.5, 101.8, 103.2, 104.0, 103.1, 104.8, 105.2];
//!
//! // Build the model
//! let model = KernelRegression::new()
//!     .lookback(2.0)      // Kernel width
//!     .start_at_bar(3)    // Window: current bar + 3 trailing bars
//!     .adapter(Batch)
//!     .build()?;
//!
//! // Smooth the series
//! let result = model.smooth(&close)?;
//!
//! // One output per bar with a full trailing window
//! assert_eq!(result.len(), close.len() - 3);
//! assert_eq!(result.input_index(0), 3);
//! # Result::<(), KernelRegressionError>::Ok(())
//! ```
//!
//! ### Kernel selection and diagnostics
//!
//! ```rust
//! use kernreg::prelude::*;
//!
//! let close = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//!
//! let model = KernelRegression::new()
//!     .kernel(Gaussian)        // Or RationalQuadratic (default)
//!     .lookback(2.0)
//!     .start_at_bar(2)
//!     .return_residuals()      // Include raw - smoothed
//!     .return_diagnostics()    // RMSE, R^2, variance reduction
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = model.smooth(&close)?;
//! println!("{}", result);
//! # Result::<(), KernelRegressionError>::Ok(())
//! ```
//!
//! ### Live data (online adapter)
//!
//! ```rust
//! use kernreg::prelude::*;
//!
//! let mut model = KernelRegression::new()
//!     .lookback(8.0)
//!     .relative_weight(8.0)
//!     .start_at_bar(25)
//!     .adapter(Online)
//!     .build()?;
//!
//! // Returns None until a full window of 26 bars is available
//! for bar in 0..26 {
//!     let output = model.update(100.0 + bar as f64 * 0.1)?;
//!     if bar < 25 {
//!         assert!(output.is_none());
//!     } else {
//!         assert!(output.is_some());
//!     }
//! }
//! # Result::<(), KernelRegressionError>::Ok(())
//! ```
//!
//! ### Long backtests (streaming adapter)
//!
//! ```rust
//! use kernreg::prelude::*;
//!
//! let mut model = KernelRegression::new()
//!     .lookback(8.0)
//!     .start_at_bar(25)
//!     .chunk_size(500)
//!     .adapter(Streaming)
//!     .build()?;
//!
//! let history: Vec<f64> = (0..2000).map(|i| (i as f64 * 0.01).sin()).collect();
//! let mut smoothed = Vec::new();
//! for chunk in history.chunks(500) {
//!     smoothed.extend(model.process_chunk(chunk)?);
//! }
//! // Identical to one batch run over the whole history
//! assert_eq!(smoothed.len(), history.len() - 25);
//! # Result::<(), KernelRegressionError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `smooth` returns a `Result<KernelRegressionResult<T>, KernelRegressionError>`.
//! All failures are precondition violations detected before any work is done:
//! non-positive or non-finite parameters, a series containing NaN/infinite
//! values, or a series too short for a single full window. There is never a
//! partial result.
//!
//! ```rust
//! use kernreg::prelude::*;
//!
//! let model = KernelRegression::new()
//!     .start_at_bar(10)
//!     .adapter(Batch)
//!     .build()?;
//!
//! // 5 bars cannot fill an 11-bar window
//! let err = model.smooth(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap_err();
//! assert!(matches!(err, KernelRegressionError::InvalidWindow { .. }));
//! # Result::<(), KernelRegressionError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! kernreg = { version = "0.3", default-features = false }
//! ```
//!
//! ## References
//!
//! - Nadaraya, E. A. (1964). "On Estimating Regression"
//! - Watson, G. S. (1964). "Smooth Regression Analysis"
//! - Rasmussen, C. E. & Williams, C. K. I. (2006). "Gaussian Processes for
//!   Machine Learning" (rational-quadratic covariance)

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - the causal weighted-average estimator.
mod algorithms;

// Layer 4: Evaluation - post-processing and diagnostics.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// Layer 6: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for kernel regression.
mod api;

// Standard kernel regression prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Online, Streaming},
        Kernel::{Gaussian, RationalQuadratic},
        KernelRegressionBuilder as KernelRegression, KernelRegressionError,
        KernelRegressionResult, OnlineOutput,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
