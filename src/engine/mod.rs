//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the smoothing process by coordinating between
//! primitives (errors, buffers), math (kernels), and algorithms (the causal
//! estimator). It provides the full-series regression loop and fail-fast
//! validation.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for kernel regression.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for kernel regression operations.
pub mod output;
