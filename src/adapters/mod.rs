//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing APIs that adapt the engine layer for
//! different execution modes and use cases:
//!
//! - **Batch**: Whole-series smoothing in memory
//! - **Streaming**: Chunked smoothing with causal context carry-over
//! - **Online**: Incremental bar-by-bar smoothing for live data
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batch adapter for whole-series smoothing.
pub mod batch;

/// Streaming adapter for chunked series.
pub mod streaming;

/// Online adapter for live bar-by-bar data.
pub mod online;
