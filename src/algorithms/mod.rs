//! Layer 3: Algorithms
//!
//! This layer implements the core logic for the causal windowed weighted
//! average. It contains the "business logic" of kernel regression but is
//! orchestrated by the engine layer.

// Causal weighted-average estimation over a trailing window.
pub mod estimate;
