//! Buffer management for kernel regression adapters.
//!
//! ## Purpose
//!
//! This module provides the reusable storage that the incremental adapters
//! maintain between calls: a bounded sliding window of recent bars for the
//! online adapter and causal carry-over buffers for the streaming adapter.
//!
//! ## Design notes
//!
//! * **Bounded**: The sliding window never exceeds its capacity; the oldest
//!   bar is evicted when a new one arrives at capacity.
//! * **Recycled**: Streaming scratch space is cleared, not deallocated,
//!   between chunks to minimize allocator pressure.
//! * **Ordering**: Both buffers preserve insertion order (oldest to newest).
//!
//! ## Key concepts
//!
//! * **SlidingWindow**: Fixed-capacity window over the most recent bars.
//! * **StreamingBuffer**: Carry-over context plus scratch space for chunked
//!   processing.
//!
//! ## Invariants
//!
//! * `SlidingWindow::len() <= capacity` at all times.
//! * `StreamingBuffer::context` holds at most the configured context length.
//!
//! ## Non-goals
//!
//! * This module does not validate bar values (responsibility of the engine).
//! * This module does not compute weights or estimates.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::VecDeque;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Sliding Window
// ============================================================================

/// Fixed-capacity sliding window over the most recent bars of a series.
///
/// Bars are stored oldest to newest. Once the window reaches capacity,
/// pushing a new bar evicts the oldest one.
#[derive(Debug, Clone)]
pub struct SlidingWindow<T> {
    bars: VecDeque<T>,
    capacity: usize,
}

impl<T: Copy> SlidingWindow<T> {
    /// Create an empty window with the given capacity.
    ///
    /// Capacity must be at least 1; a window that can hold no bars is
    /// meaningless and is rejected with a debug assertion.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "window capacity must be at least 1");
        Self {
            bars: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new bar, evicting the oldest if the window is at capacity.
    pub fn push(&mut self, bar: T) {
        if self.bars.len() == self.capacity {
            self.bars.pop_front();
        }
        self.bars.push_back(bar);
    }

    /// Number of bars currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the window holds no bars.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Whether the window has reached its capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.bars.len() == self.capacity
    }

    /// The configured capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Value `bars_back` bars behind the newest bar.
    ///
    /// `bars_back = 0` is the newest bar. Returns `None` when the window
    /// does not reach that far into the past.
    #[inline]
    pub fn from_newest(&self, bars_back: usize) -> Option<T> {
        let len = self.bars.len();
        if bars_back >= len {
            return None;
        }
        self.bars.get(len - 1 - bars_back).copied()
    }

    /// Remove all bars, preserving capacity.
    pub fn clear(&mut self) {
        self.bars.clear();
    }
}

// ============================================================================
// Streaming Buffer
// ============================================================================

/// Carry-over context and scratch space for the streaming adapter.
///
/// `context` holds the trailing bars of everything processed so far, so the
/// next chunk can be smoothed with a full causal window from its first bar.
/// `extended` is the per-chunk scratch (`context ++ chunk`) recycled across
/// calls.
#[derive(Debug, Clone)]
pub struct StreamingBuffer<T> {
    /// Trailing bars carried into the next chunk.
    pub context: Vec<T>,

    /// Scratch: context followed by the current chunk.
    pub extended: Vec<T>,
}

impl<T> Default for StreamingBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StreamingBuffer<T> {
    /// Create an empty streaming buffer.
    pub fn new() -> Self {
        Self {
            context: Vec::new(),
            extended: Vec::new(),
        }
    }

    /// Logically clear both buffers, preserving their capacity.
    pub fn clear(&mut self) {
        self.context.clear();
        self.extended.clear();
    }
}

impl<T: Copy> StreamingBuffer<T> {
    /// Replace the context with the trailing `keep` elements of `extended`.
    pub fn retain_context(&mut self, keep: usize) {
        let start = self.extended.len().saturating_sub(keep);
        self.context.clear();
        self.context.extend_from_slice(&self.extended[start..]);
    }
}
