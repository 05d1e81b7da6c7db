//! Reusable scratch storage for the convergence loop.
//!
//! ## Purpose
//!
//! The engine copies the valid part of a sample into a scratch region and
//! compacts it in place every round. When many rows or arrays are clipped one
//! after another, that region can be allocated once and handed to every call.
//! This module provides an owner for such a region.
//!
//! ## Design notes
//!
//! * **Explicit length**: The engine only ever sees a `&mut [T]`; the live part is
//!   tracked by a separate count, never by resizing a container.
//! * **Lazy Expansion**: `prepare` grows the storage on demand but never shrinks it.
//!
//! ## Invariants
//!
//! * Capacity is monotonically increasing across `prepare` calls.
//! * Contents between calls are unspecified; every call reseeds the prefix it uses.
//!
//! ## Non-goals
//!
//! * Thread-local caching (buffers are passed explicitly; one buffer per thread).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Zero;

// ============================================================================
// ClipBuffer
// ============================================================================

/// Grow-only scratch buffer that can be shared across sequential clipping calls.
#[derive(Debug, Clone, Default)]
pub struct ClipBuffer<T>(Vec<T>);

impl<T: Copy + Zero> ClipBuffer<T> {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a buffer that can serve samples of up to `len` elements without growing.
    pub fn with_len(len: usize) -> Self {
        let mut buffer = Self::new();
        buffer.prepare(len);
        buffer
    }

    /// Return a scratch slice of exactly `len` elements, growing the storage if needed.
    #[inline]
    pub fn prepare(&mut self, len: usize) -> &mut [T] {
        if self.0.len() < len {
            self.0.resize(len, T::zero());
        }
        &mut self.0[..len]
    }

    /// Number of slots currently allocated.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no slots have been allocated yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The whole allocated region.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }
}
