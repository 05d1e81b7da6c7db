//! Output of the bounds-convergence loop.
//!
//! ## Purpose
//!
//! This module defines `ClipBounds`, the converged accept interval together
//! with the bookkeeping of the loop that produced it.
//!
//! ## Design notes
//!
//! * **Plain data**: All fields are public and `Copy`.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `n_retained <= n_valid`.
//! * `lower <= upper` whenever `n_valid > 0` and the spread is non-negative.
//! * An empty valid set yields `lower == upper == 0` and `iterations == 0`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// Inclusive accept interval produced by iterative sigma clipping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipBounds<T> {
    /// Lowest value still classified as good.
    pub lower: T,

    /// Highest value still classified as good.
    pub upper: T,

    /// Center of the live set in the last round.
    pub center: T,

    /// Spread of the live set in the last round.
    pub spread: T,

    /// Number of rounds that rejected at least one value.
    pub iterations: usize,

    /// Number of finite, unmasked values seeded into the loop.
    pub n_valid: usize,

    /// Number of values inside the final bounds.
    pub n_retained: usize,

    /// Whether the last round rejected nothing.
    pub converged: bool,
}

impl<T: Float> ClipBounds<T> {
    /// Bounds for a sample without any valid value.
    pub fn empty() -> Self {
        Self {
            lower: T::zero(),
            upper: T::zero(),
            center: T::zero(),
            spread: T::zero(),
            iterations: 0,
            n_valid: 0,
            n_retained: 0,
            converged: false,
        }
    }

    /// `(lower, upper)` pair.
    #[inline]
    pub fn as_tuple(&self) -> (T, T) {
        (self.lower, self.upper)
    }

    /// Whether `value` is finite and inside `[lower, upper]`.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        value.is_finite() && value >= self.lower && value <= self.upper
    }

    /// Number of valid values rejected by the loop.
    #[inline]
    pub fn n_rejected(&self) -> usize {
        self.n_valid - self.n_retained
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for ClipBounds<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Valid points:    {}", self.n_valid)?;
        writeln!(f, "  Retained points: {}", self.n_retained)?;
        writeln!(f, "  Iterations:      {}", self.iterations)?;
        writeln!(
            f,
            "  Converged:       {}",
            if self.converged { "yes" } else { "no" }
        )?;
        writeln!(f)?;
        writeln!(f, "Bounds:")?;
        writeln!(f, "  Center: {:>14.6}", self.center)?;
        writeln!(f, "  Spread: {:>14.6}", self.spread)?;
        writeln!(f, "  Lower:  {:>14.6}", self.lower)?;
        write!(f, "  Upper:  {:>14.6}", self.upper)
    }
}
