//! Summary statistics of the values that survive clipping.
//!
//! ## Purpose
//!
//! Sigma clipping is most often run to get outlier-resistant summary numbers.
//! This module computes mean, median and standard deviation over the values
//! retained by the convergence loop.
//!
//! ## Design notes
//!
//! * **Reuses the live set**: Statistics are read from the compacted prefix the
//!   engine leaves in the scratch buffer; no second pass over the sample.
//! * **Empty input**: With nothing retained every statistic is NaN, since zero
//!   would read as a measurement here.
//!
//! ## Non-goals
//!
//! * This module does not decide which values are retained.

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::engine::output::ClipBounds;
use crate::math::dispersion::{mean, std_dev};
use crate::math::median::median;

// ============================================================================
// Clipped Statistics
// ============================================================================

/// Mean, median and population standard deviation of the retained values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippedStats<T> {
    /// Mean of the retained values.
    pub mean: T,

    /// Median of the retained values.
    pub median: T,

    /// Population standard deviation of the retained values.
    pub std_dev: T,

    /// Bounds that selected the retained values.
    pub bounds: ClipBounds<T>,
}

impl<T: Float> ClippedStats<T> {
    /// Compute statistics over `retained`, which may be reordered.
    pub fn from_retained(retained: &mut [T], bounds: ClipBounds<T>) -> Self {
        if retained.is_empty() {
            return Self {
                mean: T::nan(),
                median: T::nan(),
                std_dev: T::nan(),
                bounds,
            };
        }

        Self {
            mean: mean(retained),
            std_dev: std_dev(retained),
            median: median(retained),
            bounds,
        }
    }
}

impl<T: Float + Display + Debug> Display for ClippedStats<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Clipped Statistics:")?;
        writeln!(
            f,
            "  Retained: {} of {}",
            self.bounds.n_retained, self.bounds.n_valid
        )?;
        writeln!(f, "  Mean:     {:>14.6}", self.mean)?;
        writeln!(f, "  Median:   {:>14.6}", self.median)?;
        write!(f, "  Std Dev:  {:>14.6}", self.std_dev)
    }
}
