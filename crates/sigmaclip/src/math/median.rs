//! Selection-based median.
//!
//! Expected linear time per call; the slice is reordered, never sorted.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::selection::select_nth;

/// Median of `vals`, reordering them in place.
///
/// Odd lengths select the middle position. Even lengths select the
/// lower-middle position first, then the upper-middle one, and average the two
/// values read right after each selection.
///
/// An empty slice yields `T::zero()`. That value is a safe default for empty
/// input, not a meaningful median.
#[inline]
pub fn median<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    let mid = n / 2;
    if n.is_multiple_of(2) {
        let lower = select_nth(vals, mid - 1);
        let upper = select_nth(vals, mid);
        (lower + upper) / T::from(2.0).unwrap_or(T::one() + T::one())
    } else {
        select_nth(vals, mid)
    }
}
