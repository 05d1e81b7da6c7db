//! Classification of the original sample against converged bounds.
//!
//! ## Purpose
//!
//! The engine only looks at the valid, unmasked copy of a sample. This module
//! applies its bounds back to every element of the original, unfiltered
//! sample, either by producing an outlier mask or by overwriting outliers
//! with NaN.
//!
//! ## Design notes
//!
//! * **Finiteness is rechecked**: ±Inf never entered the statistics, and is
//!   still reported as an outlier here regardless of the bounds.
//! * **Inclusive bounds**: A value equal to either bound is good.
//! * **Idempotent**: NaN elements are left untouched by in-place marking.
//!
//! ## Invariants
//!
//! * The output mask has exactly one flag per sample element; `true` means outlier.
//! * An element is never turned from NaN into anything else.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::output::ClipBounds;

/// Flag every element that is non-finite or outside `bounds`.
///
/// With `mask_aware`, elements whose input mask flag equals `bad_flag` are
/// flagged as well. `mask` must be parallel to `sample` when given.
pub fn outlier_mask<T: Float>(
    sample: &[T],
    mask: Option<&[bool]>,
    bad_flag: bool,
    bounds: &ClipBounds<T>,
    mask_aware: bool,
) -> Vec<bool> {
    match mask {
        Some(mask) if mask_aware => sample
            .iter()
            .zip(mask)
            .map(|(&v, &flag)| flag == bad_flag || !bounds.contains(v))
            .collect(),
        _ => sample.iter().map(|&v| !bounds.contains(v)).collect(),
    }
}

/// Overwrite every outlier in `sample` with NaN.
///
/// Existing NaN elements are skipped. Returns the number of elements that
/// were replaced by this call.
pub fn nan_outliers<T: Float>(sample: &mut [T], bounds: &ClipBounds<T>) -> usize {
    let mut replaced = 0;
    for v in sample.iter_mut() {
        if v.is_nan() {
            continue;
        }
        if !bounds.contains(*v) {
            *v = T::nan();
            replaced += 1;
        }
    }
    replaced
}
