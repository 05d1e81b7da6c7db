//! Promotion of integer (or other numeric) samples to a float working type.
//!
//! Outliers are marked with NaN, which has no integer representation, so
//! integer samples are converted before any clipping work. Conversion goes
//! through `num_traits::NumCast` and fails instead of saturating.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::{Float, ToPrimitive};

// Internal dependencies
use crate::primitives::errors::SigmaClipError;

/// Convert every element of `values` to the float type `T`.
pub fn promote<I, T>(values: &[I]) -> Result<Vec<T>, SigmaClipError>
where
    I: ToPrimitive + Copy,
    T: Float,
{
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            T::from(v).ok_or_else(|| {
                SigmaClipError::InvalidNumericValue(format!(
                    "values[{i}] is not representable as a float"
                ))
            })
        })
        .collect()
}
