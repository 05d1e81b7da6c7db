//! Spread estimators over a live set.
//!
//! All estimators return `T::zero()` for an empty slice. Both standard
//! deviations are zero for a single value, which makes the bounds of a lone
//! survivor collapse onto that value.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::median::median;

/// Scale factor turning a MAD into a standard deviation under normality: `1 / Φ⁻¹(3/4)`.
pub const MAD_TO_SIGMA: f64 = 1.482_602_218_505_602;

/// Arithmetic mean; zero for an empty slice.
#[inline]
pub fn mean<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let n = T::from(vals.len()).unwrap_or(T::one());
    vals.iter().fold(T::zero(), |acc, &v| acc + v) / n
}

/// Sum of squared deviations from the mean.
#[inline]
fn sum_sq_dev<T: Float>(vals: &[T]) -> T {
    let m = mean(vals);
    vals.iter().fold(T::zero(), |acc, &v| {
        let d = v - m;
        acc + d * d
    })
}

/// Population standard deviation (divides by `n`).
#[inline]
pub fn std_dev<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let n = T::from(vals.len()).unwrap_or(T::one());
    (sum_sq_dev(vals) / n).sqrt()
}

/// Sample standard deviation (divides by `n - 1`); zero below two values.
#[inline]
pub fn sample_std_dev<T: Float>(vals: &[T]) -> T {
    if vals.len() < 2 {
        return T::zero();
    }
    let dof = T::from(vals.len() - 1).unwrap_or(T::one());
    (sum_sq_dev(vals) / dof).sqrt()
}

/// Normal-consistent MAD: `1.4826 * median(|x - median(x)|)`.
///
/// Works on a private copy: the live set must keep its values, and absolute
/// deviations cannot be turned back into them.
pub fn mad_std<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }

    let mut deviations: Vec<T> = vals.to_vec();
    let center = median(&mut deviations);
    for v in deviations.iter_mut() {
        *v = (*v - center).abs();
    }

    let scale = T::from(MAD_TO_SIGMA).unwrap_or(T::one());
    median(&mut deviations) * scale
}
