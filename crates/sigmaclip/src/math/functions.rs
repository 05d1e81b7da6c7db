//! Pluggable center and dispersion functions.
//!
//! ## Purpose
//!
//! Each convergence round reduces the live set to two scalars: a center and a
//! spread. This module names the built-in choices and lets callers plug in
//! their own through a plain function pointer.
//!
//! ## Design notes
//!
//! * **Narrow interface**: A function is `fn(&mut [T]) -> T`, a scalar from a sequence.
//! * **Reordering allowed**: Functions may reorder the live set (the median does),
//!   but must not change its values or keep a reference to it.
//! * **Parsing**: `FromStr` accepts the customary short names for configuration
//!   coming from strings (bindings, CLI flags, config files).
//!
//! ## Key concepts
//!
//! * **Median** (default center): selection-based, O(n) expected.
//! * **SampleStdDev** (default dispersion): unbiased standard deviation, `n - 1`.
//!
//! ## Non-goals
//!
//! * This module does not run the convergence loop.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// External dependencies
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::math::dispersion::{mad_std, mean, sample_std_dev, std_dev};
use crate::math::median::median;
use crate::primitives::errors::SigmaClipError;

/// Signature for a user-supplied center or dispersion function.
pub type ReduceFn<T> = fn(&mut [T]) -> T;

// ============================================================================
// Center Function
// ============================================================================

/// Estimator for the central value of the live set.
#[derive(Debug, Clone, Copy)]
pub enum CenterFunction<T> {
    /// Selection-based median.
    Median,

    /// Arithmetic mean.
    Mean,

    /// User-supplied estimator.
    Custom(ReduceFn<T>),
}

impl<T> Default for CenterFunction<T> {
    fn default() -> Self {
        Self::Median
    }
}

impl<T: Float> CenterFunction<T> {
    /// Compute the center of `vals`.
    #[inline]
    pub fn compute(&self, vals: &mut [T]) -> T {
        match self {
            Self::Median => median(vals),
            Self::Mean => mean(vals),
            Self::Custom(f) => f(vals),
        }
    }

    /// Short name used in summaries.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Median => "median",
            Self::Mean => "mean",
            Self::Custom(_) => "custom",
        }
    }
}

impl<T> FromStr for CenterFunction<T> {
    type Err = SigmaClipError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "median" => Ok(Self::Median),
            "mean" | "average" => Ok(Self::Mean),
            _ => Err(SigmaClipError::UnknownFunction {
                kind: "center",
                name: name.to_string(),
            }),
        }
    }
}

// ============================================================================
// Dispersion Function
// ============================================================================

/// Estimator for the spread of the live set.
#[derive(Debug, Clone, Copy)]
pub enum DispersionFunction<T> {
    /// Population standard deviation (divides by `n`).
    StdDev,

    /// Sample standard deviation (divides by `n - 1`, zero below two values).
    SampleStdDev,

    /// Median absolute deviation scaled to a normal standard deviation.
    MadStd,

    /// User-supplied estimator.
    Custom(ReduceFn<T>),
}

impl<T> Default for DispersionFunction<T> {
    fn default() -> Self {
        Self::SampleStdDev
    }
}

impl<T: Float> DispersionFunction<T> {
    /// Compute the spread of `vals`.
    #[inline]
    pub fn compute(&self, vals: &mut [T]) -> T {
        match self {
            Self::StdDev => std_dev(vals),
            Self::SampleStdDev => sample_std_dev(vals),
            Self::MadStd => mad_std(vals),
            Self::Custom(f) => f(vals),
        }
    }

    /// Short name used in summaries.
    pub fn name(&self) -> &'static str {
        match self {
            Self::StdDev => "std",
            Self::SampleStdDev => "sample_std",
            Self::MadStd => "mad_std",
            Self::Custom(_) => "custom",
        }
    }
}

impl<T> FromStr for DispersionFunction<T> {
    type Err = SigmaClipError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "std" | "stddev" | "std_dev" => Ok(Self::StdDev),
            "sample_std" | "sample_stddev" => Ok(Self::SampleStdDev),
            "mad_std" | "mad" => Ok(Self::MadStd),
            _ => Err(SigmaClipError::UnknownFunction {
                kind: "dispersion",
                name: name.to_string(),
            }),
        }
    }
}
