//! High-level API for sigma clipping.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the clipping options and turns them into a validated
//! [`SigmaClipper`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Strict**: Setting the same parameter twice is reported by `.build()`.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! ### Defaults
//!
//! | option         | default               |
//! |----------------|-----------------------|
//! | sigma_lower    | 3                     |
//! | sigma_upper    | 3                     |
//! | max_iterations | 5 (`until_converged`) |
//! | center         | median                |
//! | dispersion     | sample std (`n - 1`)  |
//! | bad_flag       | `true`                |
//! | mask_aware     | `true`                |
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SigmaClipBuilder`] via `SigmaClip::new()`.
//! 2. Chain configuration methods (`.sigma()`, `.max_iterations()`, etc.).
//! 3. Call `.build()` to get a [`SigmaClipper`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::ClipConfig;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::clipper::SigmaClipper;
pub use crate::engine::output::ClipBounds;
pub use crate::evaluation::stats::ClippedStats;
pub use crate::math::functions::{CenterFunction, DispersionFunction, ReduceFn};
pub use crate::primitives::buffer::ClipBuffer;
pub use crate::primitives::errors::SigmaClipError;
pub use crate::primitives::promote::promote;

/// Fluent builder for sigma clipping options.
#[derive(Debug, Clone, Copy)]
pub struct SigmaClipBuilder<T> {
    /// Lower tolerance in spread units.
    pub sigma_lower: Option<T>,

    /// Upper tolerance in spread units.
    pub sigma_upper: Option<T>,

    /// Round cap; `Some(None)` means unbounded.
    pub max_iterations: Option<Option<usize>>,

    /// Center estimator.
    pub center: Option<CenterFunction<T>>,

    /// Spread estimator.
    pub dispersion: Option<DispersionFunction<T>>,

    /// Mask value meaning "exclude".
    pub bad_flag: Option<bool>,

    /// Whether mask output includes elements excluded by the input mask.
    pub mask_aware: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SigmaClipBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SigmaClipBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            sigma_lower: None,
            sigma_upper: None,
            max_iterations: None,
            center: None,
            dispersion: None,
            bad_flag: None,
            mask_aware: None,
            duplicate_param: None,
        }
    }

    /// Set both tolerances at once.
    pub fn sigma(mut self, sigma: T) -> Self {
        if self.sigma_lower.is_some() || self.sigma_upper.is_some() {
            self.duplicate_param = Some("sigma");
        }
        self.sigma_lower = Some(sigma);
        self.sigma_upper = Some(sigma);
        self
    }

    /// Set the lower tolerance (in spread units below the center).
    pub fn sigma_lower(mut self, sigma: T) -> Self {
        if self.sigma_lower.is_some() {
            self.duplicate_param = Some("sigma_lower");
        }
        self.sigma_lower = Some(sigma);
        self
    }

    /// Set the upper tolerance (in spread units above the center).
    pub fn sigma_upper(mut self, sigma: T) -> Self {
        if self.sigma_upper.is_some() {
            self.duplicate_param = Some("sigma_upper");
        }
        self.sigma_upper = Some(sigma);
        self
    }

    /// Cap the number of rejecting rounds.
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(Some(iterations));
        self
    }

    /// Iterate until no value is rejected or none is left.
    pub fn until_converged(mut self) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(None);
        self
    }

    /// Set the center estimator.
    pub fn center(mut self, center: CenterFunction<T>) -> Self {
        if self.center.is_some() {
            self.duplicate_param = Some("center");
        }
        self.center = Some(center);
        self
    }

    /// Set the spread estimator.
    pub fn dispersion(mut self, dispersion: DispersionFunction<T>) -> Self {
        if self.dispersion.is_some() {
            self.duplicate_param = Some("dispersion");
        }
        self.dispersion = Some(dispersion);
        self
    }

    /// Set which mask value marks an element as excluded.
    pub fn bad_flag(mut self, flag: bool) -> Self {
        if self.bad_flag.is_some() {
            self.duplicate_param = Some("bad_flag");
        }
        self.bad_flag = Some(flag);
        self
    }

    /// Choose whether `clip_to_mask` also flags elements excluded by the input mask.
    pub fn mask_aware(mut self, enabled: bool) -> Self {
        if self.mask_aware.is_some() {
            self.duplicate_param = Some("mask_aware");
        }
        self.mask_aware = Some(enabled);
        self
    }

    /// Validate the options and build the clipper.
    pub fn build(self) -> Result<SigmaClipper<T>, SigmaClipError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = ClipConfig::<T>::default();
        let config = ClipConfig {
            sigma_lower: self.sigma_lower.unwrap_or(defaults.sigma_lower),
            sigma_upper: self.sigma_upper.unwrap_or(defaults.sigma_upper),
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
            bad_flag: self.bad_flag.unwrap_or(defaults.bad_flag),
        };

        Validator::validate_sigma(config.sigma_lower, "sigma_lower")?;
        Validator::validate_sigma(config.sigma_upper, "sigma_upper")?;

        Ok(SigmaClipper {
            config,
            center: self.center.unwrap_or_default(),
            dispersion: self.dispersion.unwrap_or_default(),
            mask_aware: self.mask_aware.unwrap_or(true),
        })
    }
}
