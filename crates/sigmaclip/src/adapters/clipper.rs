//! Validated sigma clipper and its calling conventions.
//!
//! ## Purpose
//!
//! This module provides `SigmaClipper`, the processor produced by the
//! builder. It validates each call, supplies a scratch buffer when the caller
//! does not, runs the engine, and hands the bounds to the classification
//! step that matches the requested output.
//!
//! ## Design notes
//!
//! * **Four outputs**: bounds only, outlier mask, in-place NaN marking, NaN-marked copy.
//! * **Buffer reuse**: Every operation accepts an optional caller-owned scratch
//!   buffer; without one a buffer of the sample's length is allocated per call.
//! * **Delegation**: Computation is delegated to the execution engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * The clipper is immutable; calls never influence each other.
//! * Mask and buffer lengths are checked before any work is done.
//! * The original sample is only written by `clip_in_place`, after bounds are final.
//!
//! ## Non-goals
//!
//! * This adapter does not parallelise; callers needing it use one buffer per thread.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{debug, warn};
use num_traits::Float;

// Internal dependencies
use crate::adapters::classify::{nan_outliers, outlier_mask};
use crate::engine::executor::{ClipConfig, ClipExecutor};
use crate::engine::output::ClipBounds;
use crate::engine::validator::Validator;
use crate::evaluation::stats::ClippedStats;
use crate::math::functions::{CenterFunction, DispersionFunction};
use crate::primitives::buffer::ClipBuffer;
use crate::primitives::errors::SigmaClipError;

// ============================================================================
// Sigma Clipper
// ============================================================================

/// Configured, validated sigma clipper.
#[derive(Debug, Clone, Copy)]
pub struct SigmaClipper<T> {
    pub(crate) config: ClipConfig<T>,
    pub(crate) center: CenterFunction<T>,
    pub(crate) dispersion: DispersionFunction<T>,
    pub(crate) mask_aware: bool,
}

impl<T: Float> SigmaClipper<T> {
    // ========================================================================
    // Accessors
    // ========================================================================

    /// Loop parameters (tolerances, iteration cap, mask convention).
    pub fn config(&self) -> &ClipConfig<T> {
        &self.config
    }

    /// Center function used each round.
    pub fn center(&self) -> CenterFunction<T> {
        self.center
    }

    /// Dispersion function used each round.
    pub fn dispersion(&self) -> DispersionFunction<T> {
        self.dispersion
    }

    /// Whether `clip_to_mask` also flags elements excluded by the input mask.
    pub fn mask_aware(&self) -> bool {
        self.mask_aware
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Compute the converged `[lower, upper]` bounds of `data`.
    ///
    /// Elements that are non-finite, or whose `mask` flag equals the configured
    /// bad flag, do not influence the statistics. If nothing is left the bounds
    /// are `(0, 0)`.
    pub fn compute_bounds(
        &self,
        data: &[T],
        mask: Option<&[bool]>,
        buffer: Option<&mut [T]>,
    ) -> Result<ClipBounds<T>, SigmaClipError> {
        self.run(data, mask, buffer)
    }

    /// Outlier mask for `data`: `true` where an element is non-finite or out of bounds.
    ///
    /// When the clipper is mask-aware, elements excluded by `mask` are flagged too.
    pub fn clip_to_mask(
        &self,
        data: &[T],
        mask: Option<&[bool]>,
        buffer: Option<&mut [T]>,
    ) -> Result<Vec<bool>, SigmaClipError> {
        let bounds = self.run(data, mask, buffer)?;
        let flags = outlier_mask(data, mask, self.config.bad_flag, &bounds, self.mask_aware);

        debug!(
            "clip_to_mask: {} of {} elements flagged",
            flags.iter().filter(|&&f| f).count(),
            data.len()
        );

        Ok(flags)
    }

    /// Overwrite outliers in `data` with NaN and return the bounds used.
    ///
    /// Running this again on its own output changes nothing further.
    pub fn clip_in_place(
        &self,
        data: &mut [T],
        mask: Option<&[bool]>,
        buffer: Option<&mut [T]>,
    ) -> Result<ClipBounds<T>, SigmaClipError> {
        let bounds = self.run(data, mask, buffer)?;
        let replaced = nan_outliers(data, &bounds);

        debug!(
            "clip_in_place: {} of {} elements set to NaN",
            replaced,
            data.len()
        );

        Ok(bounds)
    }

    /// Copy of `data` with outliers replaced by NaN; `data` is left untouched.
    pub fn clip_copy(
        &self,
        data: &[T],
        mask: Option<&[bool]>,
        buffer: Option<&mut [T]>,
    ) -> Result<Vec<T>, SigmaClipError> {
        let mut out = data.to_vec();
        self.clip_in_place(&mut out, mask, buffer)?;
        Ok(out)
    }

    /// Mean, median and standard deviation of the values that survive clipping.
    ///
    /// The retained values are read back from the scratch buffer, so a
    /// supplied `buffer` holds them (in unspecified order) after the call.
    pub fn clipped_stats(
        &self,
        data: &[T],
        mask: Option<&[bool]>,
        buffer: Option<&mut [T]>,
    ) -> Result<ClippedStats<T>, SigmaClipError> {
        Validator::validate_mask(data.len(), mask)?;

        let mut owned = ClipBuffer::new();
        let buffer = match buffer {
            Some(buffer) => {
                Validator::validate_buffer(data.len(), buffer.len())?;
                buffer
            }
            None => owned.prepare(data.len()),
        };

        let bounds = self.execute(data, mask, buffer);
        report(&bounds);
        Ok(ClippedStats::from_retained(
            &mut buffer[..bounds.n_retained],
            bounds,
        ))
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Validate the call, pick a buffer, and run the engine.
    fn run(
        &self,
        data: &[T],
        mask: Option<&[bool]>,
        buffer: Option<&mut [T]>,
    ) -> Result<ClipBounds<T>, SigmaClipError> {
        Validator::validate_mask(data.len(), mask)?;

        let bounds = match buffer {
            Some(buffer) => {
                Validator::validate_buffer(data.len(), buffer.len())?;
                self.execute(data, mask, buffer)
            }
            None => {
                let mut owned = vec![T::zero(); data.len()];
                self.execute(data, mask, &mut owned)
            }
        };

        report(&bounds);
        Ok(bounds)
    }

    /// Run the engine on a buffer that is already known to be long enough.
    pub(crate) fn execute(
        &self,
        data: &[T],
        mask: Option<&[bool]>,
        buffer: &mut [T],
    ) -> ClipBounds<T> {
        let center = self.center;
        let dispersion = self.dispersion;
        ClipExecutor::compute_bounds(
            data,
            mask,
            buffer,
            &self.config,
            |live| center.compute(live),
            |live| dispersion.compute(live),
        )
    }
}

/// Log how much of the valid data a run rejected.
pub(crate) fn report<T: Float>(bounds: &ClipBounds<T>) {
    let rejected = bounds.n_rejected();
    debug!(
        "sigma clip: {} of {} valid values rejected after {} iteration(s), converged={}",
        rejected, bounds.n_valid, bounds.iterations, bounds.converged
    );
    if rejected > bounds.n_valid / 2 {
        warn!(
            "sigma clip rejected {} of {} valid values; sigma tolerances may be too tight",
            rejected, bounds.n_valid
        );
    }
}
