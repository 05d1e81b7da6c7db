//! Execution engine for iterative sigma clipping.
//!
//! ## Purpose
//!
//! This module runs the bounds-convergence loop. It seeds a scratch buffer
//! with the valid part of a sample, then repeatedly reduces the live prefix of
//! that buffer to a center and a spread, derives inclusive bounds, and
//! compacts the live prefix down to the values inside them.
//!
//! ## Design notes
//!
//! * **Arena**: The caller owns the scratch buffer; the loop never allocates.
//! * **Explicit length**: The live set is `buffer[..count]`, tracked by a count.
//! * **Stable compaction**: Survivors keep their relative order.
//! * **Pluggable reducers**: Center and spread are any `FnMut(&mut [T]) -> T`.
//! * **Generics**: Generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! ### Termination (checked in this order after every compaction)
//! 1. Nothing rejected: converged.
//! 2. Iteration cap reached (when finite).
//! 3. Live set empty.
//!
//! ## Invariants
//!
//! * `count` never increases between rounds.
//! * Only finite values whose mask flag differs from `bad_flag` are seeded.
//! * At most `max_iterations + 1` rounds run when the cap is finite.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`).
//! * This module does not classify or modify the original sample (handled by adapters).

// External dependencies
use log::trace;
use num_traits::Float;

// Internal dependencies
use crate::engine::output::ClipBounds;

// ============================================================================
// Configuration
// ============================================================================

/// Parameters of one convergence run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipConfig<T> {
    /// Lower tolerance in spread units.
    pub sigma_lower: T,

    /// Upper tolerance in spread units.
    pub sigma_upper: T,

    /// Round cap; `None` iterates until convergence or exhaustion.
    pub max_iterations: Option<usize>,

    /// Mask value that marks an element as excluded.
    pub bad_flag: bool,
}

impl<T: Float> Default for ClipConfig<T> {
    fn default() -> Self {
        let three = T::from(3.0).unwrap_or(T::one());
        Self {
            sigma_lower: three,
            sigma_upper: three,
            max_iterations: Some(5),
            bad_flag: true,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Bounds-convergence loop.
pub struct ClipExecutor;

impl ClipExecutor {
    /// Copy every valid element of `sample` into the front of `buffer`, in order.
    ///
    /// An element is valid when it is finite and, if a mask is given, its flag
    /// differs from `bad_flag`. Returns the number of valid elements.
    pub fn seed<T: Float>(
        sample: &[T],
        mask: Option<&[bool]>,
        bad_flag: bool,
        buffer: &mut [T],
    ) -> usize {
        let mut count = 0;
        match mask {
            Some(mask) => {
                for (&v, &flag) in sample.iter().zip(mask) {
                    if v.is_finite() && flag != bad_flag {
                        buffer[count] = v;
                        count += 1;
                    }
                }
            }
            None => {
                for &v in sample {
                    if v.is_finite() {
                        buffer[count] = v;
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// Keep the values of `live` inside `[lower, upper]`, packed at the front.
    ///
    /// Returns the number kept. The order of kept values is preserved.
    #[inline]
    pub fn compact<T: Float>(live: &mut [T], lower: T, upper: T) -> usize {
        let mut kept = 0;
        for i in 0..live.len() {
            let v = live[i];
            if v >= lower && v <= upper {
                live[kept] = v;
                kept += 1;
            }
        }
        kept
    }

    /// Run the convergence loop and return the final bounds.
    ///
    /// `buffer` must be at least as long as `sample`. Sharing one buffer between
    /// calls is fine as long as the calls do not overlap.
    pub fn compute_bounds<T, C, D>(
        sample: &[T],
        mask: Option<&[bool]>,
        buffer: &mut [T],
        config: &ClipConfig<T>,
        mut center_fn: C,
        mut dispersion_fn: D,
    ) -> ClipBounds<T>
    where
        T: Float,
        C: FnMut(&mut [T]) -> T,
        D: FnMut(&mut [T]) -> T,
    {
        debug_assert!(buffer.len() >= sample.len());

        let n_valid = Self::seed(sample, mask, config.bad_flag, buffer);
        if n_valid == 0 {
            trace!("sigma clip: no valid values among {}", sample.len());
            return ClipBounds::empty();
        }

        let mut count = n_valid;
        let mut iterations = 0;

        loop {
            let live = &mut buffer[..count];
            let center = center_fn(live);
            let spread = dispersion_fn(live);
            let lower = center - spread * config.sigma_lower;
            let upper = center + spread * config.sigma_upper;

            let new_count = Self::compact(live, lower, upper);

            trace!(
                "sigma clip round {}: live={} kept={} center={} spread={} bounds=[{}, {}]",
                iterations,
                count,
                new_count,
                to_f64(center),
                to_f64(spread),
                to_f64(lower),
                to_f64(upper)
            );

            let converged = new_count == count;
            if !converged {
                count = new_count;
                iterations += 1;
            }

            let capped = config.max_iterations.is_some_and(|cap| iterations >= cap);
            if converged || capped || count == 0 {
                return ClipBounds {
                    lower,
                    upper,
                    center,
                    spread,
                    iterations,
                    n_valid,
                    n_retained: count,
                    converged,
                };
            }
        }
    }
}

#[inline]
fn to_f64<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}
