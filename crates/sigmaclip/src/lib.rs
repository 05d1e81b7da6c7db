//! # sigmaclip: iterative sigma clipping for Rust
//!
//! Robust accept/reject bounds for numeric samples. A center and a spread are
//! estimated on the values not yet rejected, the bounds
//! `[center - sigma_lower * spread, center + sigma_upper * spread]` are
//! narrowed, and the process repeats until nothing more is rejected, nothing
//! is left, or an iteration cap is hit.
//!
//! ## What is sigma clipping?
//!
//! Outliers inflate the mean and variance of a sample, which in turn hides
//! them. Sigma clipping removes the most extreme values, recomputes the
//! statistics on what is left, and repeats. The default center is the median,
//! computed with an in-place selection algorithm in expected linear time, so
//! no sort is needed per round.
//!
//! ## Quick Start
//!
//! ```rust
//! use sigmaclip::prelude::*;
//!
//! let mut data: Vec<f64> = vec![1.0, 1.1, 0.9, 1.0, 1.2, 0.8, 1.0, 1.05, 0.95, 1.0, 50.0];
//!
//! let clipper = SigmaClip::new()
//!     .sigma(3.0)            // 3 spread units on both sides
//!     .max_iterations(5)     // at most 5 rejecting rounds
//!     .build()?;
//!
//! let bounds = clipper.clip_in_place(&mut data, None, None)?;
//!
//! assert!(data[10].is_nan());
//! assert!(bounds.lower <= 0.8 && bounds.upper >= 1.2);
//! println!("{}", bounds);
//! # Result::<(), SigmaClipError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Valid points:    11
//!   Retained points: 10
//!   Iterations:      1
//!   Converged:       yes
//!
//! Bounds:
//!   Center:       1.000000
//!   Spread:       0.108012
//!   Lower:        0.675963
//!   Upper:        1.324037
//! ```
//!
//! ### Masks, copies and reusable buffers
//!
//! ```rust
//! use sigmaclip::prelude::*;
//!
//! let data = [3.0, 2.0, f64::NAN, 2.5, 100.0, 2.2, 2.8, 3.1];
//! let exclude = [false, false, false, false, false, false, false, true];
//!
//! let clipper = SigmaClip::new()
//!     .sigma_lower(4.0)
//!     .sigma_upper(2.0)
//!     .center(Median)
//!     .dispersion(MadStd)
//!     .until_converged()
//!     .build()?;
//!
//! // Caller-owned scratch space, reused across calls.
//! let mut scratch = vec![0.0; data.len()];
//!
//! let flags = clipper.clip_to_mask(&data, Some(&exclude[..]), Some(&mut scratch[..]))?;
//! assert!(flags[2] && flags[4] && flags[7]);
//!
//! let copy = clipper.clip_copy(&data, Some(&exclude[..]), Some(&mut scratch[..]))?;
//! assert!(copy[4].is_nan());
//! assert_eq!(data[4], 100.0);
//! # Result::<(), SigmaClipError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every operation returns `Result<_, SigmaClipError>`. Errors are reserved
//! for inconsistent calls: a mask or buffer of the wrong length, a negative
//! sigma, a row length that does not divide the data. A sample with no finite,
//! unmasked value is not an error; its bounds are `(0, 0)`.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! sigmaclip = { version = "0.3", default-features = false }
//! ```
//!
//! ## Logging
//!
//! The crate reports through the [`log`](https://docs.rs/log) facade:
//! `trace` for every round of the loop, `debug` for per-call summaries and
//! `warn` when more than half of the valid values were rejected. Install any
//! `log` backend to see them.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - selection, buffers, errors.
mod primitives;

// Layer 2: Math - median and spread estimators.
mod math;

// Layer 3: Engine - the bounds-convergence loop.
mod engine;

// Layer 4: Evaluation - clipped summary statistics.
mod evaluation;

// Layer 5: Adapters - mask, in-place, copy and row outputs.
mod adapters;

// High-level fluent API.
mod api;

// Standard sigma clipping prelude.
pub mod prelude {
    pub use crate::api::{
        CenterFunction::{self, Mean, Median},
        ClipBounds, ClipBuffer, ClippedStats,
        DispersionFunction::{self, MadStd, SampleStdDev, StdDev},
        SigmaClipBuilder as SigmaClip, SigmaClipError, SigmaClipper, promote,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
