//! Error types for sigma clipping operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can be raised when a clipping
//! call is entered with inconsistent inputs or when the clipper is configured
//! with invalid parameters.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., actual vs. required lengths).
//! * **Deferred**: Builder misuse (duplicate parameters) is recorded and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Call-entry validation**: Buffer length, mask length, row shape.
//! 2. **Parameter validation**: Negative or non-finite sigma tolerances.
//! 3. **Conversion**: Integer samples that cannot be represented as floats.
//!
//! ## Invariants
//!
//! * All-excluded or all-non-finite input is never an error.
//! * Every variant names the parameter or length that failed.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sigma clipping operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SigmaClipError {
    /// The scratch buffer cannot hold every element of the sample.
    BufferTooSmall {
        /// Length of the supplied buffer.
        got: usize,
        /// Required minimum (the sample length).
        min: usize,
    },

    /// The exclusion mask is not parallel to the sample.
    MismatchedMask {
        /// Number of elements in the sample.
        data_len: usize,
        /// Number of flags in the mask.
        mask_len: usize,
    },

    /// A clip tolerance is negative or not finite.
    InvalidSigma {
        /// Name of the tolerance (`sigma_lower` or `sigma_upper`).
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Row length is zero or does not evenly divide the data.
    InvalidRowLength {
        /// The row length provided.
        row_len: usize,
        /// Total number of elements.
        data_len: usize,
    },

    /// A value could not be represented in the working float type.
    InvalidNumericValue(String),

    /// A center or dispersion function name was not recognised.
    UnknownFunction {
        /// Which kind of function was being parsed.
        kind: &'static str,
        /// The unrecognised name.
        name: String,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SigmaClipError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::BufferTooSmall { got, min } => {
                write!(f, "Buffer too small: got {got} slots, need at least {min}")
            }
            Self::MismatchedMask { data_len, mask_len } => {
                write!(
                    f,
                    "Length mismatch: data has {data_len} elements, mask has {mask_len}"
                )
            }
            Self::InvalidSigma { parameter, value } => {
                write!(f, "Invalid {parameter}: {value} (must be >= 0 and finite)")
            }
            Self::InvalidRowLength { row_len, data_len } => {
                write!(
                    f,
                    "Invalid row length: {row_len} (must be > 0 and divide {data_len})"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::UnknownFunction { kind, name } => {
                write!(f, "Unknown {kind} function: {name}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SigmaClipError {}
