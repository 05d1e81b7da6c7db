//! Input validation for clipping configuration and call arguments.
//!
//! ## Purpose
//!
//! This module checks the static preconditions of a clipping call before any
//! work is done: sigma tolerances, mask length, scratch buffer length and row
//! shape.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **No coercion**: Short buffers and masks are rejected, never truncated.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * Non-finite sample values are not an error; they are filtered later.
//!
//! ## Non-goals
//!
//! * This module does not filter, copy or clip data.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SigmaClipError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for clipping parameters and inputs.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a clip tolerance: finite and non-negative.
    pub fn validate_sigma<T: Float>(sigma: T, parameter: &'static str) -> Result<(), SigmaClipError> {
        if !sigma.is_finite() || sigma < T::zero() {
            return Err(SigmaClipError::InvalidSigma {
                parameter,
                value: sigma.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SigmaClipError> {
        if let Some(param) = duplicate_param {
            return Err(SigmaClipError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    // ========================================================================
    // Call Validation
    // ========================================================================

    /// Validate that an exclusion mask is parallel to the sample.
    pub fn validate_mask(data_len: usize, mask: Option<&[bool]>) -> Result<(), SigmaClipError> {
        match mask {
            Some(mask) if mask.len() != data_len => Err(SigmaClipError::MismatchedMask {
                data_len,
                mask_len: mask.len(),
            }),
            _ => Ok(()),
        }
    }

    /// Validate that a scratch buffer can hold the whole sample.
    pub fn validate_buffer(data_len: usize, buffer_len: usize) -> Result<(), SigmaClipError> {
        if buffer_len < data_len {
            return Err(SigmaClipError::BufferTooSmall {
                got: buffer_len,
                min: data_len,
            });
        }
        Ok(())
    }

    /// Validate a row length for row-wise clipping.
    pub fn validate_row_len(data_len: usize, row_len: usize) -> Result<(), SigmaClipError> {
        if row_len == 0 || !data_len.is_multiple_of(row_len) {
            return Err(SigmaClipError::InvalidRowLength { row_len, data_len });
        }
        Ok(())
    }
}
