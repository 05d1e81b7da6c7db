#![cfg(feature = "dev")]
//! Tests for input validation.
//!
//! ## Test Organization
//!
//! 1. **Parameter Validation** - Sigma tolerances and duplicate parameters
//! 2. **Call Validation** - Mask, buffer and row lengths

use sigmaclip::internals::engine::validator::Validator;
use sigmaclip::internals::primitives::errors::SigmaClipError;

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test that zero and positive tolerances are accepted.
#[test]
fn test_validate_sigma_accepts_non_negative() {
    assert!(Validator::validate_sigma(0.0f64, "sigma_lower").is_ok());
    assert!(Validator::validate_sigma(3.0f64, "sigma_upper").is_ok());
    assert!(Validator::validate_sigma(1e9f32, "sigma_upper").is_ok());
}

/// Test that negative and non-finite tolerances are rejected.
#[test]
fn test_validate_sigma_rejects_invalid() {
    assert_eq!(
        Validator::validate_sigma(-0.5f64, "sigma_lower"),
        Err(SigmaClipError::InvalidSigma {
            parameter: "sigma_lower",
            value: -0.5,
        })
    );
    assert!(matches!(
        Validator::validate_sigma(f64::NAN, "sigma_upper"),
        Err(SigmaClipError::InvalidSigma { parameter: "sigma_upper", .. })
    ));
    assert!(Validator::validate_sigma(f64::INFINITY, "sigma_upper").is_err());
}

/// Test duplicate parameter reporting.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("center")),
        Err(SigmaClipError::DuplicateParameter { parameter: "center" })
    );
}

// ============================================================================
// Call Validation Tests
// ============================================================================

/// Test mask length validation.
#[test]
fn test_validate_mask() {
    let mask = [true, false, true];

    assert!(Validator::validate_mask(3, None).is_ok());
    assert!(Validator::validate_mask(3, Some(&mask[..])).is_ok());
    assert_eq!(
        Validator::validate_mask(4, Some(&mask[..])),
        Err(SigmaClipError::MismatchedMask {
            data_len: 4,
            mask_len: 3,
        })
    );
}

/// Test scratch buffer length validation; longer buffers are fine.
#[test]
fn test_validate_buffer() {
    assert!(Validator::validate_buffer(10, 10).is_ok());
    assert!(Validator::validate_buffer(10, 64).is_ok());
    assert_eq!(
        Validator::validate_buffer(10, 9),
        Err(SigmaClipError::BufferTooSmall { got: 9, min: 10 })
    );
}

/// Test row length validation.
#[test]
fn test_validate_row_len() {
    assert!(Validator::validate_row_len(12, 4).is_ok());
    assert!(Validator::validate_row_len(0, 3).is_ok());
    assert_eq!(
        Validator::validate_row_len(12, 0),
        Err(SigmaClipError::InvalidRowLength {
            row_len: 0,
            data_len: 12,
        })
    );
    assert!(Validator::validate_row_len(12, 5).is_err());
}

/// Test that error messages name the failing quantity.
#[test]
fn test_error_display() {
    let msg = SigmaClipError::BufferTooSmall { got: 3, min: 8 }.to_string();
    assert!(msg.contains('3') && msg.contains('8'));

    let msg = SigmaClipError::InvalidSigma {
        parameter: "sigma_lower",
        value: -1.0,
    }
    .to_string();
    assert!(msg.contains("sigma_lower"));
}
