#![cfg(feature = "dev")]
//! Tests for the bounds-convergence loop.
//!
//! These tests verify:
//! - Seeding honours finiteness, the mask and the bad flag
//! - Compaction is stable and inclusive
//! - Termination by convergence, iteration cap and exhaustion
//! - The live set never grows between rounds
//!
//! ## Test Organization
//!
//! 1. **Seeding** - Valid-value filtering
//! 2. **Compaction** - Inclusive, order-preserving
//! 3. **Termination** - Converged, capped, exhausted, empty
//! 4. **Standard Estimators** - Median and std_dev driving the loop

use approx::assert_relative_eq;

use sigmaclip::internals::engine::executor::{ClipConfig, ClipExecutor};
use sigmaclip::internals::math::dispersion::std_dev;
use sigmaclip::internals::math::median::median;

// ============================================================================
// Helper Functions
// ============================================================================

fn config(sigma: f64, max_iterations: Option<usize>) -> ClipConfig<f64> {
    ClipConfig {
        sigma_lower: sigma,
        sigma_upper: sigma,
        max_iterations,
        bad_flag: true,
    }
}

fn zero_center(_: &mut [f64]) -> f64 {
    0.0
}

/// Spread that puts the upper bound just below the largest live value.
fn shrinking_spread(live: &mut [f64]) -> f64 {
    live.iter().copied().fold(f64::MIN, f64::max) * 0.99
}

fn one_to_ten() -> Vec<f64> {
    (1..=10).map(f64::from).collect()
}

// ============================================================================
// Seeding Tests
// ============================================================================

/// Test that non-finite values are never seeded.
#[test]
fn test_seed_skips_non_finite() {
    let sample = [1.0, f64::NAN, 3.0, f64::INFINITY, 5.0, f64::NEG_INFINITY];
    let mut buffer = [0.0; 6];

    let count = ClipExecutor::seed(&sample, None, true, &mut buffer);

    assert_eq!(count, 3);
    assert_eq!(&buffer[..count], &[1.0, 3.0, 5.0]);
}

/// Test that masked values are excluded according to the bad flag.
#[test]
fn test_seed_respects_bad_flag() {
    let sample = [1.0, f64::NAN, 3.0, 4.0, 5.0];
    let mask = [false, false, true, false, false];
    let mut buffer = [0.0; 5];

    // `true` means exclude
    let count = ClipExecutor::seed(&sample, Some(&mask[..]), true, &mut buffer);
    assert_eq!(&buffer[..count], &[1.0, 4.0, 5.0]);

    // `false` means exclude
    let count = ClipExecutor::seed(&sample, Some(&mask[..]), false, &mut buffer);
    assert_eq!(&buffer[..count], &[3.0]);
}

// ============================================================================
// Compaction Tests
// ============================================================================

/// Test that compaction keeps boundary values and preserves order.
#[test]
fn test_compact_inclusive_and_stable() {
    let mut live = [5.0, 1.0, 9.0, 3.0, 7.0, 3.0];
    let kept = ClipExecutor::compact(&mut live, 3.0, 7.0);

    assert_eq!(kept, 4);
    assert_eq!(&live[..kept], &[5.0, 3.0, 7.0, 3.0]);
}

// ============================================================================
// Termination Tests
// ============================================================================

/// Test that a sample with nothing valid yields (0, 0) bounds.
#[test]
fn test_no_valid_values() {
    let sample = [f64::NAN, f64::INFINITY];
    let mut buffer = [0.0; 2];

    let bounds = ClipExecutor::compute_bounds(
        &sample,
        None,
        &mut buffer,
        &config(3.0, Some(5)),
        zero_center,
        shrinking_spread,
    );

    assert_eq!(bounds.as_tuple(), (0.0, 0.0));
    assert_eq!(bounds.n_valid, 0);
    assert_eq!(bounds.iterations, 0);
}

/// Test that an empty sample yields (0, 0) bounds.
#[test]
fn test_empty_sample() {
    let sample: [f64; 0] = [];
    let mut buffer: [f64; 0] = [];

    let bounds = ClipExecutor::compute_bounds(
        &sample,
        None,
        &mut buffer,
        &config(3.0, None),
        |v: &mut [f64]| median(v),
        |v: &mut [f64]| std_dev(v),
    );

    assert_eq!(bounds.as_tuple(), (0.0, 0.0));
}

/// Test that a finite cap stops the loop after that many rejecting rounds.
#[test]
fn test_iteration_cap() {
    let sample = one_to_ten();
    let mut buffer = vec![0.0; sample.len()];
    let mut rounds = 0;

    let bounds = ClipExecutor::compute_bounds(
        &sample,
        None,
        &mut buffer,
        &config(1.0, Some(3)),
        zero_center,
        |live: &mut [f64]| {
            rounds += 1;
            shrinking_spread(live)
        },
    );

    assert_eq!(rounds, 3);
    assert_eq!(bounds.iterations, 3);
    assert_eq!(bounds.n_retained, 7);
    assert!(!bounds.converged);
    // Bounds of the third round, computed on 1..=8
    assert_relative_eq!(bounds.upper, 7.92, epsilon = 1e-12);
    assert_relative_eq!(bounds.lower, -7.92, epsilon = 1e-12);
}

/// Test that a cap of zero still runs exactly one round.
#[test]
fn test_zero_cap_runs_one_round() {
    let sample = one_to_ten();
    let mut buffer = vec![0.0; sample.len()];
    let mut rounds = 0;

    let bounds = ClipExecutor::compute_bounds(
        &sample,
        None,
        &mut buffer,
        &config(1.0, Some(0)),
        zero_center,
        |live: &mut [f64]| {
            rounds += 1;
            shrinking_spread(live)
        },
    );

    assert_eq!(rounds, 1);
    assert_eq!(bounds.iterations, 1);
    assert_eq!(bounds.n_retained, 9);
}

/// Test that an unbounded loop stops once the live set is exhausted.
#[test]
fn test_unbounded_until_exhausted() {
    let sample = one_to_ten();
    let mut buffer = vec![0.0; sample.len()];

    let bounds = ClipExecutor::compute_bounds(
        &sample,
        None,
        &mut buffer,
        &config(1.0, None),
        zero_center,
        shrinking_spread,
    );

    assert_eq!(bounds.iterations, 10);
    assert_eq!(bounds.n_retained, 0);
    assert!(!bounds.converged);
    assert_relative_eq!(bounds.upper, 0.99, epsilon = 1e-12);
}

/// Test that the live set only ever shrinks, by one value per round here.
#[test]
fn test_live_set_is_monotonic() {
    let sample = one_to_ten();
    let mut buffer = vec![0.0; sample.len()];
    let mut sizes = Vec::new();

    ClipExecutor::compute_bounds(
        &sample,
        None,
        &mut buffer,
        &config(1.0, None),
        zero_center,
        |live: &mut [f64]| {
            sizes.push(live.len());
            shrinking_spread(live)
        },
    );

    assert_eq!(sizes, (1..=10).rev().collect::<Vec<_>>());
    assert!(sizes.windows(2).all(|w| w[1] <= w[0]));
}

/// Test that values exactly on the bounds are kept.
#[test]
fn test_boundary_values_retained() {
    let sample = [-2.0, 2.0, 2.000_001, -3.0];
    let mut buffer = [0.0; 4];

    let bounds = ClipExecutor::compute_bounds(
        &sample,
        None,
        &mut buffer,
        &config(2.0, None),
        zero_center,
        |_: &mut [f64]| 1.0,
    );

    assert_eq!(bounds.as_tuple(), (-2.0, 2.0));
    assert_eq!(bounds.n_retained, 2);
    assert_eq!(bounds.iterations, 1);
    assert!(bounds.converged);
    assert_eq!(&buffer[..2], &[-2.0, 2.0]);
}

// ============================================================================
// Standard Estimator Tests
// ============================================================================

/// Test median/std clipping collapsing onto a constant remainder.
#[test]
fn test_zero_spread_after_rejection() {
    let sample = [1.0, 1.0, 1.0, 1.0, 1000.0];
    let mut buffer = [0.0; 5];

    let bounds = ClipExecutor::compute_bounds(
        &sample,
        None,
        &mut buffer,
        &config(1.0, None),
        |v: &mut [f64]| median(v),
        |v: &mut [f64]| std_dev(v),
    );

    assert_eq!(bounds.as_tuple(), (1.0, 1.0));
    assert_eq!(bounds.n_valid, 5);
    assert_eq!(bounds.n_retained, 4);
    assert_eq!(bounds.iterations, 1);
    assert!(bounds.converged);
}

/// Test that a single value converges onto itself.
#[test]
fn test_single_value() {
    let sample = [5.0];
    let mut buffer = [0.0];

    let bounds = ClipExecutor::compute_bounds(
        &sample,
        None,
        &mut buffer,
        &config(3.0, Some(5)),
        |v: &mut [f64]| median(v),
        |v: &mut [f64]| std_dev(v),
    );

    assert_eq!(bounds.as_tuple(), (5.0, 5.0));
    assert_eq!(bounds.n_retained, 1);
    assert!(bounds.converged);
}

/// Test that the scratch buffer may be longer than the sample.
#[test]
fn test_oversized_buffer() {
    let sample = [1.0, 2.0, 3.0];
    let mut buffer = [f64::NAN; 16];

    let bounds = ClipExecutor::compute_bounds(
        &sample,
        None,
        &mut buffer,
        &config(3.0, Some(5)),
        |v: &mut [f64]| median(v),
        |v: &mut [f64]| std_dev(v),
    );

    assert_eq!(bounds.n_retained, 3);
    assert_relative_eq!(bounds.center, 2.0, epsilon = 1e-12);
}

/// Test that the default configuration matches the documented defaults.
#[test]
fn test_default_config() {
    let config = ClipConfig::<f64>::default();

    assert_eq!(config.sigma_lower, 3.0);
    assert_eq!(config.sigma_upper, 3.0);
    assert_eq!(config.max_iterations, Some(5));
    assert!(config.bad_flag);
}
