#![cfg(feature = "dev")]
//! Tests for statistics of the retained values.

use approx::assert_relative_eq;

use sigmaclip::internals::engine::output::ClipBounds;
use sigmaclip::internals::evaluation::stats::ClippedStats;

/// Test mean, median and std of a retained set.
#[test]
fn test_stats_from_retained() {
    let mut retained = [5.0, 1.0, 4.0, 2.0, 3.0];
    let stats = ClippedStats::from_retained(&mut retained, ClipBounds::empty());

    assert_relative_eq!(stats.mean, 3.0, epsilon = 1e-12);
    assert_eq!(stats.median, 3.0);
    assert_relative_eq!(stats.std_dev, 2.0f64.sqrt(), epsilon = 1e-12);
}

/// Test that an empty retained set yields NaN statistics.
#[test]
fn test_stats_empty() {
    let mut retained: [f64; 0] = [];
    let stats = ClippedStats::from_retained(&mut retained, ClipBounds::empty());

    assert!(stats.mean.is_nan());
    assert!(stats.median.is_nan());
    assert!(stats.std_dev.is_nan());
    assert_eq!(stats.bounds.n_retained, 0);
}

/// Test the summary rendering.
#[test]
fn test_stats_display() {
    let mut retained = [1.0, 2.0, 3.0];
    let stats = ClippedStats::from_retained(&mut retained, ClipBounds::empty());
    let text = format!("{}", stats);

    assert!(text.starts_with("Clipped Statistics:"));
    assert!(text.contains("Median:"));
    assert!(text.contains("2.000000"));
}
