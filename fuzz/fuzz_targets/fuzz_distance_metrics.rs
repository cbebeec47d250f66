//! Fuzz target for node value distance metrics.
//!
//! Looks for panics and for results that break the metric contract
//! (negative or asymmetric distances) on finite inputs.
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_distance_metrics
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wayfinder_core::distance::{euclidean_distance, manhattan_distance};
use wayfinder_core::{CpuDistance, DistanceEngine, DistanceMetric};

/// Fuzzing input for distance calculations.
#[derive(Arbitrary, Debug)]
struct DistanceInput {
    /// First vector
    vec_a: Vec<f32>,
    /// Second vector (truncated/padded to the length of `vec_a`)
    vec_b: Vec<f32>,
    euclidean: bool,
}

fuzz_target!(|input: DistanceInput| {
    // Node values have at most 3 components
    let dim = input.vec_a.len().min(3);
    if dim == 0 {
        return;
    }

    let a: Vec<f32> = input.vec_a.into_iter().take(dim).collect();
    let mut b: Vec<f32> = input.vec_b.into_iter().take(dim).collect();
    b.resize(dim, 0.0);

    let metric = if input.euclidean {
        DistanceMetric::Euclidean
    } else {
        DistanceMetric::Manhattan
    };
    let engine = CpuDistance::new(metric);
    let forward = engine.distance(&a, &b);
    let backward = engine.distance(&b, &a);

    let _ = manhattan_distance(&a, &b);
    let _ = euclidean_distance(&a, &b);

    if forward.is_finite() && backward.is_finite() {
        assert!(forward >= 0.0, "negative distance {forward}");
        assert_eq!(forward.to_bits(), backward.to_bits(), "asymmetric distance");
    }
});
