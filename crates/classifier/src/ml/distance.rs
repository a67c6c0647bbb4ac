//! Distance functions over the feature space.

use classifier_spi::Sample;
use std::cmp::Ordering;

/// Euclidean distance between two samples, divided by four.
///
/// Coordinates are scaled by a power of two before subtracting and `hypot`
/// avoids squaring, so the result is finite for any two finite samples.
pub fn scaled_euclidean(a: &Sample, b: &Sample) -> f64 {
    let d = |p: f64, q: f64| p * 0.25 - q * 0.25;
    d(a.x, b.x).hypot(d(a.y, b.y)).hypot(d(a.z, b.z))
}

/// Order `|query - a|` against `|query - b|`.
///
/// Evaluates `|q-a|² - |q-b|² = Σ (aᵢ - bᵢ)(aᵢ + bᵢ - 2qᵢ)` (scaled by 1/16)
/// instead of comparing two rounded distances. A difference that is tiny
/// next to the distances themselves still decides the order, e.g. points at
/// -1 and 1 seen from 1e200. Falls back to [`scaled_euclidean`] if the terms
/// overflow in opposite directions.
pub fn compare_distance(query: &Sample, a: &Sample, b: &Sample) -> Ordering {
    let term = |q: f64, p: f64, r: f64| (p * 0.25 - r * 0.25) * (p * 0.25 + r * 0.25 - q * 0.5);
    let diff = term(query.x, a.x, b.x) + term(query.y, a.y, b.y) + term(query.z, a.z, b.z);

    match diff.partial_cmp(&0.0) {
        Some(ordering) => ordering,
        None => scaled_euclidean(query, a).total_cmp(&scaled_euclidean(query, b)),
    }
}
