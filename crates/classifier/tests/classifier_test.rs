//! Unit tests for the classifier crate
//!
//! Exercise the public nearest-neighbor API without touching the filesystem.

use classifier::prelude::*;

fn training() -> TrainingSet {
    TrainingSet::new()
        .with(Sample::new(0.0, 0.0, 0.0), "Rest")
        .with(Sample::new(10.0, 0.0, 0.0), "Act")
        .with(Sample::new(0.0, 10.0, 0.0), "Reflect")
        .with(Sample::new(0.0, 0.0, 10.0), "Observe")
}

fn fitted(k: usize) -> NearestNeighbors {
    let mut knn = NearestNeighbors::new(k).unwrap();
    knn.fit(&training()).unwrap();
    knn
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_new_rejects_zero_k() {
    assert_eq!(
        NearestNeighbors::new(0).unwrap_err(),
        ClassifierError::InvalidParameter {
            name: "k".to_string(),
            reason: "must be at least 1".to_string(),
        }
    );
}

#[test]
fn test_classify_before_fit() {
    let knn = NearestNeighbors::new(1).unwrap();
    assert!(!knn.is_fitted());
    assert_eq!(
        knn.classify(&Sample::new(0.0, 0.0, 0.0)).unwrap_err(),
        ClassifierError::NotFitted
    );
}

#[test]
fn test_fit_empty_training_set() {
    let mut knn = NearestNeighbors::new(1).unwrap();
    assert_eq!(
        knn.fit(&TrainingSet::new()).unwrap_err(),
        ClassifierError::InsufficientData {
            required: 1,
            actual: 0
        }
    );
    assert!(!knn.is_fitted());
}

#[test]
fn test_fit_non_finite_training_sample() {
    let mut knn = NearestNeighbors::new(1).unwrap();
    let training = TrainingSet::new().with(Sample::new(f64::NAN, 0.0, 0.0), "bad");
    assert!(matches!(
        knn.fit(&training),
        Err(ClassifierError::InvalidData(_))
    ));
}

// ============================================================================
// Classification Tests
// ============================================================================

#[test]
fn test_exact_match_returns_its_label() {
    let knn = fitted(1);
    for record in &training() {
        assert_eq!(knn.classify(&record.sample).unwrap(), record.label);
    }
}

#[test]
fn test_nearest_point_wins() {
    let knn = fitted(1);
    assert_eq!(knn.classify(&Sample::new(7.0, 1.0, 1.0)).unwrap().as_str(), "Act");
    assert_eq!(knn.classify(&Sample::new(1.0, 1.0, 1.0)).unwrap().as_str(), "Rest");
    assert_eq!(knn.classify(&Sample::new(-3.0, -3.0, 9.0)).unwrap().as_str(), "Observe");
}

#[test]
fn test_label_always_from_training_set() {
    let knn = fitted(1);
    let known = training().distinct_labels();
    for i in -20..20 {
        let v = i as f64 * 0.75;
        let label = knn.classify(&Sample::new(v, -v, v * 0.5)).unwrap();
        assert!(known.contains(&label));
    }
}

#[test]
fn test_deterministic() {
    let knn = fitted(1);
    let query = Sample::new(3.3, 4.4, 5.5);
    let first = knn.classify(&query).unwrap();
    for _ in 0..50 {
        assert_eq!(knn.classify(&query).unwrap(), first);
    }
}

#[test]
fn test_equidistant_tie_resolves_to_first_in_order() {
    let knn = fitted(1);
    // Equidistant from Act, Reflect and Observe
    let query = Sample::new(10.0, 10.0, 10.0);
    assert_eq!(knn.classify(&query).unwrap().as_str(), "Act");

    let mut reordered = NearestNeighbors::new(1).unwrap();
    reordered
        .fit(
            &TrainingSet::new()
                .with(Sample::new(0.0, 0.0, 10.0), "Observe")
                .with(Sample::new(10.0, 0.0, 0.0), "Act"),
        )
        .unwrap();
    assert_eq!(reordered.classify(&query).unwrap().as_str(), "Observe");
}

#[test]
fn test_duplicate_points_first_label_wins() {
    let mut knn = NearestNeighbors::new(1).unwrap();
    knn.fit(
        &TrainingSet::new()
            .with(Sample::new(1.0, 1.0, 1.0), "first")
            .with(Sample::new(1.0, 1.0, 1.0), "second"),
    )
    .unwrap();
    assert_eq!(knn.classify(&Sample::new(1.0, 1.0, 1.0)).unwrap().as_str(), "first");
}

#[test]
fn test_no_feature_scaling() {
    let mut knn = NearestNeighbors::new(1).unwrap();
    knn.fit(
        &TrainingSet::new()
            .with(Sample::new(1000.0, 0.0, 0.0), "wide")
            .with(Sample::new(0.0, 3.0, 0.0), "narrow"),
    )
    .unwrap();
    // Raw distances: 999 vs ~3.16
    assert_eq!(knn.classify(&Sample::new(1.0, 0.0, 0.0)).unwrap().as_str(), "narrow");
}

#[test]
fn test_majority_vote_with_k3() {
    let mut knn = NearestNeighbors::new(3).unwrap();
    knn.fit(
        &TrainingSet::new()
            .with(Sample::new(0.0, 0.0, 0.0), "lonely")
            .with(Sample::new(1.0, 0.0, 0.0), "crowd")
            .with(Sample::new(0.0, 1.0, 0.0), "crowd")
            .with(Sample::new(50.0, 50.0, 50.0), "lonely"),
    )
    .unwrap();
    assert_eq!(knn.classify(&Sample::new(0.0, 0.0, 0.0)).unwrap().as_str(), "crowd");
}

#[test]
fn test_large_coordinates_pick_strictly_closer_point() {
    let mut knn = NearestNeighbors::new(1).unwrap();
    knn.fit(
        &TrainingSet::new()
            .with(Sample::new(-1.0, 0.0, 0.0), "left")
            .with(Sample::new(1.0, 0.0, 0.0), "right"),
    )
    .unwrap();

    assert_eq!(knn.classify(&Sample::new(1e200, 0.0, 0.0)).unwrap().as_str(), "right");
    assert_eq!(knn.classify(&Sample::new(-1e200, 0.0, 0.0)).unwrap().as_str(), "left");
}

#[test]
fn test_extreme_coordinates_do_not_overflow() {
    let mut knn = NearestNeighbors::new(1).unwrap();
    knn.fit(
        &TrainingSet::new()
            .with(Sample::new(-f64::MAX, 0.0, 0.0), "min")
            .with(Sample::new(f64::MAX, f64::MAX, f64::MAX), "max"),
    )
    .unwrap();

    assert_eq!(
        knn.classify(&Sample::new(f64::MAX, f64::MAX, 1e300)).unwrap().as_str(),
        "max"
    );
    assert_eq!(
        knn.classify(&Sample::new(-1e308, -1e300, 0.0)).unwrap().as_str(),
        "min"
    );
}

#[test]
fn test_majority_vote_with_large_coordinates() {
    let mut knn = NearestNeighbors::new(3).unwrap();
    knn.fit(
        &TrainingSet::new()
            .with(Sample::new(-3.0, 0.0, 0.0), "west")
            .with(Sample::new(-2.0, 0.0, 0.0), "west")
            .with(Sample::new(1.0, 0.0, 0.0), "east")
            .with(Sample::new(2.0, 0.0, 0.0), "east")
            .with(Sample::new(3.0, 0.0, 0.0), "east"),
    )
    .unwrap();

    assert_eq!(knn.classify(&Sample::new(1e200, 0.0, 0.0)).unwrap().as_str(), "east");
}

#[test]
fn test_non_finite_query_rejected() {
    let knn = fitted(1);
    assert!(matches!(
        knn.classify(&Sample::new(0.0, f64::INFINITY, 0.0)),
        Err(ClassifierError::InvalidData(_))
    ));
}

// ============================================================================
// Store Tests
// ============================================================================

#[test]
fn test_store_introspection() {
    let store = ModelStore::from_model(fitted(1)).unwrap();
    assert_eq!(store.k(), 1);
    assert_eq!(store.n_samples(), 4);
    let labels: Vec<&str> = store.labels().iter().map(Label::as_str).collect();
    assert_eq!(labels, vec!["Act", "Observe", "Reflect", "Rest"]);
}

#[test]
fn test_store_matches_model() {
    let knn = fitted(1);
    let store = ModelStore::from_model(knn.clone()).unwrap();
    let query = Sample::new(2.0, 8.0, 1.0);
    assert_eq!(store.classify(&query).unwrap(), knn.classify(&query).unwrap());
}
