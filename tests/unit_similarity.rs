// Unit tests for the similarity engine.
//
// Covers symmetry of the inner product, the identical / disjoint extremes,
// the worked "the cat sat" example, and the zero-norm error path.

use std::f64::consts::FRAC_PI_2;

use textcompare::corpus::{aggregate, FrequencyMap};
use textcompare::similarity::{
    angular_distance, cosine_similarity, inner_product, norm, similarity, EmptySide,
    SimilarityError,
};

fn doc(lines: &[&str]) -> FrequencyMap {
    aggregate(lines).0
}

// ============================================================
// inner_product / norm
// ============================================================

#[test]
fn inner_product_is_symmetric() {
    // Different sizes so each argument order drives a different iteration
    let small = doc(&["alpha beta beta"]);
    let large = doc(&["beta gamma delta epsilon alpha alpha alpha"]);
    assert_eq!(inner_product(&small, &large), inner_product(&large, &small));
    // alpha: 1*3, beta: 2*1
    assert_eq!(inner_product(&small, &large), 5.0);
}

#[test]
fn inner_product_symmetric_when_sizes_equal() {
    let a = doc(&["one two two"]);
    let b = doc(&["two three three"]);
    assert_eq!(inner_product(&a, &b), inner_product(&b, &a));
    assert_eq!(inner_product(&a, &b), 2.0);
}

#[test]
fn inner_product_of_disjoint_is_zero() {
    let a = doc(&["red green blue"]);
    let b = doc(&["cyan magenta yellow"]);
    assert_eq!(inner_product(&a, &b), 0.0);
}

#[test]
fn norm_is_sqrt_of_squared_counts() {
    let m = doc(&["a a b"]);
    assert!((norm(&m) - 5f64.sqrt()).abs() < 1e-12);
}

#[test]
fn norm_of_document_with_itself_matches_inner_product() {
    let m = doc(&["so it goes and so it goes"]);
    assert!((norm(&m).powi(2) - inner_product(&m, &m)).abs() < 1e-9);
}

// ============================================================
// cosine / distance
// ============================================================

#[test]
fn identical_documents_have_zero_distance() {
    let a = doc(&[
        "Call me Ishmael. Some years ago, never mind how long precisely,",
        "having little or no money in my purse, and nothing particular",
        "to interest me on shore, I thought I would sail about a little",
    ]);
    let copy = a.clone();
    let cosine = cosine_similarity(&a, &copy).unwrap();
    assert!((cosine - 1.0).abs() < 1e-12);
    let d = angular_distance(&a, &copy).unwrap();
    assert!(!d.is_nan(), "clamping should prevent NaN");
    assert!(d.abs() < 1e-6, "got {d}");
}

#[test]
fn disjoint_documents_are_orthogonal() {
    let a = doc(&["alpha beta"]);
    let b = doc(&["gamma delta delta"]);
    let sim = similarity(&a, &b).unwrap();
    assert_eq!(sim.cosine, 0.0);
    assert!((sim.radians - FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn the_cat_sat_example() {
    let a = doc(&["the cat sat"]);
    let b = doc(&["the dog sat"]);
    assert_eq!(inner_product(&a, &b), 2.0);
    assert!((norm(&a) - 3f64.sqrt()).abs() < 1e-12);
    assert!((norm(&b) - 3f64.sqrt()).abs() < 1e-12);

    let sim = similarity(&a, &b).unwrap();
    assert!((sim.cosine - 2.0 / 3.0).abs() < 1e-12);
    assert!((sim.radians - 0.8411).abs() < 1e-4, "got {}", sim.radians);
}

#[test]
fn distance_is_symmetric() {
    let a = doc(&["a b c d e f g a a"]);
    let b = doc(&["a c e g g"]);
    let ab = angular_distance(&a, &b).unwrap();
    let ba = angular_distance(&b, &a).unwrap();
    assert!((ab - ba).abs() < 1e-12);
}

#[test]
fn distance_stays_within_zero_and_half_pi() {
    let a = doc(&["one two three four five"]);
    let b = doc(&["four five six seven"]);
    let d = angular_distance(&a, &b).unwrap();
    assert!((0.0..=FRAC_PI_2).contains(&d));
}

#[test]
fn many_repeats_do_not_escape_acos_domain() {
    // Large counts in identical proportions
    let line = "lorem ipsum dolor sit amet ".repeat(5000);
    let a = doc(&[line.as_str()]);
    let b = doc(&[line.as_str(), line.as_str()]);
    let d = angular_distance(&a, &b).unwrap();
    assert!(!d.is_nan());
    assert!(d.abs() < 1e-6);
}

// ============================================================
// Degenerate norm
// ============================================================

#[test]
fn empty_document_is_an_error_not_nan() {
    let a = doc(&["words here"]);
    let empty = doc(&["!!! ??? ---"]);
    assert_eq!(
        angular_distance(&a, &empty),
        Err(SimilarityError::DegenerateNorm(EmptySide::Second))
    );
    assert_eq!(
        angular_distance(&empty, &a),
        Err(SimilarityError::DegenerateNorm(EmptySide::First))
    );
    assert_eq!(
        cosine_similarity(&empty, &empty),
        Err(SimilarityError::DegenerateNorm(EmptySide::Both))
    );
}
