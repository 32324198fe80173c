use num_bigint::BigInt;
use num_rational::BigRational;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use serde_json::{json, Map, Value};

use math::error::GaussError;
use polyrec_core::{
    input::Document, points, reconstruct::evaluate, reconstruct::reconstruct,
    verify, ReconstructError,
};

/// Evaluate an integer polynomial at `x` by Horner's method.
fn eval_int(coeffs: &[BigInt], x: i64) -> BigInt {
    coeffs
        .iter()
        .rev()
        .fold(BigInt::from(0), |acc, coeff| acc * x + coeff)
}

/// Build a share document for the polynomial with the given integer
/// coefficients, sampling x = 1..=n and encoding each y in the base
/// chosen by `base_for`.
fn document_for(
    coeffs: &[BigInt],
    n: usize,
    k: usize,
    base_for: impl Fn(usize) -> u32,
) -> Document {
    let mut entries = Map::new();
    entries.insert("keys".to_owned(), json!({ "n": n, "k": k }));
    for i in 0..n {
        let x = (i + 1) as i64;
        let base = base_for(i);
        let y = eval_int(coeffs, x);
        entries.insert(
            x.to_string(),
            json!({
                "base": base.to_string(),
                "value": y.to_str_radix(base),
            }),
        );
    }
    Document::from_json(&Value::Object(entries).to_string()).unwrap()
}

fn rationals(coeffs: &[BigInt]) -> Vec<BigRational> {
    coeffs
        .iter()
        .cloned()
        .map(BigRational::from_integer)
        .collect()
}

#[test]
fn degenerate_linear_case_yields_unit_slope() {
    // Points (1,1), (2,2), (3,3): f(x) = x even though k = 3.
    let doc = Document::from_json(
        r#"{
            "keys": { "n": 3, "k": 3 },
            "1": { "base": "10", "value": "1" },
            "2": { "base": "10", "value": "2" },
            "3": { "base": "10", "value": "3" }
        }"#,
    )
    .unwrap();

    let coeffs = reconstruct(&doc).unwrap();
    assert_eq!(coeffs, rationals(&[0, 1, 0].map(BigInt::from)));
}

#[test]
fn recovers_coefficients_from_mixed_base_shares() {
    let original: Vec<BigInt> =
        [6, 0, 4, 1].into_iter().map(BigInt::from).collect();
    let bases = [2u32, 16, 36, 10];
    let doc = document_for(&original, 4, 4, |i| bases[i]);

    assert_eq!(reconstruct(&doc).unwrap(), rationals(&original));
}

#[test]
fn selection_is_independent_of_document_order() {
    // Shares at x = 1, 2, 3 lie on f(x) = 10 + 3x + x^2; the share at
    // x = 10 is corrupt. Only the three smallest-x points may be used,
    // whatever order the document lists them in - note that "10" sorts
    // before "2" lexicographically.
    let original: Vec<BigInt> =
        [10, 3, 1].into_iter().map(BigInt::from).collect();
    let orderings = [
        r#"{
            "keys": { "n": 4, "k": 3 },
            "10": { "base": "10", "value": "123456" },
            "1": { "base": "10", "value": "14" },
            "2": { "base": "10", "value": "20" },
            "3": { "base": "10", "value": "28" }
        }"#,
        r#"{
            "keys": { "n": 4, "k": 3 },
            "3": { "base": "10", "value": "28" },
            "2": { "base": "10", "value": "20" },
            "1": { "base": "10", "value": "14" },
            "10": { "base": "10", "value": "123456" }
        }"#,
    ];

    for json in orderings {
        let doc = Document::from_json(json).unwrap();
        let selection = points::select(&doc).unwrap();
        let xs: Vec<i64> =
            selection.selected().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1, 2, 3]);
        assert_eq!(reconstruct(&doc).unwrap(), rationals(&original));
    }
}

#[test]
fn shares_beyond_u64_survive_the_pipeline() {
    // Constant term of 2^80 forces every y beyond the native range.
    let huge = BigInt::from(2u8).pow(80);
    let original = vec![huge.clone(), BigInt::from(3)];
    let doc = document_for(&original, 2, 2, |_| 16);

    let coeffs = reconstruct(&doc).unwrap();
    assert_eq!(coeffs, rationals(&original));

    // The reconstruction reproduces the decoded share values exactly.
    let selection = points::select(&doc).unwrap();
    for point in selection.selected() {
        assert_eq!(
            evaluate(&coeffs, point.x),
            BigRational::from_integer(point.y.clone())
        );
    }
}

#[test]
fn duplicate_x_values_never_reach_the_solver() {
    let doc = Document::from_json(
        r#"{
            "keys": { "n": 2, "k": 2 },
            "2": { "base": "10", "value": "4" },
            "02": { "base": "10", "value": "7" }
        }"#,
    )
    .unwrap();

    assert!(matches!(
        reconstruct(&doc).unwrap_err(),
        ReconstructError::DuplicateX { x: 2 }
    ));
}

#[test]
fn duplicate_evaluation_points_make_the_system_singular() {
    // Bypassing selection: hand the solver a system built from two
    // samples at the same x.
    use math::{matrix::Matrix, rat_vec};

    let err = math::gauss::solve(
        Matrix::vandermonde(&[5, 5]),
        rat_vec![1, 1],
    )
    .unwrap_err();
    assert_eq!(err, GaussError::ZeroPivot { row: 1, col: 1 });
}

#[test]
fn cross_validation_flags_a_corrupted_spare_share() {
    // f(x) = 1 + 2x on x = 1..3, with a corrupt spare share at x = 4.
    let doc = Document::from_json(
        r#"{
            "keys": { "n": 4, "k": 2 },
            "1": { "base": "10", "value": "3" },
            "2": { "base": "10", "value": "5" },
            "3": { "base": "10", "value": "7" },
            "4": { "base": "10", "value": "1000" }
        }"#,
    )
    .unwrap();

    let selection = points::select(&doc).unwrap();
    let coeffs = reconstruct(&doc).unwrap();

    let findings = verify::cross_validate(&coeffs, selection.spare());
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].x, 4);
    assert_eq!(findings[0].actual, math::rat!(9));
}

#[test]
fn cross_validation_accepts_consistent_spare_shares() {
    let original: Vec<BigInt> =
        [5, 1, 2].into_iter().map(BigInt::from).collect();
    let doc = document_for(&original, 6, 3, |_| 10);

    let selection = points::select(&doc).unwrap();
    let coeffs = reconstruct(&doc).unwrap();

    assert_eq!(selection.spare().len(), 3);
    assert!(verify::cross_validate(&coeffs, selection.spare()).is_empty());
}

#[quickcheck]
fn round_trip_recovers_arbitrary_coefficients(
    seeds: Vec<u16>,
) -> TestResult {
    if seeds.is_empty() {
        return TestResult::discard();
    }
    let original: Vec<BigInt> =
        seeds.iter().take(6).map(|&s| BigInt::from(s)).collect();
    let k = original.len();
    let bases = [10u32, 2, 16, 36, 8, 3];
    let doc = document_for(&original, k, k, |i| bases[i % bases.len()]);

    TestResult::from_bool(
        reconstruct(&doc).unwrap() == rationals(&original),
    )
}
