//! Cross-checking spare shares against a reconstructed polynomial.
//!
//! Reconstruction only consumes the k smallest-x shares; any remaining
//! shares are redundant and should lie on the same polynomial. This
//! check is advisory: it never alters the coefficients or the primary
//! report.

use std::fmt;

use num_rational::BigRational;

use crate::{points::SamplePoint, reconstruct::evaluate};

/// A spare share the reconstructed polynomial does not pass through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inconsistency {
    /// The share's evaluation point.
    pub x: i64,
    /// The share's decoded y magnitude.
    pub expected: BigRational,
    /// What the reconstructed polynomial evaluates to at `x`.
    pub actual: BigRational,
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "share at x = {} decodes to {} but the polynomial evaluates to {}",
            self.x, self.expected, self.actual
        )
    }
}

/// Check every spare share against the reconstructed coefficients,
/// returning one [`Inconsistency`] per share the polynomial misses.
pub fn cross_validate(
    coeffs: &[BigRational],
    spare: &[SamplePoint],
) -> Vec<Inconsistency> {
    spare
        .iter()
        .filter_map(|point| {
            let actual = evaluate(coeffs, point.x);
            let expected = BigRational::from_integer(point.y.clone());
            (actual != expected).then(|| Inconsistency {
                x: point.x,
                expected,
                actual,
            })
        })
        .collect()
}
