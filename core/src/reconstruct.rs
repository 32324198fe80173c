//! The reconstruction pipeline: select points, assemble the system,
//! solve for the coefficients.

use num_rational::BigRational;
use num_traits::Zero;

use math::gauss;

use crate::{error::Result, input::Document, points, system};

/// Recover the coefficients a_0..a_{k-1} of the polynomial passing
/// through the document's k smallest-x shares.
///
/// The returned vector is indexed by power: element i is the
/// coefficient of x^i, held in the same exact representation the
/// solver used.
pub fn reconstruct(doc: &Document) -> Result<Vec<BigRational>> {
    let selection = points::select(doc)?;
    let (matrix, rhs) = system::assemble(selection.selected())?;
    Ok(gauss::solve(matrix, rhs)?)
}

/// Evaluate a polynomial with the given coefficients at `x`, by
/// Horner's method.
pub fn evaluate(coeffs: &[BigRational], x: i64) -> BigRational {
    let x = BigRational::from_integer(x.into());
    coeffs
        .iter()
        .rev()
        .fold(BigRational::zero(), |acc, coeff| acc * &x + coeff)
}
