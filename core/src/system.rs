//! Assembly of the Vandermonde system from selected points.

use num_rational::BigRational;

use math::matrix::Matrix;

use crate::{
    error::{ReconstructError, Result},
    points::SamplePoint,
};

/// Build the linear system `A · a = b` whose solution is the
/// coefficient vector of the interpolating polynomial.
///
/// Row i of `A` holds the powers `x_i^0 .. x_i^{k-1}`, computed by
/// exact integer exponentiation; `b[i]` is the decoded y magnitude.
/// The points themselves are not mutated.
pub fn assemble(
    points: &[SamplePoint],
) -> Result<(Matrix, Vec<BigRational>)> {
    if points.is_empty() {
        return Err(ReconstructError::EmptySystem);
    }

    let xs: Vec<i64> = points.iter().map(|point| point.x).collect();
    let matrix = Matrix::vandermonde(&xs);
    let rhs = points
        .iter()
        .map(|point| BigRational::from_integer(point.y.clone()))
        .collect();

    Ok((matrix, rhs))
}
