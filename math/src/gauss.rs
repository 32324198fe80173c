//! Gauss–Jordan elimination over exact rationals.
//!
//! The solver reduces the matrix to the identity in place, leaving the
//! solution in the right-hand side. All arithmetic is exact, so the
//! divisions performed while normalizing rows lose no digits.

use num_rational::BigRational;
use num_traits::Zero;

use crate::{
    error::{gauss::Error, Result},
    matrix::Matrix,
};

/// Solve `a · x = b`, consuming the system.
///
/// For each row the diagonal entry is used as the pivot: the row is
/// normalized so the pivot becomes one, then the pivot column is
/// eliminated from every other row. An exactly-zero pivot means the
/// system has no unique solution (duplicate or degenerate evaluation
/// points) and aborts with the offending position; no row swapping is
/// attempted.
pub fn solve(
    mut a: Matrix,
    mut b: Vec<BigRational>,
) -> Result<Vec<BigRational>, Error> {
    validate_shape(&a, &b)?;
    let size = b.len();

    for i in 0..size {
        let pivot = a[i][i].clone();
        if pivot.is_zero() {
            return Err(Error::ZeroPivot { row: i, col: i });
        }

        // Normalize row i so the pivot becomes exactly one.
        for entry in a[i].iter_mut() {
            *entry /= &pivot;
        }
        b[i] /= &pivot;

        // Eliminate column i from every other row.
        for r in 0..size {
            if r == i {
                continue;
            }
            let factor = a[r][i].clone();
            if factor.is_zero() {
                continue;
            }
            for j in 0..size {
                let delta = &factor * &a[i][j];
                a[r][j] -= delta;
            }
            let delta = &factor * &b[i];
            b[r] -= delta;
        }
    }

    Ok(b)
}

fn validate_shape(
    a: &Matrix,
    b: &[BigRational],
) -> Result<(), Error> {
    let (rows, cols) = a.shape();
    if rows == 0 {
        return Err(Error::Empty);
    }
    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }
    if b.len() != rows {
        return Err(Error::RhsMismatch {
            rows,
            rhs_len: b.len(),
        });
    }
    Ok(())
}
