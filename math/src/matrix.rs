use std::ops::{Deref, DerefMut, Index, IndexMut};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use crate::error::{MatrixError, Result};

/// A simple, rectangular matrix of exact rationals.
///
/// Storage is dense, row-major. Construction validates the shape;
/// fallible (`try_new`) and panicking (`new`) variants are provided for
/// shape-checked construction, mirroring the rest of this crate.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: Vec<Vec<BigRational>>,
}

impl Matrix {
    /// Construct a new matrix from rows. Panics if rows have differing
    /// lengths.
    pub fn new(rows: Vec<Vec<BigRational>>) -> Self {
        Self::try_new(rows)
            .expect("All matrix rows must have the same length")
    }

    /// Fallible constructor that validates the matrix shape.
    pub fn try_new(rows: Vec<Vec<BigRational>>) -> Result<Self> {
        Self::ensure_rectangular_rows(&rows)?;
        Ok(Self { rows })
    }

    /// Square Vandermonde matrix over the given evaluation points:
    /// entry (i, j) is `xs[i]` raised to the power `j`.
    ///
    /// Powers are accumulated by exact integer multiplication, never
    /// floating-point exponentiation.
    pub fn vandermonde(xs: &[i64]) -> Self {
        let size = xs.len();
        let rows = xs
            .iter()
            .map(|&x| {
                let x = BigInt::from(x);
                let mut power = BigInt::one();
                (0..size)
                    .map(|_| {
                        let entry =
                            BigRational::from_integer(power.clone());
                        power *= &x;
                        entry
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Borrow the underlying rows.
    pub fn as_slice(&self) -> &[Vec<BigRational>] {
        &self.rows
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (0 if empty).
    pub fn cols(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            self.rows[0].len()
        }
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    fn ensure_rectangular_rows(
        rows: &[Vec<BigRational>],
    ) -> core::result::Result<usize, MatrixError> {
        if let Some((first, rest)) = rows.split_first() {
            let expected = first.len();
            for (offset, row) in rest.iter().enumerate() {
                if row.len() != expected {
                    return Err(MatrixError::Ragged {
                        row: offset + 1,
                        expected,
                        found: row.len(),
                    });
                }
            }
            Ok(expected)
        } else {
            Ok(0)
        }
    }
}

impl TryFrom<Vec<Vec<BigRational>>> for Matrix {
    type Error = crate::error::Error;

    fn try_from(value: Vec<Vec<BigRational>>) -> Result<Self> {
        Self::try_new(value)
    }
}

/// Immutable indexing by row.
impl Index<usize> for Matrix {
    type Output = Vec<BigRational>;
    fn index(&self, i: usize) -> &Self::Output {
        &self.rows[i]
    }
}

/// Mutable indexing by row.
impl IndexMut<usize> for Matrix {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.rows[i]
    }
}

/// Deref to a slice of rows.
impl Deref for Matrix {
    type Target = [Vec<BigRational>];
    fn deref(&self) -> &Self::Target {
        &self.rows
    }
}

/// DerefMut to a slice of rows.
impl DerefMut for Matrix {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.rows
    }
}
