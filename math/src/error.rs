use thiserror::Error;

pub mod decode {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("base {0} is outside the supported range 2..=36")]
        UnsupportedBase(u32),
        #[error("empty digit string")]
        EmptyValue,
        #[error(
            "invalid digit {digit:?} for base {base} at position {position}"
        )]
        InvalidDigit {
            digit: char,
            base: u32,
            position: usize,
        },
    }
}

pub mod matrix {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("matrix is ragged: row {row} has {found} columns but expected {expected}")]
        Ragged {
            row: usize,
            expected: usize,
            found: usize,
        },
    }
}

pub mod gauss {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("cannot solve an empty system")]
        Empty,
        #[error("matrix must be square, got {rows}x{cols}")]
        NotSquare { rows: usize, cols: usize },
        #[error(
            "right-hand side has {rhs_len} entries but the matrix has {rows} rows"
        )]
        RhsMismatch { rows: usize, rhs_len: usize },
        #[error(
            "zero pivot at row {row}, column {col}: the system has no unique solution"
        )]
        ZeroPivot { row: usize, col: usize },
    }
}

pub use decode::Error as DecodeError;
pub use gauss::Error as GaussError;
pub use matrix::Error as MatrixError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    #[error(transparent)]
    Gauss(#[from] GaussError),
}

pub type Error = MathError;
