pub use crate::{rat, rat_vec};
pub use crate::{
    decode::decode,
    error::{DecodeError, GaussError, MathError, MatrixError},
    matrix::Matrix,
};

pub use num_bigint::BigInt;
pub use num_rational::BigRational;
