use thiserror::Error;

use math::error::{DecodeError, GaussError};

/// Result type specialized for reconstruction operations.
pub type Result<T> = std::result::Result<T, ReconstructError>;

/// Errors that can arise while reconstructing a polynomial from an
/// encoded share document.
///
/// Every error is fatal to the run: a malformed or singular input has
/// no valid answer to approximate, so there is no recovery path.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ReconstructError {
    #[error("failed to read input document: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed input document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("entry {key:?}: key is not a base-10 x-value")]
    InvalidX { key: String },
    #[error("entry {key:?}: base {base:?} is not a base-10 integer")]
    InvalidBaseField { key: String, base: String },
    #[error("entry {key:?}: {source}")]
    Decode { key: String, source: DecodeError },
    #[error("duplicate x-value {x}: shares must have distinct x-values")]
    DuplicateX { x: i64 },
    #[error("not enough shares: need {required}, document provides {available}")]
    NotEnoughPoints { required: usize, available: usize },
    #[error("cannot assemble a system from zero points")]
    EmptySystem,
    #[error(transparent)]
    Singular(#[from] GaussError),
}
