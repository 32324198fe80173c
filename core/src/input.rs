//! The share document: the wire-level input model.
//!
//! A document is a JSON object with a reserved `"keys"` entry carrying
//! the share counts, plus one entry per share keyed by its decimal
//! x-value:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;

use crate::error::Result;

/// The reserved metadata entry: `n` shares are present, `k` are needed
/// to reconstruct the polynomial (degree k-1).
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

/// One encoded share: a digit string and the base it is written in.
/// Both arrive as strings, matching the wire format.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct EncodedShare {
    pub base: String,
    pub value: String,
}

/// A parsed share document.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub keys: Keys,
    #[serde(flatten)]
    pub shares: BTreeMap<String, EncodedShare>,
}

impl Document {
    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}
