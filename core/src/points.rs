//! Share selection: decode every entry, order by x, pick the k
//! smallest.

use num_bigint::BigInt;

use math::decode::decode;

use crate::{
    error::{ReconstructError, Result},
    input::{Document, EncodedShare},
};

/// A decoded share: an x-coordinate and the exact y magnitude.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SamplePoint {
    pub x: i64,
    pub y: BigInt,
}

/// The outcome of point selection: the k points that feed the solver,
/// plus the spare points left over for cross-checking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    selected: Vec<SamplePoint>,
    spare: Vec<SamplePoint>,
}

impl Selection {
    /// The points used to build the linear system, sorted by x
    /// ascending.
    pub fn selected(&self) -> &[SamplePoint] {
        &self.selected
    }

    /// The points beyond the first k, sorted by x ascending.
    pub fn spare(&self) -> &[SamplePoint] {
        &self.spare
    }
}

/// Decode every share and select the `k` smallest-x points.
///
/// The decoded points are sorted by x before truncation, so which
/// points participate never depends on document order. A tie in x
/// anywhere in the document is malformed input: two shares at the same
/// evaluation point cannot both lie on the polynomial and would make
/// the system singular.
pub fn select(doc: &Document) -> Result<Selection> {
    let mut points = doc
        .shares
        .iter()
        .map(|(key, share)| decode_share(key, share))
        .collect::<Result<Vec<SamplePoint>>>()?;

    points.sort_by_key(|point| point.x);
    if let Some(pair) = points.windows(2).find(|pair| pair[0].x == pair[1].x)
    {
        return Err(ReconstructError::DuplicateX { x: pair[0].x });
    }

    let required = doc.keys.k;
    if points.len() < required {
        return Err(ReconstructError::NotEnoughPoints {
            required,
            available: points.len(),
        });
    }

    let spare = points.split_off(required);
    Ok(Selection {
        selected: points,
        spare,
    })
}

fn decode_share(key: &str, share: &EncodedShare) -> Result<SamplePoint> {
    let x = key
        .parse::<i64>()
        .map_err(|_| ReconstructError::InvalidX {
            key: key.to_owned(),
        })?;
    let base = share.base.parse::<u32>().map_err(|_| {
        ReconstructError::InvalidBaseField {
            key: key.to_owned(),
            base: share.base.clone(),
        }
    })?;
    let y = decode(&share.value, base).map_err(|source| {
        ReconstructError::Decode {
            key: key.to_owned(),
            source,
        }
    })?;

    Ok(SamplePoint { x, y })
}
