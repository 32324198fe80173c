//! Decoding of digit strings in bases 2 through 36 into exact integers.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::{decode::Error, Result};

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;
/// Largest supported base: digits `0-9` followed by `a-z`.
pub const MAX_BASE: u32 = 36;

/// Decode `value` as a magnitude written in `base`.
///
/// Digits `0-9` cover zero through nine; `a-z` (either case) cover ten
/// through thirty-five. The result is exact for any digit-string
/// length, so magnitudes far beyond the native integer range decode
/// without loss.
///
/// ```
/// use math::decode::decode;
/// use num_bigint::BigInt;
///
/// assert_eq!(decode("ff", 16).unwrap(), BigInt::from(255));
/// assert_eq!(decode("zz", 36).unwrap(), BigInt::from(1295));
/// ```
pub fn decode(value: &str, base: u32) -> Result<BigInt, Error> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(Error::UnsupportedBase(base));
    }
    if value.is_empty() {
        return Err(Error::EmptyValue);
    }

    let mut magnitude = BigInt::zero();
    for (position, digit) in value.chars().enumerate() {
        let d = digit.to_digit(base).ok_or(Error::InvalidDigit {
            digit,
            base,
            position,
        })?;
        magnitude = magnitude * base + d;
    }

    Ok(magnitude)
}
