//! Shared macros for constructing exact rational values.
//!
//! These macros delegate to the types they create, which keeps the
//! public API concise and avoids duplicating builder logic across the
//! crate.

/// Simplifies constructing [`BigRational`](num_rational::BigRational)s.
///
/// A single argument builds an integer-valued rational; two arguments
/// build the ratio of the first to the second.
///
/// ```
/// use math::prelude::*;
///
/// let five = rat!(5);
/// let half = rat!(1, 2);
/// assert_eq!(half.clone() + half, rat!(1));
/// assert_eq!(five, rat!(10, 2));
/// ```
#[macro_export]
macro_rules! rat {
    ($numer:expr) => {
        $crate::prelude::BigRational::from_integer(
            $crate::prelude::BigInt::from($numer),
        )
    };
    ($numer:expr, $denom:expr) => {
        $crate::prelude::BigRational::new(
            $crate::prelude::BigInt::from($numer),
            $crate::prelude::BigInt::from($denom),
        )
    };
}

/// Create a [`Vec`] of integer-valued
/// [`BigRational`](num_rational::BigRational)s. See also [`rat!`].
///
/// ```
/// use math::prelude::*;
///
/// let v = rat_vec![1, 2, 3];
/// assert_eq!(v, vec![rat!(1), rat!(2), rat!(3)]);
/// ```
#[macro_export]
macro_rules! rat_vec {
    ($b:expr; $n:expr) => {
        vec![$crate::rat!($b); $n]
    };
    ($($b:expr),* $(,)?) => {
        vec![$($crate::rat!($b)),*]
    };
}
