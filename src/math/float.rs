//! Precision abstraction over `f32` and `f64`.
//!
//! All operations in this crate are written once against [`Float`] and are
//! available for both single and double precision. The trait is sealed, it is
//! not meant to be implemented outside this crate.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A primitive IEEE-754 floating point type.
pub trait Float:
    private::Sealed
    + Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    /// Rounds to the nearest integer, ties go to the even neighbour.
    ///
    /// Banker's rounding: `0.5` rounds to `0.0` and `1.5` to `2.0`.
    fn round_ties_even(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn is_finite(self) -> bool;

    /// Widening conversion, used for error reporting.
    fn to_f64(self) -> f64;
}

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl Float for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn round_ties_even(self) -> Self {
                    <$t>::round_ties_even(self)
                }

                #[inline]
                fn floor(self) -> Self {
                    <$t>::floor(self)
                }

                #[inline]
                fn ceil(self) -> Self {
                    <$t>::ceil(self)
                }

                #[inline]
                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_float!(f32, f64);
