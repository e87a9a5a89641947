//! Snapping values to multiples of a factor.
//!
//! All three operations share the shape `y = f * op(x / f)`:
//!
//! | Function | `op` | Result |
//! |----------|------|--------|
//! | [`round_to_nearest`] | round, ties to even | closest multiple of `f` |
//! | [`floor_to_nearest`] | floor | largest multiple `<= x` (for `f > 0`) |
//! | [`ceil_to_nearest`] | ceil | smallest multiple `>= x` (for `f > 0`) |
//!
//! A negative factor flips the direction of floor and ceil, since `x / f`
//! changes sign. A zero factor is not rejected: `x / 0` is infinite (or NaN
//! for `x == 0`) and `0 * inf` is NaN, so the result is NaN. Use the
//! [`checked`](super::checked) variants to get an error instead.

use super::float::Float;

/// Rounds `num` to the nearest multiple of `factor`.
///
/// Formula: `y = f[x/f]` where `[]` rounds to the nearest whole number with
/// ties going to the even neighbour.
///
/// ```
/// use snapmath::round_to_nearest;
///
/// let y = round_to_nearest(1.1345f64, 0.2);
/// assert!((y - 1.2).abs() < 1e-9);
/// ```
#[inline]
pub fn round_to_nearest<F: Float>(num: F, factor: F) -> F {
    factor * (num / factor).round_ties_even()
}

/// Floors `num` to the nearest multiple of `factor`.
///
/// Formula: `y = f⌊x/f⌋`.
///
/// ```
/// use snapmath::floor_to_nearest;
///
/// assert_eq!(floor_to_nearest(7.0f32, 3.0), 6.0);
/// assert_eq!(floor_to_nearest(-112.9f64, 10.0), -120.0);
/// ```
#[inline]
pub fn floor_to_nearest<F: Float>(num: F, factor: F) -> F {
    factor * (num / factor).floor()
}

/// Ceils `num` to the nearest multiple of `factor`.
///
/// Formula: `y = f⌈x/f⌉`.
#[inline]
pub fn ceil_to_nearest<F: Float>(num: F, factor: F) -> F {
    factor * (num / factor).ceil()
}
