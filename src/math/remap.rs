//! Linear remapping of values between ranges.
//!
//! [`map_range`] re-expresses a value's fractional position within one
//! interval as the same fractional position within another:
//!
//! ```text
//! t = (x - a) / (b - a)
//! y = c + t * (d - c)
//! ```
//!
//! Nothing is clamped, values outside `[a, b]` extrapolate along the same
//! line. Both endpoints are exact, `map_range(a, a, b, c, d) == c` and
//! `map_range(b, a, b, c, d) == d`, and a single-point output range (`c == d`)
//! maps every finite input to exactly `c`.
//!
//! A zero-width input interval (`a == b`) divides by zero: the result is an
//! infinity for `x != a` and NaN for `x == a`. Use [`LinearMap::try_new`] or
//! [`checked_map_range`](super::checked::checked_map_range) to reject it.

use serde::{Deserialize, Serialize};

use super::checked::DomainError;
use super::float::Float;

/// Fractional position of `value` between `from` and `to`.
///
/// Unclamped: `0` at `from`, `1` at `to`, and anything outside the interval
/// gives a value outside `[0, 1]`.
#[inline]
pub fn inverse_lerp<F: Float>(from: F, to: F, value: F) -> F {
    (value - from) / (to - from)
}

/// Point at fraction `t` between `from` and `to`, without clamping `t`.
///
/// `t == 1` returns `to` itself, `from + (to - from)` can be off by one ulp.
#[inline]
pub fn lerp<F: Float>(from: F, to: F, t: F) -> F {
    if t == F::ONE {
        return to;
    }
    from + t * (to - from)
}

/// Maps `input` from the range `[input_from, input_to]` to the range
/// `[output_from, output_to]`.
///
/// ```
/// use snapmath::map_range;
///
/// assert_eq!(map_range(5.0f64, 0.0, 10.0, 0.0, 100.0), 50.0);
/// assert_eq!(map_range(15.0f32, 0.0, 10.0, 0.0, 100.0), 150.0);
/// // reversed output range
/// assert_eq!(map_range(2.5f64, 0.0, 10.0, 1.0, 0.0), 0.75);
/// ```
#[inline]
pub fn map_range<F: Float>(
    input: F,
    input_from: F,
    input_to: F,
    output_from: F,
    output_to: F,
) -> F {
    lerp(output_from, output_to, inverse_lerp(input_from, input_to, input))
}

/// A directed interval from `start` to `end`.
///
/// `start` may be greater than `end`, in which case the interval runs
/// backwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval<F> {
    start: F,
    end: F,
}

impl<F: Float> Interval<F> {
    pub fn new(start: F, end: F) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> F {
        self.start
    }

    pub fn end(&self) -> F {
        self.end
    }

    /// Signed width, `end - start`.
    pub fn span(&self) -> F {
        self.end - self.start
    }

    /// True when `start == end`, mapping out of such an interval divides by zero.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

impl<F: Float> From<(F, F)> for Interval<F> {
    fn from((start, end): (F, F)) -> Self {
        Self::new(start, end)
    }
}

/// A reusable linear mapping from one interval onto another.
///
/// ```
/// use snapmath::{Interval, LinearMap};
///
/// let celsius_to_fahrenheit = LinearMap::new(
///     Interval::new(0.0f64, 100.0),
///     Interval::new(32.0, 212.0),
/// );
/// assert_eq!(celsius_to_fahrenheit.apply(50.0), 122.0);
/// assert_eq!(celsius_to_fahrenheit.inverse().apply(212.0), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearMap<F> {
    input: Interval<F>,
    output: Interval<F>,
}

impl<F: Float> LinearMap<F> {
    /// Creates a mapping without validating the input interval.
    ///
    /// A degenerate input interval makes [`apply`](Self::apply) return NaN or
    /// an infinity.
    pub fn new(input: Interval<F>, output: Interval<F>) -> Self {
        Self { input, output }
    }

    /// Creates a mapping, rejecting a zero-width input interval.
    pub fn try_new(input: Interval<F>, output: Interval<F>) -> Result<Self, DomainError> {
        if input.is_degenerate() {
            log::debug!("rejecting linear map with degenerate input interval {input:?}");
            return Err(DomainError::DegenerateRange {
                at: input.start().to_f64(),
            });
        }
        Ok(Self::new(input, output))
    }

    pub fn input(&self) -> Interval<F> {
        self.input
    }

    pub fn output(&self) -> Interval<F> {
        self.output
    }

    pub fn apply(&self, value: F) -> F {
        map_range(
            value,
            self.input.start,
            self.input.end,
            self.output.start,
            self.output.end,
        )
    }

    /// The mapping that undoes this one.
    pub fn inverse(&self) -> Self {
        Self {
            input: self.output,
            output: self.input,
        }
    }
}

// Random intervals are never degenerate, the end sits 1 to 1000 units away
// from the start in either direction.
macro_rules! impl_dummy_interval {
    ($($t:ty),*) => {
        $(
            #[cfg(test)]
            impl fake::Dummy<fake::Faker> for Interval<$t> {
                fn dummy_with_rng<R: rand::Rng + ?Sized>(_: &fake::Faker, rng: &mut R) -> Self {
                    let start: $t = rng.random_range(-1000.0..1000.0);
                    let span: $t = rng.random_range(1.0..1000.0);
                    let end = if rng.random_bool(0.5) { start + span } else { start - span };
                    Self::new(start, end)
                }
            }
        )*
    };
}

impl_dummy_interval!(f32, f64);

#[cfg(test)]
impl<F: Float> fake::Dummy<fake::Faker> for LinearMap<F>
where
    Interval<F>: fake::Dummy<fake::Faker>,
{
    fn dummy_with_rng<R: rand::Rng + ?Sized>(config: &fake::Faker, rng: &mut R) -> Self {
        let input = <Interval<F> as fake::Dummy<fake::Faker>>::dummy_with_rng(config, rng);
        let output = <Interval<F> as fake::Dummy<fake::Faker>>::dummy_with_rng(config, rng);
        Self::new(input, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};
    use pretty_assertions::assert_eq;
    use rand::Rng;
    use testresult::TestResult;

    #[test]
    fn test_inverse_lerp() {
        assert_eq!(inverse_lerp(0.0f64, 10.0, 0.0), 0.0);
        assert_eq!(inverse_lerp(0.0f64, 10.0, 10.0), 1.0);
        assert_eq!(inverse_lerp(10.0f32, 20.0, 12.5), 0.25);
        assert_eq!(inverse_lerp(0.0f64, 10.0, -5.0), -0.5);
        assert_eq!(inverse_lerp(10.0f64, 0.0, 2.0), 0.8);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0f64, 100.0, 0.5), 50.0);
        assert_eq!(lerp(-1.0f32, 1.0, 0.75), 0.5);
        assert_eq!(lerp(0.0f64, 100.0, 1.5), 150.0);
        assert_eq!(lerp(0.0f64, 100.0, -0.5), -50.0);
    }

    #[test]
    fn test_map_range_endpoints() {
        assert_eq!(map_range(0.0f64, 0.0, 10.0, 0.0, 100.0), 0.0);
        assert_eq!(map_range(10.0f64, 0.0, 10.0, 0.0, 100.0), 100.0);
        assert_eq!(map_range(0.3f64, 0.3, 0.9, 0.1, 0.7), 0.1);
        assert_eq!(map_range(0.9f64, 0.3, 0.9, 0.1, 0.7), 0.7);
        assert_eq!(map_range(-3.0f32, -3.0, 7.0, 1.0, -1.0), 1.0);
        assert_eq!(map_range(7.0f32, -3.0, 7.0, 1.0, -1.0), -1.0);
    }

    #[test]
    fn test_map_range_midpoint() {
        assert_eq!(map_range(5.0f64, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(map_range(5.0f32, 0.0, 10.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn test_map_range_does_not_clamp() {
        assert_eq!(map_range(20.0f64, 0.0, 10.0, 0.0, 100.0), 200.0);
        assert_eq!(map_range(-10.0f64, 0.0, 10.0, 0.0, 100.0), -100.0);
    }

    #[test]
    fn test_map_range_is_affine_for_non_zero_start() {
        // slope is 50 / (4 - 2), dividing by the ratio 2 / 4 would give 100
        assert_eq!(map_range(3.0f64, 2.0, 4.0, 0.0, 50.0), 25.0);
        assert_eq!(map_range(3.0f32, 2.0, 4.0, 0.0, 50.0), 25.0);
    }

    #[test]
    fn test_map_range_degenerate_input() {
        // t = -1 / 0
        assert_eq!(map_range(1.0f64, 2.0, 2.0, 0.0, 1.0), f64::NEG_INFINITY);
        assert_eq!(map_range(3.0f32, 2.0, 2.0, 0.0, 1.0), f32::INFINITY);
        // t = 0 / 0
        assert!(map_range(2.0f64, 2.0, 2.0, 0.0, 1.0).is_nan());
    }

    #[test]
    fn test_map_range_single_point_output() {
        for x in [0.0274, 0.1, 1.0 / 3.0, 2.5, 7.77, 9.999, 10.0, -4.2, 123.456] {
            assert_eq!(map_range(x, 0.0f64, 10.0, 7.0, 7.0), 7.0, "input {x}");
            assert_eq!(map_range(x as f32, 0.0, 10.0, 0.1, 0.1), 0.1, "input {x}");
        }
    }

    #[test]
    fn test_lerp_endpoints_exact() {
        assert_eq!(lerp(0.1f64, 0.7, 0.0), 0.1);
        assert_eq!(lerp(0.1f64, 0.7, 1.0), 0.7);
        assert_eq!(lerp(-1e-3f32, 1e7, 1.0), 1e7);
    }

    #[test]
    fn test_interval() {
        let interval = Interval::new(2.0f64, -2.0);
        assert_eq!(interval.span(), -4.0);
        assert!(!interval.is_degenerate());
        assert_eq!(interval.reversed(), Interval::new(-2.0, 2.0));
        assert!(Interval::from((1.0f32, 1.0)).is_degenerate());
    }

    #[test]
    fn test_linear_map_inverse() {
        let map = LinearMap::new(Interval::new(-1.0f64, 1.0), Interval::new(0.0, 255.0));
        assert_eq!(map.apply(0.0), 127.5);
        assert_eq!(map.inverse().apply(127.5), 0.0);
        assert_eq!(map.inverse().inverse(), map);
    }

    #[test]
    fn test_linear_map_try_new_rejects_degenerate() {
        let result = LinearMap::try_new(Interval::new(3.0f32, 3.0), Interval::new(0.0, 1.0));
        assert_eq!(result, Err(DomainError::DegenerateRange { at: 3.0 }));
    }

    #[test]
    fn test_linear_map_json() -> TestResult {
        let map = LinearMap::try_new(Interval::new(0.0f64, 10.0), Interval::new(0.0, 100.0))?;
        let json = serde_json::to_string(&map)?;
        assert_eq!(
            json,
            r#"{"input":{"start":0.0,"end":10.0},"output":{"start":0.0,"end":100.0}}"#
        );
        let read: LinearMap<f64> = serde_json::from_str(&json)?;
        assert_eq!(read, map);
        Ok(())
    }

    #[test]
    fn test_random_linear_map() -> TestResult {
        for _ in 0..1000 {
            let map: LinearMap<f64> = Faker.fake();
            assert_eq!(map.apply(map.input().start()), map.output().start());
            assert_eq!(map.apply(map.input().end()), map.output().end());
            assert_eq!(LinearMap::try_new(map.input(), map.output())?, map);

            let json = serde_json::to_string(&map)?;
            let read: LinearMap<f64> = serde_json::from_str(&json)?;
            assert_eq!(read, map);
        }
        Ok(())
    }

    #[test]
    fn test_random_single_point_output() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let input: Interval<f32> = Faker.fake_with_rng(&mut rng);
            let point: f32 = rng.random_range(-1000.0..1000.0);
            let map = LinearMap::new(input, Interval::new(point, point));
            let x: f32 = rng.random_range(-2000.0..2000.0);
            assert_eq!(map.apply(x), point, "input {x} through {input:?}");
        }
    }
}
