//! Variants of the snapping and remapping operations that reject degenerate
//! input instead of producing NaN or an infinity.

use std::error::Error;
use std::fmt::{Display, Formatter};

use super::float::Float;
use super::nearest::{ceil_to_nearest, floor_to_nearest, round_to_nearest};
use super::remap::map_range;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// A snapping factor of zero, every value would snap to NaN.
    ZeroFactor,
    /// An input interval with `start == end`.
    DegenerateRange { at: f64 },
    /// A NaN or infinite argument.
    NotFinite { argument: &'static str },
    /// Finite arguments whose intermediate or result is NaN or infinite,
    /// e.g. a span too wide for the float type or a factor so small the
    /// quotient overflows.
    Overflow { operation: &'static str },
}

impl Error for DomainError {}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::ZeroFactor => write!(f, "factor must not be zero"),
            DomainError::DegenerateRange { at } => {
                write!(f, "input range is empty, both ends are {at}")
            }
            DomainError::NotFinite { argument } => {
                write!(f, "argument `{argument}` is not finite")
            }
            DomainError::Overflow { operation } => {
                write!(f, "{operation} overflows the float range")
            }
        }
    }
}

fn require_finite<F: Float>(value: F, argument: &'static str) -> Result<F, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::debug!("rejecting non-finite {argument}: {value:?}");
        Err(DomainError::NotFinite { argument })
    }
}

fn require_representable<F: Float>(value: F, operation: &'static str) -> Result<F, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::debug!("rejecting {operation}, result is {value:?}");
        Err(DomainError::Overflow { operation })
    }
}

fn require_factor<F: Float>(factor: F) -> Result<F, DomainError> {
    let factor = require_finite(factor, "factor")?;
    if factor == F::ZERO {
        log::debug!("rejecting zero factor");
        return Err(DomainError::ZeroFactor);
    }
    Ok(factor)
}

/// [`round_to_nearest`] that fails on a zero or non-finite factor, a
/// non-finite `num`, or a result that overflows.
pub fn checked_round_to_nearest<F: Float>(num: F, factor: F) -> Result<F, DomainError> {
    let num = require_finite(num, "num")?;
    let factor = require_factor(factor)?;
    require_representable(round_to_nearest(num, factor), "round_to_nearest")
}

/// [`floor_to_nearest`] that fails on a zero or non-finite factor, a
/// non-finite `num`, or a result that overflows.
pub fn checked_floor_to_nearest<F: Float>(num: F, factor: F) -> Result<F, DomainError> {
    let num = require_finite(num, "num")?;
    let factor = require_factor(factor)?;
    require_representable(floor_to_nearest(num, factor), "floor_to_nearest")
}

/// [`ceil_to_nearest`] that fails on a zero or non-finite factor, a
/// non-finite `num`, or a result that overflows.
pub fn checked_ceil_to_nearest<F: Float>(num: F, factor: F) -> Result<F, DomainError> {
    let num = require_finite(num, "num")?;
    let factor = require_factor(factor)?;
    require_representable(ceil_to_nearest(num, factor), "ceil_to_nearest")
}

/// [`map_range`] that fails when `input_from == input_to`, any argument is
/// not finite, or the mapping overflows.
///
/// Overflow covers an input span too wide to represent (`-MAX..MAX`) and a
/// span so narrow that the fractional position becomes infinite. The result is
/// always finite. A degenerate output range is fine, everything maps onto that
/// single point.
pub fn checked_map_range<F: Float>(
    input: F,
    input_from: F,
    input_to: F,
    output_from: F,
    output_to: F,
) -> Result<F, DomainError> {
    let input = require_finite(input, "input")?;
    let input_from = require_finite(input_from, "input_from")?;
    let input_to = require_finite(input_to, "input_to")?;
    let output_from = require_finite(output_from, "output_from")?;
    let output_to = require_finite(output_to, "output_to")?;
    if input_from == input_to {
        log::debug!("rejecting degenerate input range at {input_from:?}");
        return Err(DomainError::DegenerateRange {
            at: input_from.to_f64(),
        });
    }
    require_representable(input_to - input_from, "input span")?;
    require_representable(output_to - output_from, "output span")?;
    require_representable(
        map_range(input, input_from, input_to, output_from, output_to),
        "map_range",
    )
}
