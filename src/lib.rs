//!
//! Snapmath snaps floating point values to multiples of a factor and remaps
//! values linearly from one range onto another.
//!
//! Every operation is generic over [`Float`], which is implemented for `f32`
//! and `f64`. Degenerate input (a zero factor, a zero-width input range)
//! follows IEEE-754 and produces NaN or an infinity. The `checked_*`
//! functions return a [`DomainError`] instead.
//!
//! ```
//! use snapmath::{floor_to_nearest, map_range, round_to_nearest};
//!
//! assert_eq!(round_to_nearest(112.9f64, 10.0), 110.0);
//! assert_eq!(floor_to_nearest(-112.9f32, 10.0), -120.0);
//! assert_eq!(map_range(5.0f64, 0.0, 10.0, 0.0, 100.0), 50.0);
//! ```
//!
//! The optional `wasm` feature exports the `f64` operations to JavaScript,
//! see the `wasm` module. Its JS glue is not covered by tests.

pub mod math;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use math::*;
