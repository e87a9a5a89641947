//! Method-call syntax for the snapping and remapping functions.
//!
//! ```
//! use snapmath::SnapExt;
//!
//! assert_eq!(7.0f32.floor_to_nearest(3.0), 6.0);
//! assert_eq!(0.5f64.map_range(0.0, 1.0, -10.0, 10.0), 0.0);
//! ```

use super::float::Float;
use super::{nearest, remap};

pub trait SnapExt: Float {
    /// See [`round_to_nearest`](nearest::round_to_nearest).
    fn round_to_nearest(self, factor: Self) -> Self {
        nearest::round_to_nearest(self, factor)
    }

    /// See [`floor_to_nearest`](nearest::floor_to_nearest).
    fn floor_to_nearest(self, factor: Self) -> Self {
        nearest::floor_to_nearest(self, factor)
    }

    /// See [`ceil_to_nearest`](nearest::ceil_to_nearest).
    fn ceil_to_nearest(self, factor: Self) -> Self {
        nearest::ceil_to_nearest(self, factor)
    }

    /// See [`map_range`](remap::map_range).
    fn map_range(
        self,
        input_from: Self,
        input_to: Self,
        output_from: Self,
        output_to: Self,
    ) -> Self {
        remap::map_range(self, input_from, input_to, output_from, output_to)
    }
}

impl<F: Float> SnapExt for F {}
