//! Float snapping and range remapping
//!
//! This module provides:
//! - Snapping to the nearest multiple of a factor (nearest submodule)
//! - Unclamped linear remapping between ranges (remap submodule)
//! - Error-returning variants for degenerate input (checked submodule)
//! - Method-call syntax on `f32`/`f64` (ext submodule)

mod checked;
mod ext;
mod float;
mod nearest;
mod remap;

pub use checked::*;
pub use ext::*;
pub use float::*;
pub use nearest::*;
pub use remap::*;
