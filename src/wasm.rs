//! JavaScript bindings, JS numbers are doubles so only the `f64` variants
//! are exported.
//!
//! The unit tests below call the exports as plain Rust functions with
//! `--features wasm` on a native target. The generated JS glue, including the
//! `JsError` thrown by `checkedMapRange`, has no test in this crate.

use wasm_bindgen::prelude::*;

use crate::math;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen(js_name = roundToNearest)]
pub fn round_to_nearest(num: f64, factor: f64) -> f64 {
    math::round_to_nearest(num, factor)
}

#[wasm_bindgen(js_name = floorToNearest)]
pub fn floor_to_nearest(num: f64, factor: f64) -> f64 {
    math::floor_to_nearest(num, factor)
}

#[wasm_bindgen(js_name = ceilToNearest)]
pub fn ceil_to_nearest(num: f64, factor: f64) -> f64 {
    math::ceil_to_nearest(num, factor)
}

#[wasm_bindgen(js_name = mapRange)]
pub fn map_range(
    input: f64,
    input_from: f64,
    input_to: f64,
    output_from: f64,
    output_to: f64,
) -> f64 {
    math::map_range(input, input_from, input_to, output_from, output_to)
}

/// Throws instead of returning NaN for a zero-width input range.
#[wasm_bindgen(js_name = checkedMapRange)]
pub fn checked_map_range(
    input: f64,
    input_from: f64,
    input_to: f64,
    output_from: f64,
    output_to: f64,
) -> Result<f64, JsError> {
    math::checked_map_range(input, input_from, input_to, output_from, output_to)
        .map_err(|e| JsError::new(&e.to_string()))
}
