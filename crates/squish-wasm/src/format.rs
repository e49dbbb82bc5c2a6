//! Size formatting WASM bindings.

use crate::types::js_size;
use wasm_bindgen::prelude::*;

/// Format a byte count for display, e.g. `1536` -> `"1.50 KB"`.
#[wasm_bindgen]
pub fn format_size(bytes: f64) -> String {
    squish_core::format_size(js_size(bytes))
}

/// Format the saving between two sizes with one decimal, e.g. `"37.5%"`.
#[wasm_bindgen]
pub fn format_savings(original: f64, compressed: f64) -> String {
    let percent = squish_core::savings_percent(js_size(original), js_size(compressed));
    format!("{:.1}%", percent)
}
