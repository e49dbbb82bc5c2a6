//! WASM-compatible wrapper types.
//!
//! This module converts between core Squish values and their JavaScript
//! representations: byte counts arrive as `number`, outcomes leave as a
//! class with getters, and errors become `Error` objects named after their kind.

use squish_core::{CompressError, CompressionOutcome};
use wasm_bindgen::prelude::*;

/// Result of a compression run, exposed to JavaScript.
///
/// # Memory Management
///
/// The compressed bytes live in WASM memory. `bytes()` copies them into a new
/// `Uint8Array`; call it once and keep the result (e.g. wrap it in a `Blob`).
#[wasm_bindgen]
pub struct JsCompressionOutcome {
    inner: CompressionOutcome,
}

#[wasm_bindgen]
impl JsCompressionOutcome {
    /// Size of the compressed output in bytes.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> f64 {
        self.inner.size() as f64
    }

    /// Size of the original input in bytes.
    #[wasm_bindgen(getter)]
    pub fn source_size(&self) -> f64 {
        self.inner.source_size as f64
    }

    /// MIME type of the output, e.g. `image/jpeg` after a PNG conversion.
    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.inner.mime_type.clone()
    }

    /// Which path produced the output: `reencoded`, `flattened` or `original`.
    #[wasm_bindgen(getter)]
    pub fn strategy(&self) -> String {
        self.inner.strategy.as_str().to_string()
    }

    /// Percentage of the input size saved.
    #[wasm_bindgen(getter)]
    pub fn savings_percent(&self) -> f64 {
        self.inner.savings_percent()
    }

    /// Returns the output bytes as a Uint8Array (copied).
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsCompressionOutcome {
    pub(crate) fn from_outcome(inner: CompressionOutcome) -> Self {
        Self { inner }
    }
}

/// Convert a JavaScript byte count to `u64`.
///
/// Negative, NaN and infinite values map to 0; fractions are truncated.
pub(crate) fn js_size(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value as u64
    } else {
        0
    }
}

/// Build a JavaScript `Error` whose `name` is the error kind.
pub(crate) fn to_js_error(err: CompressError) -> JsValue {
    let js_err = js_sys::Error::new(&err.to_string());
    js_err.set_name(err.kind());
    js_err.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use squish_core::Strategy;

    fn outcome() -> JsCompressionOutcome {
        JsCompressionOutcome::from_outcome(CompressionOutcome::new(
            vec![9u8; 40],
            "image/jpeg",
            Strategy::Flattened,
            160,
        ))
    }

    #[test]
    fn test_outcome_getters() {
        let js = outcome();
        assert_eq!(js.size(), 40.0);
        assert_eq!(js.source_size(), 160.0);
        assert_eq!(js.mime_type(), "image/jpeg");
        assert_eq!(js.strategy(), "flattened");
        assert_eq!(js.savings_percent(), 75.0);
        assert_eq!(js.bytes(), vec![9u8; 40]);
    }

    #[test]
    fn test_js_size() {
        assert_eq!(js_size(1536.0), 1536);
        assert_eq!(js_size(10.9), 10);
        assert_eq!(js_size(-5.0), 0);
        assert_eq!(js_size(f64::NAN), 0);
        assert_eq!(js_size(f64::INFINITY), 0);
    }
}
