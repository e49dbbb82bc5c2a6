//! Compression WASM bindings.
//!
//! # Functions
//!
//! - [`compress_image`] - Compress an image file's bytes
//! - [`select_encoding_config`] - Preview the parameters a run would use
//!
//! # Example
//!
//! ```typescript
//! import { compress_image, format_size } from '@squish/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = compress_image(bytes, file.type, slider.value / 100);
//! const blob = new Blob([result.bytes()], { type: result.mime_type });
//! label.textContent = format_size(result.size);
//! result.free();
//! ```

use crate::types::{js_size, to_js_error, JsCompressionOutcome};
use serde::Serialize;
use squish_core::{MimeKind, QualityRequest, SourceImage};
use wasm_bindgen::prelude::*;

/// Compress image bytes with format-aware heuristics.
///
/// # Arguments
///
/// * `bytes` - The image file bytes as a `Uint8Array`
/// * `mime_type` - Declared MIME type, usually `File.type`
/// * `quality` - Requested quality fraction, 0.0 to 1.0
///
/// # Errors
///
/// Throws an `Error` named `UnsupportedInput` for non-image MIME types or empty
/// input, and one named `CompressionFailed` if decoding or encoding fails.
#[wasm_bindgen]
pub fn compress_image(
    bytes: &[u8],
    mime_type: &str,
    quality: f64,
) -> Result<JsCompressionOutcome, JsValue> {
    let source = SourceImage::new(bytes.to_vec(), mime_type).map_err(to_js_error)?;
    let outcome =
        squish_core::compress(&source, QualityRequest::new(quality)).map_err(to_js_error)?;

    web_sys::console::debug_1(
        &format!(
            "Compression ratio: {:.1}% ({})",
            outcome.savings_percent(),
            outcome.strategy.as_str()
        )
        .into(),
    );

    Ok(JsCompressionOutcome::from_outcome(outcome))
}

/// Return the encoding parameters chosen for a file of `size` bytes.
///
/// The result is a plain object with `maxDimension`, `targetSizeMB`,
/// `targetQuality`, `conversionSizeThresholdKB` (or `null`) and `maxIterations`.
#[wasm_bindgen]
pub fn select_encoding_config(
    size: f64,
    mime_type: &str,
    quality: f64,
) -> Result<JsValue, JsValue> {
    let mime = MimeKind::parse(mime_type).map_err(to_js_error)?;
    let config =
        squish_core::select_encoding_config(js_size(size), &mime, QualityRequest::new(quality));

    config
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize config: {}", e)))
}
