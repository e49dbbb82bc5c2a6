//! Squish WASM - WebAssembly bindings for Squish
//!
//! This crate exposes the squish-core compression engine to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `compress` - Compression and parameter preview
//! - `format` - Human-readable sizes and savings
//! - `types` - WASM-compatible wrapper types and error conversion
//!
//! # Usage
//!
//! ```typescript
//! import init, { compress_image } from '@squish/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = compress_image(bytes, file.type, 0.8);
//! console.log(`${result.strategy}: ${result.size} bytes`);
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod format;
mod types;

pub use compress::{compress_image, select_encoding_config};
pub use format::{format_savings, format_size};
pub use types::JsCompressionOutcome;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
