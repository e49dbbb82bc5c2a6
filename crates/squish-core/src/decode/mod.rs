//! Image decoding pipeline for Squish.
//!
//! This module provides functionality for:
//! - Decoding any supported raster format into RGBA pixels
//! - Applying EXIF orientation so re-encoded output is upright
//! - Resizing to the longest-side cap and shrinking during size refinement
//!
//! All operations are synchronous and single-threaded; the wasm layer is
//! expected to run them inside a Web Worker.

mod load;
mod resize;
mod types;

pub use load::decode_image;
pub use resize::{resize, resize_to_fit, scale};
pub use types::{DecodeError, DecodedImage, Orientation};
