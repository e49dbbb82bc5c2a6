//! Image encoding pipeline for Squish.
//!
//! This module provides functionality for:
//! - Encoding RGB pixels to JPEG with configurable quality
//! - Lossless PNG re-encoding at maximum compression effort
//! - Flattening RGBA onto an opaque background before lossy encoding

mod flatten;
mod jpeg;
mod png;

use thiserror::Error;

pub use flatten::{flatten_onto, WHITE};
pub use jpeg::{encode_jpeg, quality_to_jpeg};
pub use png::encode_png;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Check that a pixel buffer matches `width * height * channels`.
fn validate_buffer(
    pixels: &[u8],
    width: u32,
    height: u32,
    channels: usize,
) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * channels;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}
