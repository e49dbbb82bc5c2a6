//! JPEG encoding.
//!
//! JPEG is the lossy target format: JPEG and generic sources are re-encoded
//! to it, and PNG sources are converted to it when flattening pays off.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use super::{validate_buffer, EncodeError};

/// Map a quality fraction in `[0, 1]` to a JPEG quality in `1..=100`.
///
/// Out-of-range and NaN fractions are clamped; NaN maps to the lowest quality.
pub fn quality_to_jpeg(fraction: f64) -> u8 {
    let scaled = (fraction * 100.0).round();
    if scaled.is_nan() {
        return 1;
    }
    scaled.clamp(1.0, 100.0) as u8
}

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// # Errors
///
/// Returns `InvalidDimensions` or `InvalidPixelData` for malformed input, and
/// `EncodingFailed` if the encoder itself reports an error.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    validate_buffer(pixels, width, height, 3)?;

    let quality = quality.clamp(1, 100);
    let mut buffer = Cursor::new(Vec::new());

    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}
