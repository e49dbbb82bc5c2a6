//! Lossless PNG re-encoding.

use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use super::{validate_buffer, EncodeError};

/// Encode RGBA pixel data to PNG bytes at maximum deflate effort.
///
/// The alpha channel is dropped when every pixel is opaque, which saves a
/// quarter of the raw scanline data before compression.
///
/// # Errors
///
/// Returns `InvalidDimensions` or `InvalidPixelData` for malformed input, and
/// `EncodingFailed` if the encoder itself reports an error.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    validate_buffer(pixels, width, height, 4)?;

    let opaque = pixels.chunks_exact(4).all(|px| px[3] == u8::MAX);
    let mut buffer = Cursor::new(Vec::new());
    let encoder =
        PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, PngFilter::Adaptive);

    let result = if opaque {
        let rgb: Vec<u8> = pixels
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        encoder.write_image(&rgb, width, height, ExtendedColorType::Rgb8)
    } else {
        encoder.write_image(pixels, width, height, ExtendedColorType::Rgba8)
    };

    result.map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
    Ok(buffer.into_inner())
}
