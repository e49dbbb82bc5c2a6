//! Image resizing for the longest-side cap and the size refinement loop.
//!
//! All functions return new `DecodedImage` instances without modifying the input.

use image::imageops::FilterType;

use super::{DecodeError, DecodedImage};

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if a target dimension is zero, or
/// `DecodeError::CorruptedFile` if the pixel buffer does not match the
/// image dimensions.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgba_image = image
        .to_rgba_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbaImage".to_string()))?;

    let resized = image::imageops::resize(&rgba_image, width, height, filter);

    Ok(DecodedImage::from_rgba_image(resized))
}

/// Resize an image so its longest edge is at most `max_edge`, preserving
/// aspect ratio. Images that already fit are returned unchanged (never upscaled).
pub fn resize_to_fit(
    image: &DecodedImage,
    max_edge: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if max_edge == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    if image.width <= max_edge && image.height <= max_edge {
        return Ok(image.clone());
    }

    let (new_width, new_height) = calculate_fit_dimensions(image.width, image.height, max_edge);

    resize(image, new_width, new_height, filter)
}

/// Shrink both sides by `factor` (expected in `(0, 1]`), keeping each side at
/// least one pixel.
pub fn scale(
    image: &DecodedImage,
    factor: f64,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    let (width, height) = scaled_dimensions(image.width, image.height, factor);
    resize(image, width, height, filter)
}

fn scaled_dimensions(width: u32, height: u32, factor: f64) -> (u32, u32) {
    let factor = factor.clamp(0.0, 1.0);
    let w = ((width as f64) * factor).floor() as u32;
    let h = ((height as f64) * factor).floor() as u32;
    (w.max(1), h.max(1))
}

/// Calculate dimensions to fit within max_edge while preserving aspect ratio.
fn calculate_fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let ratio = width as f64 / height as f64;

    if width >= height {
        // Landscape or square: constrain by width
        let new_height = (max_edge as f64 / ratio).round() as u32;
        (max_edge, new_height.max(1))
    } else {
        // Portrait: constrain by height
        let new_width = (max_edge as f64 * ratio).round() as u32;
        (new_width.max(1), max_edge)
    }
}
