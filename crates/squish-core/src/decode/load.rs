//! Image decoding with EXIF orientation handling.
//!
//! Any format enabled on the `image` crate (JPEG, PNG, GIF, WebP, BMP) is
//! decoded into straight RGBA so that transparency is preserved for the
//! encoders downstream.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;

use super::{DecodeError, DecodedImage, Orientation};

/// Decode image bytes, applying EXIF orientation correction.
///
/// # Arguments
///
/// * `bytes` - Raw image file bytes
///
/// # Returns
///
/// A `DecodedImage` with RGBA pixel data and correct orientation applied.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized.
/// Returns `DecodeError::CorruptedFile` if the data is corrupted or truncated.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let orientation = extract_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let oriented_img = apply_orientation(img, orientation);
    Ok(DecodedImage::from_rgba_image(oriented_img.into_rgba8()))
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    Reader::new()
        .read_from_container(&mut cursor)
        .ok()
        .and_then(|exif| {
            exif.get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .map(Orientation::from)
        .unwrap_or_default()
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_decode_png_keeps_alpha() {
        let bytes = fixtures::transparent_png(8, 4);
        let img = decode_image(&bytes).unwrap();

        assert_eq!((img.width, img.height), (8, 4));
        assert_eq!(img.pixels.len(), 8 * 4 * 4);
        assert!(img.pixels.chunks_exact(4).any(|px| px[3] == 0));
    }

    #[test]
    fn test_decode_jpeg_is_opaque() {
        let bytes = fixtures::gradient_jpeg(16, 12, 90);
        let img = decode_image(&bytes).unwrap();

        assert_eq!((img.width, img.height), (16, 12));
        assert!(img.pixels.chunks_exact(4).all(|px| px[3] == u8::MAX));
    }

    #[test]
    fn test_decode_unknown_format() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_image(&[]).is_err());
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = fixtures::gradient_png(32, 32);
        let result = decode_image(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_orientation_extraction_no_exif() {
        let bytes = fixtures::gradient_jpeg(4, 4, 90);
        assert_eq!(extract_orientation(&bytes), Orientation::Normal);
        assert_eq!(extract_orientation(&[0x00, 0x01]), Orientation::Normal);
    }

    #[test]
    fn test_apply_orientation_rotate90() {
        let rgb_img = image::RgbImage::from_raw(2, 1, vec![255, 0, 0, 0, 255, 0]).unwrap();
        let img = DynamicImage::ImageRgb8(rgb_img);

        let result = apply_orientation(img, Orientation::Rotate90CW).into_rgb8();
        assert_eq!(result.dimensions(), (1, 2));
    }

    #[test]
    fn test_apply_orientation_flip_horizontal() {
        let rgb_img = image::RgbImage::from_raw(2, 1, vec![255, 0, 0, 0, 255, 0]).unwrap();
        let img = DynamicImage::ImageRgb8(rgb_img);

        let result = apply_orientation(img, Orientation::FlipHorizontal).into_rgb8();
        assert_eq!(result.get_pixel(0, 0).0, [0, 255, 0]);
        assert_eq!(result.get_pixel(1, 0).0, [255, 0, 0]);
    }
}
