//! Generated image fixtures for tests.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageFormat, RgbImage, RgbaImage};
use std::io::Cursor;

fn png_bytes(img: DynamicImage) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png).unwrap();
    buffer.into_inner()
}

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
        ])
    })
}

/// Smooth RGB gradient encoded as PNG.
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    png_bytes(DynamicImage::ImageRgb8(gradient(width, height)))
}

/// RGBA PNG whose left half is fully transparent black.
pub fn transparent_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            image::Rgba([0, 0, 0, 0])
        } else {
            image::Rgba([200, 30, 30, 255])
        }
    });
    png_bytes(DynamicImage::ImageRgba8(img))
}

/// Pseudo-random RGB noise encoded as PNG at maximum effort, so a PNG
/// re-encode cannot shrink it.
pub fn noise_png(width: u32, height: u32) -> Vec<u8> {
    let mut state: u32 = 0x2545_F491;
    let img = RgbImage::from_fn(width, height, |_, _| {
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        };
        image::Rgb([next(), next(), next()])
    });
    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, PngFilter::Adaptive)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
    buffer.into_inner()
}

/// Smooth RGB gradient encoded as JPEG at `quality`.
pub fn gradient_jpeg(width: u32, height: u32, quality: u8) -> Vec<u8> {
    let img = gradient(width, height);
    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
    buffer.into_inner()
}
