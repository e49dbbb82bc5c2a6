//! Compositing transparent pixels onto an opaque background.
//!
//! Lossy targets have no alpha channel; without flattening, transparent
//! regions would come out black.

use super::{validate_buffer, EncodeError};

/// Background used when converting to a lossy format.
pub const WHITE: [u8; 3] = [255, 255, 255];

/// Composite straight RGBA pixels over an opaque `background`, returning RGB.
///
/// Each channel is `src * a + bg * (1 - a)` with `a = alpha / 255`, rounded
/// to the nearest integer.
pub fn flatten_onto(
    pixels: &[u8],
    width: u32,
    height: u32,
    background: [u8; 3],
) -> Result<Vec<u8>, EncodeError> {
    validate_buffer(pixels, width, height, 4)?;

    let mut rgb = Vec::with_capacity(pixels.len() / 4 * 3);
    for px in pixels.chunks_exact(4) {
        let alpha = px[3] as u32;
        for (channel, bg) in px[..3].iter().zip(background) {
            let blended = (*channel as u32 * alpha + bg as u32 * (255 - alpha) + 127) / 255;
            rgb.push(blended as u8);
        }
    }
    Ok(rgb)
}
