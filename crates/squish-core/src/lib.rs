//! Squish Core - Adaptive image compression
//!
//! This crate decides how to shrink a single raster image: it picks encoding
//! parameters from the source's size and MIME type, runs a re-encode, falls
//! back to a flattened JPEG for PNGs that barely compress, and never hands
//! back something larger than what it was given.
//!
//! # Example
//!
//! ```ignore
//! use squish_core::{compress, format_size, QualityRequest, SourceImage};
//!
//! let bytes = std::fs::read("screenshot.png")?;
//! let source = SourceImage::new(bytes, "image/png")?;
//! let outcome = compress(&source, QualityRequest::from_percent(80))?;
//! println!("{} -> {}", format_size(source.size()), format_size(outcome.size()));
//! ```

pub mod codec;
pub mod compress;
pub mod decode;
pub mod encode;
pub mod error;
pub mod format;
pub mod outcome;
pub mod params;
pub mod source;

#[cfg(test)]
mod fixtures;

pub use codec::{Flatten, NativeCodec, Reencode};
pub use compress::{compress, compress_with, plan};
pub use error::{CodecError, CompressError};
pub use format::{format_size, savings_percent};
pub use outcome::{CompressionOutcome, Strategy};
pub use params::{select_encoding_config, EncodingConfig, MAX_DIMENSION};
pub use source::{MimeKind, QualityRequest, SourceImage};
