//! Codec capabilities used by the orchestrator.
//!
//! [`Reencode`] and [`Flatten`] are the seams between the decision engine
//! and whatever actually touches pixels. [`NativeCodec`] implements both on
//! top of the `image` crate; tests and browser bridges can supply their own.

use image::imageops::FilterType;
use tracing::trace;

use crate::decode::{decode_image, resize_to_fit, scale, DecodedImage};
use crate::encode::{
    encode_jpeg, encode_png, flatten_onto, quality_to_jpeg, EncodeError, WHITE,
};
use crate::error::CodecError;
use crate::outcome::{CompressionOutcome, Strategy};
use crate::params::EncodingConfig;
use crate::source::{MimeKind, QualityRequest, SourceImage};

/// Re-encode a source according to an [`EncodingConfig`].
///
/// Implementations are expected to cap the longest side at
/// `max_dimension`, treat `target_quality` as an upper bound on fidelity,
/// and make at most `max_iterations` attempts at reaching `target_size_mb`.
pub trait Reencode {
    fn reencode(
        &self,
        source: &SourceImage,
        config: &EncodingConfig,
    ) -> Result<CompressionOutcome, CodecError>;
}

/// Composite a source onto an opaque white background and encode it as JPEG
/// at the given fidelity.
pub trait Flatten {
    fn flatten(
        &self,
        source: &SourceImage,
        quality: QualityRequest,
    ) -> Result<CompressionOutcome, CodecError>;
}

/// Per-iteration shrink applied to both the dimensions and the JPEG quality.
const SHRINK_FACTOR: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
        }
    }
}

/// Codec backed by the `image` crate's decoders and JPEG/PNG encoders.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeCodec;

impl NativeCodec {
    /// PNG stays PNG unless the bucket set a conversion threshold the source
    /// exceeds; everything else becomes JPEG.
    fn output_format(source: &SourceImage, config: &EncodingConfig) -> OutputFormat {
        match source.mime() {
            MimeKind::Png => match config.conversion_threshold_bytes() {
                Some(threshold) if source.size() > threshold => OutputFormat::Jpeg,
                _ => OutputFormat::Png,
            },
            MimeKind::Jpeg | MimeKind::Other(_) => OutputFormat::Jpeg,
        }
    }

    fn encode(
        image: &DecodedImage,
        format: OutputFormat,
        quality: f64,
    ) -> Result<Vec<u8>, EncodeError> {
        match format {
            OutputFormat::Jpeg => {
                let rgb = flatten_onto(&image.pixels, image.width, image.height, WHITE)?;
                encode_jpeg(&rgb, image.width, image.height, quality_to_jpeg(quality))
            }
            OutputFormat::Png => encode_png(&image.pixels, image.width, image.height),
        }
    }
}

impl Reencode for NativeCodec {
    fn reencode(
        &self,
        source: &SourceImage,
        config: &EncodingConfig,
    ) -> Result<CompressionOutcome, CodecError> {
        let decoded = decode_image(source.bytes())?;
        let mut working = resize_to_fit(&decoded, config.max_dimension, FilterType::Lanczos3)?;
        drop(decoded);

        let format = Self::output_format(source, config);
        let limit = config.target_size_bytes().min(source.size());
        let max_iterations = config.max_iterations.max(1);

        let mut quality = config.target_quality;
        let mut best = Self::encode(&working, format, quality)?;
        let mut attempts = 1;

        while attempts < max_iterations && best.len() as u64 > limit {
            working = scale(&working, SHRINK_FACTOR, FilterType::Lanczos3)?;
            if format == OutputFormat::Jpeg {
                quality *= SHRINK_FACTOR;
            }

            let candidate = Self::encode(&working, format, quality)?;
            attempts += 1;
            trace!(
                attempt = attempts,
                width = working.width,
                height = working.height,
                quality,
                size = candidate.len(),
                "Refinement pass"
            );

            if candidate.len() < best.len() {
                best = candidate;
            }
        }

        Ok(CompressionOutcome::new(
            best,
            format.mime_type(),
            Strategy::Reencoded,
            source.size(),
        ))
    }
}

impl Flatten for NativeCodec {
    fn flatten(
        &self,
        source: &SourceImage,
        quality: QualityRequest,
    ) -> Result<CompressionOutcome, CodecError> {
        let decoded = decode_image(source.bytes())?;
        let rgb = flatten_onto(&decoded.pixels, decoded.width, decoded.height, WHITE)?;
        let jpeg = encode_jpeg(
            &rgb,
            decoded.width,
            decoded.height,
            quality_to_jpeg(quality.value()),
        )?;

        Ok(CompressionOutcome::new(
            jpeg,
            OutputFormat::Jpeg.mime_type(),
            Strategy::Flattened,
            source.size(),
        ))
    }
}
