//! Compression orchestration.
//!
//! One run goes through the same stages every time:
//!
//! 1. Select an [`EncodingConfig`] for the source.
//! 2. Re-encode once with that config (the primary candidate).
//! 3. PNG only: if the primary saved less than 10%, flatten onto white and
//!    encode as JPEG at the *requested* quality; keep whichever is smaller.
//! 4. If the leading candidate is not strictly smaller than the source,
//!    return the source unchanged.
//!
//! Codec failures are not retried here; the codec's own `max_iterations`
//! budget is the only retry layer.

use tracing::{debug, info};

use crate::codec::{Flatten, NativeCodec, Reencode};
use crate::error::CompressError;
use crate::outcome::CompressionOutcome;
use crate::params::{select_encoding_config, EncodingConfig};
use crate::source::{QualityRequest, SourceImage};

/// Compress `source` with the built-in [`NativeCodec`].
///
/// # Errors
///
/// Returns `CompressError::CompressionFailed` if decoding or encoding fails.
/// The source is only borrowed and stays usable after an error.
pub fn compress(
    source: &SourceImage,
    quality: QualityRequest,
) -> Result<CompressionOutcome, CompressError> {
    compress_with(&NativeCodec, source, quality)
}

/// Compress `source` using the supplied codec capabilities.
///
/// The returned outcome is never larger than the source.
pub fn compress_with<C>(
    codec: &C,
    source: &SourceImage,
    quality: QualityRequest,
) -> Result<CompressionOutcome, CompressError>
where
    C: Reencode + Flatten + ?Sized,
{
    let config = select_encoding_config(source.size(), source.mime(), quality);
    debug!(
        size = source.size(),
        mime = source.mime().as_str(),
        requested_quality = quality.value(),
        target_quality = config.target_quality,
        target_size_mb = config.target_size_mb,
        max_iterations = config.max_iterations,
        "Selected encoding config"
    );

    let primary = codec.reencode(source, &config)?;
    debug!(size = primary.size(), mime = %primary.mime_type, "Primary attempt finished");

    let leading = if needs_fallback(source, &primary) {
        debug!(
            source_size = source.size(),
            primary_size = primary.size(),
            "PNG compression saved under 10%, trying JPEG conversion"
        );
        let candidate = codec.flatten(source, quality)?;
        if candidate.size() < primary.size() {
            debug!(size = candidate.size(), "Using converted JPEG");
            candidate
        } else {
            debug!(size = candidate.size(), "Converted JPEG was not smaller, keeping primary");
            primary
        }
    } else {
        primary
    };

    let outcome = guard_never_larger(source, leading);
    info!(
        source_size = source.size(),
        size = outcome.size(),
        strategy = outcome.strategy.as_str(),
        "Compression ratio: {:.1}%",
        outcome.savings_percent()
    );

    Ok(outcome)
}

/// Select the config a run would use, without touching pixels.
pub fn plan(source: &SourceImage, quality: QualityRequest) -> EncodingConfig {
    select_encoding_config(source.size(), source.mime(), quality)
}

/// True when `source` is a PNG and `primary` kept more than 90% of its size.
fn needs_fallback(source: &SourceImage, primary: &CompressionOutcome) -> bool {
    source.mime().is_png() && u128::from(primary.size()) * 10 > u128::from(source.size()) * 9
}

fn guard_never_larger(source: &SourceImage, leading: CompressionOutcome) -> CompressionOutcome {
    if leading.size() < source.size() {
        return leading;
    }

    debug!(
        source_size = source.size(),
        candidate_size = leading.size(),
        "Compressed output is not smaller, returning original"
    );
    CompressionOutcome::original(source)
}
