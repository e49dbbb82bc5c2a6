//! Encoding parameter selection.
//!
//! Maps (byte size, MIME kind, requested quality) to a concrete
//! [`EncodingConfig`] using a fixed policy table. PNG and everything else
//! have separate size buckets:
//!
//! | MIME    | Size bucket           | Target size | Quality cap | Extra                               |
//! |---------|-----------------------|-------------|-------------|-------------------------------------|
//! | PNG     | < 200 KB              | 0.5 MB      | 0.6         | convert above 100 KB, 10 iterations |
//! | PNG     | >= 200 KB             | 0.7 MB      | 0.7         |                                     |
//! | non-PNG | > 1 MB                | 0.8 MB      | 0.7         |                                     |
//! | non-PNG | > 200 KB and <= 1 MB  | 0.9 MB      | 0.8         |                                     |
//! | non-PNG | <= 200 KB             | 0.95 MB     | 0.9         |                                     |
//!
//! The requested quality is a hard ceiling: the selected quality is the
//! smaller of the request and the bucket cap.

use serde::{Deserialize, Serialize};

use crate::source::{MimeKind, QualityRequest};

/// One kilobyte, as used by the policy buckets.
pub const KB: u64 = 1024;
/// One megabyte, as used by the policy buckets.
pub const MB: u64 = 1024 * KB;
/// Longest-side cap applied to every output.
pub const MAX_DIMENSION: u32 = 1920;
/// Encode attempts allowed when a bucket does not ask for more.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1;

const SMALL_BUCKET: u64 = 200 * KB;

/// Concrete parameters handed to the re-encode capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodingConfig {
    /// Longest side of the output in pixels; aspect ratio is preserved.
    pub max_dimension: u32,
    /// Size the encoder should try to get under, in megabytes.
    #[serde(rename = "targetSizeMB")]
    pub target_size_mb: f64,
    /// Upper bound on encoder fidelity, in `[0, 1]`.
    pub target_quality: f64,
    /// PNG sources larger than this are converted to JPEG by the re-encoder.
    #[serde(rename = "conversionSizeThresholdKB")]
    pub conversion_size_threshold_kb: Option<u32>,
    /// Encode attempts the re-encoder may make while converging on the target size.
    pub max_iterations: u32,
}

impl EncodingConfig {
    /// Target size in bytes.
    pub fn target_size_bytes(&self) -> u64 {
        (self.target_size_mb * MB as f64).floor() as u64
    }

    /// Conversion threshold in bytes, if the bucket sets one.
    pub fn conversion_threshold_bytes(&self) -> Option<u64> {
        self.conversion_size_threshold_kb.map(|kb| u64::from(kb) * KB)
    }
}

/// Row of the policy table.
struct Policy {
    target_size_mb: f64,
    quality_cap: f64,
    conversion_size_threshold_kb: Option<u32>,
    max_iterations: u32,
}

impl Policy {
    const fn new(target_size_mb: f64, quality_cap: f64) -> Self {
        Self {
            target_size_mb,
            quality_cap,
            conversion_size_threshold_kb: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

static SMALL_PNG: Policy = Policy {
    conversion_size_threshold_kb: Some(100),
    max_iterations: 10,
    ..Policy::new(0.5, 0.6)
};
static LARGE_PNG: Policy = Policy::new(0.7, 0.7);
static LARGE_OTHER: Policy = Policy::new(0.8, 0.7);
static MEDIUM_OTHER: Policy = Policy::new(0.9, 0.8);
static SMALL_OTHER: Policy = Policy::new(0.95, 0.9);

fn policy_for(size: u64, mime: &MimeKind) -> &'static Policy {
    match mime {
        MimeKind::Png if size < SMALL_BUCKET => &SMALL_PNG,
        MimeKind::Png => &LARGE_PNG,
        _ if size > MB => &LARGE_OTHER,
        _ if size > SMALL_BUCKET => &MEDIUM_OTHER,
        _ => &SMALL_OTHER,
    }
}

/// Select encoding parameters for a source of `size` bytes.
///
/// Total over its inputs: unknown MIME kinds take the non-PNG buckets.
pub fn select_encoding_config(
    size: u64,
    mime: &MimeKind,
    quality: QualityRequest,
) -> EncodingConfig {
    let policy = policy_for(size, mime);

    EncodingConfig {
        max_dimension: MAX_DIMENSION,
        target_size_mb: policy.target_size_mb,
        target_quality: policy.quality_cap.min(quality.value()),
        conversion_size_threshold_kb: policy.conversion_size_threshold_kb,
        max_iterations: policy.max_iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn other(mime: &str) -> MimeKind {
        MimeKind::Other(mime.to_string())
    }

    #[test]
    fn test_small_png_with_full_quality() {
        let config = select_encoding_config(50 * KB, &MimeKind::Png, QualityRequest::MAX);

        assert_eq!(config.max_dimension, 1920);
        assert_eq!(config.target_size_mb, 0.5);
        assert_eq!(config.target_quality, 0.6);
        assert_eq!(config.conversion_size_threshold_kb, Some(100));
        assert_eq!(config.max_iterations, 10);
    }

    #[test]
    fn test_png_bucket_boundary() {
        let below = select_encoding_config(200 * KB - 1, &MimeKind::Png, QualityRequest::MAX);
        assert_eq!(below.target_size_mb, 0.5);

        let at = select_encoding_config(200 * KB, &MimeKind::Png, QualityRequest::MAX);
        assert_eq!(at.target_size_mb, 0.7);
        assert_eq!(at.target_quality, 0.7);
        assert_eq!(at.conversion_size_threshold_kb, None);
        assert_eq!(at.max_iterations, DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_exactly_one_megabyte_is_medium_bucket() {
        let config = select_encoding_config(1_048_576, &MimeKind::Jpeg, QualityRequest::MAX);
        assert_eq!(config.target_size_mb, 0.9);
        assert_eq!(config.target_quality, 0.8);

        let above = select_encoding_config(1_048_577, &MimeKind::Jpeg, QualityRequest::MAX);
        assert_eq!(above.target_size_mb, 0.8);
        assert_eq!(above.target_quality, 0.7);
    }

    #[test]
    fn test_exactly_200kb_non_png_is_small_bucket() {
        let at = select_encoding_config(200 * KB, &MimeKind::Jpeg, QualityRequest::MAX);
        assert_eq!(at.target_size_mb, 0.95);
        assert_eq!(at.target_quality, 0.9);

        let above = select_encoding_config(200 * KB + 1, &MimeKind::Jpeg, QualityRequest::MAX);
        assert_eq!(above.target_size_mb, 0.9);
    }

    #[test]
    fn test_unknown_mime_uses_non_png_policy() {
        let config = select_encoding_config(2 * MB, &other("image/webp"), QualityRequest::MAX);
        assert_eq!(config.target_size_mb, 0.8);
        assert_eq!(config.conversion_size_threshold_kb, None);
    }

    #[test]
    fn test_requested_quality_below_cap_wins() {
        let config = select_encoding_config(10 * KB, &MimeKind::Jpeg, QualityRequest::new(0.35));
        assert_eq!(config.target_quality, 0.35);
    }

    #[test]
    fn test_byte_helpers() {
        let config = select_encoding_config(50 * KB, &MimeKind::Png, QualityRequest::MAX);
        assert_eq!(config.target_size_bytes(), 524_288);
        assert_eq!(config.conversion_threshold_bytes(), Some(102_400));

        let config = select_encoding_config(50 * KB, &MimeKind::Jpeg, QualityRequest::MAX);
        assert_eq!(config.conversion_threshold_bytes(), None);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let config = select_encoding_config(50 * KB, &MimeKind::Png, QualityRequest::MAX);
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["maxDimension"], 1920);
        assert_eq!(value["targetSizeMB"], 0.5);
        assert_eq!(value["targetQuality"], 0.6);
        assert_eq!(value["conversionSizeThresholdKB"], 100);
        assert_eq!(value["maxIterations"], 10);
    }

    #[test]
    fn test_serialized_policy_values_are_exact() {
        let config = select_encoding_config(50 * KB, &MimeKind::Jpeg, QualityRequest::MAX);
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["targetSizeMB"], 0.95);
        assert_eq!(value["targetQuality"], 0.9);
        assert_eq!(value["conversionSizeThresholdKB"], serde_json::Value::Null);

        let config = select_encoding_config(50 * KB, &MimeKind::Jpeg, QualityRequest::new(0.35));
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["targetQuality"], 0.35);
    }
}
