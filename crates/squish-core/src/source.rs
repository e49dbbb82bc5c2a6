//! Input model: the source image, its MIME kind, and the requested quality.

use serde::{Deserialize, Serialize};

use crate::error::CompressError;

/// Declared MIME type of a source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MimeKind {
    /// `image/png`
    Png,
    /// `image/jpeg` (also accepts the non-standard `image/jpg`)
    Jpeg,
    /// Any other `image/*` type, normalized to lowercase.
    Other(String),
}

impl MimeKind {
    /// Parse a MIME type string.
    ///
    /// Parameters (`; charset=...`) and case are ignored. Anything outside
    /// the `image/` top-level type is rejected.
    pub fn parse(mime_type: &str) -> Result<Self, CompressError> {
        let essence = mime_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "image/png" => Ok(MimeKind::Png),
            "image/jpeg" | "image/jpg" => Ok(MimeKind::Jpeg),
            other => match other.strip_prefix("image/") {
                Some(subtype) if !subtype.is_empty() => Ok(MimeKind::Other(other.to_string())),
                _ => Err(CompressError::UnsupportedInput(format!(
                    "not an image MIME type: {mime_type:?}"
                ))),
            },
        }
    }

    /// Canonical MIME string.
    pub fn as_str(&self) -> &str {
        match self {
            MimeKind::Png => "image/png",
            MimeKind::Jpeg => "image/jpeg",
            MimeKind::Other(mime) => mime,
        }
    }

    pub fn is_png(&self) -> bool {
        matches!(self, MimeKind::Png)
    }
}

/// A caller-owned image to compress. The engine only ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    bytes: Vec<u8>,
    mime: MimeKind,
}

impl SourceImage {
    /// Validate and wrap caller-supplied bytes.
    ///
    /// # Errors
    ///
    /// Returns `CompressError::UnsupportedInput` when the MIME type is not
    /// `image/*` or the buffer is empty.
    pub fn new(bytes: Vec<u8>, mime_type: &str) -> Result<Self, CompressError> {
        let mime = MimeKind::parse(mime_type)?;
        if bytes.is_empty() {
            return Err(CompressError::UnsupportedInput("empty image data".to_string()));
        }
        Ok(Self { bytes, mime })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime(&self) -> &MimeKind {
        &self.mime
    }

    /// Size of the source in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Give the bytes back to the caller.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// User-requested quality fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualityRequest(f64);

impl QualityRequest {
    /// Unrestricted quality; bucket caps still apply.
    pub const MAX: QualityRequest = QualityRequest(1.0);

    /// Clamp `value` into `[0, 1]`. NaN is treated as unrestricted (`1.0`).
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::MAX;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Build from a 0-100 slider position.
    pub fn from_percent(percent: u8) -> Self {
        Self::new(f64::from(percent) / 100.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for QualityRequest {
    fn default() -> Self {
        Self::MAX
    }
}
