//! The result of a re-encode attempt or of a whole compression run.

use serde::{Deserialize, Serialize};

use crate::source::SourceImage;

/// Which path produced the bytes of an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// The re-encode capability's output.
    Reencoded,
    /// The PNG was flattened onto white and converted to JPEG.
    Flattened,
    /// Nothing was smaller; the source bytes are returned untouched.
    Original,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Reencoded => "reencoded",
            Strategy::Flattened => "flattened",
            Strategy::Original => "original",
        }
    }
}

/// Encoded bytes together with their MIME type and provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionOutcome {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub strategy: Strategy,
    /// Size of the source the outcome was derived from.
    pub source_size: u64,
}

impl CompressionOutcome {
    pub fn new(
        bytes: Vec<u8>,
        mime_type: impl Into<String>,
        strategy: Strategy,
        source_size: u64,
    ) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
            strategy,
            source_size,
        }
    }

    /// The source itself, unchanged.
    pub fn original(source: &SourceImage) -> Self {
        Self::new(
            source.bytes().to_vec(),
            source.mime().as_str(),
            Strategy::Original,
            source.size(),
        )
    }

    /// Size of the outcome in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Percentage of the source size saved, `0.0` for an empty source.
    pub fn savings_percent(&self) -> f64 {
        crate::format::savings_percent(self.source_size, self.size())
    }
}
