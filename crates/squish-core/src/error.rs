//! Error types surfaced by the compression engine.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Failure raised by a codec capability (re-encode or flatten).
#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Errors returned to callers of the compression API.
#[derive(Debug, Error)]
pub enum CompressError {
    /// The input is not an image; rejected before any compression work.
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    /// A codec capability failed during the primary or fallback attempt.
    #[error("Compression failed: {0}")]
    CompressionFailed(#[from] CodecError),
}

impl CompressError {
    /// Stable name of the error kind, for bindings that expose it as a string.
    pub fn kind(&self) -> &'static str {
        match self {
            CompressError::UnsupportedInput(_) => "UnsupportedInput",
            CompressError::CompressionFailed(_) => "CompressionFailed",
        }
    }
}
