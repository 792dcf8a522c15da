//! Decoder-specific error types

use serde::{Deserialize, Serialize};

/// Result type for decoder operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Reasons a payload could not be turned into an identity record
///
/// A decode either yields a complete record or one of these; there is no
/// partially-populated result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Unrecognised payload format")]
    UnrecognizedFormat,

    #[error("Malformed markup: {detail}")]
    MalformedMarkup { detail: String },

    #[error("Too few pipe-separated fields: found {found}, need at least 4")]
    TooFewFields { found: usize },

    #[error("Decompression failed: {detail}")]
    DecompressionError { detail: String },

    #[error("Insufficient Secure QR fields: found {found}, need at least {required}")]
    InsufficientFields { found: usize, required: usize },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: String },

    #[error("Invalid digit at position {position}")]
    InvalidDigit { position: usize },

    #[error("Payload too large: {len} bytes exceeds limit of {limit}")]
    PayloadTooLarge { len: usize, limit: usize },
}

/// Stable, serialisable tag for a [`DecodeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    UnrecognizedFormat,
    MalformedMarkup,
    TooFewFields,
    DecompressionError,
    InsufficientFields,
    MissingRequiredField,
    InvalidDigit,
    PayloadTooLarge,
}

impl DecodeError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::UnrecognizedFormat => FailureKind::UnrecognizedFormat,
            Self::MalformedMarkup { .. } => FailureKind::MalformedMarkup,
            Self::TooFewFields { .. } => FailureKind::TooFewFields,
            Self::DecompressionError { .. } => FailureKind::DecompressionError,
            Self::InsufficientFields { .. } => FailureKind::InsufficientFields,
            Self::MissingRequiredField { .. } => FailureKind::MissingRequiredField,
            Self::InvalidDigit { .. } => FailureKind::InvalidDigit,
            Self::PayloadTooLarge { .. } => FailureKind::PayloadTooLarge,
        }
    }

    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedMarkup {
            detail: detail.into(),
        }
    }
}
