//! Identity QR decoder
//!
//! Single entry point that turns a scanned payload into an [`IdentityRecord`].
//!
//! Flow:
//! - detect the wire format from the payload's shape
//! - run exactly one extractor chain for that format
//!   - XML: markup scanner
//!   - pipe: positional split
//!   - Secure QR: base-10 -> bytes -> inflate -> split -> field table
//! - normalise the raw field bag
//!
//! Every step is a pure function of its input, so decoding the same payload
//! twice always gives the same outcome and decoders can be shared across threads.

use crate::codec::{digits_to_bytes, inflate_with_limit};
use crate::config::DecoderConfig;
use crate::detection::{detect, trim_payload, DetectedFormat};
use crate::normalizer::normalize;
use crate::types::{IdentityRecord, RawFieldBag};
use tracing::{debug, info, warn};

pub mod debug_display;
pub mod error;
pub mod pipe;
pub mod secure_qr;
pub mod xml;

pub use error::{DecodeError, DecodeResult, FailureKind};
pub use pipe::extract_pipe;
pub use secure_qr::{decode_secure_bytes, map_secure_qr_fields};
pub use xml::extract_xml;

/// Outcome of one decode call: a complete record or the reason there is none
pub type DecodeOutcome = Result<IdentityRecord, DecodeError>;

/// Decode a payload with the default limits
pub fn decode(raw: &str) -> DecodeOutcome {
    IdentityDecoder::default().decode(raw)
}

/// Identity QR decoder holding per-call limits
#[derive(Debug, Clone, Default)]
pub struct IdentityDecoder {
    config: DecoderConfig,
}

impl IdentityDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a scanned payload into a normalised identity record
    pub fn decode(&self, raw: &str) -> DecodeOutcome {
        let payload = trim_payload(raw);
        if payload.len() > self.config.max_payload_len {
            warn!(
                "Rejecting {}-byte payload (limit {})",
                payload.len(),
                self.config.max_payload_len
            );
            return Err(DecodeError::PayloadTooLarge {
                len: payload.len(),
                limit: self.config.max_payload_len,
            });
        }

        let format = detect(payload);
        debug!("Detected payload format: {}", format);

        let result = self
            .extract(payload, format)
            .and_then(|bag| normalize(&bag, format));

        match &result {
            Ok(record) => info!("Decoded {} payload: {}", format, record.summary()),
            Err(e) => warn!("Failed to decode {} payload: {}", format, e),
        }
        result
    }

    /// Run the extractor chain for `format`, producing the raw field bag
    pub fn extract(&self, payload: &str, format: DetectedFormat) -> DecodeResult<RawFieldBag> {
        match format {
            DetectedFormat::XmlLegacy => extract_xml(payload),
            DetectedFormat::PipeLegacy => extract_pipe(payload),
            DetectedFormat::SecureNumeric => self.extract_secure(payload),
            DetectedFormat::Unrecognized => Err(DecodeError::UnrecognizedFormat),
        }
    }

    /// Inflate a Secure QR payload into its decompressed byte buffer
    pub fn inflate_secure(&self, digits: &str) -> DecodeResult<Vec<u8>> {
        let compressed = digits_to_bytes(digits)?;
        debug!(
            "Secure QR: {} digit(s) -> {} compressed byte(s)",
            digits.len(),
            compressed.len()
        );
        inflate_with_limit(&compressed, self.config.max_inflated_bytes)
    }

    fn extract_secure(&self, digits: &str) -> DecodeResult<RawFieldBag> {
        let inflated = self.inflate_secure(digits)?;
        decode_secure_bytes(&inflated)
    }
}
