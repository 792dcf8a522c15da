//! Debug display for Secure QR payloads
//!
//! Shows what the decoder sees at each stage of the Secure QR pipeline: the
//! compressed and inflated sizes, the selected layout, a preview of the
//! signature region and every decoded text segment. Used by `identity-qr inspect`.

use crate::codec::{digits_to_bytes, split_fields_with_rest};
use crate::decoder::error::DecodeResult;
use crate::decoder::IdentityDecoder;
use crate::types::SecureQrFieldTable;
use serde::Serialize;
use tracing::info;

/// Bytes of the signature region shown in previews (at each end)
const PREVIEW_BYTES: usize = 8;

/// Stage-by-stage view of one Secure QR payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecureQrInspection {
    pub digit_count: usize,
    pub compressed_len: usize,
    pub inflated_len: usize,
    pub layout_version: &'static str,
    pub header_preview: String,
    pub segments: Vec<String>,
    pub tail_len: usize,
}

impl SecureQrInspection {
    /// Run the byte-level stages of the pipeline without mapping or normalising
    pub fn from_payload(decoder: &IdentityDecoder, digits: &str) -> DecodeResult<Self> {
        let digits = digits.trim();
        let compressed_len = digits_to_bytes(digits)?.len();
        let inflated = decoder.inflate_secure(digits)?;
        let layout = SecureQrFieldTable::detect(&inflated);
        let split = split_fields_with_rest(
            &inflated,
            layout.delimiter,
            layout.header_len,
            layout.max_fields,
        );

        let header = &inflated[..layout.header_len.min(inflated.len())];

        Ok(Self {
            digit_count: digits.len(),
            compressed_len,
            inflated_len: inflated.len(),
            layout_version: layout.version,
            header_preview: preview_hex(header),
            segments: split.segments,
            tail_len: inflated.len() - split.rest_offset,
        })
    }

    /// Write the inspection to the log, one line per item
    pub fn log(&self) {
        info!("Secure QR inspection:");
        info!("   • Digits: {}", self.digit_count);
        info!("   • Compressed: {} bytes", self.compressed_len);
        info!("   • Inflated: {} bytes", self.inflated_len);
        info!("   • Layout: {}", self.layout_version);
        info!("   • Signature: {}", self.header_preview);
        for (i, segment) in self.segments.iter().enumerate() {
            info!("   • [{:>2}] {:?}", i, segment);
        }
        info!("   • Tail: {} bytes", self.tail_len);
    }
}

/// First and last few bytes as hex, e.g. `0a1b...ff00 (256 bytes)`
fn preview_hex(bytes: &[u8]) -> String {
    if bytes.len() > PREVIEW_BYTES * 2 {
        format!(
            "{}...{} ({} bytes)",
            hex::encode(&bytes[..PREVIEW_BYTES]),
            hex::encode(&bytes[bytes.len() - PREVIEW_BYTES..]),
            bytes.len()
        )
    } else {
        format!("{} ({} bytes)", hex::encode(bytes), bytes.len())
    }
}
