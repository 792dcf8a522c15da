//! Payload format detection
//!
//! Classifies raw scanned text into one of the wire formats by structural
//! sniffing only. Nothing is parsed here and nothing can fail: an unknown
//! shape is a normal outcome.

use serde::{Deserialize, Serialize};

/// Wire format of a scanned payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DetectedFormat {
    /// XML-tagged legacy payload
    XmlLegacy,
    /// Pipe-delimited legacy payload
    PipeLegacy,
    /// Secure QR: one large decimal integer
    SecureNumeric,
    /// None of the above
    Unrecognized,
}

impl DetectedFormat {
    /// Short identifier used in logs and CLI output
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::XmlLegacy => "xml",
            Self::PipeLegacy => "pipe",
            Self::SecureNumeric => "secure",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Markup opening token of the XML legacy format
const XML_PROLOG: &str = "<?xml";

/// Byte-order mark left at the front of text saved by some editors
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Strip surrounding whitespace and any leading byte-order marks
pub fn trim_payload(text: &str) -> &str {
    text.trim().trim_start_matches(BYTE_ORDER_MARK).trim_start()
}

/// Classify a payload. Surrounding whitespace and a leading byte-order mark are ignored.
///
/// Checks run in priority order: markup, then pipe separator, then all-digits.
pub fn detect(text: &str) -> DetectedFormat {
    let text = trim_payload(text);

    if text.starts_with('<') || text.contains(XML_PROLOG) {
        DetectedFormat::XmlLegacy
    } else if text.contains('|') {
        DetectedFormat::PipeLegacy
    } else if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        DetectedFormat::SecureNumeric
    } else {
        DetectedFormat::Unrecognized
    }
}
