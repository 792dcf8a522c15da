//! Secure QR field layouts
//!
//! The Secure QR payload is a delimiter-separated byte sequence that follows a
//! fixed-length signature region. Which segment carries which field depends on
//! the document generation. Each generation is one entry in
//! [`SECURE_QR_LAYOUTS`]; supporting a new revision means adding an entry here.

use crate::codec::fields::decode_latin1;
use serde::Serialize;

/// Secure QR layout constants
pub mod constants {
    /// Length of the signature region that precedes the field data
    pub const HEADER_LEN: usize = 256;

    /// Byte value separating fields
    pub const FIELD_DELIMITER: u8 = 255;

    /// Segments decoded as text before stopping; the photo blob follows
    pub const MAX_FIELDS: usize = 16;

    /// Fewer segments than this means the payload is not a layout we know
    pub const MIN_SEGMENTS: usize = 5;

    /// Length of each trailing contact digest (SHA-256)
    pub const CONTACT_HASH_LEN: usize = 32;
}

/// Position of every semantic field within the delimiter-separated sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecureQrOrdinals {
    pub version_marker: usize,
    pub contact_indicator: usize,
    pub name: usize,
    pub dob: usize,
    pub gender: usize,
    pub care_of: usize,
    pub district: usize,
    pub landmark: usize,
    pub house: usize,
    pub locality: usize,
    pub pincode: usize,
    pub state: usize,
    pub city: usize,
    pub masked_id: usize,
}

/// Immutable description of one Secure QR document generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecureQrFieldTable {
    /// Marker found in segment `ordinals.version_marker`
    pub version: &'static str,
    pub header_len: usize,
    pub delimiter: u8,
    pub max_fields: usize,
    pub min_segments: usize,
    pub ordinals: SecureQrOrdinals,
}

const V2_ORDINALS: SecureQrOrdinals = SecureQrOrdinals {
    version_marker: 0,
    contact_indicator: 1,
    name: 3,
    dob: 4,
    gender: 5,
    care_of: 6,
    district: 7,
    landmark: 8,
    house: 9,
    locality: 10,
    pincode: 11,
    state: 12,
    city: 13,
    masked_id: 14,
};

/// Known layouts; the first entry is the default
pub static SECURE_QR_LAYOUTS: &[SecureQrFieldTable] = &[
    SecureQrFieldTable {
        version: "V2",
        header_len: constants::HEADER_LEN,
        delimiter: constants::FIELD_DELIMITER,
        max_fields: constants::MAX_FIELDS,
        min_segments: constants::MIN_SEGMENTS,
        ordinals: V2_ORDINALS,
    },
    SecureQrFieldTable {
        version: "V3",
        header_len: constants::HEADER_LEN,
        delimiter: constants::FIELD_DELIMITER,
        max_fields: constants::MAX_FIELDS,
        min_segments: constants::MIN_SEGMENTS,
        ordinals: V2_ORDINALS,
    },
];

impl SecureQrFieldTable {
    /// The layout used when no version marker matches
    pub fn default_layout() -> &'static SecureQrFieldTable {
        &SECURE_QR_LAYOUTS[0]
    }

    /// Look up a layout by its version marker (case-insensitive)
    pub fn for_version(marker: &str) -> Option<&'static SecureQrFieldTable> {
        let marker = marker.trim();
        SECURE_QR_LAYOUTS
            .iter()
            .find(|layout| layout.version.eq_ignore_ascii_case(marker))
    }

    /// Select the layout for an inflated payload by peeking at its version marker
    ///
    /// Every registered layout shares the header length and delimiter, so the
    /// default layout is used to locate the marker segment.
    pub fn detect(bytes: &[u8]) -> &'static SecureQrFieldTable {
        let default = Self::default_layout();
        let marker = bytes
            .get(default.header_len..)
            .map(|body| {
                let end = body
                    .iter()
                    .position(|&b| b == default.delimiter)
                    .unwrap_or(body.len());
                decode_latin1(&body[..end])
            })
            .unwrap_or_default();

        Self::for_version(&marker).unwrap_or(default)
    }

    /// Number of segments needed to reach the last mapped ordinal
    pub fn mapped_span(&self) -> usize {
        let o = &self.ordinals;
        [
            o.name,
            o.dob,
            o.gender,
            o.care_of,
            o.district,
            o.landmark,
            o.house,
            o.locality,
            o.pincode,
            o.state,
            o.city,
            o.masked_id,
        ]
        .into_iter()
        .max()
        .map_or(0, |max| max + 1)
    }
}
